//! Persistence of the active mode between CLI invocations.

use crate::db::kv::{kv_get, kv_put};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::identity::Mode;

pub const ACTIVE_MODE_KEY: &str = "active_mode";

pub fn load(pool: &DbPool) -> AppResult<Mode> {
    match kv_get(&pool.conn, ACTIVE_MODE_KEY)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Mode::Anonymous),
    }
}

pub fn save(pool: &DbPool, mode: &Mode) -> AppResult<()> {
    let raw = serde_json::to_string(mode)?;
    kv_put(&pool.conn, ACTIVE_MODE_KEY, &raw)
}
