use crate::db::migrate::{Schema, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the device-local database and bring its schema up to date.
/// All schema is guaranteed by migrations.
pub fn open_local(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    run_pending_migrations(&pool.conn, Schema::Local)?;
    Ok(pool)
}

/// Open the self-hosted backend database and bring its schema up to date.
pub fn open_backend(path: &str) -> AppResult<DbPool> {
    let pool = DbPool::new(path)?;
    run_pending_migrations(&pool.conn, Schema::Backend)?;
    Ok(pool)
}
