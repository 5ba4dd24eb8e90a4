//! Key/value access to the `kv_store` table.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub fn kv_get(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

pub fn kv_put(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn kv_delete(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute("DELETE FROM kv_store WHERE key = ?1", [key])?;
    Ok(())
}
