use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Which database a migration set targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Device-local file: audit log, guest keys, active mode.
    Local,
    /// Self-hosted backend file: users, tokens, profiles, sessions.
    Backend,
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const LOCAL_MIGRATIONS: &[Migration] = &[Migration {
    version: "20250601_0001_create_kv_store",
    description: "Created kv_store table for guest data",
    sql: r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
}];

const BACKEND_MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250601_0001_create_users",
        description: "Created users and auth_tokens tables",
        sql: r#"
            CREATE TABLE IF NOT EXISTS users (
                id            TEXT PRIMARY KEY,
                email         TEXT NOT NULL UNIQUE,
                password_salt TEXT NOT NULL,
                password_hash TEXT NOT NULL,
                created_at    TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS auth_tokens (
                token      TEXT PRIMARY KEY,
                user_id    TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                created_at TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20250601_0002_create_profiles",
        description: "Created profiles table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS profiles (
                id                TEXT PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
                starting_bankroll INTEGER,
                bankroll_goal     INTEGER,
                updated_at        TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20250601_0003_create_sessions",
        description: "Created sessions table",
        sql: r#"
            CREATE TABLE IF NOT EXISTS sessions (
                id         TEXT PRIMARY KEY,
                user_id    TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                date       TEXT NOT NULL,
                game_type  TEXT NOT NULL CHECK(game_type IN ('cash','tournament')),
                stakes     TEXT NOT NULL DEFAULT '',
                location   TEXT NOT NULL,
                buy_in     INTEGER NOT NULL CHECK(buy_in >= 0),
                cash_out   INTEGER NOT NULL CHECK(cash_out >= 0),
                profit     INTEGER NOT NULL,
                notes      TEXT,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_sessions_user_date ON sessions(user_id, date);
        "#,
    },
];

/// Ensure that the `log` table exists. It doubles as the migration ledger.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations for `schema`.
/// Returns the number of migrations applied by this call.
pub fn run_pending_migrations(conn: &Connection, schema: Schema) -> Result<usize> {
    ensure_log_table(conn)?;

    let set = match schema {
        Schema::Local => LOCAL_MIGRATIONS,
        Schema::Backend => BACKEND_MIGRATIONS,
    };

    let mut applied = 0;
    for m in set {
        if is_applied(conn, m.version)? {
            continue;
        }

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(m.sql)?;
        tx.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            params![chrono::Local::now().to_rfc3339(), m.version, m.description],
        )?;
        tx.commit()?;

        log::debug!("migration {} applied ({:?})", m.version, schema);
        applied += 1;
    }

    if applied > 0 {
        success(format!("Applied {applied} {schema:?} database migration(s)."));
    }

    Ok(applied)
}
