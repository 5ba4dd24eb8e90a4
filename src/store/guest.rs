use crate::db::initialize::open_local;
use crate::db::kv::{kv_delete, kv_get, kv_put};
use crate::db::log::ttlog_quiet;
use crate::db::migrate::{Schema, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::bankroll::BankrollSettings;
use crate::models::session::Session;

pub const GUEST_SESSIONS_KEY: &str = "guest_sessions";
pub const GUEST_BANKROLL_KEY: &str = "guest_bankroll";

/// Guest data kept on this device under two fixed keys.
/// A missing key is a valid empty state, not an error.
pub struct GuestStore {
    pool: DbPool,
}

impl GuestStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: open_local(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn, Schema::Local)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Sessions in recording order, most recently recorded first.
    pub fn load_sessions(&self) -> AppResult<Vec<Session>> {
        match kv_get(&self.pool.conn, GUEST_SESSIONS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn save_sessions(&self, sessions: &[Session]) -> AppResult<()> {
        let raw = serde_json::to_string(sessions)?;
        kv_put(&self.pool.conn, GUEST_SESSIONS_KEY, &raw)
    }

    /// Prepend `session` to the stored list.
    pub fn push_session(&self, session: &Session) -> AppResult<()> {
        let mut sessions = self.load_sessions()?;
        sessions.insert(0, session.clone());
        self.save_sessions(&sessions)
    }

    pub fn load_bankroll(&self) -> AppResult<Option<BankrollSettings>> {
        match kv_get(&self.pool.conn, GUEST_BANKROLL_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn save_bankroll(&self, settings: &BankrollSettings) -> AppResult<()> {
        let raw = serde_json::to_string(settings)?;
        kv_put(&self.pool.conn, GUEST_BANKROLL_KEY, &raw)
    }

    pub fn has_data(&self) -> AppResult<bool> {
        Ok(kv_get(&self.pool.conn, GUEST_SESSIONS_KEY)?.is_some()
            || kv_get(&self.pool.conn, GUEST_BANKROLL_KEY)?.is_some())
    }

    /// Remove both guest keys.
    pub fn clear(&self) -> AppResult<()> {
        let tx = self.pool.conn.unchecked_transaction()?;
        kv_delete(&tx, GUEST_SESSIONS_KEY)?;
        kv_delete(&tx, GUEST_BANKROLL_KEY)?;
        tx.commit()?;
        Ok(())
    }

    /// Append to the device audit trail; failures are only logged.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        ttlog_quiet(&self.pool.conn, operation, target, message);
    }
}
