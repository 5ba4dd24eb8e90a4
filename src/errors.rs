//! Unified application error type.
//! Every layer (store, gateway, core, cli) returns AppError so a failed
//! operation reaches the user through one path.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Stored data is corrupted: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Form input (rejected before any I/O)
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid game type: {0} (use 'cash' or 'tournament')")]
    InvalidGameType(String),

    // ---------------------------
    // Remote backend
    // ---------------------------
    #[error("Backend error: {0}")]
    Gateway(String),

    #[error("Backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error loading data: {0}")]
    DataLoad(String),

    #[error(
        "Migration stopped after {migrated} of {total} sessions: {reason}. \
         Guest data was kept on this device; re-running the migration may duplicate the sessions already copied"
    )]
    Migration {
        migrated: usize,
        total: usize,
        reason: String,
    },

    // ---------------------------
    // Application state
    // ---------------------------
    #[error("Bankroll not configured yet")]
    NotConfigured,

    #[error("Not signed in: run `rbankroll guest` or `rbankroll signin` first")]
    NotSignedIn,

    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Errors raised by the remote backend, as opposed to local or input failures.
    pub fn is_gateway(&self) -> bool {
        matches!(self, AppError::Gateway(_) | AppError::Http(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
