//! Bankroll State Manager.

use crate::errors::{AppError, AppResult};
use crate::models::bankroll::{BankrollSettings, BankrollSnapshot};
use crate::models::session::Session;
use crate::utils::money::Cents;

/// Reject a non-positive start or a goal that does not exceed it.
pub fn validate_setup(starting: Cents, goal: Cents) -> AppResult<BankrollSettings> {
    if starting <= 0 || goal <= starting {
        return Err(AppError::Validation(
            "Please enter valid amounts. Goal must be greater than starting amount.".into(),
        ));
    }
    Ok(BankrollSettings { starting, goal })
}

/// Snapshot derived from the baseline and every persisted session.
pub fn from_profits(settings: BankrollSettings, sessions: &[Session]) -> BankrollSnapshot {
    let total: Cents = sessions.iter().map(Session::profit).sum();
    BankrollSnapshot {
        starting: settings.starting,
        goal: settings.goal,
        current: settings.starting + total,
    }
}

/// Apply one session result. Starting and goal are untouched.
pub fn apply_profit_delta(snapshot: BankrollSnapshot, profit: Cents) -> BankrollSnapshot {
    BankrollSnapshot {
        current: snapshot.current + profit,
        ..snapshot
    }
}

/// Progress towards the goal, clamped to [0, 100]. 0 when goal equals start.
pub fn progress_percentage(snapshot: &BankrollSnapshot) -> f64 {
    let span = snapshot.goal - snapshot.starting;
    if span == 0 {
        return 0.0;
    }
    let pct = (snapshot.current - snapshot.starting) as f64 / span as f64 * 100.0;
    pct.clamp(0.0, 100.0)
}

/// Amount still missing to reach the goal (0 once reached).
pub fn remaining_to_goal(snapshot: &BankrollSnapshot) -> Cents {
    (snapshot.goal - snapshot.current).max(0)
}
