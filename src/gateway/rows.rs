//! Row shapes exchanged with the remote backend.

use crate::errors::{AppError, AppResult};
use crate::models::bankroll::BankrollSettings;
use crate::models::game_type::GameType;
use crate::models::session::{NewSession, Session};
use crate::utils::money::Cents;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `sessions` row as stored remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRow {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub game_type: String,
    pub stakes: Option<String>,
    pub location: String,
    pub buy_in: Cents,
    pub cash_out: Option<Cents>,
    pub profit: Option<Cents>,
    pub notes: Option<String>,
}

/// Insert payload: a `sessions` row before the backend assigns its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSessionRow {
    pub user_id: String,
    pub date: String,
    pub game_type: String,
    pub stakes: String,
    pub location: String,
    pub buy_in: Cents,
    pub cash_out: Cents,
    pub profit: Cents,
    pub notes: String,
}

impl NewSessionRow {
    pub fn from_new(new: &NewSession, user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            date: new.date.format("%Y-%m-%d").to_string(),
            game_type: new.game_type.to_db_str().to_string(),
            stakes: new.stakes.clone(),
            location: new.location.clone(),
            buy_in: new.buy_in,
            cash_out: new.cash_out,
            profit: new.profit(),
            notes: new.notes.clone(),
        }
    }

    /// Used when copying guest sessions to an account.
    pub fn from_session(session: &Session, user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            date: session.date_str(),
            game_type: session.game_type.to_db_str().to_string(),
            stakes: session.stakes.clone(),
            location: session.location.clone(),
            buy_in: session.buy_in,
            cash_out: session.cash_out,
            profit: session.profit(),
            notes: session.notes.clone(),
        }
    }
}

impl SessionRow {
    pub fn into_session(self) -> AppResult<Session> {
        let date = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(self.date.clone()))?;
        let game_type = GameType::from_db_str(&self.game_type)
            .ok_or_else(|| AppError::InvalidGameType(self.game_type.clone()))?;
        let cash_out = self.cash_out.unwrap_or(0);

        if let Some(stored) = self.profit
            && stored != cash_out - self.buy_in
        {
            log::warn!(
                "session {}: stored profit {} differs from cash-out minus buy-in, recomputing",
                self.id,
                stored
            );
        }

        Ok(Session {
            id: self.id,
            date,
            game_type,
            stakes: self.stakes.unwrap_or_default(),
            location: self.location,
            buy_in: self.buy_in,
            cash_out,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

/// `profiles` row: both fields stay null until the bankroll is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProfileRow {
    pub starting_bankroll: Option<Cents>,
    pub bankroll_goal: Option<Cents>,
}

impl ProfileRow {
    /// `None` while the bankroll has not been configured.
    pub fn settings(&self) -> Option<BankrollSettings> {
        match (self.starting_bankroll, self.bankroll_goal) {
            (Some(starting), Some(goal)) if starting > 0 && goal > 0 => {
                Some(BankrollSettings { starting, goal })
            }
            _ => None,
        }
    }
}

impl From<BankrollSettings> for ProfileRow {
    fn from(s: BankrollSettings) -> Self {
        Self {
            starting_bankroll: Some(s.starting),
            bankroll_goal: Some(s.goal),
        }
    }
}
