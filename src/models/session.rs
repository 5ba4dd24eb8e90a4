use super::game_type::GameType;
use crate::utils::money::Cents;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated session form, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub date: NaiveDate,
    pub game_type: GameType,
    pub stakes: String,
    pub location: String,
    pub buy_in: Cents,
    pub cash_out: Cents,
    pub notes: String,
}

impl NewSession {
    pub fn profit(&self) -> Cents {
        self.cash_out - self.buy_in
    }
}

/// One recorded poker outing.
///
/// Profit is not a field: it is always `cash_out - buy_in`, so it can never
/// drift from the amounts it is derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub date: NaiveDate,
    pub game_type: GameType,
    pub stakes: String,
    pub location: String,
    pub buy_in: Cents,
    pub cash_out: Cents,
    #[serde(default)]
    pub notes: String,
}

impl Session {
    pub fn from_new(id: impl Into<String>, new: NewSession) -> Self {
        Self {
            id: id.into(),
            date: new.date,
            game_type: new.game_type,
            stakes: new.stakes,
            location: new.location,
            buy_in: new.buy_in,
            cash_out: new.cash_out,
            notes: new.notes,
        }
    }

    pub fn profit(&self) -> Cents {
        self.cash_out - self.buy_in
    }

    pub fn is_win(&self) -> bool {
        self.profit() > 0
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
