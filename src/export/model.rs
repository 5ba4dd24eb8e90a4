// src/export/model.rs

use crate::models::session::Session;
use crate::utils::money::to_decimal;
use serde::Serialize;

/// Flat session record for CSV / JSON. Amounts in currency units.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SessionExport {
    pub id: String,
    pub date: String,
    pub game_type: String,
    pub stakes: String,
    pub location: String,
    pub buy_in: f64,
    pub cash_out: f64,
    pub profit: f64,
    pub notes: String,
}

impl From<&Session> for SessionExport {
    fn from(s: &Session) -> Self {
        Self {
            id: s.id.clone(),
            date: s.date_str(),
            game_type: s.game_type.to_db_str().to_string(),
            stakes: s.stakes.clone(),
            location: s.location.clone(),
            buy_in: to_decimal(s.buy_in),
            cash_out: to_decimal(s.cash_out),
            profit: to_decimal(s.profit()),
            notes: s.notes.clone(),
        }
    }
}
