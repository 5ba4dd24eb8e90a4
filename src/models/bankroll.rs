use crate::utils::money::Cents;
use serde::{Deserialize, Serialize};

/// What the bankroll-setup form persists: the baseline and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankrollSettings {
    pub starting: Cents,
    pub goal: Cents,
}

/// Bankroll as shown to the user. `current` is derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BankrollSnapshot {
    pub starting: Cents,
    pub goal: Cents,
    pub current: Cents,
}

impl BankrollSnapshot {
    pub fn settings(&self) -> BankrollSettings {
        BankrollSettings {
            starting: self.starting,
            goal: self.goal,
        }
    }

    /// Net result since the bankroll was started.
    pub fn net(&self) -> Cents {
        self.current - self.starting
    }
}
