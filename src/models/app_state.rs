use super::bankroll::BankrollSnapshot;
use super::identity::Mode;
use super::session::Session;
use crate::errors::{AppError, AppResult};

/// Lifecycle phase of the application.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Anonymous,
    Guest,
    Authenticated,
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    EnterGuest,
    SignedIn,
    LoadStarted,
    LoadSucceeded,
    LoadFailed(String),
    SignedOut,
}

impl Phase {
    /// Transition table. Pairs not listed are rejected and leave the phase as is.
    pub fn next(&self, event: &AppEvent) -> AppResult<Phase> {
        use AppEvent::*;

        match (self, event) {
            (_, SignedOut) => Ok(Phase::Anonymous),
            (Phase::Anonymous | Phase::Ready | Phase::Error(_), EnterGuest) => Ok(Phase::Guest),
            (
                Phase::Anonymous | Phase::Guest | Phase::Ready | Phase::Error(_),
                SignedIn,
            ) => Ok(Phase::Authenticated),
            (
                Phase::Guest | Phase::Authenticated | Phase::Ready | Phase::Error(_),
                LoadStarted,
            ) => Ok(Phase::Loading),
            (Phase::Loading, LoadSucceeded) => Ok(Phase::Ready),
            (Phase::Loading, LoadFailed(reason)) => Ok(Phase::Error(reason.clone())),
            (from, ev) => Err(AppError::InvalidTransition(format!("{from:?} on {ev:?}"))),
        }
    }
}

/// Everything the screens read: who is active, what phase we are in and the
/// loaded data. Owned by the mode coordinator; nothing else mutates it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub mode: Mode,
    pub phase: Phase,
    /// Display order: newest first.
    pub sessions: Vec<Session>,
    pub bankroll: Option<BankrollSnapshot>,
}

impl AppState {
    pub fn apply(&mut self, event: AppEvent) -> AppResult<()> {
        self.phase = self.phase.next(&event)?;
        Ok(())
    }

    pub fn clear_data(&mut self) {
        self.sessions.clear();
        self.bankroll = None;
    }
}
