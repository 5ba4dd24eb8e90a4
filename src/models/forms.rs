//! Raw form payloads as typed by the user. Validation turns them into
//! domain values before any I/O happens (see `core::validation`).

/// Session form. `None`/empty fields are validated, not defaulted silently,
/// except `date` (today) and `game_type` (cash).
#[derive(Debug, Clone, Default)]
pub struct SessionForm {
    pub date: Option<String>,
    pub game_type: Option<String>,
    pub stakes: String,
    pub location: String,
    pub buy_in: String,
    pub cash_out: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct BankrollForm {
    pub starting: String,
    pub goal: String,
}

#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Only present on sign-up.
    pub confirm: Option<String>,
}
