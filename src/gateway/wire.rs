//! JSON shapes of the hosted backend and their decoding.
//!
//! Amounts travel as decimal currency values and become cents here. Nothing
//! in this module touches the network.

use super::{NewSessionRow, ProfileRow, SessionRow};
use crate::errors::{AppError, AppResult};
use crate::models::identity::UserIdentity;
use crate::utils::money::{from_decimal, to_decimal};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// PostgREST code for "JSON object requested, multiple (or no) rows returned".
pub const NO_ROWS_CODE: &str = "PGRST116";

const NOT_ACCEPTABLE: u16 = 406;

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

impl ErrorResponse {
    fn code(&self) -> Option<String> {
        match &self.code {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => None,
        }
    }

    fn text(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.msg.clone())
            .or_else(|| self.error_description.clone())
            .unwrap_or_else(|| "unknown error".to_string())
    }
}

/// Decode a response body, or map the backend's error payload.
///
/// An empty success body and a PostgREST "no rows" answer both come back as
/// `Ok(None)`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> AppResult<Option<T>> {
    if (200..300).contains(&status) {
        if body.trim().is_empty() {
            return Ok(None);
        }
        return Ok(Some(serde_json::from_str(body)?));
    }

    let err: Option<ErrorResponse> = serde_json::from_str(body).ok();
    if status == NOT_ACCEPTABLE
        && err.as_ref().and_then(ErrorResponse::code).as_deref() == Some(NO_ROWS_CODE)
    {
        return Ok(None);
    }

    let text = err.map(|e| e.text()).unwrap_or_else(|| body.to_string());
    Err(AppError::Gateway(format!("{text} (HTTP {status})")))
}

/// Statuses a logout may answer with when the token is already unusable.
pub fn is_auth_rejection(status: u16) -> bool {
    matches!(status, 401 | 403 | 404)
}

#[derive(Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// `/signup` returns either a session (`access_token` + `user`) or, when
/// email confirmation is required, the bare user object. `/token` always
/// returns a session.
#[derive(Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AuthResponse {
    /// Build the identity, falling back to `email` when the payload has none.
    /// `now` (unix seconds) resolves a relative `expires_in`.
    pub fn into_identity(self, email: &str, now: i64) -> AppResult<UserIdentity> {
        let (id, user_email) = match (self.user, self.id) {
            (Some(u), _) => (u.id, u.email),
            (None, Some(id)) => (id, self.email),
            (None, None) => {
                return Err(AppError::Gateway("auth response without a user".into()));
            }
        };

        let expires_at = match (&self.access_token, self.expires_at, self.expires_in) {
            (None, _, _) => None,
            (Some(_), Some(at), _) => Some(at),
            (Some(_), None, Some(secs)) => Some(now + secs),
            (Some(_), None, None) => None,
        };

        Ok(UserIdentity {
            id,
            email: user_email.unwrap_or_else(|| email.to_string()),
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
        })
    }
}

#[derive(Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RefreshGrant<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct WireNewSession<'a> {
    pub user_id: &'a str,
    pub date: &'a str,
    pub game_type: &'a str,
    pub stakes: &'a str,
    pub location: &'a str,
    pub buy_in: f64,
    pub cash_out: f64,
    pub profit: f64,
    pub notes: &'a str,
}

impl<'a> From<&'a NewSessionRow> for WireNewSession<'a> {
    fn from(row: &'a NewSessionRow) -> Self {
        Self {
            user_id: &row.user_id,
            date: &row.date,
            game_type: &row.game_type,
            stakes: &row.stakes,
            location: &row.location,
            buy_in: to_decimal(row.buy_in),
            cash_out: to_decimal(row.cash_out),
            profit: to_decimal(row.profit),
            notes: &row.notes,
        }
    }
}

#[derive(Deserialize)]
pub struct WireSession {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub game_type: String,
    #[serde(default)]
    pub stakes: Option<String>,
    pub location: String,
    pub buy_in: f64,
    #[serde(default)]
    pub cash_out: Option<f64>,
    #[serde(default)]
    pub profit: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<WireSession> for SessionRow {
    fn from(w: WireSession) -> Self {
        SessionRow {
            id: w.id,
            user_id: w.user_id,
            date: w.date,
            game_type: w.game_type,
            stakes: w.stakes,
            location: w.location,
            buy_in: from_decimal(w.buy_in),
            cash_out: w.cash_out.map(from_decimal),
            profit: w.profit.map(from_decimal),
            notes: w.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireProfile {
    #[serde(default)]
    pub starting_bankroll: Option<f64>,
    #[serde(default)]
    pub bankroll_goal: Option<f64>,
}

impl From<WireProfile> for ProfileRow {
    fn from(p: WireProfile) -> Self {
        ProfileRow {
            starting_bankroll: p.starting_bankroll.map(from_decimal),
            bankroll_goal: p.bankroll_goal.map(from_decimal),
        }
    }
}

impl From<&ProfileRow> for WireProfile {
    fn from(p: &ProfileRow) -> Self {
        WireProfile {
            starting_bankroll: p.starting_bankroll.map(to_decimal),
            bankroll_goal: p.bankroll_goal.map(to_decimal),
        }
    }
}
