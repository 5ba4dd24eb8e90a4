use serde::{Deserialize, Serialize};

/// Identity issued by the remote backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    pub email: String,
    /// Bearer token for data calls. Absent while an email confirmation is pending.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds after which `access_token` is rejected. `None` never expires.
    #[serde(default)]
    pub expires_at: Option<i64>,
}

/// Refresh this many seconds before the backend would reject the token.
const EXPIRY_MARGIN_SECS: i64 = 60;

impl UserIdentity {
    /// Identity with a token that does not expire.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        access_token: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            access_token,
            refresh_token: None,
            expires_at: None,
        }
    }

    pub fn needs_refresh(&self, now: i64) -> bool {
        match (&self.access_token, self.expires_at) {
            (Some(_), Some(at)) => at - EXPIRY_MARGIN_SECS <= now,
            _ => false,
        }
    }
}

/// Where data lives right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Anonymous,
    /// Device-local data, no server-side record.
    Guest,
    Authenticated(UserIdentity),
}

impl Mode {
    pub fn is_guest(&self) -> bool {
        matches!(self, Mode::Guest)
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            Mode::Authenticated(user) => Some(user),
            Mode::Anonymous | Mode::Guest => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Mode::Anonymous => "not signed in".to_string(),
            Mode::Guest => "guest (data saved on this device only)".to_string(),
            Mode::Authenticated(user) => format!("signed in as {}", user.email),
        }
    }
}
