//! Remote Data Gateway: the hosted backend providing authentication and the
//! `sessions` / `profiles` collections.

pub mod rows;
pub mod sqlite;
pub mod supabase;
pub mod wire;

pub use rows::{NewSessionRow, ProfileRow, SessionRow};
pub use sqlite::SqliteGateway;
pub use supabase::SupabaseGateway;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::identity::UserIdentity;

/// Operations consumed from the hosted backend.
///
/// Data calls act on behalf of `user` and only ever see that user's rows.
pub trait RemoteGateway {
    fn sign_up(&self, email: &str, password: &str) -> AppResult<UserIdentity>;

    fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<UserIdentity>;

    /// A renewed identity when `user`'s access token has expired, `None` while
    /// it is still usable. Backends whose tokens never expire keep the default.
    fn refresh_session(&self, _user: &UserIdentity) -> AppResult<Option<UserIdentity>> {
        Ok(None)
    }

    /// Invalidate the identity's access token.
    fn sign_out(&self, user: &UserIdentity) -> AppResult<()>;

    /// Insert a session and return the stored row.
    fn insert_session(&self, user: &UserIdentity, row: &NewSessionRow) -> AppResult<SessionRow>;

    /// All sessions of `user`, ordered by date descending.
    fn select_sessions(&self, user: &UserIdentity) -> AppResult<Vec<SessionRow>>;

    /// `Ok(None)` when no profile row exists yet.
    fn select_profile(&self, user: &UserIdentity) -> AppResult<Option<ProfileRow>>;

    fn update_profile(&self, user: &UserIdentity, profile: &ProfileRow) -> AppResult<()>;
}

impl<G: RemoteGateway + ?Sized> RemoteGateway for Box<G> {
    fn sign_up(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        (**self).sign_up(email, password)
    }

    fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        (**self).sign_in_with_password(email, password)
    }

    fn refresh_session(&self, user: &UserIdentity) -> AppResult<Option<UserIdentity>> {
        (**self).refresh_session(user)
    }

    fn sign_out(&self, user: &UserIdentity) -> AppResult<()> {
        (**self).sign_out(user)
    }

    fn insert_session(&self, user: &UserIdentity, row: &NewSessionRow) -> AppResult<SessionRow> {
        (**self).insert_session(user, row)
    }

    fn select_sessions(&self, user: &UserIdentity) -> AppResult<Vec<SessionRow>> {
        (**self).select_sessions(user)
    }

    fn select_profile(&self, user: &UserIdentity) -> AppResult<Option<ProfileRow>> {
        (**self).select_profile(user)
    }

    fn update_profile(&self, user: &UserIdentity, profile: &ProfileRow) -> AppResult<()> {
        (**self).update_profile(user, profile)
    }
}

/// Build the gateway selected by the configuration.
pub fn connect(cfg: &Config) -> AppResult<Box<dyn RemoteGateway>> {
    match cfg.backend {
        Backend::Sqlite => Ok(Box::new(SqliteGateway::open(&cfg.remote_database)?)),
        Backend::Supabase => Ok(Box::new(SupabaseGateway::new(
            &cfg.supabase_url,
            &cfg.supabase_key,
        )?)),
    }
}
