#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, Utc};
use rbankroll::core::ModeCoordinator;
use rbankroll::db::pool::DbPool;
use rbankroll::errors::{AppError, AppResult};
use rbankroll::gateway::{NewSessionRow, ProfileRow, RemoteGateway, SessionRow, SqliteGateway};
use rbankroll::models::forms::{Credentials, SessionForm};
use rbankroll::models::game_type::GameType;
use rbankroll::models::identity::UserIdentity;
use rbankroll::models::session::Session;
use rbankroll::store::GuestStore;
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbk() -> Command {
    cargo_bin_cmd!("rbankroll")
}

/// Command bound to a private device DB and backend DB.
pub fn rbk_with(db: &str, remote: &str) -> Command {
    let mut cmd = rbk();
    cmd.args(["--db", db, "--remote-db", remote]);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbankroll.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Same as [`setup_test_db`] for the self-hosted backend file.
pub fn setup_backend_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbankroll-backend.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// `init` both databases and enter guest mode.
pub fn init_guest(db: &str, remote: &str) {
    rbk_with(db, remote).args(["--test", "init"]).assert().success();
    rbk_with(db, remote).arg("guest").assert().success();
}

pub fn add_cli(db: &str, remote: &str, date: &str, location: &str, buy_in: &str, cash_out: &str) {
    rbk_with(db, remote)
        .args([
            "add",
            "--date",
            date,
            "--stakes",
            "1/2",
            "--location",
            location,
            "--buy-in",
            buy_in,
            "--cash-out",
            cash_out,
        ])
        .assert()
        .success();
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Session with amounts in whole currency units.
pub fn session(id: &str, d: &str, location: &str, buy_in: i64, cash_out: i64) -> Session {
    Session {
        id: id.to_string(),
        date: date(d),
        game_type: GameType::Cash,
        stakes: "1/2".to_string(),
        location: location.to_string(),
        buy_in: buy_in * 100,
        cash_out: cash_out * 100,
        notes: String::new(),
    }
}

pub fn form(d: &str, location: &str, buy_in: &str, cash_out: &str) -> SessionForm {
    SessionForm {
        date: Some(d.to_string()),
        game_type: None,
        stakes: "1/2".to_string(),
        location: location.to_string(),
        buy_in: buy_in.to_string(),
        cash_out: cash_out.to_string(),
        notes: None,
    }
}

pub fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
        confirm: None,
    }
}

pub fn signup_credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        confirm: Some(password.to_string()),
        ..credentials(email, password)
    }
}

pub fn memory_guest_store() -> GuestStore {
    GuestStore::from_pool(DbPool::in_memory().expect("in-memory db")).expect("guest store")
}

pub fn memory_backend() -> SqliteGateway {
    SqliteGateway::from_pool(DbPool::in_memory().expect("in-memory db")).expect("backend")
}

/// Coordinator over private in-memory stores.
pub fn memory_coordinator() -> ModeCoordinator<SqliteGateway> {
    ModeCoordinator::new(memory_backend(), memory_guest_store())
}

/// Backend that accepts `fail_after` inserts, then rejects every insert.
pub struct FlakyGateway {
    pub inner: SqliteGateway,
    pub fail_after: usize,
    pub inserted: Cell<usize>,
}

impl FlakyGateway {
    pub fn new(fail_after: usize) -> Self {
        Self {
            inner: memory_backend(),
            fail_after,
            inserted: Cell::new(0),
        }
    }
}

impl RemoteGateway for FlakyGateway {
    fn sign_up(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        self.inner.sign_up(email, password)
    }

    fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        self.inner.sign_in_with_password(email, password)
    }

    fn sign_out(&self, user: &UserIdentity) -> AppResult<()> {
        self.inner.sign_out(user)
    }

    fn insert_session(&self, user: &UserIdentity, row: &NewSessionRow) -> AppResult<SessionRow> {
        if self.inserted.get() >= self.fail_after {
            return Err(AppError::Gateway("connection reset".into()));
        }
        let stored = self.inner.insert_session(user, row)?;
        self.inserted.set(self.inserted.get() + 1);
        Ok(stored)
    }

    fn select_sessions(&self, user: &UserIdentity) -> AppResult<Vec<SessionRow>> {
        self.inner.select_sessions(user)
    }

    fn select_profile(&self, user: &UserIdentity) -> AppResult<Option<ProfileRow>> {
        self.inner.select_profile(user)
    }

    fn update_profile(&self, user: &UserIdentity, profile: &ProfileRow) -> AppResult<()> {
        self.inner.update_profile(user, profile)
    }
}

/// Backend whose access tokens are issued already expired. Refreshing signs
/// in again through the inner backend with `password`. With
/// `reject_sign_out` the logout call fails the way an expired JWT does.
pub struct ExpiringGateway {
    pub inner: SqliteGateway,
    pub password: String,
    pub reject_sign_out: bool,
    pub refreshed: Cell<usize>,
}

impl ExpiringGateway {
    pub fn new(password: &str) -> Self {
        Self::with_backend(memory_backend(), password)
    }

    pub fn with_backend(inner: SqliteGateway, password: &str) -> Self {
        Self {
            inner,
            password: password.to_string(),
            reject_sign_out: false,
            refreshed: Cell::new(0),
        }
    }

    fn expired(mut user: UserIdentity) -> UserIdentity {
        user.refresh_token = Some(format!("refresh-{}", user.id));
        user.expires_at = Some(0);
        user
    }
}

impl RemoteGateway for ExpiringGateway {
    fn sign_up(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        self.inner.sign_up(email, password).map(Self::expired)
    }

    fn sign_in_with_password(&self, email: &str, password: &str) -> AppResult<UserIdentity> {
        self.inner
            .sign_in_with_password(email, password)
            .map(Self::expired)
    }

    fn refresh_session(&self, user: &UserIdentity) -> AppResult<Option<UserIdentity>> {
        if !user.needs_refresh(Utc::now().timestamp()) {
            return Ok(None);
        }
        let mut fresh = self.inner.sign_in_with_password(&user.email, &self.password)?;
        fresh.refresh_token = user.refresh_token.clone();
        fresh.expires_at = Some(Utc::now().timestamp() + 3600);
        self.refreshed.set(self.refreshed.get() + 1);
        Ok(Some(fresh))
    }

    fn sign_out(&self, user: &UserIdentity) -> AppResult<()> {
        if self.reject_sign_out {
            return Err(AppError::Gateway("JWT expired (HTTP 401)".into()));
        }
        self.inner.sign_out(user)
    }

    fn insert_session(&self, user: &UserIdentity, row: &NewSessionRow) -> AppResult<SessionRow> {
        self.inner.insert_session(user, row)
    }

    fn select_sessions(&self, user: &UserIdentity) -> AppResult<Vec<SessionRow>> {
        self.inner.select_sessions(user)
    }

    fn select_profile(&self, user: &UserIdentity) -> AppResult<Option<ProfileRow>> {
        self.inner.select_profile(user)
    }

    fn update_profile(&self, user: &UserIdentity, profile: &ProfileRow) -> AppResult<()> {
        self.inner.update_profile(user, profile)
    }
}
