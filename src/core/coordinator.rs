//! Mode Coordinator: decides whether data flows through the device-local
//! guest store or the remote backend, and moves guest data to an account.

use crate::config::Config;
use crate::core::{aggregator, bankroll, validation};
use crate::errors::{AppError, AppResult};
use crate::gateway::{self, NewSessionRow, ProfileRow, RemoteGateway};
use crate::models::app_state::{AppEvent, AppState, Phase};
use crate::models::bankroll::{BankrollSettings, BankrollSnapshot};
use crate::models::forms::{BankrollForm, Credentials, SessionForm};
use crate::models::identity::{Mode, UserIdentity};
use crate::models::session::Session;
use crate::store::{GuestStore, mode};
use crate::utils::money::format_signed;
use log::{debug, info, warn};
use uuid::Uuid;

/// Result of copying guest data into an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub sessions: usize,
    pub bankroll: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Account created and active.
    Registered,
    /// Account created, guest data copied into it.
    Migrated(MigrationReport),
    /// The backend wants the email confirmed before issuing a session.
    ConfirmationPending,
}

pub struct ModeCoordinator<G: RemoteGateway> {
    gateway: G,
    guest: GuestStore,
    state: AppState,
}

impl ModeCoordinator<Box<dyn RemoteGateway>> {
    /// Open the stores named by `cfg` and restore the persisted mode.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let guest = GuestStore::open(&cfg.database)?;
        let gateway = gateway::connect(cfg)?;
        Self::restore(gateway, guest)
    }
}

impl<G: RemoteGateway> ModeCoordinator<G> {
    /// Fresh coordinator, nobody signed in.
    pub fn new(gateway: G, guest: GuestStore) -> Self {
        Self {
            gateway,
            guest,
            state: AppState::default(),
        }
    }

    /// Coordinator in the mode persisted by a previous run. No data is loaded.
    pub fn restore(gateway: G, guest: GuestStore) -> AppResult<Self> {
        let persisted = mode::load(guest.pool())?;
        let phase = match &persisted {
            Mode::Anonymous => Phase::Anonymous,
            Mode::Guest => Phase::Guest,
            Mode::Authenticated(_) => Phase::Authenticated,
        };
        debug!("restored mode: {}", persisted.describe());

        Ok(Self {
            gateway,
            guest,
            state: AppState {
                mode: persisted,
                phase,
                ..AppState::default()
            },
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }

    pub fn sessions(&self) -> &[Session] {
        &self.state.sessions
    }

    pub fn bankroll(&self) -> Option<&BankrollSnapshot> {
        self.state.bankroll.as_ref()
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn guest_store(&self) -> &GuestStore {
        &self.guest
    }

    /// Switch mode, drive the phase machine and persist the new mode.
    fn set_mode(&mut self, next: Mode) -> AppResult<()> {
        let event = match &next {
            Mode::Anonymous => AppEvent::SignedOut,
            Mode::Guest => AppEvent::EnterGuest,
            Mode::Authenticated(_) => AppEvent::SignedIn,
        };
        let phase = self.state.phase.next(&event)?;

        mode::save(self.guest.pool(), &next)?;
        self.state.phase = phase;
        self.state.mode = next;
        Ok(())
    }

    /// Swap an expiring access token for a fresh one and persist it, so the
    /// next run starts from the renewed identity. No-op outside
    /// authenticated mode.
    fn refresh_identity(&mut self) -> AppResult<()> {
        let Mode::Authenticated(user) = &self.state.mode else {
            return Ok(());
        };
        if let Some(fresh) = self.gateway.refresh_session(user)? {
            debug!("access token renewed for {}", fresh.email);
            let next = Mode::Authenticated(fresh);
            mode::save(self.guest.pool(), &next)?;
            self.state.mode = next;
        }
        Ok(())
    }

    /// Route reads and writes to the device. No network calls.
    pub fn enter_guest_mode(&mut self) -> AppResult<()> {
        match self.state.mode {
            Mode::Guest => return Ok(()),
            Mode::Authenticated(_) => {
                return Err(AppError::Validation(
                    "Sign out before continuing as guest".into(),
                ));
            }
            Mode::Anonymous => {}
        }

        self.set_mode(Mode::Guest)?;
        self.guest
            .audit("guest", "", "Guest mode enabled: data is saved on this device only");
        Ok(())
    }

    /// Populate sessions (date descending) and bankroll from the active store.
    ///
    /// A missing profile row or missing guest keys mean "not configured yet"
    /// and leave `bankroll` empty; any other failure is a `DataLoad` error.
    pub fn load_active_data(&mut self) -> AppResult<()> {
        if matches!(self.state.mode, Mode::Anonymous) {
            return Err(AppError::NotSignedIn);
        }
        self.state.apply(AppEvent::LoadStarted)?;

        let loaded = match self.refresh_identity() {
            Ok(()) => match &self.state.mode {
                Mode::Guest => self.load_guest(),
                Mode::Authenticated(user) => self.load_remote(user),
                Mode::Anonymous => Err(AppError::NotSignedIn),
            },
            Err(e) => Err(e),
        };

        match loaded {
            Ok((sessions, snapshot)) => {
                debug!("loaded {} sessions", sessions.len());
                self.state.sessions = sessions;
                self.state.bankroll = snapshot;
                self.state.apply(AppEvent::LoadSucceeded)
            }
            Err(e) => {
                let reason = e.to_string();
                self.state.apply(AppEvent::LoadFailed(reason.clone()))?;
                Err(AppError::DataLoad(reason))
            }
        }
    }

    fn load_guest(&self) -> AppResult<(Vec<Session>, Option<BankrollSnapshot>)> {
        let mut sessions = self.guest.load_sessions()?;
        aggregator::sort_for_display(&mut sessions);
        let snapshot = self
            .guest
            .load_bankroll()?
            .map(|settings| bankroll::from_profits(settings, &sessions));
        Ok((sessions, snapshot))
    }

    fn load_remote(
        &self,
        user: &UserIdentity,
    ) -> AppResult<(Vec<Session>, Option<BankrollSnapshot>)> {
        let sessions = self
            .gateway
            .select_sessions(user)?
            .into_iter()
            .map(|row| row.into_session())
            .collect::<AppResult<Vec<_>>>()?;

        let snapshot = self
            .gateway
            .select_profile(user)?
            .and_then(|profile| profile.settings())
            .map(|settings| bankroll::from_profits(settings, &sessions));

        Ok((sessions, snapshot))
    }

    /// Validate, persist to the active store, then merge into memory and
    /// apply the profit delta. Nothing changes in memory if the write fails.
    pub fn add_session(&mut self, form: &SessionForm) -> AppResult<Session> {
        let new = validation::validate_session_form(form)?;
        self.refresh_identity()?;

        let stored = match &self.state.mode {
            Mode::Anonymous => return Err(AppError::NotSignedIn),
            Mode::Guest => {
                let session = Session::from_new(Uuid::new_v4().to_string(), new);
                self.guest.push_session(&session)?;
                session
            }
            Mode::Authenticated(user) => {
                let row = NewSessionRow::from_new(&new, &user.id);
                self.gateway.insert_session(user, &row)?.into_session()?
            }
        };

        aggregator::insert_for_display(&mut self.state.sessions, stored.clone());
        if let Some(snapshot) = self.state.bankroll {
            self.state.bankroll = Some(bankroll::apply_profit_delta(snapshot, stored.profit()));
        }

        self.guest.audit(
            "add_session",
            &stored.date_str(),
            &format!(
                "{} @ {} ({})",
                stored.game_type.short_label(),
                stored.location,
                format_signed(stored.profit())
            ),
        );
        Ok(stored)
    }

    /// Validate and persist starting/goal; current is re-derived from the
    /// loaded sessions.
    pub fn setup_bankroll(&mut self, form: &BankrollForm) -> AppResult<BankrollSnapshot> {
        let settings = validation::validate_bankroll_form(form)?;
        self.refresh_identity()?;

        match &self.state.mode {
            Mode::Anonymous => return Err(AppError::NotSignedIn),
            Mode::Guest => self.guest.save_bankroll(&settings)?,
            Mode::Authenticated(user) => self
                .gateway
                .update_profile(user, &ProfileRow::from(settings))?,
        }

        let snapshot = bankroll::from_profits(settings, &self.state.sessions);
        self.state.bankroll = Some(snapshot);

        self.guest.audit(
            "bankroll",
            "",
            &format!("starting {} / goal {}", settings.starting, settings.goal),
        );
        Ok(snapshot)
    }

    /// Create an account. When coming from guest mode the guest data is
    /// migrated into it.
    pub fn sign_up(&mut self, credentials: &Credentials) -> AppResult<SignUpOutcome> {
        validation::validate_credentials(credentials)?;
        if matches!(self.state.mode, Mode::Authenticated(_)) {
            return Err(AppError::Validation("Already signed in: sign out first".into()));
        }

        let user = self
            .gateway
            .sign_up(credentials.email.trim(), &credentials.password)?;
        self.guest.audit("signup", &user.email, "Account created");

        if user.access_token.is_none() {
            info!("sign-up for {} awaits email confirmation", user.email);
            return Ok(SignUpOutcome::ConfirmationPending);
        }

        if self.state.mode.is_guest() {
            let report = self.migrate_guest_data_to_account(user)?;
            return Ok(SignUpOutcome::Migrated(report));
        }

        self.set_mode(Mode::Authenticated(user))?;
        self.load_active_data()?;
        Ok(SignUpOutcome::Registered)
    }

    /// Sign in with email and password. Guest data stays on the device and
    /// can be moved later with [`Self::migrate_guest_data_to_account`].
    pub fn sign_in(&mut self, credentials: &Credentials) -> AppResult<UserIdentity> {
        validation::validate_credentials(credentials)?;
        if matches!(self.state.mode, Mode::Authenticated(_)) {
            return Err(AppError::Validation("Already signed in: sign out first".into()));
        }

        let user = self
            .gateway
            .sign_in_with_password(credentials.email.trim(), &credentials.password)?;

        self.state.clear_data();
        self.set_mode(Mode::Authenticated(user.clone()))?;
        self.guest.audit("signin", &user.email, "Signed in");
        self.load_active_data()?;
        Ok(user)
    }

    /// Authenticate against the backend without switching mode; used to
    /// retry a migration from guest mode.
    pub fn authenticate(&self, credentials: &Credentials) -> AppResult<UserIdentity> {
        validation::validate_credentials(credentials)?;
        self.gateway
            .sign_in_with_password(credentials.email.trim(), &credentials.password)
    }

    /// Copy every guest session (and the guest bankroll, if any) to `user`,
    /// then clear the guest keys, switch to authenticated and reload.
    ///
    /// Inserts are sequential and not transactional: on failure the records
    /// already copied stay remote and the guest copies stay local, so running
    /// the migration again can duplicate sessions. The error reports how far
    /// it got.
    pub fn migrate_guest_data_to_account(
        &mut self,
        user: UserIdentity,
    ) -> AppResult<MigrationReport> {
        if !self.state.mode.is_guest() {
            return Err(AppError::Validation(
                "Guest data can only be migrated from guest mode".into(),
            ));
        }

        let sessions = self.guest.load_sessions()?;
        let settings: Option<BankrollSettings> = self.guest.load_bankroll()?;
        let total = sessions.len();

        // Oldest recorded first, so the backend sees them in recording order.
        let mut migrated = 0;
        for session in sessions.iter().rev() {
            let row = NewSessionRow::from_session(session, &user.id);
            if let Err(e) = self.gateway.insert_session(&user, &row) {
                warn!("migration stopped at {migrated}/{total}: {e}");
                self.guest.audit(
                    "migrate",
                    &user.email,
                    &format!("Failed after {migrated} of {total} sessions: {e}"),
                );
                return Err(AppError::Migration {
                    migrated,
                    total,
                    reason: e.to_string(),
                });
            }
            migrated += 1;
        }

        if let Some(settings) = settings
            && let Err(e) = self
                .gateway
                .update_profile(&user, &ProfileRow::from(settings))
        {
            self.guest.audit(
                "migrate",
                &user.email,
                &format!("Sessions copied, bankroll update failed: {e}"),
            );
            return Err(AppError::Migration {
                migrated,
                total,
                reason: format!("bankroll update failed: {e}"),
            });
        }

        self.guest.clear()?;
        self.state.clear_data();
        let email = user.email.clone();
        self.set_mode(Mode::Authenticated(user))?;

        self.guest.audit(
            "migrate",
            &email,
            &format!(
                "Migrated {migrated} sessions{}",
                if settings.is_some() { " and bankroll" } else { "" }
            ),
        );
        info!("migrated {migrated} guest sessions to {email}");

        self.load_active_data()?;

        Ok(MigrationReport {
            sessions: migrated,
            bankroll: settings.is_some(),
        })
    }

    /// Invalidate the remote identity (if any), then forget in-memory data and
    /// return to anonymous. A backend that refuses the sign-out (expired
    /// token, no network) is logged and audited; the device still signs out.
    pub fn sign_out(&mut self) -> AppResult<()> {
        if let Mode::Authenticated(user) = &self.state.mode {
            match self.gateway.sign_out(user) {
                Ok(()) => self.guest.audit("signout", &user.email, "Signed out"),
                Err(e) => {
                    warn!("backend sign-out failed for {}: {e}", user.email);
                    self.guest.audit(
                        "signout",
                        &user.email,
                        &format!("Signed out on this device only: {e}"),
                    );
                }
            }
        } else if self.state.mode.is_guest() {
            self.guest.audit("signout", "", "Left guest mode");
        }

        self.state.clear_data();
        self.set_mode(Mode::Anonymous)
    }
}
