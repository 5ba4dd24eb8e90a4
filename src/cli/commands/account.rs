//! `signup`, `signin`, `signout` and `migrate`.

use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{MigrationReport, SignUpOutcome};
use crate::errors::AppResult;
use crate::models::forms::Credentials;
use crate::models::identity::Mode;
use crate::ui::messages::{info, success};

fn describe_report(report: &MigrationReport) -> String {
    format!(
        "Moved {} sessions{} from this device to your account.",
        report.sessions,
        if report.bankroll { " and your bankroll" } else { "" }
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Signup {
            email,
            password,
            confirm,
        } => {
            let mut coordinator = open(cfg)?;
            let credentials = Credentials {
                email: email.clone(),
                password: password.clone(),
                confirm: Some(confirm.clone()),
            };

            match coordinator.sign_up(&credentials)? {
                SignUpOutcome::Registered => {
                    success(format!("Account created: signed in as {}", email.trim()));
                }
                SignUpOutcome::Migrated(report) => {
                    success(format!("Account created: signed in as {}", email.trim()));
                    success(describe_report(&report));
                }
                SignUpOutcome::ConfirmationPending => {
                    success("Account created.");
                    info("Check your email to confirm your account, then run `rbankroll signin`.");
                }
            }
        }

        Commands::Signin { email, password } => {
            let mut coordinator = open(cfg)?;
            let user = coordinator.sign_in(&Credentials {
                email: email.clone(),
                password: password.clone(),
                confirm: None,
            })?;

            success(format!("Signed in as {}", user.email));
            info(format!("{} sessions loaded.", coordinator.sessions().len()));

            if coordinator.guest_store().has_data()? {
                info(
                    "Guest data is still on this device. To move it into this account run \
                     `rbankroll signout`, `rbankroll guest`, then `rbankroll migrate`.",
                );
            }
        }

        Commands::Signout => {
            let mut coordinator = open(cfg)?;
            let was = coordinator.mode().clone();
            coordinator.sign_out()?;

            match was {
                Mode::Authenticated(user) => success(format!("Signed out from {}", user.email)),
                Mode::Guest => success("Left guest mode. Guest data stays on this device."),
                Mode::Anonymous => info("Nobody was signed in."),
            }
        }

        Commands::Migrate { email, password } => {
            let mut coordinator = open(cfg)?;
            let user = coordinator.authenticate(&Credentials {
                email: email.clone(),
                password: password.clone(),
                confirm: None,
            })?;

            let report = coordinator.migrate_guest_data_to_account(user)?;
            success(describe_report(&report));
            success(format!("Signed in as {}", email.trim()));
        }

        _ => {}
    }

    Ok(())
}
