use crate::cli::commands::open;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut coordinator = open(cfg)?;
    coordinator.enter_guest_mode()?;
    coordinator.load_active_data()?;

    success("Continuing as guest.");
    warning(
        "Your data will be saved locally on this device only. \
         Create an account with `rbankroll signup` to keep it safe.",
    );

    let count = coordinator.sessions().len();
    if count > 0 {
        info(format!("{count} sessions found on this device."));
    }
    Ok(())
}
