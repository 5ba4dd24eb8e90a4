use crate::cli::commands::open_loaded;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::bankroll::progress_percentage;
use crate::errors::AppResult;
use crate::models::forms::BankrollForm;
use crate::ui::messages::{info, success};
use crate::utils::formatting::percent;
use crate::utils::money::format_amount;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Bankroll { starting, goal } = cmd {
        let mut coordinator = open_loaded(cfg)?;
        let snapshot = coordinator.setup_bankroll(&BankrollForm {
            starting: starting.clone(),
            goal: goal.clone(),
        })?;

        success(format!(
            "Bankroll set: starting {} / goal {}",
            format_amount(snapshot.starting),
            format_amount(snapshot.goal)
        ));
        info(format!(
            "Current bankroll: {} ({} of goal)",
            format_amount(snapshot.current),
            percent(progress_percentage(&snapshot))
        ));
    }
    Ok(())
}
