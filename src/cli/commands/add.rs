use crate::cli::commands::open_loaded;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::forms::SessionForm;
use crate::ui::messages::{info, session_outcome};
use crate::utils::money::format_amount;

/// Record a poker session in the active store.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        game_type,
        stakes,
        location,
        buy_in,
        cash_out,
        notes,
    } = cmd
    {
        let form = SessionForm {
            date: date.clone(),
            game_type: game_type.clone(),
            stakes: stakes.clone(),
            location: location.clone(),
            buy_in: buy_in.clone(),
            cash_out: cash_out.clone(),
            notes: notes.clone(),
        };

        let mut coordinator = open_loaded(cfg)?;
        let session = coordinator.add_session(&form)?;

        session_outcome(session.profit());
        if let Some(snapshot) = coordinator.bankroll() {
            info(format!("Current bankroll: {}", format_amount(snapshot.current)));
        }
    }
    Ok(())
}
