use crate::cli::commands::{open_loaded, session_table};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::session::Session;
use crate::ui::messages::info;
use crate::utils::date::parse_range;

const NOTES_WIDTH: usize = 32;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, limit } = cmd {
        let coordinator = open_loaded(cfg)?;

        let bounds = match period.as_deref() {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(parse_range(p)?),
        };

        let mut selected: Vec<Session> = coordinator
            .sessions()
            .iter()
            .filter(|s| bounds.is_none_or(|(from, to)| s.date >= from && s.date <= to))
            .cloned()
            .collect();
        if let Some(n) = limit {
            selected.truncate(*n);
        }

        if selected.is_empty() {
            info("No sessions recorded yet.");
            return Ok(());
        }

        println!("{}", session_table(&selected, Some(NOTES_WIDTH)));
        info(format!("{} sessions", selected.len()));
    }
    Ok(())
}
