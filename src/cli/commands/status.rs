//! Dashboard: bankroll card, results summary and the latest sessions.

use crate::cli::commands::{open_loaded, session_table};
use crate::config::Config;
use crate::core::aggregator::{recent, totals};
use crate::core::bankroll::{progress_percentage, remaining_to_goal};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info, success, warning};
use crate::utils::colors::colorize_profit;
use crate::utils::formatting::{bold, percent, progress_bar};
use crate::utils::money::format_amount;

const BAR_WIDTH: usize = 30;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let coordinator = open_loaded(cfg)?;
    let sessions = coordinator.sessions();

    println!("👤 {}", coordinator.mode().describe());

    header("Bankroll");
    match coordinator.bankroll() {
        Some(snapshot) => {
            let pct = progress_percentage(snapshot);
            println!("Current  : {}", bold(&format_amount(snapshot.current)));
            println!("Starting : {}", format_amount(snapshot.starting));
            println!("Goal     : {}", format_amount(snapshot.goal));
            println!("Progress : {} {}", progress_bar(pct, BAR_WIDTH), percent(pct));

            let remaining = remaining_to_goal(snapshot);
            if remaining == 0 {
                success("Goal reached!");
            } else {
                println!("To goal  : {}", format_amount(remaining));
            }
        }
        None => {
            warning(AppError::NotConfigured);
            info("Run `rbankroll bankroll --starting <amount> --goal <amount>` to set it up.");
        }
    }

    let t = totals(sessions);
    header("Results");
    println!("Total profit : {}", colorize_profit(t.total_profit));
    println!("Sessions     : {}", t.count);
    println!("Win rate     : {}", percent(t.win_rate));

    header("Recent sessions");
    let latest = recent(sessions, cfg.recent_sessions);
    if latest.is_empty() {
        info("No sessions recorded yet. Add one with `rbankroll add`.");
    } else {
        print!("{}", session_table(latest, None));
    }

    Ok(())
}
