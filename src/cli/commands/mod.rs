pub mod account;
pub mod add;
pub mod analytics;
pub mod bankroll;
pub mod config;
pub mod export;
pub mod guest;
pub mod init;
pub mod list;
pub mod log;
pub mod status;

use crate::config::Config;
use crate::core::ModeCoordinator;
use crate::errors::{AppError, AppResult};
use crate::gateway::RemoteGateway;
use crate::models::identity::Mode;
use crate::models::session::Session;
use crate::utils::colors::{colorize_optional, colorize_profit};
use crate::utils::money::format_amount;
use crate::utils::table::{Column, Table};

pub type Coordinator = ModeCoordinator<Box<dyn RemoteGateway>>;

/// Coordinator in the persisted mode, data not loaded.
pub fn open(cfg: &Config) -> AppResult<Coordinator> {
    ModeCoordinator::from_config(cfg)
}

/// Coordinator with the active data loaded. Fails when nobody is signed in.
pub fn open_loaded(cfg: &Config) -> AppResult<Coordinator> {
    let mut coordinator = open(cfg)?;
    if matches!(coordinator.mode(), Mode::Anonymous) {
        return Err(AppError::NotSignedIn);
    }
    coordinator.load_active_data()?;
    Ok(coordinator)
}

/// Session table shared by `list` and `status`. Notes are wrapped when
/// `notes_width` is given, omitted otherwise.
pub fn session_table(sessions: &[Session], notes_width: Option<usize>) -> String {
    let mut columns = vec![
        Column::left("Date"),
        Column::left("Game"),
        Column::left("Stakes"),
        Column::left("Location"),
        Column::right("Buy-in"),
        Column::right("Cash-out"),
        Column::right("Profit"),
    ];
    if notes_width.is_some() {
        columns.push(Column::left("Notes"));
    }

    let mut table = Table::new(columns);
    for s in sessions {
        let mut row = vec![
            s.date_str(),
            s.game_type.short_label().to_string(),
            colorize_optional(&s.stakes),
            s.location.clone(),
            format_amount(s.buy_in),
            format_amount(s.cash_out),
            colorize_profit(s.profit()),
        ];

        match notes_width {
            Some(width) if !s.notes.is_empty() => {
                let lines = textwrap::wrap(&s.notes, width);
                row.push(lines.first().map(|l| l.to_string()).unwrap_or_default());
                table.add_row(row);
                // Continuation lines only fill the notes column.
                for line in lines.iter().skip(1) {
                    let mut cont = vec![String::new(); 7];
                    cont.push(line.to_string());
                    table.add_row(cont);
                }
                continue;
            }
            Some(_) => row.push(colorize_optional("")),
            None => {}
        }
        table.add_row(row);
    }

    table.render()
}
