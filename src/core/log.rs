use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;

const OP_TARGET_MAX: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add_session" => Colour::Green,
        "bankroll" => Colour::Cyan,
        "signup" | "signin" => Colour::Blue,
        "signout" => Colour::Yellow,
        "guest" => Colour::RGB(255, 153, 51),
        "migrate" | "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Print the device audit trail, one colored line per entry.
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;
        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]").map_err(|e| {
            crate::errors::AppError::Validation(format!("invalid pattern: {e}"))
        })?;

        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_TARGET_MAX);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        println!("📜 Internal log:\n");

        for entry in &entries {
            let color = color_for_operation(&entry.operation);
            let date = chrono::DateTime::parse_from_rfc3339(&entry.date)
                .map(|dt| dt.format("%F %T").to_string())
                .unwrap_or_else(|_| entry.date.clone());

            let mut plain = op_target(entry);
            if plain.chars().count() > OP_TARGET_MAX {
                plain = plain.chars().take(OP_TARGET_MAX - 3).collect::<String>() + "...";
            }

            // Only the operation word is colored.
            let colored = match plain.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(plain.as_str()).to_string(),
            };
            let padding =
                " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &colored).chars().count()));

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                entry.id, date, colored, padding, entry.message
            );
        }

        Ok(())
    }
}

fn op_target(entry: &LogEntry) -> String {
    if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    }
}
