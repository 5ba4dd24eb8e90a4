use crate::errors::{AppError, AppResult};
use crate::export::SessionExport;
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// `"2 sessions (2025-01-10 to 2025-02-03)"`; rows are in ascending date order.
pub fn describe_rows(rows: &[SessionExport]) -> String {
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) if first.date == last.date => {
            format!("{} session(s) on {}", rows.len(), first.date)
        }
        (Some(first), Some(last)) => {
            format!("{} sessions ({} to {})", rows.len(), first.date, last.date)
        }
        _ => "no sessions".to_string(),
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Ask before replacing an existing export file unless `force` is set.
pub(crate) fn confirm_overwrite(
    path: &Path,
    rows: &[SessionExport],
    force: bool,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Replace it with {}? [y/N]: ", describe_rows(rows));
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    if is_yes(&answer) {
        info("Existing file will be replaced.");
        Ok(())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".into(),
        ))
    }
}
