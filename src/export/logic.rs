// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::model::SessionExport;
use crate::export::overwrite::confirm_overwrite;
use crate::export::writer::write_rows;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::session::Session;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_range;
use crate::utils::path::absolute_output;
use std::fs::File;
use std::io::BufWriter;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the loaded sessions, oldest first.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or one of
    ///   - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
    ///   - `YYYY:YYYY`, `YYYY-MM:YYYY-MM`, `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        sessions: &[Session],
        format: &ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = absolute_output(file)?;

        let rows = Self::select(sessions, range)?;
        if rows.is_empty() {
            warning("No sessions found for selected range.");
            return Ok(0);
        }

        confirm_overwrite(&path, &rows, force)?;

        info(format!("Exporting to {}: {}", format.label(), path.display()));
        write_rows(*format, &rows, BufWriter::new(File::create(&path)?))?;
        notify_export_success(format.label(), &path, rows.len());

        Ok(rows.len())
    }

    /// Sessions inside `range`, as export rows in ascending date order.
    pub fn select(sessions: &[Session], range: Option<&str>) -> AppResult<Vec<SessionExport>> {
        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        // Display order is newest first; reverse before the stable sort so
        // same-day sessions keep the order they were recorded in.
        let mut selected: Vec<&Session> = sessions
            .iter()
            .rev()
            .filter(|s| bounds.is_none_or(|(from, to)| s.date >= from && s.date <= to))
            .collect();
        selected.sort_by_key(|s| s.date);

        Ok(selected.into_iter().map(SessionExport::from).collect())
    }
}
