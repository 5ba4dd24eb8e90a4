//! Serialization of export rows. Works on any `Write` sink; opening and
//! replacing files is left to `logic`.

use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, SessionExport};
use std::io::Write;

/// Pretty-printed JSON array, newline terminated.
pub fn write_json<W: Write>(rows: &[SessionExport], mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// One record per session; the header row comes from the field names.
pub fn write_csv<W: Write>(rows: &[SessionExport], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for row in rows {
        wtr.serialize(row).map_err(|e| {
            AppError::Export(format!("CSV write error on session {}: {e}", row.id))
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_rows<W: Write>(
    format: ExportFormat,
    rows: &[SessionExport],
    out: W,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => write_csv(rows, out),
        ExportFormat::Json => write_json(rows, out),
    }
}
