//! Path utilities: expand `~` and validate output locations.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Expand `~` and require the result to be absolute.
pub fn absolute_output(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if !p.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {path}"
        )));
    }
    Ok(p)
}
