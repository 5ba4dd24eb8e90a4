use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const EXPECTED_KEYS: [&str; 6] = [
    "database",
    "backend",
    "remote_database",
    "supabase_url",
    "supabase_key",
    "recent_sessions",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    let yaml: Value =
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a key/value document",
            path.display()
        ))),
    }
}

/// List the expected keys absent from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add the missing keys with their default values, keeping existing ones.
/// Returns the keys that were added.
pub fn fill_missing(path: &Path) -> AppResult<Vec<&'static str>> {
    let missing = missing_keys(path)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let mut map = read_mapping(path)?;
    let defaults = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?;

    if let Value::Mapping(default_map) = defaults {
        for key in &missing {
            let k = Value::String((*key).to_string());
            if let Some(v) = default_map.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    let serialized = serde_yaml::to_string(&Value::Mapping(map))
        .map_err(|e| AppError::Config(e.to_string()))?;
    fs::write(path, serialized)?;

    Ok(missing)
}
