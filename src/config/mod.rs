use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;

/// Which hosted backend authenticated users talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Self-hosted backend stored in `remote_database`.
    #[default]
    Sqlite,
    /// Supabase project reachable at `supabase_url`.
    Supabase,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Device-local database (guest data, active mode, audit log).
    pub database: String,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_remote_database")]
    pub remote_database: String,
    #[serde(default)]
    pub supabase_url: String,
    #[serde(default)]
    pub supabase_key: String,
    #[serde(default = "default_recent_sessions")]
    pub recent_sessions: usize,
}

fn default_remote_database() -> String {
    Config::remote_database_file().to_string_lossy().to_string()
}

fn default_recent_sessions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            backend: Backend::default(),
            remote_database: default_remote_database(),
            supabase_url: String::new(),
            supabase_key: String::new(),
            recent_sessions: default_recent_sessions(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        let base = if cfg!(target_os = "windows") {
            dirs::config_dir()
        } else {
            dirs::home_dir()
        };
        let base = base.unwrap_or_else(|| PathBuf::from("."));

        if cfg!(target_os = "windows") {
            base.join("rbankroll")
        } else {
            base.join(".rbankroll")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbankroll.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rbankroll.sqlite")
    }

    pub fn remote_database_file() -> PathBuf {
        Self::config_dir().join("rbankroll-backend.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, yaml)?;
        Ok(())
    }

    /// Create the config directory and, unless `is_test`, the config file.
    /// Relative database names are resolved inside the config directory.
    pub fn init_all(
        custom_db: Option<&str>,
        custom_remote: Option<&str>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let resolve = |name: &str| {
            let p = crate::utils::path::expand_tilde(name);
            if p.is_absolute() { p } else { dir.join(p) }
        };

        let mut config = Config::default();
        if let Some(name) = custom_db {
            config.database = resolve(name).to_string_lossy().to_string();
        }
        if let Some(name) = custom_remote {
            config.remote_database = resolve(name).to_string_lossy().to_string();
        }

        if !is_test {
            config.save(&Self::config_file())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        Ok(config)
    }
}
