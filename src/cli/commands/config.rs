use crate::cli::parser::Commands;
use crate::config::{Config, check};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check: check_config,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            let mut shown = cfg.clone();
            if !shown.supabase_key.is_empty() {
                shown.supabase_key = "********".into();
            }
            let yaml = serde_yaml::to_string(&shown).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{yaml}");
        }

        if *check_config || *migrate {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} not found: run `rbankroll init` first",
                    path.display()
                )));
            }

            if *migrate {
                let added = check::fill_missing(&path)?;
                if added.is_empty() {
                    success("Configuration file is up to date.");
                } else {
                    success(format!("Added missing fields: {}", added.join(", ")));
                }
            } else {
                let missing = check::missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `rbankroll config --migrate` to add them with default values.");
                }
            }
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    success(format!("Configuration file edited using '{editor_to_use}'"));
                }
                _ => {
                    warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    ));
                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => success(format!(
                            "Configuration file edited using fallback '{default_editor}'"
                        )),
                        _ => error(format!(
                            "Failed to edit configuration file using fallback '{default_editor}'"
                        )),
                    }
                }
            }
        }
    }

    Ok(())
}
