use crate::cli::parser::Cli;
use crate::config::{Backend, Config};
use crate::db::initialize::{open_backend, open_local};
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the device database with its migrations
///  - the self-hosted backend database, when that backend is selected
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.remote_db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rBankroll…");
    println!("📄 Config file     : {}", Config::config_file().display());
    println!("🗄️  Device database : {}", cfg.database);

    let pool = open_local(&cfg.database)?;

    match cfg.backend {
        Backend::Sqlite => {
            open_backend(&cfg.remote_database)?;
            println!("🌐 Backend         : sqlite ({})", cfg.remote_database);
        }
        Backend::Supabase => {
            println!("🌐 Backend         : supabase ({})", cfg.supabase_url);
        }
    }

    if let Err(e) = ttlog(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("rBankroll initialization completed!");
    Ok(())
}
