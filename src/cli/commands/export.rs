use crate::cli::commands::open_loaded;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let coordinator = open_loaded(cfg)?;
        let written =
            ExportLogic::export(coordinator.sessions(), format, file, range.as_deref(), *force)?;

        if written > 0 {
            coordinator.guest_store().audit(
                "export",
                format.as_str(),
                &format!("{written} sessions exported to {file}"),
            );
        }
    }
    Ok(())
}
