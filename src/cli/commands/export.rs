use crate::cli::commands::scan::build_report;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `export` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        scan,
        format,
        file,
        force,
    } = cmd
    {
        let cfg = cfg.with_overrides(&scan.overrides(None))?;
        let report = build_report(scan, &cfg)?;
        ExportLogic::export(&report, *format, file, *force)?;
    }
    Ok(())
}
