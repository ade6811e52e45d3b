use crate::cli::parser::{Commands, ScanArgs};
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::report::ScanReport;
use crate::report::Reporter;
use crate::source::{ArgSelector, BackupSource, FsSource, PromptSelector, RootSelector};
use crate::ui::messages::warning;

/// Handle the `scan` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan {
        scan,
        width,
        summary,
    } = cmd
    {
        let cfg = cfg.with_overrides(&scan.overrides(*width))?;
        let report = build_report(scan, &cfg)?;

        let reporter = Reporter::new(cfg.column_width);
        if *summary {
            print!("{}", reporter.render_summary(&report));
        } else {
            print!("{}", reporter.render(&report));
        }
    }
    Ok(())
}

/// Pick the root, collect backups below it and run the pipeline.
pub(crate) fn build_report(args: &ScanArgs, cfg: &Config) -> AppResult<ScanReport> {
    let root = match &args.dir {
        Some(dir) => ArgSelector(dir.clone()).select_root()?,
        None => PromptSelector.select_root()?,
    };

    let files = FsSource::new(&root, cfg.pattern(), cfg.timestamp).collect()?;

    if files.is_empty() {
        warning(format!("No backup files found under {}", root.display()));
    }

    Ok(Core::build_report(root, files, &cfg.scan_settings()))
}
