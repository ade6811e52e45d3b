use crate::config::Overrides;
use crate::export::ExportFormat;
use crate::source::TimestampKind;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for shotlog
#[derive(Parser)]
#[command(
    name = "shotlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Report how long you worked on each shot, based on its backup files",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Print debug diagnostics to stderr (same as SHOTLOG_LOG=debug)
    #[arg(global = true, short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Scan options shared by `scan` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Directory to search (recursively). Asked on stdin when omitted.
    pub dir: Option<String>,

    #[arg(
        long = "depth",
        value_name = "N",
        help = "Number of `_`-separated name tokens that identify a shot"
    )]
    pub depth: Option<usize>,

    #[arg(
        long = "gap",
        value_name = "MINUTES",
        help = "Minutes between backups above which a new session starts"
    )]
    pub gap: Option<f64>,

    #[arg(
        long = "timestamp",
        value_enum,
        help = "Which file time to use: created or modified"
    )]
    pub timestamp: Option<TimestampKind>,

    #[arg(
        long = "keep-trailing",
        help = "Report the last file of a shot even when it starts a new session"
    )]
    pub keep_trailing: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory and print sessions per shot
    Scan {
        #[command(flatten)]
        scan: ScanArgs,

        #[arg(long = "width", value_name = "CHARS", help = "Column width")]
        width: Option<usize>,

        #[arg(long = "summary", help = "Print one line per shot instead of every session")]
        summary: bool,
    },

    /// Scan a directory and write the sessions to a file
    Export {
        #[command(flatten)]
        scan: ScanArgs,

        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "init", help = "Create the configuration file with default values")]
        init: bool,

        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}

impl ScanArgs {
    pub fn overrides(&self, column_width: Option<usize>) -> Overrides {
        Overrides {
            underscore_depth: self.depth,
            column_width,
            session_gap_minutes: self.gap,
            timestamp: self.timestamp,
            keep_trailing: self.keep_trailing,
        }
    }
}
