//! Unified application error type.
//! All modules (source, core, report, export, config) return AppError to keep
//! the error handling consistent and easy to manage.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read metadata of '{}': {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    // ---------------------------
    // Input selection
    // ---------------------------
    #[error("No directory selected")]
    NoSelection,

    #[error("Not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Export cancelled: existing file not overwritten")]
    ExportCancelled,
}

pub type AppResult<T> = Result<T, AppError>;
