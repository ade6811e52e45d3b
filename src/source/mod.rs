//! Where backup files come from.
//!
//! The pipeline only needs a list of (path, timestamp) pairs; this module
//! supplies them from the filesystem or from memory.

pub mod fs;
pub mod select;

use crate::errors::AppResult;
use crate::models::backup_file::BackupFile;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use fs::FsSource;
pub use select::{ArgSelector, PromptSelector, RootSelector};

pub trait BackupSource {
    fn collect(&self) -> AppResult<Vec<BackupFile>>;
}

/// Which filesystem time stamps a backup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimestampKind {
    /// Birth time, falling back to modification time where unsupported.
    #[default]
    Created,
    Modified,
}

/// File name rule for backups: contains `marker` followed later by an
/// extension starting with `extension_prefix`. Case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupPattern {
    pub marker: String,
    pub extension_prefix: String,
}

impl Default for BackupPattern {
    fn default() -> Self {
        Self {
            marker: "bak".to_string(),
            extension_prefix: "hip".to_string(),
        }
    }
}

impl BackupPattern {
    pub fn new(marker: &str, extension_prefix: &str) -> Self {
        Self {
            marker: marker.to_lowercase(),
            extension_prefix: extension_prefix.trim_start_matches('.').to_lowercase(),
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_lowercase()) else {
            return false;
        };

        // same shape as the glob `*<marker>*.<prefix>*`
        let Some(idx) = name.find(&self.marker) else {
            return false;
        };
        let ext_start = format!(".{}", self.extension_prefix);

        name[idx + self.marker.len()..].contains(&ext_start)
    }
}

/// In-memory source, handy for synthetic data.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pub files: Vec<BackupFile>,
}

impl MemorySource {
    pub fn new(files: Vec<BackupFile>) -> Self {
        Self { files }
    }
}

impl BackupSource for MemorySource {
    fn collect(&self) -> AppResult<Vec<BackupFile>> {
        Ok(self.files.clone())
    }
}
