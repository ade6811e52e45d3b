//! Recursive filesystem source.

use super::{BackupPattern, BackupSource, TimestampKind};
use crate::errors::{AppError, AppResult};
use crate::models::backup_file::BackupFile;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct FsSource {
    pub root: PathBuf,
    pub pattern: BackupPattern,
    pub timestamp: TimestampKind,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>, pattern: BackupPattern, timestamp: TimestampKind) -> Self {
        Self {
            root: root.into(),
            pattern,
            timestamp,
        }
    }
}

impl BackupSource for FsSource {
    /// Walk `root` recursively and stamp every matching file.
    ///
    /// Unreadable entries below the root are skipped with a warning. An
    /// unreadable root, or unreadable metadata on a matching file, aborts.
    fn collect(&self) -> AppResult<Vec<BackupFile>> {
        let mut out = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) if e.depth() > 0 => {
                    tracing::warn!(
                        path = ?e.path(),
                        error = %e,
                        "skipping unreadable entry"
                    );
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if !entry.file_type().is_file() || !self.pattern.matches(entry.path()) {
                continue;
            }

            let timestamp = read_timestamp(entry.path(), self.timestamp)?;
            out.push(BackupFile::new(entry.path(), timestamp));
        }

        tracing::info!(root = %self.root.display(), found = out.len(), "scan finished");

        Ok(out)
    }
}

/// Timestamp of `path` converted to local time.
pub fn read_timestamp(path: &Path, kind: TimestampKind) -> AppResult<DateTime<Local>> {
    let meta_err = |source| AppError::Metadata {
        path: path.to_path_buf(),
        source,
    };

    let meta = fs::metadata(path).map_err(meta_err)?;

    let time = match kind {
        TimestampKind::Modified => meta.modified().map_err(meta_err)?,
        TimestampKind::Created => match meta.created() {
            Ok(t) => t,
            Err(e) => {
                tracing::debug!(
                    path = %path.display(),
                    error = %e,
                    "creation time unavailable, using modification time"
                );
                meta.modified().map_err(meta_err)?
            }
        },
    };

    Ok(DateTime::<Local>::from(time))
}
