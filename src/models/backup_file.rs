use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// A single backup snapshot found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupFile {
    pub path: PathBuf,
    pub stem: String,               // file name without its final extension
    pub timestamp: DateTime<Local>, // created or modified time, see TimestampKind
}

impl BackupFile {
    pub fn new(path: impl Into<PathBuf>, timestamp: DateTime<Local>) -> Self {
        let path = path.into();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path,
            stem,
            timestamp,
        }
    }

    pub fn file_name(&self) -> String {
        file_name_of(&self.path)
    }
}

impl AsRef<Path> for BackupFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Last path component as a lossy string, empty when the path has none.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
