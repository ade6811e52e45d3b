use super::backup_file::BackupFile;

/// Contiguous run of files sharing the same shot key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shot<T = BackupFile> {
    pub key: String,
    pub files: Vec<T>,
}

impl<T> Shot<T> {
    pub fn new(key: String, first: T) -> Self {
        Self {
            key,
            files: vec![first],
        }
    }
}
