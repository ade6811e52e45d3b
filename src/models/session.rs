use super::backup_file::file_name_of;
use chrono::{DateTime, Local, TimeDelta};
use std::path::PathBuf;

/// One uninterrupted work period inside a shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub last_file: PathBuf, // file that closed the session
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl Session {
    pub fn new(last_file: PathBuf, start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            last_file,
            start,
            end,
        }
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn last_file_name(&self) -> String {
        file_name_of(&self.last_file)
    }
}
