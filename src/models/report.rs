use super::session::Session;
use chrono::TimeDelta;
use std::path::PathBuf;

/// Sessions of one shot and their summed duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotReport {
    pub key: String,
    pub sessions: Vec<Session>,
    pub total: TimeDelta,
}

impl ShotReport {
    pub fn from_sessions(key: String, sessions: Vec<Session>) -> Self {
        let total = sessions
            .iter()
            .fold(TimeDelta::zero(), |acc, s| acc + s.duration());

        Self {
            key,
            sessions,
            total,
        }
    }
}

/// Result of one complete scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub root: PathBuf,
    pub shots: Vec<ShotReport>,
    pub total: TimeDelta,
}

impl ScanReport {
    pub fn new(root: PathBuf, shots: Vec<ShotReport>) -> Self {
        let total = shots.iter().fold(TimeDelta::zero(), |acc, s| acc + s.total);
        Self { root, shots, total }
    }

    pub fn session_count(&self) -> usize {
        self.shots.iter().map(|s| s.sessions.len()).sum()
    }
}
