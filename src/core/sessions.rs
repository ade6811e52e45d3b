//! Session clustering inside one shot.

use crate::models::backup_file::BackupFile;
use crate::models::report::ShotReport;
use crate::models::session::Session;
use chrono::TimeDelta;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What happens to the last file of a shot when it is the one that breaks
/// the session (its gap to the previous file exceeds the threshold).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrailingBreak {
    /// The file closes the previous session and is not reported itself.
    #[default]
    Drop,
    /// The file is reported as its own zero-length session.
    Keep,
}

/// Gap between two timestamps in fractional minutes.
pub fn gap_minutes(delta: TimeDelta) -> f64 {
    let secs = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9;
    secs / 60.0
}

/// Walk the shot's files in the given order and split them into sessions.
///
/// A session ends when the gap to the next file is strictly greater than
/// `session_gap_minutes`. Input order is trusted, timestamps are not re-sorted.
pub fn cluster_sessions(
    key: &str,
    files: &[BackupFile],
    session_gap_minutes: f64,
    trailing: TrailingBreak,
) -> ShotReport {
    let mut sessions = Vec::new();

    let Some((first, rest)) = files.split_first() else {
        return ShotReport::from_sessions(key.to_string(), sessions);
    };

    if rest.is_empty() {
        sessions.push(Session::new(first.path.clone(), first.timestamp, first.timestamp));
        return ShotReport::from_sessions(key.to_string(), sessions);
    }

    let mut session_start = first.timestamp;
    let mut prev = first;

    for (idx, file) in rest.iter().enumerate() {
        let is_last = idx == rest.len() - 1;
        let gap = gap_minutes(file.timestamp - prev.timestamp);

        if gap > session_gap_minutes {
            sessions.push(Session::new(prev.path.clone(), session_start, prev.timestamp));

            session_start = file.timestamp;
            prev = file;

            if is_last && trailing == TrailingBreak::Keep {
                sessions.push(Session::new(file.path.clone(), file.timestamp, file.timestamp));
            }
        } else if is_last {
            sessions.push(Session::new(file.path.clone(), session_start, file.timestamp));
        } else {
            prev = file;
        }
    }

    tracing::debug!(shot = key, sessions = sessions.len(), "clustered shot");

    ShotReport::from_sessions(key.to_string(), sessions)
}
