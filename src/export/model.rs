// src/export/model.rs

use crate::models::report::{ScanReport, ShotReport};
use crate::models::session::Session;
use crate::utils::{format_duration, format_timestamp};
use serde::Serialize;

/// Flat per-session row, used for CSV.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SessionExport {
    pub shot: String,
    pub last_file: String,
    pub start: String,
    pub end: String,
    pub duration_seconds: i64,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShotExport {
    pub shot: String,
    pub sessions: Vec<SessionExport>,
    pub total_seconds: i64,
    pub total: String,
}

/// Whole report, used for JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportExport {
    pub root: String,
    pub shots: Vec<ShotExport>,
    pub total_seconds: i64,
    pub total: String,
}

impl SessionExport {
    fn from_session(shot: &str, s: &Session) -> Self {
        Self {
            shot: shot.to_string(),
            last_file: s.last_file_name(),
            start: format_timestamp(&s.start),
            end: format_timestamp(&s.end),
            duration_seconds: s.duration().num_seconds(),
        }
    }
}

impl From<&ShotReport> for ShotExport {
    fn from(shot: &ShotReport) -> Self {
        Self {
            shot: shot.key.clone(),
            sessions: shot
                .sessions
                .iter()
                .map(|s| SessionExport::from_session(&shot.key, s))
                .collect(),
            total_seconds: shot.total.num_seconds(),
            total: format_duration(shot.total),
        }
    }
}

impl From<&ScanReport> for ReportExport {
    fn from(report: &ScanReport) -> Self {
        Self {
            root: report.root.to_string_lossy().to_string(),
            shots: report.shots.iter().map(ShotExport::from).collect(),
            total_seconds: report.total.num_seconds(),
            total: format_duration(report.total),
        }
    }
}

impl ReportExport {
    pub(crate) fn rows(&self) -> impl Iterator<Item = &SessionExport> {
        self.shots.iter().flat_map(|s| s.sessions.iter())
    }
}
