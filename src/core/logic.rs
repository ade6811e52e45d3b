use crate::core::grouper::split_shots;
use crate::core::natural_sort::natural_sort_paths;
use crate::core::sessions::{TrailingBreak, cluster_sessions};
use crate::models::backup_file::BackupFile;
use crate::models::report::ScanReport;
use std::path::PathBuf;

/// Tuning values for one scan. Built from the loaded config plus any
/// command-line overrides and handed to the pipeline explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanSettings {
    pub underscore_depth: usize,
    pub session_gap_minutes: f64,
    pub trailing_break: TrailingBreak,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            underscore_depth: 1,
            session_gap_minutes: 30.0,
            trailing_break: TrailingBreak::Drop,
        }
    }
}

pub struct Core;

impl Core {
    /// Natural sort → shot split → per-shot clustering → totals.
    pub fn build_report(
        root: PathBuf,
        mut files: Vec<BackupFile>,
        settings: &ScanSettings,
    ) -> ScanReport {
        natural_sort_paths(&mut files);

        let shots = split_shots(files, settings.underscore_depth)
            .into_iter()
            .map(|shot| {
                cluster_sessions(
                    &shot.key,
                    &shot.files,
                    settings.session_gap_minutes,
                    settings.trailing_break,
                )
            })
            .collect::<Vec<_>>();

        tracing::debug!(shots = shots.len(), "report built");

        ScanReport::new(root, shots)
    }
}
