// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ReportExport;
use crate::models::report::ScanReport;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::io;
use std::path::Path;

/// High level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `file` in the given format.
    ///
    /// `file` must be absolute. An existing file is only replaced with
    /// `force` or after confirmation on stdin.
    pub fn export(
        report: &ScanReport,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let path = Path::new(file);
        ensure_writable(path, force, io::stdin().lock())?;

        if report.session_count() == 0 {
            warning("No sessions found, the export will be empty.");
        }

        let data = ReportExport::from(report);
        tracing::debug!(format = format.as_str(), path = %path.display(), "exporting report");

        match format {
            ExportFormat::Csv => export_csv(&data, path)?,
            ExportFormat::Json => export_json(&data, path)?,
        }

        Ok(())
    }
}
