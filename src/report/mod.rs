//! Plain-text rendering of a scan report.

use crate::models::report::{ScanReport, ShotReport};
use crate::utils::table::Table;
use crate::utils::{format_duration, format_timestamp, separator};

const SEPARATOR_LEN: usize = 100;

const SESSION_HEADERS: [&str; 4] = ["last file:", "start:", "end:", "duration:"];
const SUMMARY_HEADERS: [&str; 4] = ["shot:", "sessions:", "last end:", "total:"];

pub struct Reporter {
    pub column_width: usize,
}

impl Reporter {
    pub fn new(column_width: usize) -> Self {
        Self { column_width }
    }

    /// Full report: one session table per shot, then the grand total.
    pub fn render(&self, report: &ScanReport) -> String {
        let mut out = String::new();

        for shot in &report.shots {
            out.push_str(&self.render_shot(shot));
        }

        out.push_str(&separator('-', SEPARATOR_LEN));
        out.push('\n');
        out.push_str(&grand_total_line(report));

        out
    }

    pub fn render_shot(&self, shot: &ShotReport) -> String {
        let mut out = separator('-', SEPARATOR_LEN);
        out.push('\n');
        out.push_str(&format!("{} sessions:\n\n", shot.key));

        let mut table = Table::uniform(&SESSION_HEADERS, self.column_width);
        for s in &shot.sessions {
            table.add_row(vec![
                s.last_file_name(),
                format_timestamp(&s.start),
                format_timestamp(&s.end),
                format_duration(s.duration()),
            ]);
        }
        table.add_row(vec![
            String::new(),
            String::new(),
            "total:".to_string(),
            format_duration(shot.total),
        ]);

        out.push_str(&table.render());
        out
    }

    /// One row per shot, no session detail.
    pub fn render_summary(&self, report: &ScanReport) -> String {
        let mut table = Table::uniform(&SUMMARY_HEADERS, self.column_width);

        for shot in &report.shots {
            let last_end = shot
                .sessions
                .last()
                .map(|s| format_timestamp(&s.end))
                .unwrap_or_else(|| "--".to_string());

            table.add_row(vec![
                shot.key.clone(),
                shot.sessions.len().to_string(),
                last_end,
                format_duration(shot.total),
            ]);
        }

        let mut out = separator('-', SEPARATOR_LEN);
        out.push('\n');
        out.push_str(&table.render());
        out.push_str(&separator('-', SEPARATOR_LEN));
        out.push('\n');
        out.push_str(&grand_total_line(report));
        out
    }
}

fn grand_total_line(report: &ScanReport) -> String {
    format!(
        ">>> >>> >>> duration of everything: {}  <<< <<< <<<\n",
        format_duration(report.total)
    )
}
