//! Table rendering utilities for CLI outputs.

use super::formatting::pad_right;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// All columns share the same width.
    pub fn uniform(headers: &[&str], width: usize) -> Self {
        Self::new(
            headers
                .iter()
                .map(|h| Column {
                    header: h.to_string(),
                    width,
                })
                .collect(),
        )
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = self.render_line(self.columns.iter().map(|c| c.header.as_str()));

        for row in &self.rows {
            out.push_str(&self.render_line(row.iter().map(String::as_str)));
        }

        out
    }

    /// One line of cells, each padded to its column width plus a space.
    /// Missing cells render empty, extra cells are ignored.
    pub fn render_line<'a>(&self, mut cells: impl Iterator<Item = &'a str>) -> String {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad_right(cells.next().unwrap_or(""), col.width));
            out.push(' ');
        }
        out.push('\n');

        out
    }
}
