//! Row accumulation and CSV emission
//!
//! All four format handlers share this emission contract: a report is an
//! ordered sequence of rows (2-cell metadata rows, title rows, section
//! headers, data rows, and blank separator rows) accumulated in document
//! order and serialized once at the end.

use crate::constants::UTF8_BOM;
use crate::{Error, Result};

/// A parsed report as an ordered sequence of rows of text cells
///
/// Constructed fresh per parse call and immediately handed to the caller;
/// the parser never writes files or owns long-lived state. An empty row is a
/// blank separator between logical blocks. Column count is section-local:
/// different sections may have different widths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReport {
    rows: Vec<Vec<String>>,
}

impl ParsedReport {
    /// All rows in document order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Serialize as CSV text with a UTF-8 byte-order mark prefix
    ///
    /// The BOM keeps the output compatible with spreadsheet tooling that
    /// otherwise assumes a legacy text encoding. A blank separator row is
    /// written as a single empty cell.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        for row in &self.rows {
            if row.is_empty() {
                writer.write_record([""])?;
            } else {
                writer.write_record(row)?;
            }
        }

        writer.flush()?;
        let bytes = writer
            .into_inner()
            .map_err(|e| Error::csv_encoding(e.to_string()))?;

        Ok(format!("{}{}", UTF8_BOM, String::from_utf8_lossy(&bytes)))
    }
}

/// Accumulates report rows while tracking the current table section
///
/// The emitter enforces the section invariant: every data row has at least as
/// many cells as the section's header row. Ragged short rows are padded,
/// never truncated, so columns never silently shift.
#[derive(Debug, Default)]
pub struct TableEmitter {
    rows: Vec<Vec<String>>,
    section_width: Option<usize>,
}

impl TableEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a 2-cell metadata row
    pub fn metadata(&mut self, label: &str, value: impl Into<String>) {
        self.rows.push(vec![label.to_string(), value.into()]);
    }

    /// Emit a title row (title text plus one empty cell)
    pub fn title(&mut self, title: &str) {
        self.rows.push(vec![title.to_string(), String::new()]);
    }

    /// Emit a section header row and open a new table section of its width
    pub fn header(&mut self, labels: Vec<String>) {
        self.section_width = Some(labels.len());
        self.rows.push(labels);
    }

    /// Emit a data row, padding it to the current section's header width
    pub fn data_row(&mut self, mut cells: Vec<String>) {
        if let Some(width) = self.section_width {
            while cells.len() < width {
                cells.push(String::new());
            }
        }
        self.rows.push(cells);
    }

    /// Emit a blank separator row and close the current section
    pub fn blank(&mut self) {
        self.section_width = None;
        self.rows.push(Vec::new());
    }

    /// Finish accumulation and return the report
    pub fn finish(self) -> ParsedReport {
        ParsedReport { rows: self.rows }
    }
}
