//! Climatological-normals report handler
//!
//! Normals reports exist for four reference periods and, unlike the monthly
//! family, use variable non-aligned spacing: cells are separated by tab runs
//! or two-plus spaces rather than positional alignment. Tables start at a
//! "MESES" header line whose first token is inconsistent across periods and
//! is normalized to the literal "VARIABLE".

use super::emitter::{ParsedReport, TableEmitter};
use super::metadata::MetadataExtractor;
use super::section;
use crate::app::models::NormalsPeriod;
use crate::constants::{
    BOILERPLATE_TITLES, DEFAULT_HEADER_ZONE, METADATA_LABELS, NORMALS_VARIABLE_LABEL,
    report_titles, sentinels,
};
use regex::Regex;

/// Handler for climatological-normals reports
#[derive(Debug)]
pub struct NormalsHandler {
    delimiter: Regex,
}

impl NormalsHandler {
    pub fn new() -> Self {
        Self {
            delimiter: Regex::new(r"\t+|\s{2,}").expect("static delimiter pattern"),
        }
    }

    /// Parse a normals report for the given reference period
    ///
    /// The period comes from the caller, never from the report text; it only
    /// shapes the leading title row.
    pub fn parse(&self, lines: &[String], period: NormalsPeriod) -> ParsedReport {
        let mut emitter = TableEmitter::new();

        emitter.title(&format!("{} {}", report_titles::NORMALS_PREFIX, period));
        MetadataExtractor::new(lines, DEFAULT_HEADER_ZONE).emit_all(&mut emitter, METADATA_LABELS);
        emitter.blank();

        let mut i = 0;
        while i < lines.len() {
            let trimmed = lines[i].trim();
            if !trimmed.starts_with(sentinels::NORMALS_TABLE) {
                i += 1;
                continue;
            }

            if let Some(title) = section::title_before(lines, i, |candidate| {
                BOILERPLATE_TITLES.contains(&candidate)
                    || candidate.contains(':')
                    || candidate.starts_with(report_titles::NORMALS_PREFIX)
            }) {
                emitter.title(&title);
            }

            let mut header: Vec<String> = self.split_cells(trimmed);
            if !header.is_empty() {
                header[0] = NORMALS_VARIABLE_LABEL.to_string();
            }
            emitter.header(header);
            i += 1;

            while i < lines.len() {
                let current = lines[i].trim();
                if current.is_empty() || current.starts_with(sentinels::NORMALS_TABLE) {
                    break;
                }
                emitter.data_row(self.split_cells(current));
                i += 1;
            }

            emitter.blank();
        }

        emitter.finish()
    }

    fn split_cells(&self, line: &str) -> Vec<String> {
        self.delimiter
            .split(line)
            .map(|cell| cell.to_string())
            .collect()
    }
}

impl Default for NormalsHandler {
    fn default() -> Self {
        Self::new()
    }
}
