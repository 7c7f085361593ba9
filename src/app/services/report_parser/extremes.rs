//! Extreme-value report handler
//!
//! Extremes reports group their tables under four known phenomenon names
//! (maximum temperature, minimum temperature, precipitation, evaporation)
//! rather than free-form titles. The source wraps each table header over two
//! lines, so both are discarded and replaced with a fixed 12-column label
//! list before data rows resume.

use super::emitter::{ParsedReport, TableEmitter};
use super::metadata::MetadataExtractor;
use crate::constants::{
    DEFAULT_HEADER_ZONE, EXTREMES_BODY_TERMINATORS, EXTREMES_HEADERS, EXTREMES_PHENOMENA,
    METADATA_LABELS, report_titles, sentinels,
};
use regex::Regex;

/// Handler for extreme-value reports
#[derive(Debug)]
pub struct ExtremesHandler {
    delimiter: Regex,
}

impl ExtremesHandler {
    pub fn new() -> Self {
        Self {
            delimiter: Regex::new(r"\t+|\s{2,}").expect("static delimiter pattern"),
        }
    }

    /// Parse an extreme-value report into rows
    ///
    /// Phenomenon-prefix lines become section titles; each "MES" line is
    /// replaced by the fixed header, with exactly two source lines consumed
    /// before data-row consumption resumes. Table bodies end at a blank line
    /// or the next phenomenon prefix.
    pub fn parse(&self, lines: &[String]) -> ParsedReport {
        let mut emitter = TableEmitter::new();

        emitter.title(report_titles::EXTREMES);
        MetadataExtractor::new(lines, DEFAULT_HEADER_ZONE).emit_all(&mut emitter, METADATA_LABELS);
        emitter.blank();

        let mut i = 0;
        while i < lines.len() {
            let trimmed = lines[i].trim();
            let upper = trimmed.to_uppercase();

            if EXTREMES_PHENOMENA
                .iter()
                .any(|phenomenon| upper.starts_with(phenomenon))
            {
                emitter.title(trimmed);
                i += 1;
                continue;
            }

            if trimmed.starts_with(sentinels::EXTREMES_TABLE) {
                emitter.header(EXTREMES_HEADERS.iter().map(|s| s.to_string()).collect());
                // The source header wraps over two lines; skip both.
                i += 2;

                while i < lines.len() {
                    let current = lines[i].trim();
                    if current.is_empty() {
                        break;
                    }
                    let current_upper = current.to_uppercase();
                    if EXTREMES_BODY_TERMINATORS
                        .iter()
                        .any(|prefix| current_upper.starts_with(prefix))
                    {
                        break;
                    }
                    emitter.data_row(
                        self.delimiter
                            .split(current)
                            .map(|cell| cell.to_string())
                            .collect(),
                    );
                    i += 1;
                }

                emitter.blank();
                continue;
            }

            i += 1;
        }

        emitter.finish()
    }
}

impl Default for ExtremesHandler {
    fn default() -> Self {
        Self::new()
    }
}
