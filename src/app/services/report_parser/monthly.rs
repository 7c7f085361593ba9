//! Monthly statistics report handler
//!
//! Monthly reports interleave several whitespace-aligned tables, each headed
//! by a line starting with "AÑO". Column boundaries come from the header
//! line's token offsets (see [`super::span_reader`]); a blank line or the
//! next "AÑO" line closes a table, the latter opening the next section
//! immediately.

use super::emitter::{ParsedReport, TableEmitter};
use super::metadata::MetadataExtractor;
use super::section;
use super::span_reader::ColumnSpans;
use crate::constants::{
    BOILERPLATE_TITLES, METADATA_LABELS, MONTHLY_HEADER_ZONE, report_titles, sentinels,
};

/// Handler for monthly statistics reports
#[derive(Debug, Default)]
pub struct MonthlyHandler;

impl MonthlyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Parse a monthly statistics report into rows
    ///
    /// Emits the metadata block first, then each table section in document
    /// order, each closed by a blank separator row. A report with no "AÑO"
    /// line yields the metadata block alone.
    pub fn parse(&self, lines: &[String]) -> ParsedReport {
        let mut emitter = TableEmitter::new();

        emitter.title(report_titles::MONTHLY);
        MetadataExtractor::new(lines, MONTHLY_HEADER_ZONE).emit_all(&mut emitter, METADATA_LABELS);
        emitter.blank();

        let mut i = 0;
        while i < lines.len() {
            let trimmed = lines[i].trim();
            if !trimmed.starts_with(sentinels::MONTHLY_TABLE) {
                i += 1;
                continue;
            }

            if let Some(title) = section::title_before(lines, i, |candidate| {
                BOILERPLATE_TITLES.contains(&candidate) || candidate.contains(':')
            }) {
                emitter.title(&title);
            }

            let spans = ColumnSpans::from_header(&lines[i]);
            emitter.header(spans.labels().to_vec());
            i += 1;

            while i < lines.len() {
                let current = lines[i].trim();
                if current.is_empty() || current.starts_with(sentinels::MONTHLY_TABLE) {
                    break;
                }
                emitter.data_row(spans.slice(&lines[i]));
                i += 1;
            }

            // A terminating sentinel line re-enters the next section without
            // an extra scanning pass; a blank line is consumed by the outer
            // loop.
            emitter.blank();
        }

        emitter.finish()
    }
}
