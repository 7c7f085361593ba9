//! Parser for SMN plain-text climate reports
//!
//! This module converts the four families of free-form SMN text reports into
//! a normalized tabular representation. The reports have no fixed schema or
//! delimiter: column boundaries are implied by whitespace alignment in a
//! header line, section boundaries by sentinel keywords, and metadata is
//! interleaved with the tabular data using inconsistent inline formats.
//!
//! ## Architecture
//!
//! - [`monthly`] - monthly statistics reports ("AÑO" sections)
//! - [`normals`] - climatological normals, parameterized by reference period
//! - [`extremes`] - extreme-value tables with a fixed replacement header
//! - [`daily`] - daily historical records with header/unit-row fusion
//! - [`metadata`] - labeled key/value extraction from the bounded header zone
//! - [`span_reader`] - delimiterless column slicing by header offsets
//! - [`section`] - shared backward scan for section titles
//! - [`emitter`] - the shared row accumulation and CSV emission contract
//!
//! Parsing is synchronous, stateless across invocations, and never fails on
//! data-quality grounds: missing metadata degrades to empty values, short
//! rows are padded, and a report with zero tables is a valid result.
//!
//! ## Usage
//!
//! ```rust
//! use smn_processor::{ReportKind, ReportParser};
//!
//! let parser = ReportParser::new();
//! let lines: Vec<String> = vec![
//!     "EMISIÓN : 19/09/2025".to_string(),
//!     String::new(),
//!     "AÑO   ENE   FEB".to_string(),
//!     "2020  1.0   2.0".to_string(),
//! ];
//! let report = parser.parse(&ReportKind::Monthly, &lines);
//! let csv = report.to_csv().unwrap();
//! assert!(csv.contains("AÑO,ENE,FEB"));
//! ```

pub mod daily;
pub mod emitter;
pub mod extremes;
pub mod metadata;
pub mod monthly;
pub mod normals;
pub mod section;
pub mod span_reader;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use daily::DailyHandler;
pub use emitter::{ParsedReport, TableEmitter};
pub use extremes::ExtremesHandler;
pub use metadata::MetadataExtractor;
pub use monthly::MonthlyHandler;
pub use normals::NormalsHandler;
pub use span_reader::ColumnSpans;

use crate::app::models::ReportKind;

/// Report parser dispatching to the four format handlers
///
/// Handlers hold their compiled configuration (delimiters, date patterns)
/// fixed from construction; the parser itself has no mutable state, so one
/// instance may be shared across concurrent parses.
#[derive(Debug)]
pub struct ReportParser {
    monthly: MonthlyHandler,
    normals: NormalsHandler,
    extremes: ExtremesHandler,
    daily: DailyHandler,
}

impl ReportParser {
    pub fn new() -> Self {
        Self {
            monthly: MonthlyHandler::new(),
            normals: NormalsHandler::new(),
            extremes: ExtremesHandler::new(),
            daily: DailyHandler::new(),
        }
    }

    /// Parse raw report lines according to the report kind
    pub fn parse(&self, kind: &ReportKind<'_>, lines: &[String]) -> ParsedReport {
        match kind {
            ReportKind::Monthly => self.monthly.parse(lines),
            ReportKind::Normals(period) => self.normals.parse(lines, *period),
            ReportKind::Extremes => self.extremes.parse(lines),
            ReportKind::Daily(station) => self.daily.parse(lines, station),
        }
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}
