//! Daily historical record handler
//!
//! Daily reports omit most of the station fields the other families carry in
//! their header zone, so the metadata block is stamped from the caller's
//! station record instead, except the emission date, which is matched out of
//! the document body. Daily reports contain exactly one table; data rows run
//! to end of input with no closing sentinel.

use super::emitter::{ParsedReport, TableEmitter};
use crate::app::models::Station;
use crate::constants::{DEFAULT_HEADER_ZONE, report_titles, sentinels};
use regex::Regex;

/// Handler for daily historical record reports
#[derive(Debug)]
pub struct DailyHandler {
    emission_date: Regex,
    unit_groups: Regex,
}

impl DailyHandler {
    pub fn new() -> Self {
        Self {
            // First DD/MM/YYYY-shaped token after an EMISIÓN label wins.
            emission_date: Regex::new(r"(?i)EMISI[ÓO]N\s*:?\s*(\d{2}/\d{2}/\d{4})")
                .expect("static emission date pattern"),
            unit_groups: Regex::new(r"\(([^)]*)\)").expect("static unit pattern"),
        }
    }

    /// Parse a daily record report, stamping metadata from `station`
    pub fn parse(&self, lines: &[String], station: &Station) -> ParsedReport {
        let mut emitter = TableEmitter::new();

        emitter.title(report_titles::DAILY);
        emitter.metadata("EMISIÓN", self.find_emission_date(lines));
        emitter.metadata("ESTACIÓN", station.key.as_str());
        emitter.metadata("NOMBRE", station.name.trim());
        emitter.metadata("ESTADO", station.state.as_str());
        emitter.metadata("MUNICIPIO", station.municipality.as_str());
        emitter.metadata("SITUACIÓN", station.status.as_str());
        emitter.metadata("CVE-OMM", "");
        emitter.metadata("LATITUD", format!("{} °", station.latitude).trim());
        emitter.metadata("LONGITUD", format!("{} °", station.longitude).trim());
        emitter.metadata("ALTITUD", format!("{} msnm", station.altitude).trim());
        emitter.blank();

        let mut i = 0;
        let mut wrote_header = false;
        while i < lines.len() {
            let trimmed = lines[i].trim();

            if !wrote_header && trimmed.to_uppercase().starts_with(sentinels::DAILY_TABLE) {
                let consumed = self.emit_header(&mut emitter, lines, i);
                wrote_header = true;
                i += consumed;
                continue;
            }

            if wrote_header && !trimmed.is_empty() {
                emitter.data_row(
                    lines[i]
                        .split_whitespace()
                        .map(|token| token.to_string())
                        .collect(),
                );
            }

            i += 1;
        }

        emitter.finish()
    }

    /// First emission date in the bounded header zone, or empty
    fn find_emission_date(&self, lines: &[String]) -> String {
        lines
            .iter()
            .take(DEFAULT_HEADER_ZONE)
            .find_map(|line| self.emission_date.captures(line))
            .map(|captures| captures[1].to_string())
            .unwrap_or_default()
    }

    /// Emit the table header, fusing a following units line when present
    ///
    /// Each parenthesized unit on the following line suffixes its data column
    /// as "LABEL (UNIT)"; the date column has no unit, so units map to column
    /// index minus one. Without unit groups the header consumes one line,
    /// with them two. Returns the number of lines consumed.
    fn emit_header(&self, emitter: &mut TableEmitter, lines: &[String], idx: usize) -> usize {
        let labels: Vec<&str> = lines[idx].split_whitespace().collect();

        let units: Vec<String> = match lines.get(idx + 1) {
            Some(next) => self
                .unit_groups
                .captures_iter(next)
                .map(|captures| captures[1].trim().to_string())
                .collect(),
            None => Vec::new(),
        };

        let mut header = Vec::with_capacity(labels.len());
        for (column, label) in labels.iter().enumerate() {
            if column == 0 && label.to_uppercase().starts_with(sentinels::DAILY_TABLE) {
                header.push(label.to_string());
                continue;
            }
            match column.checked_sub(1).and_then(|unit_idx| units.get(unit_idx)) {
                Some(unit) if !unit.is_empty() => header.push(format!("{} ({})", label, unit)),
                _ => header.push(label.to_string()),
            }
        }

        emitter.header(header);
        if units.is_empty() { 1 } else { 2 }
    }
}

impl Default for DailyHandler {
    fn default() -> Self {
        Self::new()
    }
}
