//! Metadata extraction from the bounded header zone
//!
//! Report metadata (station identity, coordinates, emission date) is
//! interleaved with the document as labeled `KEY : value` lines near the top.
//! Only a bounded zone is searched; scanning the whole document would risk
//! accidental matches against data values in the tabular body.

use super::emitter::TableEmitter;

/// Scans the bounded header zone of a report for labeled key/value lines
///
/// A pure view over the input lines; extraction never fails. A label with no
/// matching line yields an empty value; every metadata field is optional
/// data from an external archive.
#[derive(Debug)]
pub struct MetadataExtractor<'a> {
    zone: &'a [String],
}

impl<'a> MetadataExtractor<'a> {
    /// Create an extractor over the first `zone_len` lines of the report
    pub fn new(lines: &'a [String], zone_len: usize) -> Self {
        Self {
            zone: &lines[..lines.len().min(zone_len)],
        }
    }

    /// Value of the first line whose trimmed content starts with `label`
    ///
    /// Matching is case-insensitive. The value is the text after the first
    /// colon, trimmed; a matching line without a colon yields the whole
    /// trimmed line. No matching line yields an empty string.
    pub fn value_of(&self, label: &str) -> String {
        let wanted = label.to_uppercase();
        for line in self.zone {
            let trimmed = line.trim();
            if trimmed.to_uppercase().starts_with(&wanted) {
                return match trimmed.split_once(':') {
                    Some((_, value)) => value.trim().to_string(),
                    None => trimmed.to_string(),
                };
            }
        }
        String::new()
    }

    /// Emit one metadata row per label, in order, missing values included
    /// as empty strings
    pub fn emit_all(&self, emitter: &mut TableEmitter, labels: &[&str]) {
        for label in labels {
            emitter.metadata(label, self.value_of(label));
        }
    }
}
