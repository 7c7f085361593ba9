//! Column-span table reading
//!
//! Monthly and extreme-value tables have no delimiter: columns exist only at
//! the horizontal character positions where header tokens begin. This module
//! records those positions from the header line and slices every subsequent
//! data line at the same offsets, so a row's column count and order stay
//! stable no matter what the data cells contain.
//!
//! All offsets are measured in characters, not bytes: the reports are
//! Spanish text and byte offsets would drift across non-ASCII labels.

use crate::constants::TAB_STOP;

/// Expand tab characters to fixed tab stops, measured in characters
///
/// Line terminators are dropped; trailing spaces are preserved because they
/// can carry the final column of a short row.
pub fn expand_tabs(line: &str, tab_stop: usize) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut column = 0usize;

    for ch in line.chars() {
        match ch {
            '\t' => {
                let pad = tab_stop - (column % tab_stop);
                for _ in 0..pad {
                    expanded.push(' ');
                }
                column += pad;
            }
            '\n' | '\r' => {}
            _ => {
                expanded.push(ch);
                column += 1;
            }
        }
    }

    expanded
}

/// Column labels and their starting character offsets on a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpans {
    labels: Vec<String>,
    starts: Vec<usize>,
}

impl ColumnSpans {
    /// Measure every maximal run of non-whitespace on the header line
    ///
    /// Each run's text becomes a column label and its starting offset the
    /// column's left edge, in left-to-right order.
    pub fn from_header(header: &str) -> Self {
        let expanded = expand_tabs(header, TAB_STOP);
        let chars: Vec<char> = expanded.chars().collect();

        let mut labels = Vec::new();
        let mut starts = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if chars[i].is_whitespace() {
                i += 1;
                continue;
            }
            let start = i;
            let mut label = String::new();
            while i < chars.len() && !chars[i].is_whitespace() {
                label.push(chars[i]);
                i += 1;
            }
            labels.push(label);
            starts.push(start);
        }

        Self { labels, starts }
    }

    /// Column labels, left to right
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Slice a data line into one trimmed cell per column
    ///
    /// Segment `i` spans from its start offset to the next column's start;
    /// the last segment runs to end of line. Lines shorter than the last
    /// offset are right-padded first so the final column is never silently
    /// dropped.
    pub fn slice(&self, line: &str) -> Vec<String> {
        let expanded = expand_tabs(line, TAB_STOP);
        let mut chars: Vec<char> = expanded.chars().collect();

        if let Some(&last_start) = self.starts.last() {
            while chars.len() < last_start + 1 {
                chars.push(' ');
            }
        }

        let mut cells = Vec::with_capacity(self.starts.len());
        for (i, &start) in self.starts.iter().enumerate() {
            let end = self
                .starts
                .get(i + 1)
                .copied()
                .unwrap_or(chars.len())
                .min(chars.len());
            let segment: String = chars[start..end].iter().collect();
            cells.push(segment.trim().to_string());
        }

        cells
    }
}
