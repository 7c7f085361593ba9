//! Tests for the SMN report parser

pub mod daily_tests;
pub mod metadata_tests;

/// Split a text block into owned report lines, preserving whitespace
pub fn report_lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.to_string()).collect()
}
