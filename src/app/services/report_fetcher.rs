//! Remote retrieval of raw report text
//!
//! Reports live at per-station URLs published in the catalogue. The fetcher
//! returns their content as an ordered line sequence; a failed request, a
//! non-success status, or a body under the minimum usable line count is an
//! upstream-unavailable condition; the parser is never invoked on such
//! content.

use crate::constants::MIN_REPORT_LINES;
use crate::{Error, Result};
use std::time::Duration;
use tracing::debug;

/// HTTP client for fetching raw report text
#[derive(Debug, Clone)]
pub struct ReportFetcher {
    client: reqwest::Client,
}

impl ReportFetcher {
    /// Create a fetcher with the given request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("smn-processor/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Fetch a report URL and split it into verbatim lines
    ///
    /// Lines keep their trailing whitespace; the parsers rely on raw
    /// horizontal positions.
    pub async fn fetch_lines(&self, url: &str) -> Result<Vec<String>> {
        debug!("Fetching report: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::upstream(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream(url, format!("HTTP status {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::upstream(url, e.to_string()))?;

        if text.trim().is_empty() {
            return Err(Error::insufficient_report(url, 0));
        }

        let lines: Vec<String> = text.lines().map(|line| line.to_string()).collect();
        if lines.len() < MIN_REPORT_LINES {
            return Err(Error::insufficient_report(url, lines.len()));
        }

        Ok(lines)
    }
}
