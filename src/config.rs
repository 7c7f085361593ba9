//! Configuration management and validation
//!
//! Runtime settings for the processor: where the station catalogue lives,
//! where outputs go, and how remote retrieval behaves. Parsing itself needs
//! no configuration; its vocabulary is fixed in [`crate::constants`].

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default location of the station catalogue KML document
pub const DEFAULT_CATALOGUE_PATH: &str = "data/doc.kml";

/// Default output directory for converted reports
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default per-request timeout in seconds, matching the archive's slow
/// report endpoints
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default number of concurrent report fetches
pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;

/// Processor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the station catalogue KML document
    pub catalogue_path: PathBuf,

    /// Directory where converted CSV/ZIP outputs are written
    pub output_dir: PathBuf,

    /// Timeout applied to each report request
    pub request_timeout_secs: u64,

    /// Number of report fetches in flight at once
    pub fetch_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalogue_path: PathBuf::from(DEFAULT_CATALOGUE_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
        }
    }
}

impl Config {
    /// Request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate settings before a run
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            return Err(Error::configuration(
                "request_timeout_secs must be greater than zero",
            ));
        }
        if self.fetch_concurrency == 0 {
            return Err(Error::configuration(
                "fetch_concurrency must be greater than zero",
            ));
        }
        if !self.catalogue_path.exists() {
            return Err(Error::configuration(format!(
                "Station catalogue not found: {}",
                self.catalogue_path.display()
            )));
        }
        Ok(())
    }
}
