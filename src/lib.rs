//! SMN Report Processor Library
//!
//! A Rust library for converting plain-text climatological reports published by
//! the Mexican national meteorological service (SMN) into structured CSV.
//!
//! This library provides tools for:
//! - Parsing the four SMN report families: monthly statistics, climatological
//!   normals, extreme-value tables, and daily historical records
//! - Recovering column boundaries from whitespace-aligned headers with no
//!   delimiters
//! - Loading and querying the station catalogue from the SMN KML document
//! - Fetching raw report text from the archive's per-station URLs
//! - Packaging batches of converted reports into CSV or ZIP downloads

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod batch;
        pub mod report_fetcher;
        pub mod report_parser;
        pub mod station_directory;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{NormalsPeriod, ReportKind, ReportType, Station};
pub use app::services::report_parser::{ParsedReport, ReportParser};
pub use app::services::station_directory::StationDirectory;
pub use config::Config;

/// Result type alias for the SMN processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for SMN report processing operations
///
/// Data-quality problems inside a report (missing metadata labels, short rows,
/// absent tables) are never errors; handlers always return a best-effort
/// result. Errors are reserved for the surrounding machinery: the station
/// catalogue, remote retrieval, output encoding, and programmer-error-class
/// inputs such as an unrecognized report type name.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Station catalogue (KML) could not be parsed
    #[error("Station catalogue error: {message}")]
    Catalogue { message: String },

    /// Remote report retrieval failed
    #[error("Upstream error for '{url}': {message}")]
    Upstream { url: String, message: String },

    /// Remote report came back too short to be a real report
    #[error("Insufficient report content from '{url}': {lines} lines")]
    InsufficientReport { url: String, lines: usize },

    /// Unrecognized climatological-normals reference period
    #[error(
        "Unknown normals period: '{period}' (expected 1961-1990, 1971-2000, 1981-2010 or 1991-2020)"
    )]
    UnknownPeriod { period: String },

    /// Unrecognized report type selector
    #[error("Unknown report type: '{name}'")]
    UnknownReportType { name: String },

    /// Station filter matched nothing in the catalogue
    #[error("No stations matched the requested filter")]
    NoStationsMatched,

    /// Every requested station/report pair was unavailable upstream
    #[error("No usable report data found for the requested stations")]
    NoData,

    /// CSV encoding of a parsed report failed
    #[error("CSV encoding error: {message}")]
    CsvEncoding { message: String },

    /// ZIP archive construction failed
    #[error("Archive error: {message}")]
    Archive { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a station catalogue error
    pub fn catalogue(message: impl Into<String>) -> Self {
        Self::Catalogue {
            message: message.into(),
        }
    }

    /// Create an upstream retrieval error
    pub fn upstream(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an insufficient-content error
    pub fn insufficient_report(url: impl Into<String>, lines: usize) -> Self {
        Self::InsufficientReport {
            url: url.into(),
            lines,
        }
    }

    /// Create an unknown-period error
    pub fn unknown_period(period: impl Into<String>) -> Self {
        Self::UnknownPeriod {
            period: period.into(),
        }
    }

    /// Create an unknown-report-type error
    pub fn unknown_report_type(name: impl Into<String>) -> Self {
        Self::UnknownReportType { name: name.into() }
    }

    /// Create a CSV encoding error
    pub fn csv_encoding(message: impl Into<String>) -> Self {
        Self::CsvEncoding {
            message: message.into(),
        }
    }

    /// Create an archive error
    pub fn archive(message: impl Into<String>) -> Self {
        Self::Archive {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvEncoding {
            message: error.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(error: zip::result::ZipError) -> Self {
        Self::Archive {
            message: error.to_string(),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(error: quick_xml::Error) -> Self {
        Self::Catalogue {
            message: error.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::Upstream {
            url: error
                .url()
                .map(|u| u.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            message: error.to_string(),
        }
    }
}
