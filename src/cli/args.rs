//! Command-line argument definitions for the SMN processor
//!
//! Defines the CLI surface with the clap derive API: a `download` command
//! that fetches, converts and packages station reports, and a `stations`
//! command for inspecting the catalogue.

use crate::app::models::ReportType;
use crate::app::services::station_directory::StationFilter;
use crate::{Config, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the SMN climate report processor
///
/// Converts plain-text climate station reports published by the Mexican
/// national meteorological archive into structured CSV files, packaged as a
/// single CSV or a ZIP per batch.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "smn-processor",
    version,
    about = "Convert SMN climate station text reports into structured CSV",
    long_about = "Fetches plain-text climate reports (daily records, monthly statistics, \
                  climatological normals, extreme values) from the Mexican national \
                  meteorological archive, converts each into structured CSV, and packages \
                  the batch as a CSV or ZIP download."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the SMN processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch, convert and package station reports
    Download(DownloadArgs),
    /// List catalogue stations and states
    Stations(StationsArgs),
}

/// Arguments for the download command
#[derive(Debug, Clone, Parser)]
pub struct DownloadArgs {
    /// Path to the station catalogue KML document
    #[arg(long = "catalogue", value_name = "PATH")]
    pub catalogue: Option<PathBuf>,

    /// Restrict to one administrative state (e.g. "JALISCO")
    #[arg(long, value_name = "NAME")]
    pub state: Option<String>,

    /// Restrict to one municipality
    #[arg(long, value_name = "NAME")]
    pub municipality: Option<String>,

    /// Restrict to one station key (CLAVE)
    #[arg(long = "station", value_name = "CLAVE")]
    pub station: Option<String>,

    /// Restrict to an operational status (e.g. "OPERANDO")
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,

    /// Report selection: diarios, mensuales, normales_<PERIODO>, extremos,
    /// or todos for every family
    #[arg(short = 'd', long = "data", value_name = "TYPE", default_value = "diarios")]
    pub data: String,

    /// Output directory for the produced CSV or ZIP
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Number of report fetches in flight at once
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,
}

impl DownloadArgs {
    /// Report families selected by the `--data` argument
    ///
    /// Unknown selectors are rejected here, before any parsing begins.
    pub fn report_types(&self) -> Result<Vec<ReportType>> {
        if self.data.trim().eq_ignore_ascii_case("todos") {
            return Ok(ReportType::ALL.to_vec());
        }
        Ok(vec![self.data.parse()?])
    }

    /// Station filter from the location arguments
    ///
    /// The "TODOS"/"TODAS" placeholders mean no restriction, as in the
    /// archive's own request interface.
    pub fn station_filter(&self) -> StationFilter {
        fn unless_all(value: &Option<String>) -> Option<&String> {
            value.as_ref().filter(|v| {
                let upper = v.trim().to_uppercase();
                !upper.is_empty() && upper != "TODOS" && upper != "TODAS"
            })
        }

        StationFilter {
            state: unless_all(&self.state).cloned(),
            municipality: unless_all(&self.municipality).cloned(),
            key: unless_all(&self.station).cloned(),
            status: unless_all(&self.status).cloned(),
        }
    }

    /// Effective configuration after applying argument overrides
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(catalogue) = &self.catalogue {
            config.catalogue_path = catalogue.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            config.request_timeout_secs = timeout;
        }
        if let Some(concurrency) = self.concurrency {
            config.fetch_concurrency = concurrency;
        }
        config
    }
}

/// Arguments for the stations command
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// Path to the station catalogue KML document
    #[arg(long = "catalogue", value_name = "PATH")]
    pub catalogue: Option<PathBuf>,

    /// Restrict the listing to one administrative state
    #[arg(long, value_name = "NAME")]
    pub state: Option<String>,

    /// Restrict the listing to one municipality
    #[arg(long, value_name = "NAME")]
    pub municipality: Option<String>,

    /// Restrict the listing to an operational status
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,

    /// List the distinct states instead of stations
    #[arg(long)]
    pub states: bool,
}

impl StationsArgs {
    /// Station filter from the location arguments
    pub fn station_filter(&self) -> StationFilter {
        StationFilter {
            state: self.state.clone(),
            municipality: self.municipality.clone(),
            key: None,
            status: self.status.clone(),
        }
    }
}
