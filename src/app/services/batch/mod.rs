//! Batch conversion of station reports
//!
//! A batch request pairs a station filter with a report-type selection,
//! fetches every published report in the selection, parses each into CSV,
//! and packages the results. Per-report upstream failures degrade to
//! warnings and skips; the batch as a whole fails only when no station
//! matched or nothing usable came back.

use crate::app::models::{ReportType, Station};
use crate::app::services::report_fetcher::ReportFetcher;
use crate::app::services::report_parser::ReportParser;
use crate::app::services::station_directory::{StationDirectory, StationFilter};
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

pub mod archive;

#[cfg(test)]
pub mod tests;

pub use archive::write_output;

/// One batch request: which stations, which report families
#[derive(Debug, Clone)]
pub struct BatchRequest {
    /// Station selection criteria
    pub filter: StationFilter,
    /// Report families to convert
    pub types: Vec<ReportType>,
    /// The raw selector the request came in with ("TODOS", "mensuales", ...),
    /// kept for archive naming
    pub selector: String,
}

/// One converted report ready for packaging
#[derive(Debug, Clone)]
pub struct ReportFile {
    /// Output file name, `MUNICIPIO_CLAVE_tipo.csv`
    pub name: String,
    /// BOM-prefixed CSV content
    pub csv: String,
}

/// Outcome of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Converted reports in station/type order
    pub files: Vec<ReportFile>,
    /// Station/type pairs skipped because the report was unavailable
    pub skipped: usize,
}

/// Fetches, parses and collects reports for a batch request
#[derive(Debug)]
pub struct BatchProcessor {
    directory: StationDirectory,
    fetcher: ReportFetcher,
    parser: ReportParser,
    concurrency: usize,
}

impl BatchProcessor {
    pub fn new(directory: StationDirectory, fetcher: ReportFetcher, concurrency: usize) -> Self {
        Self {
            directory,
            fetcher,
            parser: ReportParser::new(),
            concurrency: concurrency.max(1),
        }
    }

    /// Run a batch request to completion
    ///
    /// Fetches run concurrently but results keep station/type order, so the
    /// produced archive is deterministic for a given catalogue. Returns
    /// [`Error::NoStationsMatched`] when the filter selects nothing and
    /// [`Error::NoData`] when every selected pair was unavailable.
    pub async fn run(&self, request: &BatchRequest) -> Result<BatchResult> {
        let stations = self.directory.filter(&request.filter);
        if stations.is_empty() {
            return Err(Error::NoStationsMatched);
        }

        info!(
            "Converting up to {} report(s) across {} station(s)",
            stations.len() * request.types.len(),
            stations.len()
        );

        let jobs: Vec<(&Station, ReportType, String)> = stations
            .iter()
            .flat_map(|station| {
                request.types.iter().filter_map(|report_type| {
                    report_type
                        .url_for(station)
                        .map(|url| (*station, *report_type, url.to_string()))
                })
            })
            .collect();

        let progress = ProgressBar::new(jobs.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        progress.set_message("Fetching reports...");

        let outcomes: Vec<Option<ReportFile>> = stream::iter(jobs)
            .map(|(station, report_type, url)| {
                let progress = &progress;
                async move {
                    let outcome = self.convert_one(station, report_type, &url).await;
                    progress.inc(1);
                    outcome
                }
            })
            .buffered(self.concurrency)
            .collect()
            .await;

        progress.finish_and_clear();

        let mut result = BatchResult::default();
        for outcome in outcomes {
            match outcome {
                Some(file) => result.files.push(file),
                None => result.skipped += 1,
            }
        }

        if result.files.is_empty() {
            return Err(Error::NoData);
        }

        info!(
            "Converted {} report(s), skipped {}",
            result.files.len(),
            result.skipped
        );
        Ok(result)
    }

    /// Fetch and convert a single station/type pair, degrading failures to a
    /// skip
    async fn convert_one(
        &self,
        station: &Station,
        report_type: ReportType,
        url: &str,
    ) -> Option<ReportFile> {
        let lines = match self.fetcher.fetch_lines(url).await {
            Ok(lines) => lines,
            Err(e) => {
                warn!(
                    "Report unavailable for station {} ({}): {}",
                    station.key, report_type, e
                );
                return None;
            }
        };

        let kind = report_type.kind_for(station);
        let report = self.parser.parse(&kind, &lines);
        match report.to_csv() {
            Ok(csv) => {
                debug!(
                    "Converted {} report for station {} ({} rows)",
                    report_type,
                    station.key,
                    report.rows().len()
                );
                Some(ReportFile {
                    name: archive::report_file_name(station, report_type),
                    csv,
                })
            }
            Err(e) => {
                warn!(
                    "CSV encoding failed for station {} ({}): {}",
                    station.key, report_type, e
                );
                None
            }
        }
    }
}
