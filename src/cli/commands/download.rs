//! The download command: fetch, convert and package station reports

use crate::app::services::batch::{self, BatchProcessor, BatchRequest};
use crate::app::services::report_fetcher::ReportFetcher;
use crate::app::services::station_directory::StationDirectory;
use crate::cli::args::DownloadArgs;
use crate::Result;
use tracing::info;

/// Run one batch download end to end
pub async fn run(args: &DownloadArgs) -> Result<()> {
    let config = args.config();
    config.validate()?;

    let types = args.report_types()?;
    let request = BatchRequest {
        filter: args.station_filter(),
        types,
        selector: args.data.clone(),
    };

    let directory = StationDirectory::from_kml_file(&config.catalogue_path)?;
    let fetcher = ReportFetcher::new(config.request_timeout())?;
    let processor = BatchProcessor::new(directory, fetcher, config.fetch_concurrency);

    let result = processor.run(&request).await?;
    let base_name = batch::archive::output_base_name(&request);
    let path = batch::write_output(&result, &base_name, &config.output_dir)?;

    info!(
        "Done: {} report(s) written to {} ({} skipped)",
        result.files.len(),
        path.display(),
        result.skipped
    );
    println!("{}", path.display());
    Ok(())
}
