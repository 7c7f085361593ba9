//! Command implementations for the SMN processor CLI
//!
//! Sets up structured logging and dispatches to the selected subcommand.

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};
use tracing::debug;

pub mod download;
pub mod stations;

/// Run the selected subcommand
pub async fn run(args: Args) -> Result<()> {
    setup_logging();
    debug!("Command line arguments: {:?}", args);

    match &args.command {
        Some(Commands::Download(download_args)) => download::run(download_args).await,
        Some(Commands::Stations(stations_args)) => stations::run(stations_args).await,
        None => Err(Error::configuration("No command specified")),
    }
}

/// Set up structured logging to stderr
///
/// `RUST_LOG` overrides the default filter.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("smn_processor=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
