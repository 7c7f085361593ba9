//! The stations command: catalogue listings

use crate::Result;
use crate::app::services::station_directory::StationDirectory;
use crate::cli::args::StationsArgs;
use crate::config::DEFAULT_CATALOGUE_PATH;
use std::path::PathBuf;

/// Print catalogue states or a filtered station listing
pub async fn run(args: &StationsArgs) -> Result<()> {
    let catalogue = args
        .catalogue
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOGUE_PATH));
    let directory = StationDirectory::from_kml_file(&catalogue)?;

    if args.states {
        for state in directory.states() {
            println!("{}", state);
        }
        return Ok(());
    }

    let stations = directory.filter(&args.station_filter());
    println!(
        "{:<10} {:<30} {:<20} {:<20} {:<12}",
        "CLAVE", "NOMBRE", "ESTADO", "MUNICIPIO", "SITUACIÓN"
    );
    for station in &stations {
        println!(
            "{:<10} {:<30} {:<20} {:<20} {:<12}",
            station.key, station.name, station.state, station.municipality, station.status
        );
    }
    println!("\n{} station(s)", stations.len());
    Ok(())
}
