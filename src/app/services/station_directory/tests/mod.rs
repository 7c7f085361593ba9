//! Tests for the station directory service


use crate::app::models::{ReportLinks, Station};
use std::path::PathBuf;

use super::StationDirectory;

pub fn sample_station(key: &str, state: &str, municipality: &str, status: &str) -> Station {
    Station {
        key: key.to_string(),
        name: format!("ESTACIÓN {}", key),
        state: state.to_string(),
        municipality: municipality.to_string(),
        status: status.to_string(),
        links: ReportLinks {
            daily: format!("https://example.mx/diarios/{}.txt", key),
            ..ReportLinks::default()
        },
        ..Station::default()
    }
}

pub fn sample_directory() -> StationDirectory {
    StationDirectory::from_stations(
        vec![
            sample_station("14005", "JALISCO", "ZAPOPAN", "OPERANDO"),
            sample_station("14030", "JALISCO", "GUADALAJARA", "SUSPENDIDA"),
            sample_station("15101", "MÉXICO", "TOLUCA", "OPERANDO"),
            sample_station("31019", "YUCATÁN", "MÉRIDA", "OPERANDO"),
        ],
        PathBuf::from("data/doc.kml"),
    )
}
