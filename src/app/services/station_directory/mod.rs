//! Station directory service for catalogue lookups
//!
//! This module loads the SMN station catalogue from its KML document and
//! provides lookups by station key plus the filtered listings the download
//! layer needs. The directory is read-only once loaded; the parser treats
//! station records as externally supplied input.

use crate::app::models::Station;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub mod loader;
pub mod query;

#[cfg(test)]
pub mod tests;

pub use query::StationFilter;

/// In-memory station catalogue with O(1) lookup by station key
///
/// Stations keep the catalogue's document order, which also fixes the order
/// of batch processing and archive contents.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: Vec<Station>,
    index: HashMap<String, usize>,
    source: PathBuf,
}

impl StationDirectory {
    /// Load the directory from a KML catalogue document
    pub fn from_kml_file(path: &Path) -> crate::Result<Self> {
        let stations = loader::load_stations(path)?;
        Ok(Self::from_stations(stations, path.to_path_buf()))
    }

    /// Build a directory from already-parsed stations
    pub fn from_stations(stations: Vec<Station>, source: PathBuf) -> Self {
        let index = stations
            .iter()
            .enumerate()
            .map(|(i, station)| (station.key.clone(), i))
            .collect();
        Self {
            stations,
            index,
            source,
        }
    }

    /// Get a station by its catalogue key (O(1) lookup)
    pub fn get(&self, key: &str) -> Option<&Station> {
        self.index.get(key).map(|&i| &self.stations[i])
    }

    /// All stations in catalogue order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations in the directory
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Path of the catalogue document this directory was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }
}
