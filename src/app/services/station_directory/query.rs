//! Station lookup and filtering
//!
//! Mirrors the archive's request surface: listings are narrowed by state,
//! municipality, station key and operational status, all matched
//! case-insensitively; an unset criterion matches everything.

use super::StationDirectory;
use crate::app::models::Station;

/// Criteria for narrowing a station listing
///
/// `None` means "all" for that criterion. String comparisons are exact but
/// case-insensitive, matching the archive's own filters.
#[derive(Debug, Clone, Default)]
pub struct StationFilter {
    pub state: Option<String>,
    pub municipality: Option<String>,
    pub key: Option<String>,
    pub status: Option<String>,
}

impl StationFilter {
    /// Whether a station satisfies every set criterion
    pub fn matches(&self, station: &Station) -> bool {
        let eq_ignore_case = |criterion: &Option<String>, value: &str| match criterion {
            Some(wanted) => value.eq_ignore_ascii_case(wanted) || {
                // Spanish state names carry accented characters outside ASCII.
                value.to_uppercase() == wanted.to_uppercase()
            },
            None => true,
        };

        eq_ignore_case(&self.state, &station.state)
            && eq_ignore_case(&self.municipality, &station.municipality)
            && self.key.as_ref().is_none_or(|key| station.key == *key)
            && eq_ignore_case(&self.status, &station.status)
    }
}

impl StationDirectory {
    /// Stations satisfying the filter, in catalogue order
    pub fn filter(&self, filter: &StationFilter) -> Vec<&Station> {
        self.stations()
            .iter()
            .filter(|station| filter.matches(station))
            .collect()
    }

    /// Distinct state names, uppercased and sorted
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self
            .stations()
            .iter()
            .filter(|station| !station.state.is_empty())
            .map(|station| station.state.trim().to_uppercase())
            .collect();
        states.sort();
        states.dedup();
        states
    }

    /// Find stations by name pattern (case-insensitive, partial match)
    pub fn find_stations_by_name(&self, pattern: &str) -> Vec<&Station> {
        let pattern_upper = pattern.to_uppercase();
        self.stations()
            .iter()
            .filter(|station| station.name.to_uppercase().contains(&pattern_upper))
            .collect()
    }
}
