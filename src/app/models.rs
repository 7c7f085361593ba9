//! Data models for SMN report processing
//!
//! This module contains the core data structures: the station record supplied
//! by the catalogue, the closed set of report kinds, and the supported
//! climatological-normals reference periods. Coordinates, altitudes and dates
//! are carried as pass-through text; the processor extracts structure, it does
//! not validate climate data.

use crate::constants::kml_fields;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Station Record
// =============================================================================

/// Per-family report URLs published for a station in the catalogue
///
/// An absent or empty URL means the archive has no report of that family for
/// the station.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportLinks {
    pub daily: String,
    pub monthly: String,
    pub normals_1961_1990: String,
    pub normals_1971_2000: String,
    pub normals_1981_2010: String,
    pub normals_1991_2020: String,
    pub extremes: String,
}

/// Station identity record from the SMN catalogue
///
/// Latitude, longitude and altitude are kept as the catalogue's text values;
/// daily reports stamp them into their metadata block verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Station {
    /// Station key (CLAVE), the archive's unique identifier
    pub key: String,

    /// Human-readable station name
    pub name: String,

    /// Administrative state (ESTADO)
    pub state: String,

    /// Municipality within the state
    pub municipality: String,

    /// Operational status (SITUACION), e.g. "OPERANDO" or "SUSPENDIDA"
    pub status: String,

    /// Latitude as catalogue text
    pub latitude: String,

    /// Longitude as catalogue text
    pub longitude: String,

    /// Altitude in meters above sea level, as catalogue text
    pub altitude: String,

    /// First recorded observation date, as catalogue text
    pub first_record: String,

    /// Most recent observation date, as catalogue text
    pub latest_record: String,

    /// Report URLs for this station
    pub links: ReportLinks,
}

impl Station {
    /// Build a station from the `SimpleData` fields of one KML placemark
    ///
    /// Every field is optional in the source document; missing fields become
    /// empty strings.
    pub fn from_kml_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();

        Self {
            key: get(kml_fields::CLAVE),
            name: get(kml_fields::NOMBRE),
            state: get(kml_fields::ESTADO),
            municipality: get(kml_fields::MUNICIPIO),
            status: get(kml_fields::SITUACION),
            latitude: get(kml_fields::LATITUD),
            longitude: get(kml_fields::LONGITUD),
            altitude: get(kml_fields::ALTITUD),
            first_record: get(kml_fields::INICIO),
            latest_record: get(kml_fields::MAS_RECIENTE),
            links: ReportLinks {
                daily: get(kml_fields::DIARIOS),
                monthly: get(kml_fields::MENSUALES),
                normals_1961_1990: get(kml_fields::NORMALES_1961_1990),
                normals_1971_2000: get(kml_fields::NORMALES_1971_2000),
                normals_1981_2010: get(kml_fields::NORMALES_1981_2010),
                normals_1991_2020: get(kml_fields::NORMALES_1991_2020),
                extremes: get(kml_fields::EXTREMOS),
            },
        }
    }
}

// =============================================================================
// Normals Reference Periods
// =============================================================================

/// The four supported climatological-normals reference periods
///
/// The period is supplied by the caller, never inferred from report content.
/// Any other literal is a programmer-error-class input, rejected before
/// parsing begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum NormalsPeriod {
    P1961_1990,
    P1971_2000,
    P1981_2010,
    P1991_2020,
}

impl NormalsPeriod {
    /// All supported periods, oldest first
    pub const ALL: [NormalsPeriod; 4] = [
        NormalsPeriod::P1961_1990,
        NormalsPeriod::P1971_2000,
        NormalsPeriod::P1981_2010,
        NormalsPeriod::P1991_2020,
    ];

    /// Human-readable period label used in report titles
    pub fn label(&self) -> &'static str {
        match self {
            NormalsPeriod::P1961_1990 => "1961-1990",
            NormalsPeriod::P1971_2000 => "1971-2000",
            NormalsPeriod::P1981_2010 => "1981-2010",
            NormalsPeriod::P1991_2020 => "1991-2020",
        }
    }

    /// Underscore form used in catalogue keys and output file names
    pub fn slug(&self) -> &'static str {
        match self {
            NormalsPeriod::P1961_1990 => "1961_1990",
            NormalsPeriod::P1971_2000 => "1971_2000",
            NormalsPeriod::P1981_2010 => "1981_2010",
            NormalsPeriod::P1991_2020 => "1991_2020",
        }
    }
}

impl fmt::Display for NormalsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NormalsPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1961-1990" | "1961_1990" => Ok(NormalsPeriod::P1961_1990),
            "1971-2000" | "1971_2000" => Ok(NormalsPeriod::P1971_2000),
            "1981-2010" | "1981_2010" => Ok(NormalsPeriod::P1981_2010),
            "1991-2020" | "1991_2020" => Ok(NormalsPeriod::P1991_2020),
            other => Err(Error::unknown_period(other)),
        }
    }
}

// =============================================================================
// Report Types and Parse Dispatch
// =============================================================================

/// The closed set of report families the archive publishes per station
///
/// This is the batch-level selector: it names which catalogue URL to fetch
/// and how to label the output file. Parsing itself dispatches through
/// [`ReportKind`], which additionally carries the per-call payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ReportType {
    Daily,
    Monthly,
    Normals(NormalsPeriod),
    Extremes,
}

impl ReportType {
    /// Every report type, in the archive's canonical order
    pub const ALL: [ReportType; 7] = [
        ReportType::Daily,
        ReportType::Monthly,
        ReportType::Normals(NormalsPeriod::P1961_1990),
        ReportType::Normals(NormalsPeriod::P1971_2000),
        ReportType::Normals(NormalsPeriod::P1981_2010),
        ReportType::Normals(NormalsPeriod::P1991_2020),
        ReportType::Extremes,
    ];

    /// Archive slug for this type, used in catalogue keys and file names
    pub fn slug(&self) -> String {
        match self {
            ReportType::Daily => "diarios".to_string(),
            ReportType::Monthly => "mensuales".to_string(),
            ReportType::Normals(period) => format!("normales_{}", period.slug()),
            ReportType::Extremes => "extremos".to_string(),
        }
    }

    /// Catalogue URL of this report type for the given station, if published
    pub fn url_for<'a>(&self, station: &'a Station) -> Option<&'a str> {
        let url = match self {
            ReportType::Daily => &station.links.daily,
            ReportType::Monthly => &station.links.monthly,
            ReportType::Normals(NormalsPeriod::P1961_1990) => &station.links.normals_1961_1990,
            ReportType::Normals(NormalsPeriod::P1971_2000) => &station.links.normals_1971_2000,
            ReportType::Normals(NormalsPeriod::P1981_2010) => &station.links.normals_1981_2010,
            ReportType::Normals(NormalsPeriod::P1991_2020) => &station.links.normals_1991_2020,
            ReportType::Extremes => &station.links.extremes,
        };
        let url = url.trim();
        if url.is_empty() { None } else { Some(url) }
    }

    /// Parse dispatch kind for this type, borrowing the station where the
    /// handler needs it
    pub fn kind_for<'a>(&self, station: &'a Station) -> ReportKind<'a> {
        match self {
            ReportType::Daily => ReportKind::Daily(station),
            ReportType::Monthly => ReportKind::Monthly,
            ReportType::Normals(period) => ReportKind::Normals(*period),
            ReportType::Extremes => ReportKind::Extremes,
        }
    }
}

impl FromStr for ReportType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        match lower.as_str() {
            "diarios" => Ok(ReportType::Daily),
            "mensuales" => Ok(ReportType::Monthly),
            "extremos" => Ok(ReportType::Extremes),
            other => match other.strip_prefix("normales_") {
                Some(period) => Ok(ReportType::Normals(period.parse()?)),
                None => Err(Error::unknown_report_type(s.trim())),
            },
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

/// Parse dispatch over the four report families
///
/// Each variant carries exactly the parameters its handler needs: normals
/// carry a reference period, daily reports carry the station record whose
/// fields stamp the metadata block. Resolution is by exhaustive match, so
/// adding a report family is a compile-time-checked operation.
#[derive(Debug, Clone, Copy)]
pub enum ReportKind<'a> {
    Monthly,
    Normals(NormalsPeriod),
    Extremes,
    Daily(&'a Station),
}
