//! Application constants for the SMN report processor
//!
//! This module contains the fixed vocabulary of the SMN text reports: metadata
//! label lists, sentinel tokens, boilerplate title sets, and the replacement
//! headers used where the source format is not directly usable.

// =============================================================================
// Report Geometry
// =============================================================================

/// Tab stop width used when expanding raw tab characters before measuring
/// column positions. Raw tabs make positional offsets ambiguous across
/// editors and transmissions.
pub const TAB_STOP: usize = 8;

/// Number of leading lines searched for metadata labels in monthly reports.
pub const MONTHLY_HEADER_ZONE: usize = 120;

/// Number of leading lines searched for metadata labels in normals, extremes
/// and daily reports.
pub const DEFAULT_HEADER_ZONE: usize = 60;

/// Minimum number of lines a fetched report must have to be considered usable.
pub const MIN_REPORT_LINES: usize = 5;

// =============================================================================
// Metadata Labels
// =============================================================================

/// Station metadata labels shared by every report family, in emission order.
/// Absence of a label in the header zone is not an error; the value degrades
/// to an empty string.
pub const METADATA_LABELS: &[&str] = &[
    "EMISIÓN",
    "ESTACIÓN",
    "NOMBRE",
    "ESTADO",
    "MUNICIPIO",
    "SITUACIÓN",
    "CVE-OMM",
    "LATITUD",
    "LONGITUD",
    "ALTITUD",
];

/// Fixed title rows opening each report family's metadata block
pub mod report_titles {
    pub const MONTHLY: &str = "ESTADÍSTICA MENSUAL";
    pub const NORMALS_PREFIX: &str = "NORMAL CLIMATOLÓGICA";
    pub const EXTREMES: &str = "VALORES EXTREMOS";
    pub const DAILY: &str = "REGISTRO DIARIO HISTÓRICO";
}

// =============================================================================
// Sentinel Tokens
// =============================================================================

/// Leading keywords that mark a table header line in each report family
pub mod sentinels {
    /// Monthly statistics tables start at a year-column header.
    pub const MONTHLY_TABLE: &str = "AÑO";

    /// Climatological-normals tables start at a months-column header.
    pub const NORMALS_TABLE: &str = "MESES";

    /// Extreme-value tables start at a month-column header.
    pub const EXTREMES_TABLE: &str = "MES";

    /// Daily record tables start at a date-column header.
    pub const DAILY_TABLE: &str = "FECHA";
}

// =============================================================================
// Title Detection
// =============================================================================

/// Known organization/document boilerplate lines, never used as section titles.
pub const BOILERPLATE_TITLES: &[&str] = &[
    "COMISIÓN NACIONAL DEL AGUA",
    "COORDINACIÓN GENERAL DEL SERVICIO METEOROLÓGICO NACIONAL",
    "BASE DE DATOS CLIMATOLÓGICA NACIONAL",
    "ESTADÍSTICA MENSUAL",
];

// =============================================================================
// Extremes Report Vocabulary
// =============================================================================

/// Phenomenon names whose case-insensitive prefix marks a new titled section
/// in extreme-value reports. A fifth phenomenon category in a future report
/// format would be silently skipped; this is a known gap, not a bug.
pub const EXTREMES_PHENOMENA: &[&str] = &[
    "TEMPERATURA MÁXIMA",
    "TEMPERATURA MÍNIMA",
    "PRECIPITACIÓN",
    "EVAPORACIÓN",
];

/// Prefixes that terminate an extreme-value table body.
pub const EXTREMES_BODY_TERMINATORS: &[&str] = &["TEMPERATURA", "PRECIPITACIÓN", "EVAPORACIÓN"];

/// Replacement header for extreme-value tables. The source wraps its header
/// over two lines, which is not directly usable, so both lines are skipped and
/// this fixed 12-column list is emitted instead.
pub const EXTREMES_HEADERS: &[&str] = &[
    "MES",
    "Año Inicio",
    "Año Final",
    "Núm Años",
    "Valor Máx.",
    "Fecha Máx.",
    "Se ha Rep.",
    "Valor Mín.",
    "Fecha Mín.",
    "Se ha Rep.",
    "Valor Medio",
    "Desv Estándar",
];

// =============================================================================
// Normals Report Vocabulary
// =============================================================================

/// Literal label replacing the inconsistent first header token of
/// climatological-normals tables.
pub const NORMALS_VARIABLE_LABEL: &str = "VARIABLE";

// =============================================================================
// Station Catalogue (KML) Field Names
// =============================================================================

/// `SimpleData` attribute names in the SMN station catalogue KML document
pub mod kml_fields {
    pub const CLAVE: &str = "CLAVE";
    pub const NOMBRE: &str = "NOMBRE";
    pub const ESTADO: &str = "ESTADO";
    pub const MUNICIPIO: &str = "MUNICIPIO";
    pub const SITUACION: &str = "SITUACION";
    pub const LATITUD: &str = "LATITUD";
    pub const LONGITUD: &str = "LONGITUD";
    pub const ALTITUD: &str = "ALTITUD";
    pub const INICIO: &str = "INICIO";
    pub const MAS_RECIENTE: &str = "MAS_RECIENTE";
    pub const DIARIOS: &str = "DIARIOS";
    pub const MENSUALES: &str = "MENSUALES";
    pub const NORMALES_1961_1990: &str = "NORMALES_1961_1990";
    pub const NORMALES_1971_2000: &str = "NORMALES_1971_2000";
    pub const NORMALES_1981_2010: &str = "NORMALES_1981_2010";
    pub const NORMALES_1991_2020: &str = "NORMALES_1991_2020";
    pub const EXTREMOS: &str = "EXTREMOS";
}

// =============================================================================
// Output Encoding
// =============================================================================

/// Byte-order mark prefixed to every emitted CSV so spreadsheet tooling that
/// defaults to a legacy encoding detects UTF-8.
pub const UTF8_BOM: &str = "\u{feff}";

/// Placeholder used in output file names when a station has no municipality.
pub const UNKNOWN_MUNICIPALITY: &str = "MUNICIPIO";
