//! Tests for batch naming and packaging

use super::archive::{output_base_name, report_file_name, write_output};
use super::{BatchRequest, BatchResult, ReportFile};
use crate::app::models::{NormalsPeriod, ReportType, Station};
use crate::app::services::station_directory::StationFilter;
use crate::constants::UTF8_BOM;
use std::io::Read;

fn sample_station(key: &str, municipality: &str) -> Station {
    Station {
        key: key.to_string(),
        municipality: municipality.to_string(),
        ..Station::default()
    }
}

fn sample_request(filter: StationFilter, selector: &str) -> BatchRequest {
    BatchRequest {
        filter,
        types: vec![ReportType::Daily],
        selector: selector.to_string(),
    }
}

fn sample_file(name: &str) -> ReportFile {
    ReportFile {
        name: name.to_string(),
        csv: format!("{}REGISTRO DIARIO HISTÓRICO,\n", UTF8_BOM),
    }
}

#[test]
fn test_report_file_name_joins_municipality_key_and_slug() {
    let station = sample_station("14005", "ZAPOPAN");
    assert_eq!(
        report_file_name(&station, ReportType::Daily),
        "ZAPOPAN_14005_diarios.csv"
    );
    assert_eq!(
        report_file_name(&station, ReportType::Normals(NormalsPeriod::P1991_2020)),
        "ZAPOPAN_14005_normales_1991_2020.csv"
    );
}

#[test]
fn test_report_file_name_replaces_spaces() {
    let station = sample_station("23155", "FELIPE CARRILLO PUERTO");
    assert_eq!(
        report_file_name(&station, ReportType::Extremes),
        "FELIPE_CARRILLO_PUERTO_23155_extremos.csv"
    );
}

#[test]
fn test_report_file_name_with_missing_municipality() {
    let station = sample_station("14005", "  ");
    assert_eq!(
        report_file_name(&station, ReportType::Monthly),
        "MUNICIPIO_14005_mensuales.csv"
    );
}

#[test]
fn test_output_base_name_uses_all_placeholders() {
    let request = sample_request(StationFilter::default(), "todos");
    assert_eq!(
        output_base_name(&request),
        "ESTADOS_TODOS_MUNICIPIOS_TODOS_ESTACIONES_TODAS_TODOS"
    );
}

#[test]
fn test_output_base_name_uppercases_set_criteria() {
    let filter = StationFilter {
        state: Some("Quintana Roo".to_string()),
        municipality: Some("Felipe Carrillo Puerto".to_string()),
        ..StationFilter::default()
    };
    let request = sample_request(filter, "diarios");
    assert_eq!(
        output_base_name(&request),
        "QUINTANA_ROO_FELIPE_CARRILLO_PUERTO_ESTACIONES_TODAS_DIARIOS"
    );
}

#[test]
fn test_single_report_is_written_as_bare_csv() {
    let dir = tempfile::tempdir().unwrap();
    let result = BatchResult {
        files: vec![sample_file("ZAPOPAN_14005_diarios.csv")],
        skipped: 0,
    };

    let path = write_output(&result, "JALISCO_ZAPOPAN_14005_DIARIOS", dir.path()).unwrap();

    assert_eq!(
        path.file_name().unwrap(),
        "JALISCO_ZAPOPAN_14005_DIARIOS.csv"
    );
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(UTF8_BOM));
}

#[test]
fn test_multiple_reports_are_packaged_into_zip() {
    let dir = tempfile::tempdir().unwrap();
    let result = BatchResult {
        files: vec![
            sample_file("ZAPOPAN_14005_diarios.csv"),
            sample_file("GUADALAJARA_14030_diarios.csv"),
        ],
        skipped: 1,
    };

    let path = write_output(&result, "JALISCO_MUNICIPIOS_TODOS_ESTACIONES_TODAS_DIARIOS", dir.path())
        .unwrap();
    assert_eq!(path.extension().unwrap(), "zip");

    let mut zip = zip::ZipArchive::new(std::fs::File::open(&path).unwrap()).unwrap();
    assert_eq!(zip.len(), 2);
    assert_eq!(zip.by_index(0).unwrap().name(), "ZAPOPAN_14005_diarios.csv");

    let mut entry = zip.by_name("GUADALAJARA_14030_diarios.csv").unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    assert!(content.starts_with(UTF8_BOM));
}

#[test]
fn test_output_directory_is_created_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("output").join("smn");
    let result = BatchResult {
        files: vec![sample_file("ZAPOPAN_14005_diarios.csv")],
        skipped: 0,
    };

    let path = write_output(&result, "BASE", &nested).unwrap();
    assert!(path.exists());
    assert_eq!(path.parent().unwrap(), nested);
}
