//! Tests for the daily historical record handler

use super::super::daily::DailyHandler;
use super::report_lines;
use crate::app::models::Station;

fn sample_station() -> Station {
    Station {
        key: "14005".to_string(),
        name: " ATEMAJAC ".to_string(),
        state: "JALISCO".to_string(),
        municipality: "ZAPOPAN".to_string(),
        status: "OPERANDO".to_string(),
        latitude: "20.733".to_string(),
        longitude: "-103.383".to_string(),
        altitude: "1620.0".to_string(),
        ..Station::default()
    }
}

const SAMPLE: &str = "\
SERVICIO METEOROLÓGICO NACIONAL
EMISIÓN: 19/09/2025

FECHA  PRECIP  EVAP  TMAX  TMIN
       (mm)    (mm)  (°C)  (°C)
01/01/2020  0.0  4.1  25.1  10.2
02/01/2020  NULO  3.8  26.0  11.0

03/01/2020  1.5  4.0  24.3  9.8
";

#[test]
fn test_metadata_stamped_from_station_record() {
    let report = DailyHandler::new().parse(&report_lines(SAMPLE), &sample_station());
    let rows = report.rows();

    assert_eq!(rows[0], vec!["REGISTRO DIARIO HISTÓRICO", ""]);
    assert_eq!(rows[1], vec!["EMISIÓN", "19/09/2025"]);
    assert_eq!(rows[2], vec!["ESTACIÓN", "14005"]);
    assert_eq!(rows[3], vec!["NOMBRE", "ATEMAJAC"]);
    assert_eq!(rows[4], vec!["ESTADO", "JALISCO"]);
    assert_eq!(rows[5], vec!["MUNICIPIO", "ZAPOPAN"]);
    assert_eq!(rows[6], vec!["SITUACIÓN", "OPERANDO"]);
    assert_eq!(rows[7], vec!["CVE-OMM", ""]);
    assert_eq!(rows[8], vec!["LATITUD", "20.733 °"]);
    assert_eq!(rows[9], vec!["LONGITUD", "-103.383 °"]);
    assert_eq!(rows[10], vec!["ALTITUD", "1620.0 msnm"]);
    assert!(rows[11].is_empty());
}

#[test]
fn test_units_line_fuses_into_header_labels() {
    let report = DailyHandler::new().parse(&report_lines(SAMPLE), &sample_station());
    assert_eq!(
        report.rows()[12],
        vec!["FECHA", "PRECIP (mm)", "EVAP (mm)", "TMAX (°C)", "TMIN (°C)"]
    );
}

#[test]
fn test_data_rows_run_to_end_of_input() {
    let report = DailyHandler::new().parse(&report_lines(SAMPLE), &sample_station());
    let rows = report.rows();

    assert_eq!(rows[13], vec!["01/01/2020", "0.0", "4.1", "25.1", "10.2"]);
    assert_eq!(rows[14], vec!["02/01/2020", "NULO", "3.8", "26.0", "11.0"]);
    // Interior blank lines are skipped, not emitted as separators.
    assert_eq!(rows[15], vec!["03/01/2020", "1.5", "4.0", "24.3", "9.8"]);
}

#[test]
fn test_header_without_units_line_consumes_one_line() {
    let text = "FECHA  TMAX\n01/01/2020  25.1\n";
    let report = DailyHandler::new().parse(&report_lines(text), &sample_station());
    let rows = report.rows();

    assert_eq!(rows[12], vec!["FECHA", "TMAX"]);
    assert_eq!(rows[13], vec!["01/01/2020", "25.1"]);
}

#[test]
fn test_single_unit_group_leaves_later_columns_unsuffixed() {
    let text = "FECHA  TMAX  TMIN\n(°C)\n01/01/2020  25.1  10.2\n";
    let report = DailyHandler::new().parse(&report_lines(text), &sample_station());
    let rows = report.rows();

    assert_eq!(rows[12], vec!["FECHA", "TMAX (°C)", "TMIN"]);
    assert_eq!(rows[13], vec!["01/01/2020", "25.1", "10.2"]);
}

#[test]
fn test_header_detection_does_not_repeat() {
    let text = "FECHA  TMAX\n01/01/2020  25.1\nFECHA  99.9\n";
    let report = DailyHandler::new().parse(&report_lines(text), &sample_station());
    let rows = report.rows();

    // A later FECHA line is an ordinary data row, not a second header.
    assert_eq!(rows[12], vec!["FECHA", "TMAX"]);
    assert_eq!(rows[14], vec!["FECHA", "99.9"]);
}

#[test]
fn test_missing_emission_date_degrades_to_empty() {
    let text = "FECHA  TMAX\n01/01/2020  25.1\n";
    let report = DailyHandler::new().parse(&report_lines(text), &sample_station());
    assert_eq!(report.rows()[1], vec!["EMISIÓN", ""]);
}

#[test]
fn test_first_emission_date_wins() {
    let text = "\
EMISIÓN : 19/09/2025
EMISIÓN : 20/09/2025
FECHA  TMAX
01/01/2020  25.1
";
    let report = DailyHandler::new().parse(&report_lines(text), &sample_station());
    assert_eq!(report.rows()[1], vec!["EMISIÓN", "19/09/2025"]);
}

#[test]
fn test_short_data_row_pads_to_header_width() {
    let text = "FECHA  TMAX  TMIN\n01/01/2020  25.1\n";
    let report = DailyHandler::new().parse(&report_lines(text), &sample_station());
    assert_eq!(report.rows()[13], vec!["01/01/2020", "25.1", ""]);
}

#[test]
fn test_empty_station_fields_keep_bare_unit_tokens() {
    let station = Station::default();
    let report = DailyHandler::new().parse(&[], &station);
    let rows = report.rows();

    // The leading space before the unit is trimmed away.
    assert_eq!(rows[8], vec!["LATITUD", "°"]);
    assert_eq!(rows[10], vec!["ALTITUD", "msnm"]);
}
