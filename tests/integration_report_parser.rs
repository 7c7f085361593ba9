//! End-to-end tests for report parsing and CSV emission
//!
//! These tests run full report texts through the public parser surface and
//! check the emitted CSV documents, including the encoding prelude and
//! determinism across runs.

use smn_processor::app::models::{NormalsPeriod, ReportKind, Station};
use smn_processor::{ReportParser, ReportType};

fn lines(text: &str) -> Vec<String> {
    text.lines().map(|line| line.to_string()).collect()
}

fn csv_lines(csv: &str) -> Vec<&str> {
    csv.trim_start_matches('\u{feff}').lines().collect()
}

const MONTHLY_REPORT: &str = "\
COMISIÓN NACIONAL DEL AGUA
BASE DE DATOS CLIMATOLÓGICA NACIONAL
ESTADÍSTICA MENSUAL

EMISIÓN : 19/09/2025
ESTACIÓN : 14005
NOMBRE : ATEMAJAC
ESTADO : JALISCO
MUNICIPIO : ZAPOPAN
SITUACIÓN : OPERANDO
LATITUD : 20.733 °
LONGITUD : -103.383 °
ALTITUD : 1620.0 msnm

TEMPERATURA MÁXIMA PROMEDIO
AÑO       ENE     FEB     MAR
1951      24.5    26.1    28.0
1952      23.9    25.7

PRECIPITACIÓN TOTAL MENSUAL
AÑO       ENE     FEB     MAR
1951      21.5    0.0     3.2
";

const DAILY_REPORT: &str = "\
SERVICIO METEOROLÓGICO NACIONAL
EMISIÓN: 19/09/2025

FECHA  PRECIP  EVAP  TMAX  TMIN
       (mm)    (mm)  (°C)  (°C)
01/01/1951  0.0  4.1  25.1  10.2
02/01/1951  NULO  3.8  26.0  11.0
";

fn sample_station() -> Station {
    Station {
        key: "14005".to_string(),
        name: "ATEMAJAC".to_string(),
        state: "JALISCO".to_string(),
        municipality: "ZAPOPAN".to_string(),
        status: "OPERANDO".to_string(),
        latitude: "20.733".to_string(),
        longitude: "-103.383".to_string(),
        altitude: "1620.0".to_string(),
        ..Station::default()
    }
}

#[test]
fn test_monthly_report_emits_complete_csv_document() {
    let parser = ReportParser::new();
    let report = parser.parse(&ReportKind::Monthly, &lines(MONTHLY_REPORT));
    let csv = report.to_csv().unwrap();

    assert!(csv.starts_with('\u{feff}'));

    let emitted = csv_lines(&csv);
    assert_eq!(emitted[0], "ESTADÍSTICA MENSUAL,");
    assert_eq!(emitted[1], "EMISIÓN,19/09/2025");
    assert_eq!(emitted[4], "ESTADO,JALISCO");

    // Section one: title, header, full row, padded short row
    assert_eq!(emitted[12], "TEMPERATURA MÁXIMA PROMEDIO,");
    assert_eq!(emitted[13], "AÑO,ENE,FEB,MAR");
    assert_eq!(emitted[14], "1951,24.5,26.1,28.0");
    assert_eq!(emitted[15], "1952,23.9,25.7,");

    // Section two follows its separator
    assert_eq!(emitted[17], "PRECIPITACIÓN TOTAL MENSUAL,");
    assert_eq!(emitted[19], "1951,21.5,0.0,3.2");
}

#[test]
fn test_daily_report_stamps_station_metadata() {
    let station = sample_station();
    let parser = ReportParser::new();
    let report = parser.parse(&ReportKind::Daily(&station), &lines(DAILY_REPORT));
    let csv = report.to_csv().unwrap();

    let emitted = csv_lines(&csv);
    assert_eq!(emitted[0], "REGISTRO DIARIO HISTÓRICO,");
    assert_eq!(emitted[1], "EMISIÓN,19/09/2025");
    assert_eq!(emitted[2], "ESTACIÓN,14005");
    assert_eq!(emitted[8], "LATITUD,20.733 °");
    assert_eq!(emitted[10], "ALTITUD,1620.0 msnm");

    assert_eq!(emitted[12], "FECHA,PRECIP (mm),EVAP (mm),TMAX (°C),TMIN (°C)");
    assert_eq!(emitted[13], "01/01/1951,0.0,4.1,25.1,10.2");
    assert_eq!(emitted[14], "02/01/1951,NULO,3.8,26.0,11.0");
}

#[test]
fn test_normals_title_carries_the_requested_period() {
    let text = "MESES  ENE  FEB\nNORMAL  14.2  15.1\n";
    let parser = ReportParser::new();
    let report = parser.parse(
        &ReportKind::Normals(NormalsPeriod::P1971_2000),
        &lines(text),
    );
    let csv = report.to_csv().unwrap();

    let emitted = csv_lines(&csv);
    assert_eq!(emitted[0], "NORMAL CLIMATOLÓGICA 1971-2000,");
    assert_eq!(emitted[12], "VARIABLE,ENE,FEB");
    assert_eq!(emitted[13], "NORMAL,14.2,15.1");
}

#[test]
fn test_extremes_report_uses_fixed_header() {
    let text = "\
TEMPERATURA MÁXIMA
MES  AÑO  AÑO
     INICIO  FINAL
ENE  1951  2020  68  38.5  21/01/1998  N  22.1  05/01/1962  N  30.2  2.1
";
    let parser = ReportParser::new();
    let report = parser.parse(&ReportKind::Extremes, &lines(text));
    let csv = report.to_csv().unwrap();

    let emitted = csv_lines(&csv);
    assert_eq!(emitted[0], "VALORES EXTREMOS,");
    assert_eq!(emitted[12], "TEMPERATURA MÁXIMA,");
    assert_eq!(
        emitted[13],
        "MES,Año Inicio,Año Final,Núm Años,Valor Máx.,Fecha Máx.,Se ha Rep.,\
         Valor Mín.,Fecha Mín.,Se ha Rep.,Valor Medio,Desv Estándar"
    );
    assert!(emitted[14].starts_with("ENE,1951,2020,68,38.5,"));
}

#[test]
fn test_identical_input_yields_byte_identical_csv() {
    let station = sample_station();
    let parser = ReportParser::new();

    let cases: Vec<(ReportKind<'_>, Vec<String>)> = vec![
        (ReportKind::Monthly, lines(MONTHLY_REPORT)),
        (
            ReportKind::Normals(NormalsPeriod::P1961_1990),
            lines("MESES  ENE  FEB\nNORMAL  14.2  15.1\n"),
        ),
        (
            ReportKind::Extremes,
            lines("PRECIPITACIÓN\nMES  AÑO\n     INICIO\nENE  1951  2020\n"),
        ),
        (ReportKind::Daily(&station), lines(DAILY_REPORT)),
    ];

    for (kind, input) in &cases {
        let first = parser.parse(kind, input).to_csv().unwrap();
        let second = parser.parse(kind, input).to_csv().unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_every_report_type_parses_empty_input() {
    let station = sample_station();
    let parser = ReportParser::new();

    for report_type in ReportType::ALL {
        let kind = report_type.kind_for(&station);
        let report = parser.parse(&kind, &[]);
        let csv = report.to_csv().unwrap();

        // Metadata block alone: title, ten labels, separator.
        assert_eq!(csv_lines(&csv).len(), 12, "{}", report_type);
    }
}
