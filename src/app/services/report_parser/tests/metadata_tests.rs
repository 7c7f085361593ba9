//! Tests for bounded header-zone metadata extraction

use super::super::emitter::TableEmitter;
use super::super::metadata::MetadataExtractor;
use super::report_lines;

#[test]
fn test_value_after_first_colon() {
    let lines = report_lines("ESTACIÓN : 14005\nNOMBRE: ATEMAJAC , JAL.");
    let extractor = MetadataExtractor::new(&lines, 60);
    assert_eq!(extractor.value_of("ESTACIÓN"), "14005");
    assert_eq!(extractor.value_of("NOMBRE"), "ATEMAJAC , JAL.");
}

#[test]
fn test_match_is_case_insensitive() {
    let lines = report_lines("   estado : Jalisco");
    let extractor = MetadataExtractor::new(&lines, 60);
    assert_eq!(extractor.value_of("ESTADO"), "Jalisco");
}

#[test]
fn test_missing_label_is_empty_not_error() {
    let lines = report_lines("ESTADO: JALISCO");
    let extractor = MetadataExtractor::new(&lines, 60);
    assert_eq!(extractor.value_of("MUNICIPIO"), "");
}

#[test]
fn test_line_without_colon_yields_whole_line() {
    let lines = report_lines("ALTITUD 1550 msnm");
    let extractor = MetadataExtractor::new(&lines, 60);
    assert_eq!(extractor.value_of("ALTITUD"), "ALTITUD 1550 msnm");
}

#[test]
fn test_scan_is_bounded_to_the_header_zone() {
    let mut text = String::new();
    for _ in 0..60 {
        text.push('\n');
    }
    text.push_str("LATITUD : 20.7");
    let lines = report_lines(&text);

    let extractor = MetadataExtractor::new(&lines, 60);
    assert_eq!(extractor.value_of("LATITUD"), "");

    let wide = MetadataExtractor::new(&lines, 120);
    assert_eq!(wide.value_of("LATITUD"), "20.7");
}

#[test]
fn test_first_matching_line_wins() {
    let lines = report_lines("EMISIÓN : 19/09/2025\nEMISIÓN : 01/01/2000");
    let extractor = MetadataExtractor::new(&lines, 60);
    assert_eq!(extractor.value_of("EMISIÓN"), "19/09/2025");
}

#[test]
fn test_emit_all_includes_missing_labels_as_empty_rows() {
    let lines = report_lines("ESTADO: JALISCO");
    let extractor = MetadataExtractor::new(&lines, 60);

    let mut emitter = TableEmitter::new();
    extractor.emit_all(&mut emitter, &["ESTADO", "MUNICIPIO"]);
    let report = emitter.finish();

    assert_eq!(
        report.rows(),
        &[
            vec!["ESTADO".to_string(), "JALISCO".to_string()],
            vec!["MUNICIPIO".to_string(), String::new()],
        ]
    );
}

#[test]
fn test_empty_input_yields_all_empty_values() {
    let lines: Vec<String> = Vec::new();
    let extractor = MetadataExtractor::new(&lines, 120);
    assert_eq!(extractor.value_of("ESTACIÓN"), "");
}
