// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError display strings and From conversions
// ═══════════════════════════════════════════════════════════════════

use holdings_dashboard_core::errors::CoreError;

// ── Display strings ─────────────────────────────────────────────────

#[test]
fn missing_column_names_the_column() {
    let err = CoreError::MissingColumn("Currency".to_string());
    assert_eq!(err.to_string(), "Column not found: 'Currency'");
}

#[test]
fn row_shape_reports_both_arities() {
    let err = CoreError::RowShape {
        expected: 6,
        found: 4,
    };
    assert_eq!(
        err.to_string(),
        "Row has 4 cells but the table has 6 columns"
    );
}

#[test]
fn non_numeric_value_reports_location_and_value() {
    let err = CoreError::NonNumericValue {
        column: "Current Value ILS".to_string(),
        row: 3,
        found: "n/a".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Non-numeric value in column 'Current Value ILS' at row 3: 'n/a'"
    );
}

#[test]
fn duplicate_classification_key_names_the_key() {
    let err = CoreError::DuplicateClassificationKey("1234".to_string());
    assert_eq!(
        err.to_string(),
        "Duplicate key in classification table: '1234'"
    );
}

#[test]
fn workbook_errors_carry_the_reason() {
    assert_eq!(
        CoreError::Workbook("bad zip".to_string()).to_string(),
        "Failed to read workbook: bad zip"
    );
    assert_eq!(
        CoreError::MissingWorksheet.to_string(),
        "Workbook contains no worksheets"
    );
    assert_eq!(
        CoreError::EmptyWorksheet.to_string(),
        "Worksheet has no header row"
    );
}

#[test]
fn unsupported_extension_names_it() {
    let err = CoreError::UnsupportedExtension("pdf".to_string());
    assert_eq!(err.to_string(), "Unsupported file extension: pdf");
}

#[test]
fn invalid_chart_path_carries_detail() {
    let err = CoreError::InvalidChartPath("duplicates".to_string());
    assert_eq!(err.to_string(), "Invalid sunburst path: duplicates");
}

// ── From conversions ────────────────────────────────────────────────

#[test]
fn io_error_becomes_file_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: CoreError = io.into();
    assert!(matches!(err, CoreError::FileIO(message) if message.contains("gone")));
}

#[test]
fn serde_json_error_becomes_serialization() {
    let bad = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
    let err: CoreError = bad.into();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn csv_error_becomes_csv() {
    let mut reader = csv::ReaderBuilder::new().from_reader(&b"a,b\n1,2,3\n"[..]);
    let record_err = reader
        .records()
        .next()
        .expect("one record")
        .expect_err("ragged row");
    let err: CoreError = record_err.into();
    assert!(matches!(err, CoreError::Csv(_)));
}

#[test]
fn errors_are_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&CoreError::MissingWorksheet);
}
