// ═══════════════════════════════════════════════════════════════════
// Integration Tests — two uploaded files in, full report out
// ═══════════════════════════════════════════════════════════════════

use holdings_dashboard_core::models::table::{Cell, Table};
use holdings_dashboard_core::schema;
use holdings_dashboard_core::HoldingsDashboard;

/// A broker export the way the dashboard receives it: header row with the
/// droppable columns mixed in, localized currency labels, a synthetic
/// tax-shield row, and one position missing from the classification file.
const HOLDINGS_CSV: &str = "\
Stock Number,Stock Name,Symbol,Alerts,curr.,Current Value ILS,Profit / Loss
101,Apple Inc,AAPL,,דולר ארה״ב,200,12.5
102,Govt Bond 0326,,,שקל חשבון,100,-3
מגן מס,Tax Shield,,,שקל,40,0
999,Global Fund,,,EUR,10,0
555,Unclassified Corp,,,שקל,77,1
";

const CLASSIFICATION_CSV: &str = "\
Stock Number,Security Type,Market
101,Stock,Global
102,Bond,IL
מגן מס,Bond,IL
999,Fund,Other
";

fn load_fixtures() -> (Table, Table) {
    let dashboard = HoldingsDashboard::new();
    let holdings = dashboard.load_csv_bytes(HOLDINGS_CSV.as_bytes()).unwrap();
    let classification = dashboard
        .load_csv_bytes(CLASSIFICATION_CSV.as_bytes())
        .unwrap();
    (holdings, classification)
}

#[test]
fn report_counts_every_dropped_row() {
    let (holdings, classification) = load_fixtures();
    let report = HoldingsDashboard::new()
        .build_report(&holdings, &classification)
        .unwrap();

    assert_eq!(report.source_rows, 5);
    assert_eq!(report.unmatched_rows, 1); // 555 has no classification
    assert_eq!(report.excluded_rows, 1); // the tax-shield row
    assert_eq!(report.table.row_count(), 3);
}

#[test]
fn report_table_upholds_all_pipeline_invariants() {
    let (holdings, classification) = load_fixtures();
    let report = HoldingsDashboard::new()
        .build_report(&holdings, &classification)
        .unwrap();
    let table = &report.table;

    for dropped in schema::DROPPED_COLUMNS {
        assert!(table.column_index(dropped).is_none(), "{dropped} must be gone");
    }
    assert!(table.column_index(schema::SOURCE_CURRENCY).is_none());

    let currency = table.require_column(schema::CURRENCY).unwrap();
    let labels: Vec<String> = table
        .rows()
        .iter()
        .map(|row| row[currency].display())
        .collect();
    // Localized labels normalized, unrecognized ones untouched.
    assert_eq!(labels, vec!["USD", "NIS", "EUR"]);

    let key = table.require_column(schema::STOCK_NUMBER).unwrap();
    for row in table.rows() {
        if let Some(name) = row[key].as_text() {
            assert!(!schema::EXCLUDED_STOCK_ENTRIES.contains(&name));
        }
    }
}

#[test]
fn report_totals_match_the_fixture_arithmetic() {
    let (holdings, classification) = load_fixtures();
    let report = HoldingsDashboard::new()
        .build_report(&holdings, &classification)
        .unwrap();

    // EUR row is excluded from the currency totals but not from the table.
    assert_eq!(report.by_currency.usd, 200.0);
    assert_eq!(report.by_currency.nis, 100.0);

    assert_eq!(report.by_security_type.stock, 200.0);
    assert_eq!(report.by_security_type.bond, 100.0);

    assert_eq!(report.by_market.global, 200.0);
    assert_eq!(report.by_market.il, 100.0);

    // The sunburst sees every surviving row, EUR included.
    assert_eq!(report.sunburst.value, 310.0);
}

#[test]
fn report_charts_cover_all_three_dimensions() {
    let (holdings, classification) = load_fixtures();
    let report = HoldingsDashboard::new()
        .build_report(&holdings, &classification)
        .unwrap();

    assert_eq!(report.bar_charts.len(), 3);
    for chart in &report.bar_charts {
        assert_eq!(chart.segments.len(), report.table.row_count());
    }

    let currency_chart = &report.bar_charts[0];
    assert_eq!(currency_chart.segments[0].stock_name, "Apple Inc");
    assert_eq!(currency_chart.segments[0].category, "USD");
    assert_eq!(currency_chart.segments[0].value, 200.0);
}

#[test]
fn normalizer_is_a_noop_on_the_prepared_table() {
    let (holdings, classification) = load_fixtures();
    let dashboard = HoldingsDashboard::new();
    let prepared = dashboard.prepare_table(&holdings, &classification).unwrap();

    let again = dashboard.normalize_table(&prepared.table).unwrap();
    assert_eq!(again, prepared.table);
}

#[test]
fn csv_export_reloads_to_the_same_table() {
    let (holdings, classification) = load_fixtures();
    let dashboard = HoldingsDashboard::new();
    let prepared = dashboard.prepare_table(&holdings, &classification).unwrap();

    let exported = dashboard.table_to_csv(&prepared.table).unwrap();
    let reloaded = dashboard.load_csv_bytes(exported.as_bytes()).unwrap();
    assert_eq!(reloaded, prepared.table);
}

#[test]
fn identical_inputs_give_identical_reports() {
    let (holdings, classification) = load_fixtures();
    let dashboard = HoldingsDashboard::new();

    let first = dashboard.build_report(&holdings, &classification).unwrap();
    let second = dashboard.build_report(&holdings, &classification).unwrap();

    // Everything except the timestamp is a pure function of the inputs.
    assert_eq!(first.table, second.table);
    assert_eq!(first.by_currency, second.by_currency);
    assert_eq!(first.by_security_type, second.by_security_type);
    assert_eq!(first.by_market, second.by_market);
    assert_eq!(first.sunburst, second.sunburst);
    assert_eq!(first.bar_charts, second.bar_charts);
}

#[test]
fn numeric_keys_join_against_text_classification_keys() {
    // The csv loader turns "101" into a number on both sides here, but a
    // hand-built classification table may carry text keys instead.
    let dashboard = HoldingsDashboard::new();
    let holdings = dashboard.load_csv_bytes(HOLDINGS_CSV.as_bytes()).unwrap();

    let classification = Table::with_rows(
        vec![
            schema::STOCK_NUMBER.to_string(),
            schema::SECURITY_TYPE.to_string(),
            schema::MARKET.to_string(),
        ],
        vec![
            vec![
                Cell::Text("101".to_string()),
                Cell::Text("Stock".to_string()),
                Cell::Text("Global".to_string()),
            ],
        ],
    )
    .unwrap();

    let outcome = dashboard.join_tables(&holdings, &classification).unwrap();
    assert_eq!(outcome.table.row_count(), 1);
    assert_eq!(outcome.table.rows()[0][1], Cell::Text("Apple Inc".to_string()));
}

#[test]
fn unmatched_only_input_produces_an_empty_but_valid_report() {
    let dashboard = HoldingsDashboard::new();
    let holdings = dashboard
        .load_csv_bytes(b"Stock Number,Stock Name,curr.,Current Value ILS\n1,Orphan,USD,5\n")
        .unwrap();
    let classification = dashboard
        .load_csv_bytes(b"Stock Number,Security Type,Market\n2,Stock,Global\n")
        .unwrap();

    let report = dashboard.build_report(&holdings, &classification).unwrap();
    assert_eq!(report.unmatched_rows, 1);
    assert!(report.table.is_empty());
    assert_eq!(report.by_currency.usd, 0.0);
    assert_eq!(report.by_currency.nis, 0.0);
    assert_eq!(report.sunburst.value, 0.0);
    assert!(report.sunburst.children.is_empty());
}
