pub mod errors;
pub mod loader;
pub mod models;
pub mod schema;
pub mod services;

use chrono::Utc;
use models::{
    aggregates::{CurrencyTotals, MarketTotals, SecurityTypeTotals},
    chart::{BarChart, Dimension, SunburstNode},
    config::{DashboardConfig, PageLayout},
    report::{DashboardReport, PreparedTable},
    table::Table,
};
use services::{
    aggregation_service::AggregationService,
    chart_service::ChartService,
    filter_service::{FilterOutcome, FilterService},
    join_service::{JoinOutcome, JoinService},
    normalize_service::NormalizeService,
};

use errors::CoreError;
use loader::TableLoader;

/// Main entry point for the Holdings Dashboard core library.
///
/// The frontend uploads two spreadsheet files per render cycle; this
/// facade loads them, runs the join/normalize/filter pipeline, and
/// computes every table, total, and chart data set the page displays.
/// Nothing is kept between invocations: each upload event rebuilds the
/// whole report from the two files.
#[must_use]
pub struct HoldingsDashboard {
    config: DashboardConfig,
    join_service: JoinService,
    normalize_service: NormalizeService,
    filter_service: FilterService,
    aggregation_service: AggregationService,
    chart_service: ChartService,
}

impl std::fmt::Debug for HoldingsDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoldingsDashboard")
            .field("config", &self.config)
            .finish()
    }
}

impl Default for HoldingsDashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl HoldingsDashboard {
    /// Create a dashboard with the default presentation config
    /// (wide layout, Currency > Security Type > Market sunburst).
    pub fn new() -> Self {
        Self::build(DashboardConfig::default())
    }

    /// Create a dashboard with an explicit presentation config.
    /// Fails if the configured sunburst path is not a permutation of the
    /// three dimensions.
    pub fn with_config(config: DashboardConfig) -> Result<Self, CoreError> {
        ChartService::validate_path(&config.sunburst_path)?;
        Ok(Self::build(config))
    }

    // ── Presentation config ─────────────────────────────────────────

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn set_layout(&mut self, layout: PageLayout) {
        self.config.layout = layout;
    }

    /// Change the sunburst nesting order. Any of the six permutations of
    /// the three dimensions is accepted; anything else is rejected.
    pub fn set_sunburst_path(&mut self, path: [Dimension; 3]) -> Result<(), CoreError> {
        ChartService::validate_path(&path)?;
        self.config.sunburst_path = path;
        Ok(())
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Read an uploaded `.xlsx` workbook (first worksheet) into a table.
    /// Use this for WASM / Tauri where the frontend handles file I/O.
    pub fn load_xlsx_bytes(&self, bytes: &[u8]) -> Result<Table, CoreError> {
        TableLoader::read_xlsx_bytes(bytes)
    }

    /// Read an uploaded `.csv` export into a table.
    pub fn load_csv_bytes(&self, bytes: &[u8]) -> Result<Table, CoreError> {
        TableLoader::read_csv_bytes(bytes)
    }

    /// Read a spreadsheet from disk, picking the format from the file
    /// extension (native only, not WASM).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_table_file(&self, path: &str) -> Result<Table, CoreError> {
        let extension = std::path::Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" => TableLoader::read_xlsx_file(path),
            "csv" => TableLoader::read_csv_file(path),
            other => Err(CoreError::UnsupportedExtension(other.to_string())),
        }
    }

    // ── Pipeline ────────────────────────────────────────────────────

    /// Inner-join the holdings table against the classification table on
    /// the `Stock Number` key. Unmatched rows are dropped and counted in
    /// the outcome.
    pub fn join_tables(
        &self,
        holdings: &Table,
        classification: &Table,
    ) -> Result<JoinOutcome, CoreError> {
        self.join_service.inner_join(holdings, classification)
    }

    /// Drop the unused broker columns, rename `curr.` to `Currency`, and
    /// rewrite localized currency labels to `NIS`/`USD`.
    pub fn normalize_table(&self, table: &Table) -> Result<Table, CoreError> {
        self.normalize_service.normalize(table)
    }

    /// Remove pseudo-instrument rows (tax shield, dollar liability, ...).
    pub fn filter_table(&self, table: &Table) -> Result<FilterOutcome, CoreError> {
        self.filter_service.filter_pseudo_instruments(table)
    }

    /// Run the full pipeline: join, normalize, filter. Returns the
    /// cleaned table together with the row-count bookkeeping.
    pub fn prepare_table(
        &self,
        holdings: &Table,
        classification: &Table,
    ) -> Result<PreparedTable, CoreError> {
        let source_rows = holdings.row_count();
        let joined = self.join_service.inner_join(holdings, classification)?;
        let normalized = self.normalize_service.normalize(&joined.table)?;
        let filtered = self.filter_service.filter_pseudo_instruments(&normalized)?;

        Ok(PreparedTable {
            table: filtered.table,
            source_rows,
            unmatched_rows: joined.unmatched_rows,
            excluded_rows: filtered.excluded_rows,
        })
    }

    // ── Aggregation ─────────────────────────────────────────────────

    /// Total holdings split into `USD` vs `NIS`.
    pub fn totals_by_currency(&self, table: &Table) -> Result<CurrencyTotals, CoreError> {
        self.aggregation_service.totals_by_currency(table)
    }

    /// Total holdings split into `Stock` vs `Bond`.
    pub fn totals_by_security_type(
        &self,
        table: &Table,
    ) -> Result<SecurityTypeTotals, CoreError> {
        self.aggregation_service.totals_by_security_type(table)
    }

    /// Total holdings split into `Global` vs `IL`.
    pub fn totals_by_market(&self, table: &Table) -> Result<MarketTotals, CoreError> {
        self.aggregation_service.totals_by_market(table)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Build the sunburst tree for the configured dimension ordering.
    pub fn sunburst(&self, table: &Table) -> Result<SunburstNode, CoreError> {
        self.chart_service.sunburst(table, &self.config.sunburst_path)
    }

    /// Build the sunburst tree for an explicit dimension ordering.
    pub fn sunburst_with_path(
        &self,
        table: &Table,
        path: &[Dimension; 3],
    ) -> Result<SunburstNode, CoreError> {
        self.chart_service.sunburst(table, path)
    }

    /// Build the per-row bar chart for one dimension.
    pub fn bar_chart(&self, table: &Table, dimension: Dimension) -> Result<BarChart, CoreError> {
        self.chart_service.bar_chart(table, dimension)
    }

    /// Build all three bar charts (currency, security type, market).
    pub fn bar_charts(&self, table: &Table) -> Result<Vec<BarChart>, CoreError> {
        Dimension::ALL
            .iter()
            .map(|dimension| self.chart_service.bar_chart(table, *dimension))
            .collect()
    }

    // ── Report ──────────────────────────────────────────────────────

    /// One-shot computation of everything the page renders: run the
    /// pipeline, then derive the three totals pairs, the sunburst, and
    /// the bar charts from the same prepared table.
    pub fn build_report(
        &self,
        holdings: &Table,
        classification: &Table,
    ) -> Result<DashboardReport, CoreError> {
        let prepared = self.prepare_table(holdings, classification)?;

        let by_currency = self.aggregation_service.totals_by_currency(&prepared.table)?;
        let by_security_type = self
            .aggregation_service
            .totals_by_security_type(&prepared.table)?;
        let by_market = self.aggregation_service.totals_by_market(&prepared.table)?;
        let sunburst = self
            .chart_service
            .sunburst(&prepared.table, &self.config.sunburst_path)?;
        let bar_charts = self.bar_charts(&prepared.table)?;

        Ok(DashboardReport {
            generated_at: Utc::now(),
            layout: self.config.layout,
            table: prepared.table,
            source_rows: prepared.source_rows,
            unmatched_rows: prepared.unmatched_rows,
            excluded_rows: prepared.excluded_rows,
            by_currency,
            by_security_type,
            by_market,
            sunburst,
            bar_charts,
        })
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Serialize a report as pretty JSON for the frontend.
    pub fn report_to_json(&self, report: &DashboardReport) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    /// Serialize a table as pretty JSON.
    pub fn table_to_json(&self, table: &Table) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(table)?)
    }

    /// Render a table as CSV, for the dashboard's download affordance.
    pub fn table_to_csv(&self, table: &Table) -> Result<String, CoreError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.display()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(config: DashboardConfig) -> Self {
        Self {
            config,
            join_service: JoinService::new(),
            normalize_service: NormalizeService::new(),
            filter_service: FilterService::new(),
            aggregation_service: AggregationService::new(),
            chart_service: ChartService::new(),
        }
    }
}
