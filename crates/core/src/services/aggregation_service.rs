use crate::errors::CoreError;
use crate::models::aggregates::{CurrencyTotals, MarketTotals, SecurityTypeTotals};
use crate::models::table::{Cell, Table};
use crate::schema;

/// Computes the three grouped-sum breakdowns of the prepared table.
///
/// Each query partitions rows into exactly two named buckets on one
/// categorical column and sums `Current Value ILS` within each. Rows whose
/// value matches neither bucket are excluded from that query (they stay in
/// the table and the sunburst). The queries are independent; all three
/// read the same table.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Total holdings split into `USD` vs `NIS`.
    pub fn totals_by_currency(&self, table: &Table) -> Result<CurrencyTotals, CoreError> {
        let (usd, nis) = self.bucket_sums(table, schema::CURRENCY, (schema::USD, schema::NIS))?;
        Ok(CurrencyTotals { usd, nis })
    }

    /// Total holdings split into `Stock` vs `Bond`.
    pub fn totals_by_security_type(&self, table: &Table) -> Result<SecurityTypeTotals, CoreError> {
        let (stock, bond) =
            self.bucket_sums(table, schema::SECURITY_TYPE, (schema::STOCK, schema::BOND))?;
        Ok(SecurityTypeTotals { stock, bond })
    }

    /// Total holdings split into `Global` vs `IL`.
    pub fn totals_by_market(&self, table: &Table) -> Result<MarketTotals, CoreError> {
        let (global, il) = self.bucket_sums(table, schema::MARKET, (schema::GLOBAL, schema::IL))?;
        Ok(MarketTotals { global, il })
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Sum the value column within two named buckets of `group_column`.
    /// An empty bucket sums to exactly 0.0. Plain f64 addition; the value
    /// field is assumed to already be in a single consistent unit.
    fn bucket_sums(
        &self,
        table: &Table,
        group_column: &str,
        buckets: (&str, &str),
    ) -> Result<(f64, f64), CoreError> {
        let group = table.require_column(group_column)?;
        let value = table.require_column(schema::CURRENT_VALUE)?;

        let mut first = 0.0;
        let mut second = 0.0;

        for (idx, row) in table.rows().iter().enumerate() {
            let Some(label) = row[group].as_text() else {
                continue;
            };
            let total = if label == buckets.0 {
                &mut first
            } else if label == buckets.1 {
                &mut second
            } else {
                continue;
            };

            match &row[value] {
                Cell::Number(v) => *total += v,
                // A blank value cell contributes nothing, like a NaN in the
                // source export.
                Cell::Empty => {}
                other => {
                    return Err(CoreError::NonNumericValue {
                        column: schema::CURRENT_VALUE.to_string(),
                        row: idx,
                        found: other.display(),
                    });
                }
            }
        }

        Ok((first, second))
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
