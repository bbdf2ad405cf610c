use crate::errors::CoreError;
use crate::models::table::{Cell, Table};
use crate::schema;

/// Cleans up the joined table's columns: drops the unused broker columns,
/// renames the currency column to its canonical name, and rewrites the
/// localized currency labels.
///
/// The three sub-steps are ordered: drop, then rename, then normalize
/// values. The rename expects the broker's original header and the value
/// rewrite expects the canonical one, so [`NormalizeService::normalize`]
/// always runs them in that order. Each step is also exposed on its own.
pub struct NormalizeService;

impl NormalizeService {
    pub fn new() -> Self {
        Self
    }

    /// Run all three sub-steps in order on a fresh copy of the table.
    ///
    /// Idempotent: a second pass over already-canonical data only fails
    /// or changes anything if the `Currency` column itself is missing.
    pub fn normalize(&self, table: &Table) -> Result<Table, CoreError> {
        let table = self.drop_unused_columns(table);
        let table = self.rename_currency_column(&table)?;
        self.normalize_currency_values(&table)
    }

    /// Remove the fixed set of broker-export columns nothing downstream
    /// uses. Missing names are a no-op.
    #[must_use]
    pub fn drop_unused_columns(&self, table: &Table) -> Table {
        table.drop_columns(&schema::DROPPED_COLUMNS)
    }

    /// Rename the broker's `curr.` column to `Currency`. If neither header
    /// is present the table can't feed the currency steps downstream, so
    /// this is fatal. A table that already carries `Currency` (a re-run)
    /// passes through unchanged.
    pub fn rename_currency_column(&self, table: &Table) -> Result<Table, CoreError> {
        if table.column_index(schema::SOURCE_CURRENCY).is_none()
            && table.column_index(schema::CURRENCY).is_some()
        {
            return Ok(table.clone());
        }
        table.rename_column(schema::SOURCE_CURRENCY, schema::CURRENCY)
    }

    /// Rewrite localized currency labels to their canonical codes: any
    /// text containing the shekel token becomes `NIS`, any containing the
    /// dollar token becomes `USD`. Substring containment, not equality,
    /// so labels like "דולר ארה״ב" normalize too. Values matching neither
    /// token (and non-text cells) pass through unchanged.
    pub fn normalize_currency_values(&self, table: &Table) -> Result<Table, CoreError> {
        let currency = table.require_column(schema::CURRENCY)?;

        let mut normalized = table.clone();
        for row in 0..normalized.row_count() {
            let Some(label) = normalized.rows()[row][currency].as_text() else {
                continue;
            };
            let replacement = if label.contains(schema::SHEKEL_TOKEN) {
                Some(schema::NIS)
            } else if label.contains(schema::DOLLAR_TOKEN) {
                Some(schema::USD)
            } else {
                None
            };
            if let Some(code) = replacement {
                normalized.set_cell(row, currency, Cell::Text(code.to_string()));
            }
        }

        Ok(normalized)
    }
}

impl Default for NormalizeService {
    fn default() -> Self {
        Self::new()
    }
}
