use log::debug;

use crate::errors::CoreError;
use crate::models::table::Table;
use crate::schema;

/// Result of removing pseudo-instrument rows from the table.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Remaining rows, relative order preserved.
    pub table: Table,

    /// How many rows matched the exclusion list and were removed.
    pub excluded_rows: usize,
}

/// Removes the broker's synthetic accounting entries (dollar liability,
/// tax shield, future tax, ...) so only real holdings reach the charts.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Keep every row whose `Stock Number` is not exactly one of the
    /// [`schema::EXCLUDED_STOCK_ENTRIES`] labels. Matching is exact text
    /// equality, never substring. An empty result is valid.
    pub fn filter_pseudo_instruments(&self, table: &Table) -> Result<FilterOutcome, CoreError> {
        let key = table.require_column(schema::STOCK_NUMBER)?;

        let mut filtered = Table::new(table.columns().to_vec());
        let mut excluded_rows = 0;

        for row in table.rows() {
            let is_excluded = row[key]
                .as_text()
                .is_some_and(|name| schema::EXCLUDED_STOCK_ENTRIES.contains(&name));

            if is_excluded {
                excluded_rows += 1;
            } else {
                filtered.push_row(row.clone())?;
            }
        }

        if excluded_rows > 0 {
            debug!("filtered {excluded_rows} pseudo-instrument row(s)");
        }

        Ok(FilterOutcome {
            table: filtered,
            excluded_rows,
        })
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
