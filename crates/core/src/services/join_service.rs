use log::warn;
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::table::{Cell, Table};
use crate::schema;

/// Result of joining the holdings file against the classification file.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinOutcome {
    /// Every matched holdings row, extended with `Security Type` and `Market`.
    pub table: Table,

    /// Holdings rows dropped because their key had no classification match.
    /// Inner-join semantics: the drop is silent, this count is how the
    /// caller observes it.
    pub unmatched_rows: usize,
}

/// Merges holdings rows with classification rows on the shared
/// `Stock Number` key.
///
/// Pure business logic, no I/O. Inputs are never mutated.
pub struct JoinService;

impl JoinService {
    pub fn new() -> Self {
        Self
    }

    /// Inner join: each holdings row that finds its key in the
    /// classification table is extended with that row's `Security Type`
    /// and `Market` values; rows with no match are dropped and counted.
    ///
    /// The classification table must have unique keys. A duplicate key is
    /// an error rather than a row-multiplying cross product.
    pub fn inner_join(
        &self,
        holdings: &Table,
        classification: &Table,
    ) -> Result<JoinOutcome, CoreError> {
        let holdings_key = holdings.require_column(schema::STOCK_NUMBER)?;
        let class_key = classification.require_column(schema::STOCK_NUMBER)?;
        let class_type = classification.require_column(schema::SECURITY_TYPE)?;
        let class_market = classification.require_column(schema::MARKET)?;

        // Key -> (Security Type, Market). Only these two classification
        // columns are carried over; anything else in the file is ignored.
        let mut lookup: HashMap<String, (Cell, Cell)> = HashMap::new();
        for row in classification.rows() {
            let Some(key) = row[class_key].join_key() else {
                continue;
            };
            if lookup
                .insert(key.clone(), (row[class_type].clone(), row[class_market].clone()))
                .is_some()
            {
                return Err(CoreError::DuplicateClassificationKey(key));
            }
        }

        let mut columns = holdings.columns().to_vec();
        columns.push(schema::SECURITY_TYPE.to_string());
        columns.push(schema::MARKET.to_string());

        let mut joined = Table::new(columns);
        let mut unmatched_rows = 0;

        for row in holdings.rows() {
            let matched = row[holdings_key]
                .join_key()
                .and_then(|key| lookup.get(&key));

            match matched {
                Some((security_type, market)) => {
                    let mut extended = row.clone();
                    extended.push(security_type.clone());
                    extended.push(market.clone());
                    joined.push_row(extended)?;
                }
                None => unmatched_rows += 1,
            }
        }

        if unmatched_rows > 0 {
            warn!(
                "inner join dropped {unmatched_rows} holdings row(s) with no classification match"
            );
        }

        Ok(JoinOutcome {
            table: joined,
            unmatched_rows,
        })
    }
}

impl Default for JoinService {
    fn default() -> Self {
        Self::new()
    }
}
