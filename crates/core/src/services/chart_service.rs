use crate::errors::CoreError;
use crate::models::chart::{BarChart, BarSegment, Dimension, SunburstNode};
use crate::models::table::{Cell, Table};
use crate::schema;

/// Label path and value of one table row, as fed into the sunburst tree.
type SunburstEntry = ([String; 3], f64);

/// Generates chart-ready data sets from the prepared table.
///
/// The core computes all the numbers, the frontend only renders:
/// - the sunburst tree for any of the six dimension orderings
/// - one per-row bar chart per dimension
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Build the hierarchical chart tree, nesting the three categorical
    /// dimensions in the caller-chosen order (inner circle first).
    ///
    /// Every row participates, including rows whose categorical values
    /// fall outside the two-bucket aggregations. Rows with a blank value
    /// cell are left out, like NaN-valued rows in the source export.
    /// Sibling order follows first appearance in the table.
    pub fn sunburst(
        &self,
        table: &Table,
        path: &[Dimension; 3],
    ) -> Result<SunburstNode, CoreError> {
        Self::validate_path(path)?;

        let columns = [
            table.require_column(path[0].column())?,
            table.require_column(path[1].column())?,
            table.require_column(path[2].column())?,
        ];
        let value_column = table.require_column(schema::CURRENT_VALUE)?;

        let mut entries: Vec<SunburstEntry> = Vec::with_capacity(table.row_count());
        for (idx, row) in table.rows().iter().enumerate() {
            let value = match &row[value_column] {
                Cell::Number(v) => *v,
                Cell::Empty => continue,
                other => {
                    return Err(CoreError::NonNumericValue {
                        column: schema::CURRENT_VALUE.to_string(),
                        row: idx,
                        found: other.display(),
                    });
                }
            };
            let labels = [
                row[columns[0]].display(),
                row[columns[1]].display(),
                row[columns[2]].display(),
            ];
            entries.push((labels, value));
        }

        let refs: Vec<&SunburstEntry> = entries.iter().collect();
        Ok(SunburstNode {
            label: "Portfolio".to_string(),
            value: entries.iter().map(|(_, v)| v).sum(),
            children: Self::group_level(&refs, 0),
        })
    }

    /// Build the per-row bar chart for one dimension. Each surviving row
    /// becomes a segment on its category's bar, with the stock name kept
    /// as hover data.
    pub fn bar_chart(&self, table: &Table, dimension: Dimension) -> Result<BarChart, CoreError> {
        let category_column = table.require_column(dimension.column())?;
        let name_column = table.require_column(schema::STOCK_NAME)?;
        let value_column = table.require_column(schema::CURRENT_VALUE)?;

        let mut segments = Vec::with_capacity(table.row_count());
        for (idx, row) in table.rows().iter().enumerate() {
            let value = match &row[value_column] {
                Cell::Number(v) => *v,
                Cell::Empty => continue,
                other => {
                    return Err(CoreError::NonNumericValue {
                        column: schema::CURRENT_VALUE.to_string(),
                        row: idx,
                        found: other.display(),
                    });
                }
            };
            segments.push(BarSegment {
                category: row[category_column].display(),
                stock_name: row[name_column].display(),
                value,
            });
        }

        Ok(BarChart {
            dimension,
            segments,
        })
    }

    /// The sunburst path must use each dimension exactly once.
    pub fn validate_path(path: &[Dimension; 3]) -> Result<(), CoreError> {
        for dimension in Dimension::ALL {
            if !path.contains(&dimension) {
                return Err(CoreError::InvalidChartPath(format!(
                    "path {:?} does not include every dimension",
                    path
                )));
            }
        }
        Ok(())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn group_level(entries: &[&SunburstEntry], depth: usize) -> Vec<SunburstNode> {
        // Vec keyed by label rather than a HashMap: sibling order must
        // follow first appearance, and the groups are tiny.
        let mut groups: Vec<(String, Vec<&SunburstEntry>)> = Vec::new();
        for entry in entries {
            let label = &entry.0[depth];
            match groups.iter_mut().find(|(name, _)| name == label) {
                Some((_, members)) => members.push(entry),
                None => groups.push((label.clone(), vec![entry])),
            }
        }

        groups
            .into_iter()
            .map(|(label, members)| SunburstNode {
                value: members.iter().map(|(_, v)| v).sum(),
                children: if depth < 2 {
                    Self::group_level(&members, depth + 1)
                } else {
                    Vec::new()
                },
                label,
            })
            .collect()
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
