use serde::{Deserialize, Serialize};

use crate::schema;

/// One of the three categorical breakdowns of the prepared table.
/// Serialized forms match the column headers so the frontend can use
/// them directly as axis titles and sunburst path labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Currency,
    #[serde(rename = "Security Type")]
    SecurityType,
    Market,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Currency, Dimension::SecurityType, Dimension::Market];

    /// The table column this dimension reads from.
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Dimension::Currency => schema::CURRENCY,
            Dimension::SecurityType => schema::SECURITY_TYPE,
            Dimension::Market => schema::MARKET,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.column())
    }
}

/// One node of the hierarchical (sunburst) chart.
///
/// The root covers the whole table; each level below groups by the next
/// dimension in the caller-chosen path. The core computes the tree,
/// the frontend just renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunburstNode {
    /// Category label for this segment (root: "Portfolio").
    pub label: String,

    /// Sum of position values beneath this segment.
    pub value: f64,

    /// Child segments, in first-seen row order.
    pub children: Vec<SunburstNode>,
}

/// Per-row bar chart data for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    /// The dimension rows are colored and grouped by.
    pub dimension: Dimension,

    /// One segment per surviving table row.
    pub segments: Vec<BarSegment>,
}

/// A single bar segment: one position, placed on its category's bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSegment {
    /// Value of the dimension column for this row (e.g., "USD").
    pub category: String,

    /// Stock name, shown as hover data.
    pub stock_name: String,

    /// Position value in the home currency.
    pub value: f64,
}
