use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregates::{CurrencyTotals, MarketTotals, SecurityTypeTotals};
use super::chart::{BarChart, SunburstNode};
use super::config::PageLayout;
use super::table::Table;

/// The cleaned table plus the row-count bookkeeping the pipeline produced
/// on the way there. Unmatched and excluded counts are how the silent
/// inner-join and filter drops stay observable to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreparedTable {
    /// Joined, normalized, filtered table ready for display.
    pub table: Table,

    /// Rows in the uploaded holdings file.
    pub source_rows: usize,

    /// Holdings rows dropped because their key had no classification match.
    pub unmatched_rows: usize,

    /// Rows removed by the pseudo-instrument filter.
    pub excluded_rows: usize,
}

/// Everything the dashboard frontend needs for one render, computed in a
/// single pass over the two uploaded files. Built fresh per upload event
/// and discarded after rendering; nothing is cached between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// When this report was computed (UTC).
    pub generated_at: DateTime<Utc>,

    /// Page layout the frontend should apply.
    pub layout: PageLayout,

    /// The prepared breakdown table for direct tabular display.
    pub table: Table,

    pub source_rows: usize,
    pub unmatched_rows: usize,
    pub excluded_rows: usize,

    /// Two-bucket totals for the three summary charts.
    pub by_currency: CurrencyTotals,
    pub by_security_type: SecurityTypeTotals,
    pub by_market: MarketTotals,

    /// Hierarchical chart over the configured dimension ordering.
    pub sunburst: SunburstNode,

    /// Per-row bar charts, one per dimension.
    pub bar_charts: Vec<BarChart>,
}
