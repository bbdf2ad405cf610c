use serde::{Deserialize, Serialize};

/// Total holdings value split by normalized currency.
///
/// Rows whose `Currency` is neither `USD` nor `NIS` are not counted here
/// (they stay visible in the table and the sunburst).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrencyTotals {
    pub usd: f64,
    pub nis: f64,
}

/// Total holdings value split by security type. Same two-bucket rule:
/// anything that isn't `Stock` or `Bond` is excluded from these totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SecurityTypeTotals {
    pub stock: f64,
    pub bond: f64,
}

/// Total holdings value split by market (`Global` vs `IL`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketTotals {
    pub global: f64,
    pub il: f64,
}
