//! Column names and fixed value sets shared by the pipeline stages.
//!
//! The broker export and the classification file use these exact headers.
//! Keeping every fixed list here (instead of inline in the services) lets
//! tests enumerate them independently of the transformation logic.

// ── Column names ────────────────────────────────────────────────────

/// Stock-identifier key shared by the holdings and classification files.
pub const STOCK_NUMBER: &str = "Stock Number";

/// Human-readable instrument name, kept for table display and chart hovers.
pub const STOCK_NAME: &str = "Stock Name";

/// Header of the currency column as the broker exports it.
pub const SOURCE_CURRENCY: &str = "curr.";

/// Canonical name the currency column is renamed to.
pub const CURRENCY: &str = "Currency";

/// Position value in the home currency (ILS).
pub const CURRENT_VALUE: &str = "Current Value ILS";

/// Classification column: Stock, Bond, ...
pub const SECURITY_TYPE: &str = "Security Type";

/// Classification column: Global, IL, ...
pub const MARKET: &str = "Market";

// ── Fixed sets ──────────────────────────────────────────────────────

/// Broker-export columns that nothing downstream uses. Dropped by the
/// normalizer; a missing name is a no-op so schema drift doesn't break runs.
pub const DROPPED_COLUMNS: [&str; 12] = [
    "Symbol",
    "Alerts",
    "Similar",
    "Analysts",
    "Price Target",
    "Potential Return",
    "Rate",
    "Profit / Loss",
    "FIFO Cost",
    "FIFO change %",
    "change of FIFO in nis",
    "Average FIFO Cost",
];

/// Synthetic accounting entries the broker lists among real holdings
/// (dollar liability, tax shield, future tax, ...). Matched exactly
/// against `Stock Number` and removed by the stock filter.
pub const EXCLUDED_STOCK_ENTRIES: [&str; 5] = [
    "דולר ארה\"ב",
    "התחיבות דולרית",
    "דולרים לקבל",
    "מגן מס",
    "מס עתידי",
];

// ── Currency normalization tokens ───────────────────────────────────

/// Any currency label containing this substring normalizes to [`NIS`].
pub const SHEKEL_TOKEN: &str = "שקל";

/// Any currency label containing this substring normalizes to [`USD`].
pub const DOLLAR_TOKEN: &str = "דולר";

// ── Bucket labels ───────────────────────────────────────────────────

pub const NIS: &str = "NIS";
pub const USD: &str = "USD";
pub const STOCK: &str = "Stock";
pub const BOND: &str = "Bond";
pub const GLOBAL: &str = "Global";
pub const IL: &str = "IL";
