use thiserror::Error;

/// Unified error type for the entire holdings-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input files ─────────────────────────────────────────────────
    #[error("Failed to read workbook: {0}")]
    Workbook(String),

    #[error("Workbook contains no worksheets")]
    MissingWorksheet,

    #[error("Worksheet has no header row")]
    EmptyWorksheet,

    #[error("Invalid CSV input: {0}")]
    Csv(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    // ── Table shape ─────────────────────────────────────────────────
    #[error("Column not found: '{0}'")]
    MissingColumn(String),

    #[error("Row has {found} cells but the table has {expected} columns")]
    RowShape { expected: usize, found: usize },

    #[error("Duplicate key in classification table: '{0}'")]
    DuplicateClassificationKey(String),

    // ── Values ──────────────────────────────────────────────────────
    #[error("Non-numeric value in column '{column}' at row {row}: '{found}'")]
    NonNumericValue {
        column: String,
        row: usize,
        found: String,
    },

    // ── Charts ──────────────────────────────────────────────────────
    #[error("Invalid sunburst path: {0}")]
    InvalidChartPath(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<calamine::XlsxError> for CoreError {
    fn from(e: calamine::XlsxError) -> Self {
        CoreError::Workbook(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
