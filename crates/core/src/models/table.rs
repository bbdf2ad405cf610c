use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One spreadsheet value. Loaders map their source cell types onto this;
/// the pipeline only ever distinguishes text, numbers, and blanks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    /// The numeric reading of this cell, if it has one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text reading of this cell, if it has one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Display form used for table rendering and chart labels.
    /// Integral numbers print without a trailing `.0` (Excel stores
    /// integer identifiers as floats).
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                format!("{}", *n as i64)
            }
            Cell::Number(n) => n.to_string(),
            Cell::Bool(b) => b.to_string(),
        }
    }

    /// Canonical key form for join matching. `None` means the cell can
    /// never match (a blank key). Uses the same integral formatting as
    /// [`Cell::display`] so a holdings key stored as `1234.0` matches a
    /// classification key stored as the text `"1234"`.
    #[must_use]
    pub fn join_key(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            other => Some(other.display()),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// An in-memory table: named columns plus rows of cells, every row with
/// the same arity. This is the only data structure the pipeline operates
/// on; each stage takes a table and returns a new one (inputs are never
/// mutated, so the same table can feed all three aggregations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table with the given column headers.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a table from headers and rows, checking every row's arity.
    pub fn with_rows(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Result<Self, CoreError> {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row. Fails if the row's arity doesn't match the headers.
    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<(), CoreError> {
        if row.len() != self.columns.len() {
            return Err(CoreError::RowShape {
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of a column, or `MissingColumn` if it isn't present.
    pub fn require_column(&self, name: &str) -> Result<usize, CoreError> {
        self.column_index(name)
            .ok_or_else(|| CoreError::MissingColumn(name.to_string()))
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Overwrite a single cell. Out-of-range coordinates are a no-op.
    pub fn set_cell(&mut self, row: usize, column: usize, cell: Cell) {
        if let Some(slot) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *slot = cell;
        }
    }

    /// A new table without the named columns. Names that aren't present
    /// are skipped silently (tolerates schema drift in broker exports).
    #[must_use]
    pub fn drop_columns(&self, names: &[&str]) -> Table {
        let kept: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !names.contains(&self.columns[i].as_str()))
            .collect();

        let columns = kept.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| kept.iter().map(|&i| row[i].clone()).collect())
            .collect();

        Table { columns, rows }
    }

    /// A new table with one column renamed. The source column must exist;
    /// downstream stages depend on the canonical name being present.
    pub fn rename_column(&self, from: &str, to: &str) -> Result<Table, CoreError> {
        let idx = self.require_column(from)?;
        let mut table = self.clone();
        table.columns[idx] = to.to_string();
        Ok(table)
    }
}
