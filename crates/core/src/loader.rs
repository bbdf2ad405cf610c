use calamine::{Data, Reader, Xlsx};
use log::debug;
use std::io::Cursor;

use crate::errors::CoreError;
use crate::models::table::{Cell, Table};

/// Reads uploaded spreadsheet files into the in-memory [`Table`] model.
///
/// Byte-slice readers work everywhere (the frontend hands over the
/// uploaded file's contents); path-based readers are native only.
/// Both formats treat the first row as the header row.
pub struct TableLoader;

impl TableLoader {
    /// Read the first worksheet of an `.xlsx` workbook from raw bytes.
    pub fn read_xlsx_bytes(bytes: &[u8]) -> Result<Table, CoreError> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(CoreError::MissingWorksheet)??;
        Self::table_from_range(&range)
    }

    /// Read the first worksheet of an `.xlsx` workbook from disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_xlsx_file(path: &str) -> Result<Table, CoreError> {
        let mut workbook: Xlsx<_> = calamine::open_workbook(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(CoreError::MissingWorksheet)??;
        Self::table_from_range(&range)
    }

    /// Read a `.csv` export from raw bytes. Fields that parse as numbers
    /// become [`Cell::Number`], blank fields become [`Cell::Empty`],
    /// everything else stays text.
    pub fn read_csv_bytes(bytes: &[u8]) -> Result<Table, CoreError> {
        let mut reader = csv::ReaderBuilder::new().from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(CoreError::EmptyWorksheet);
        }

        let mut table = Table::new(headers);
        for record in reader.records() {
            let record = record?;
            let row = record.iter().map(Self::cell_from_field).collect();
            table.push_row(row)?;
        }

        debug!(
            "loaded csv table: {} columns, {} rows",
            table.column_count(),
            table.row_count()
        );
        Ok(table)
    }

    /// Read a `.csv` export from disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn read_csv_file(path: &str) -> Result<Table, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::read_csv_bytes(&bytes)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn table_from_range(range: &calamine::Range<Data>) -> Result<Table, CoreError> {
        let mut rows = range.rows();
        let header_row = rows.next().ok_or(CoreError::EmptyWorksheet)?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| Self::cell_from_xlsx(cell).display())
            .collect();

        let mut table = Table::new(headers);
        for row in rows {
            let cells = row.iter().map(Self::cell_from_xlsx).collect();
            table.push_row(cells)?;
        }

        debug!(
            "loaded xlsx table: {} columns, {} rows",
            table.column_count(),
            table.row_count()
        );
        Ok(table)
    }

    fn cell_from_xlsx(data: &Data) -> Cell {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Float(f) => Cell::Number(*f),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            // Error cells (#N/A, #DIV/0!, ...) keep their marker as text so a
            // broken value column fails loudly at aggregation time.
            Data::Error(e) => Cell::Text(e.to_string()),
        }
    }

    fn cell_from_field(field: &str) -> Cell {
        if field.is_empty() {
            return Cell::Empty;
        }
        match field.parse::<f64>() {
            Ok(n) => Cell::Number(n),
            Err(_) => Cell::Text(field.to_string()),
        }
    }
}
