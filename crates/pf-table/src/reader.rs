//! CSV row reader: the tabular input collaborator.

use std::path::Path;

use crate::error::{TableError, TableResult};
use crate::types::{INPUT_COLUMNS, RowRecord, Table, TableRow};

/// Read the table at `path`: one header row, then data rows carrying the
/// seven input columns `v, D, K, rho, mu, L, Q` in order.
///
/// Empty or missing cells parse as zero; non-numeric text is an error
/// carrying the cell position (rows and columns are 1-based, counting the
/// header as row 1, matching what an operator sees in a spreadsheet view).
/// A table without data rows is an error.
pub fn read_table(path: &Path) -> TableResult<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let mut header: Vec<String> = csv_reader.headers()?.iter().map(str::to_owned).collect();
    header.truncate(INPUT_COLUMNS);
    header.resize(INPUT_COLUMNS, String::new());

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let record = result?;
        let artifact_row = idx + 2;

        let mut cells = Vec::with_capacity(INPUT_COLUMNS);
        let mut values = [0.0_f64; INPUT_COLUMNS];
        for (column, value) in values.iter_mut().enumerate() {
            let text = record.get(column).unwrap_or("");
            *value = parse_cell(text, artifact_row, column + 1)?;
            cells.push(text.to_owned());
        }

        rows.push(TableRow {
            cells,
            record: RowRecord::from_columns(values),
        });
    }

    if rows.is_empty() {
        return Err(TableError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(Table { header, rows })
}

fn parse_cell(text: &str, row: usize, column: usize) -> TableResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed.parse().map_err(|_| TableError::BadCell {
        row,
        column,
        value: text.to_owned(),
    })
}
