use std::path::PathBuf;
use thiserror::Error;

pub type TableResult<T> = Result<T, TableError>;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Table {} has no data rows", .path.display())]
    Empty { path: PathBuf },

    #[error("Cell at row {row}, column {column} is not numeric: {value:?}")]
    BadCell {
        row: usize,
        column: usize,
        value: String,
    },
}
