//! Error types for the pf-app service layer.

/// Application error type that wraps errors from the table and hydraulics
/// crates and provides a unified interface for the operator shell.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Table error: {0}")]
    Table(String),

    #[error("Row {row}: {message}")]
    Row { row: usize, message: String },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pf_table::TableError> for AppError {
    fn from(err: pf_table::TableError) -> Self {
        AppError::Table(err.to_string())
    }
}
