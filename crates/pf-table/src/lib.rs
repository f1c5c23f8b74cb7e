//! pf-table: the tabular artifact collaborators for pipeflow.
//!
//! A thin reader/writer pair over CSV files: the reader exposes the seven
//! per-row inputs with absent cells read as zero; the writer persists the
//! original columns plus the eight derived columns to a fresh artifact,
//! never the input file.

pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

pub use error::{TableError, TableResult};
pub use reader::read_table;
pub use types::{INPUT_COLUMNS, RESULT_HEADERS, RowRecord, Table, TableRow};
pub use writer::{ResultColumns, next_output_path, output_location, write_table};
