//! CSV row writer: the tabular output collaborator.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TableResult;
use crate::types::{RESULT_HEADERS, Table};

/// The eight derived values appended to one row, in output column order:
/// Re, f, Δp, P, F_drv, l_v, τ_w, Q.
pub type ResultColumns = [f64; 8];

/// Write the augmented table to `path`: the original seven columns echoed as
/// read, followed by the eight result columns. `results` must be row-aligned
/// with `table.rows`. Non-finite values serialize as their display form
/// (`NaN`, `inf`), which downstream tooling treats as sentinels.
pub fn write_table(path: &Path, table: &Table, results: &[ResultColumns]) -> TableResult<()> {
    debug_assert_eq!(table.rows.len(), results.len());

    let mut csv_writer = csv::Writer::from_path(path)?;

    let header = table.header.iter().map(String::as_str).chain(RESULT_HEADERS);
    csv_writer.write_record(header)?;

    for (row, values) in table.rows.iter().zip(results) {
        let derived = values.iter().map(f64::to_string);
        csv_writer.write_record(row.cells.iter().cloned().chain(derived))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Where the augmented copy of `input` goes by default: an `Output` folder
/// beside the input file (created if missing). The input artifact is never
/// the target.
pub fn output_location(input: &Path) -> TableResult<PathBuf> {
    let folder = input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("Output");
    if !folder.exists() {
        fs::create_dir_all(&folder)?;
    }
    Ok(next_output_path(&folder, input))
}

/// First `{stem}_output_{n}.csv` name in `folder` that does not collide with
/// an existing file, counting from 1, so repeated passes over the same input
/// never clobber an earlier result.
pub fn next_output_path(folder: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "table".to_owned());

    let mut counter = 1;
    loop {
        let candidate = folder.join(format!("{stem}_output_{counter}.csv"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
