//! Table analysis service: row reader → hydraulics engine → row writer.

use std::fs;
use std::path::{Path, PathBuf};

use pf_core::units::{kgpm3, m, m3ps, mps, pas, um};
use pf_hydraulics::{ColebrookConfig, FlowCase, FlowSolution, evaluate};
use pf_table::{
    ResultColumns, RowRecord, next_output_path, output_location, read_table, write_table,
};

use crate::error::{AppError, AppResult};

/// Options for one analysis pass.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub colebrook: ColebrookConfig,
    /// Overrides the default `Output` folder beside the input file
    pub output_dir: Option<PathBuf>,
}

/// Summary of a completed analysis pass.
#[derive(Debug, Clone)]
pub struct AnalyzeReport {
    pub rows: usize,
    pub output_path: PathBuf,
}

/// Shape of a table, for operator preflight.
#[derive(Debug, Clone)]
pub struct TableSummary {
    pub rows: usize,
    pub header: Vec<String>,
}

/// Analyze every row of the table at `input` and write the augmented copy to
/// a fresh output artifact.
///
/// Rows are evaluated strictly in order, each to completion before the next;
/// the first row that cannot be evaluated aborts the pass with the artifact
/// row number attached.
pub fn analyze_table(input: &Path, options: &AnalyzeOptions) -> AppResult<AnalyzeReport> {
    let table = read_table(input)?;
    tracing::info!(rows = table.rows.len(), input = %input.display(), "table loaded");

    let mut results = Vec::with_capacity(table.rows.len());
    for (idx, row) in table.rows.iter().enumerate() {
        let solution =
            evaluate(&to_case(&row.record), &options.colebrook).map_err(|err| AppError::Row {
                row: idx + 2,
                message: err.to_string(),
            })?;
        results.push(result_columns(&solution));
    }

    let output_path = match &options.output_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            next_output_path(dir, input)
        }
        None => output_location(input)?,
    };
    write_table(&output_path, &table, &results)?;
    tracing::info!(output = %output_path.display(), "augmented table written");

    Ok(AnalyzeReport {
        rows: results.len(),
        output_path,
    })
}

/// Read the table at `input` and report its shape without computing anything.
pub fn validate_table(input: &Path) -> AppResult<TableSummary> {
    let table = read_table(input)?;
    Ok(TableSummary {
        rows: table.rows.len(),
        header: table.header,
    })
}

/// Lift a raw table row onto the engine boundary. The roughness column is
/// quoted in micrometers; this is the one place it is scaled to meters.
fn to_case(record: &RowRecord) -> FlowCase {
    FlowCase {
        velocity: mps(record.velocity_m_per_s),
        diameter: m(record.diameter_m),
        roughness: um(record.roughness_um),
        density: kgpm3(record.density_kg_per_m3),
        viscosity: pas(record.viscosity_pa_s),
        length: m(record.length_m),
        flow_rate: m3ps(record.flow_rate_m3_per_s),
    }
}

fn result_columns(solution: &FlowSolution) -> ResultColumns {
    [
        solution.reynolds,
        solution.friction_factor,
        solution.pressure_drop_pa,
        solution.power_w,
        solution.driving_force_n,
        solution.specific_loss_m2_per_s2,
        solution.wall_shear_pa,
        solution.flow_rate_m3_per_s,
    ]
}
