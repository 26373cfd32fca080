//! Parameter sweeps over a scenario.

use rayon::prelude::*;
use std::fmt::Write;
use tc_cycles::{CycleModel, CycleParameters};
use tc_project::schema::{Project, ScenarioDef, SweepDef};

use crate::error::{AppError, AppResult};
use crate::project_service;

/// One evaluated point of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub value: f64,
    pub efficiency: f64,
    pub work_output: f64,
    pub heat_input: f64,
    pub heat_rejected: f64,
    /// False when the point fell back to the zeroed result.
    pub valid: bool,
}

/// Evaluate `base` with `parameter` set to each of `values`, in input order.
pub fn sweep_parameter(
    base: &CycleParameters,
    parameter: &str,
    values: &[f64],
) -> AppResult<Vec<SweepRow>> {
    if base.get(parameter).is_none() {
        return Err(AppError::InvalidInput(format!(
            "unknown {} parameter '{}'",
            base.cycle_type(),
            parameter
        )));
    }

    let rows = values
        .par_iter()
        .map(|&value| -> AppResult<SweepRow> {
            let params = base.with(parameter, value)?;
            let result = params.evaluate();
            Ok(SweepRow {
                value,
                efficiency: result.efficiency,
                work_output: result.work_output,
                heat_input: result.heat_input,
                heat_rejected: result.heat_rejected,
                valid: result.is_computed(),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let invalid = rows.iter().filter(|r| !r.valid).count();
    if invalid > 0 {
        tracing::warn!(parameter, invalid, total = rows.len(), "sweep points without a valid cycle");
    }
    Ok(rows)
}

/// Run `sweep` against `scenario`.
pub fn run_sweep(scenario: &ScenarioDef, sweep: &SweepDef) -> AppResult<Vec<SweepRow>> {
    if sweep.scenario_id != scenario.id {
        return Err(AppError::InvalidInput(format!(
            "sweep '{}' targets scenario '{}', not '{}'",
            sweep.id, sweep.scenario_id, scenario.id
        )));
    }
    let points = sweep.generate_points();
    tracing::debug!(sweep = %sweep.id, points = points.len(), "running sweep");
    sweep_parameter(&scenario.parameters, &sweep.parameter, &points)
}

/// Look a sweep up by id and run it.
pub fn run_project_sweep(project: &Project, sweep_id: &str) -> AppResult<Vec<SweepRow>> {
    let sweep = project_service::get_sweep(project, sweep_id)?;
    let scenario = project_service::get_scenario(project, &sweep.scenario_id)?;
    run_sweep(scenario, sweep)
}

/// CSV with a header row; the first column is named after the parameter.
pub fn rows_to_csv(parameter: &str, rows: &[SweepRow]) -> String {
    let mut out = format!("{parameter},efficiency,workOutput,heatInput,heatRejected,valid\n");
    for r in rows {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            r.value, r.efficiency, r.work_output, r.heat_input, r.heat_rejected, r.valid
        );
    }
    out
}
