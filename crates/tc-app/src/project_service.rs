//! Project loading, saving, validation, and introspection.

use std::path::Path;
use tc_cycles::{CycleType, range_violations};
use tc_project::ScenarioWarning;
use tc_project::schema::{Project, ScenarioDef, SweepDef};

use crate::error::{AppError, AppResult};

/// Summary of a scenario for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub cycle_type: CycleType,
    /// Parameters outside the operating range.
    pub out_of_range: usize,
}

/// Load and validate a project; `.json` files as JSON, anything else as YAML.
pub fn load_project(path: &Path) -> AppResult<Project> {
    Ok(tc_project::load_project(path)?)
}

/// Validate and save a project; format chosen by extension.
pub fn save_project(path: &Path, project: &Project) -> AppResult<()> {
    Ok(tc_project::save_project(path, project)?)
}

/// Validate project structure, returning the non-fatal range warnings.
pub fn validate_project(project: &Project) -> AppResult<Vec<ScenarioWarning>> {
    tc_project::validate_project(project)?;
    Ok(tc_project::range_warnings(project))
}

/// List all scenarios in the project with summaries.
pub fn list_scenarios(project: &Project) -> Vec<ScenarioSummary> {
    project
        .scenarios
        .iter()
        .map(|scenario| ScenarioSummary {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            cycle_type: scenario.cycle_type,
            out_of_range: range_violations(&scenario.parameters).len(),
        })
        .collect()
}

/// Get a specific scenario by ID.
pub fn get_scenario<'a>(project: &'a Project, scenario_id: &str) -> AppResult<&'a ScenarioDef> {
    project
        .scenario(scenario_id)
        .ok_or_else(|| AppError::ScenarioNotFound(scenario_id.to_string()))
}

/// Get a specific sweep by ID.
pub fn get_sweep<'a>(project: &'a Project, sweep_id: &str) -> AppResult<&'a SweepDef> {
    project
        .sweep(sweep_id)
        .ok_or_else(|| AppError::SweepNotFound(sweep_id.to_string()))
}
