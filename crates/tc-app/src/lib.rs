//! Shared application service layer for thermocycle.
//!
//! Front ends go through these services for project management, cached
//! scenario runs, parameter sweeps and cycle comparison.

pub mod compare;
pub mod error;
pub mod project_service;
pub mod run_service;
pub mod sweep_service;

// Re-export key types for convenience
pub use compare::{ComparisonRow, compare_cycles, compare_defaults};
pub use error::{AppError, AppResult};
pub use project_service::{
    ScenarioSummary, get_scenario, get_sweep, list_scenarios, load_project, save_project,
    validate_project,
};
pub use run_service::{RunOptions, RunRequest, RunResponse, ensure_run, list_runs, load_run};
pub use sweep_service::{SweepRow, rows_to_csv, run_project_sweep, run_sweep, sweep_parameter};
