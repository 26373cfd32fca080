//! Scenario run execution and caching service.

use std::path::Path;
use std::time::Instant;
use tc_cycles::CycleModel;
use tc_project::schema::ScenarioDef;
use tc_results::{CycleDocument, RunManifest, RunStore, compute_run_id};

use crate::error::AppResult;
use crate::project_service;

/// Options for running scenarios.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub model_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            model_version: "0.1.0".to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub scenario_id: &'a str,
    pub options: RunOptions,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub document: CycleDocument,
    pub loaded_from_cache: bool,
    pub elapsed_s: f64,
}

/// Evaluate a scenario, reusing a cached run with the same inputs when allowed.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    let started = Instant::now();

    let project = project_service::load_project(request.project_path)?;
    let scenario = project_service::get_scenario(&project, request.scenario_id)?;

    let run_id = compute_run_id(
        &scenario.id,
        &scenario.parameters,
        &request.options.model_version,
    );
    let store = RunStore::for_project(request.project_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        let manifest = store.load_manifest(&run_id)?;
        let document = store.load_document(&run_id)?;
        tracing::info!(run_id = %run_id, scenario = %scenario.id, "loaded cached run");
        return Ok(RunResponse {
            run_id,
            manifest,
            document,
            loaded_from_cache: true,
            elapsed_s: started.elapsed().as_secs_f64(),
        });
    }

    let (manifest, document) = execute_run(scenario, &store, &run_id, &request.options.model_version)?;

    Ok(RunResponse {
        run_id,
        manifest,
        document,
        loaded_from_cache: false,
        elapsed_s: started.elapsed().as_secs_f64(),
    })
}

fn execute_run(
    scenario: &ScenarioDef,
    store: &RunStore,
    run_id: &str,
    model_version: &str,
) -> AppResult<(RunManifest, CycleDocument)> {
    let results = scenario.parameters.evaluate();
    let document = CycleDocument::new(scenario.parameters, results);

    let manifest = RunManifest {
        run_id: run_id.to_string(),
        scenario_id: scenario.id.clone(),
        cycle_type: scenario.cycle_type,
        timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        model_version: model_version.to_string(),
    };

    store.save_run(&manifest, &document)?;
    tracing::info!(
        run_id = %run_id,
        scenario = %scenario.id,
        computed = document.results.is_computed(),
        "saved run"
    );

    Ok((manifest, document))
}

/// List runs of a scenario, most recent first.
pub fn list_runs(project_path: &Path, scenario_id: &str) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;
    Ok(store.list_runs(scenario_id)?)
}

/// Load a specific run.
pub fn load_run(project_path: &Path, run_id: &str) -> AppResult<(RunManifest, CycleDocument)> {
    let store = RunStore::for_project(project_path)?;

    let manifest = store.load_manifest(run_id)?;
    let document = store.load_document(run_id)?;

    Ok((manifest, document))
}
