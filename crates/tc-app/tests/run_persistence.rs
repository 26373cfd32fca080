use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tc_app::{AppError, RunOptions, RunRequest, run_service};
use tc_project::schema::{Project, ScenarioDef, SweepDef, SweepSpacing};
use tc_results::RunStore;

fn temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("tc_app_{}_{}", tag, nanos));
    std::fs::create_dir_all(&dir).expect("failed to create temp project dir");
    dir
}

fn temp_project() -> PathBuf {
    let dir = temp_dir("project");

    let mut project = Project::with_default_scenarios("Persistence");
    project.sweeps.push(SweepDef {
        id: "cr".to_string(),
        scenario_id: "otto-nominal".to_string(),
        parameter: "compressionRatio".to_string(),
        start: 4.0,
        end: 12.0,
        num_points: 5,
        spacing: SweepSpacing::Linear,
    });

    let path = dir.join("project.yaml");
    tc_app::save_project(&path, &project).expect("failed to save project");
    path
}

#[test]
fn run_persists_in_project_store() {
    let project_path = temp_project();

    let request = RunRequest {
        project_path: &project_path,
        scenario_id: "rankine-nominal",
        options: RunOptions::default(),
    };

    let first = run_service::ensure_run(&request).expect("run failed");
    assert!(!first.loaded_from_cache);
    assert!(first.document.results.is_computed());
    assert_eq!(first.manifest.scenario_id, "rankine-nominal");
    assert!(chrono::DateTime::parse_from_rfc3339(&first.manifest.timestamp).is_ok());

    let second = run_service::ensure_run(&request).expect("cached run failed");
    assert!(second.loaded_from_cache);
    assert_eq!(second.run_id, first.run_id);
    assert_eq!(second.document, first.document);

    let store = RunStore::for_project(&project_path).expect("failed to create run store");
    assert!(store.has_run(&first.run_id));

    let runs = run_service::list_runs(&project_path, "rankine-nominal").unwrap();
    assert_eq!(runs.len(), 1);

    let (manifest, document) = run_service::load_run(&project_path, &first.run_id).unwrap();
    assert_eq!(manifest, first.manifest);
    assert_eq!(document, first.document);
}

#[test]
fn cache_can_be_bypassed() {
    let project_path = temp_project();
    let request = RunRequest {
        project_path: &project_path,
        scenario_id: "otto-nominal",
        options: RunOptions {
            use_cache: false,
            ..RunOptions::default()
        },
    };

    run_service::ensure_run(&request).unwrap();
    let again = run_service::ensure_run(&request).unwrap();
    assert!(!again.loaded_from_cache);
}

#[test]
fn model_version_changes_the_run_id() {
    let project_path = temp_project();
    let run = |version: &str| {
        run_service::ensure_run(&RunRequest {
            project_path: &project_path,
            scenario_id: "diesel-nominal",
            options: RunOptions {
                use_cache: true,
                model_version: version.to_string(),
            },
        })
        .unwrap()
    };

    assert_ne!(run("0.1.0").run_id, run("0.2.0").run_id);
    assert_eq!(run_service::list_runs(&project_path, "diesel-nominal").unwrap().len(), 2);
}

#[test]
fn identical_scenarios_keep_separate_runs() {
    let dir = temp_dir("twins");
    let mut project = Project::new("Twins");
    let base = Project::with_default_scenarios("base")
        .scenario("otto-nominal")
        .cloned()
        .unwrap();
    for id in ["a", "b"] {
        project.scenarios.push(ScenarioDef {
            id: id.to_string(),
            name: format!("Otto {}", id),
            ..base.clone()
        });
    }
    let project_path = dir.join("twins.yaml");
    tc_app::save_project(&project_path, &project).unwrap();

    let run = |scenario_id: &str| {
        run_service::ensure_run(&RunRequest {
            project_path: &project_path,
            scenario_id,
            options: RunOptions::default(),
        })
        .unwrap()
    };

    let a = run("a");
    let b = run("b");
    assert!(!b.loaded_from_cache);
    assert_ne!(a.run_id, b.run_id);
    assert_eq!(b.manifest.scenario_id, "b");
    assert_eq!(a.document, b.document);

    assert_eq!(run_service::list_runs(&project_path, "a").unwrap().len(), 1);
    assert_eq!(run_service::list_runs(&project_path, "b").unwrap().len(), 1);
}

#[test]
fn missing_scenario_and_run() {
    let project_path = temp_project();
    let request = RunRequest {
        project_path: &project_path,
        scenario_id: "nope",
        options: RunOptions::default(),
    };
    assert!(matches!(
        run_service::ensure_run(&request),
        Err(AppError::ScenarioNotFound(_))
    ));
    assert!(matches!(
        run_service::load_run(&project_path, "deadbeef"),
        Err(AppError::RunNotFound(_))
    ));
}

#[test]
fn project_sweep_runs_from_file() {
    let project_path = temp_project();
    let project = tc_app::load_project(&project_path).unwrap();

    let rows = tc_app::run_project_sweep(&project, "cr").unwrap();
    let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
    assert_eq!(values, vec![4.0, 6.0, 8.0, 10.0, 12.0]);
    assert!(rows.windows(2).all(|w| w[1].efficiency > w[0].efficiency));

    let csv = tc_app::rows_to_csv("compressionRatio", &rows);
    assert_eq!(csv.lines().count(), 6);
}
