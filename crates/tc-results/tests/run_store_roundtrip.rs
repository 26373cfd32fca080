use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tc_cycles::{CycleParameters, CycleType};
use tc_results::{CycleDocument, ResultsError, RunManifest, RunStore, compute_run_id};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn manifest(run_id: &str, scenario_id: &str, cycle: CycleType, timestamp: &str) -> RunManifest {
    RunManifest {
        run_id: run_id.to_string(),
        scenario_id: scenario_id.to_string(),
        cycle_type: cycle,
        timestamp: timestamp.to_string(),
        model_version: "0.1.0".to_string(),
    }
}

#[test]
fn save_list_load_roundtrip() {
    let project_dir = unique_temp_dir("tc_results_project");
    fs::create_dir_all(&project_dir).expect("failed to create temp project dir");
    let project_path = project_dir.join("project.yaml");
    fs::write(&project_path, "version: 1\nname: test\n").expect("failed to write project file");

    let store = RunStore::for_project(&project_path).expect("failed to create run store");
    assert!(store.root_dir().ends_with(".thermocycle/runs"));

    let params = CycleParameters::default_for(CycleType::Otto);
    let run_id = compute_run_id("otto-nominal", &params, "0.1.0");
    let document = CycleDocument::evaluate(params);
    let manifest = manifest(&run_id, "otto-nominal", CycleType::Otto, "2026-02-26T00:00:00Z");

    assert!(!store.has_run(&run_id));
    store
        .save_run(&manifest, &document)
        .expect("failed to save run");
    assert!(store.has_run(&run_id));

    let runs = store.list_runs("otto-nominal").expect("failed to list runs");
    assert_eq!(runs, vec![manifest.clone()]);

    let loaded_manifest = store.load_manifest(&run_id).expect("failed to load manifest");
    assert_eq!(loaded_manifest, manifest);

    let loaded_document = store.load_document(&run_id).expect("failed to load document");
    assert_eq!(loaded_document, document);
}

#[test]
fn list_runs_filters_by_scenario_newest_first() {
    let store = RunStore::new(unique_temp_dir("tc_results_list")).unwrap();
    let doc = CycleDocument::evaluate(CycleParameters::default_for(CycleType::Diesel));

    let older = manifest("run-a", "s1", CycleType::Diesel, "2026-01-01T00:00:00Z");
    let newer = manifest("run-b", "s1", CycleType::Diesel, "2026-02-01T00:00:00Z");
    let other = manifest("run-c", "s2", CycleType::Diesel, "2026-03-01T00:00:00Z");
    for m in [&older, &newer, &other] {
        store.save_run(m, &doc).unwrap();
    }

    let runs = store.list_runs("s1").unwrap();
    let ids: Vec<_> = runs.iter().map(|m| m.run_id.as_str()).collect();
    assert_eq!(ids, vec!["run-b", "run-a"]);

    assert_eq!(store.list_runs("s2").unwrap().len(), 1);
    assert!(store.list_runs("missing").unwrap().is_empty());
}

#[test]
fn delete_run_removes_everything() {
    let store = RunStore::new(unique_temp_dir("tc_results_delete")).unwrap();
    let doc = CycleDocument::evaluate(CycleParameters::default_for(CycleType::Rankine));
    let m = manifest("run-x", "s1", CycleType::Rankine, "2026-01-01T00:00:00Z");

    store.save_run(&m, &doc).unwrap();
    store.delete_run("run-x").unwrap();

    assert!(!store.has_run("run-x"));
    assert!(matches!(
        store.load_manifest("run-x"),
        Err(ResultsError::RunNotFound { .. })
    ));
    assert!(matches!(
        store.load_document("run-x"),
        Err(ResultsError::RunNotFound { .. })
    ));
    // Deleting again is a no-op.
    store.delete_run("run-x").unwrap();
}

#[test]
fn project_path_without_parent_is_rejected() {
    assert!(matches!(
        RunStore::for_project(std::path::Path::new("")),
        Err(ResultsError::InvalidPath { .. })
    ));
}
