use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tc_app::{AppError, AppResult, RunOptions, RunRequest, project_service, run_service};
use tc_cycles::catalog::visible_specs;
use tc_cycles::{CycleModel, CycleParameters, CycleResult, CycleType, range_violations, sample_frame};
use tc_results::{CycleDocument, document_file_name, render_report_today, report_file_name};

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "ThermoCycle CLI - Rankine, Otto and Diesel cycle calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a cycle from its nominal parameters plus overrides
    Calc {
        /// rankine, otto or diesel
        cycle: CycleType,
        /// Parameter override, e.g. --param compressionRatio=10
        #[arg(short, long = "param", value_parser = parse_override)]
        params: Vec<(String, f64)>,
        /// Print the JSON document instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// List the input parameters of a cycle
    Params {
        cycle: CycleType,
        /// Include advanced parameters
        #[arg(long)]
        advanced: bool,
    },
    /// Print sampled animation frames for a cycle
    Animate {
        cycle: CycleType,
        #[arg(short, long = "param", value_parser = parse_override)]
        params: Vec<(String, f64)>,
        /// Number of frames over one cycle
        #[arg(long, default_value_t = 8)]
        frames: usize,
    },
    /// Compare the nominal Rankine, Otto and Diesel cycles
    Compare,
    /// Write the JSON document and text report for a cycle
    Export {
        cycle: CycleType,
        #[arg(short, long = "param", value_parser = parse_override)]
        params: Vec<(String, f64)>,
        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
        /// Which files to write
        #[arg(long, value_enum, default_value_t = ExportFormat::All)]
        format: ExportFormat,
    },
    /// Validate project file syntax and structure
    Validate {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// List scenarios in a project
    Scenarios {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
    },
    /// Evaluate a scenario, reusing a cached run when possible
    Run {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Scenario ID to evaluate
        scenario_id: String,
        /// Skip cache and force re-run
        #[arg(long)]
        no_cache: bool,
    },
    /// List cached runs for a scenario
    Runs {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Scenario ID to list runs for
        scenario_id: String,
    },
    /// Show the report of a cached run
    ShowRun {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Run ID to display
        run_id: String,
    },
    /// Run a sweep defined in a project and print CSV
    Sweep {
        /// Path to the project YAML or JSON file
        project_path: PathBuf,
        /// Sweep ID
        sweep_id: String,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Report,
    All,
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            cycle,
            params,
            json,
        } => cmd_calc(cycle, &params, json),
        Commands::Params { cycle, advanced } => cmd_params(cycle, advanced),
        Commands::Animate {
            cycle,
            params,
            frames,
        } => cmd_animate(cycle, &params, frames),
        Commands::Compare => cmd_compare(),
        Commands::Export {
            cycle,
            params,
            dir,
            format,
        } => cmd_export(cycle, &params, &dir, format),
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Scenarios { project_path } => cmd_scenarios(&project_path),
        Commands::Run {
            project_path,
            scenario_id,
            no_cache,
        } => cmd_run(&project_path, &scenario_id, !no_cache),
        Commands::Runs {
            project_path,
            scenario_id,
        } => cmd_runs(&project_path, &scenario_id),
        Commands::ShowRun {
            project_path,
            run_id,
        } => cmd_show_run(&project_path, &run_id),
        Commands::Sweep {
            project_path,
            sweep_id,
            output,
        } => cmd_sweep(&project_path, &sweep_id, output.as_deref()),
    }
}

/// `name=value`
fn parse_override(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for '{}': {}", name.trim(), e))?;
    Ok((name.trim().to_string(), value))
}

fn build_parameters(cycle: CycleType, overrides: &[(String, f64)]) -> AppResult<CycleParameters> {
    let mut params = CycleParameters::default_for(cycle);
    for (name, value) in overrides {
        params.set(name, *value)?;
    }
    for v in range_violations(&params) {
        eprintln!(
            "warning: {} = {} is outside the operating range [{}, {}]",
            v.name, v.value, v.min, v.max
        );
    }
    Ok(params)
}

fn print_result(cycle: CycleType, result: &CycleResult) {
    if !result.is_computed() {
        println!("✗ No valid {} cycle computed for these parameters", cycle);
        return;
    }
    println!("{} cycle:", cycle.title());
    println!("  Thermal efficiency: {:.2}%", result.efficiency * 100.0);
    println!("  Work output:        {:.2} kJ/kg", result.work_output);
    println!("  Heat input:         {:.2} kJ/kg", result.heat_input);
    println!("  Heat rejected:      {:.2} kJ/kg", result.heat_rejected);
    if cycle == CycleType::Rankine {
        println!("  Steam quality:      {:.2}%", result.steam_quality * 100.0);
    }
    println!("  Max temperature:    {:.1} K", result.max_temperature);
    println!("  Max pressure:       {:.2} MPa", result.max_pressure);
}

fn cmd_calc(cycle: CycleType, overrides: &[(String, f64)], json: bool) -> AppResult<()> {
    let params = build_parameters(cycle, overrides)?;
    let document = CycleDocument::evaluate(params);

    if json {
        println!("{}", document.to_json_pretty()?);
    } else {
        print_result(cycle, &document.results);
    }
    Ok(())
}

fn cmd_params(cycle: CycleType, advanced: bool) -> AppResult<()> {
    let defaults = CycleParameters::default_for(cycle);
    println!("{} cycle parameters:", cycle.title());
    for spec in visible_specs(cycle, advanced) {
        let value = defaults.get(spec.name).unwrap_or(spec.min);
        println!(
            "  {:<20} {:<28} default {:>10}  range [{}, {}] step {}{}",
            spec.name,
            spec.display_label(),
            spec.format_value(value),
            spec.format_value(spec.min),
            spec.format_value(spec.max),
            spec.step,
            if spec.advanced { " (advanced)" } else { "" }
        );
    }
    Ok(())
}

fn cmd_animate(cycle: CycleType, overrides: &[(String, f64)], frames: usize) -> AppResult<()> {
    if frames == 0 {
        return Err(AppError::InvalidInput("--frames must be at least 1".to_string()));
    }
    let params = build_parameters(cycle, overrides)?;
    let result = params.evaluate();

    println!(
        "{:>8} {:>8} {:>8} {:>7} {:>7}  stage",
        "progress", "piston", "crank", "P", "T"
    );
    for i in 0..frames {
        let frame = sample_frame(cycle, &result, i as f64 / frames as f64);
        println!(
            "{:>8.3} {:>8.3} {:>8.3} {:>7.2} {:>7.2}  {}",
            frame.progress,
            frame.piston_position,
            frame.crank_angle,
            frame.normalized_pressure,
            frame.normalized_temperature,
            frame.stage
        );
    }
    Ok(())
}

fn cmd_compare() -> AppResult<()> {
    println!(
        "{:<8} {:>10} {:>12} {:>12} {:>10}",
        "cycle", "eff [%]", "work", "heat in", "Tmax [K]"
    );
    for row in tc_app::compare_defaults() {
        let r = &row.result;
        println!(
            "{:<8} {:>10.2} {:>12.2} {:>12.2} {:>10.1}",
            row.cycle_type.as_str(),
            r.efficiency * 100.0,
            r.work_output,
            r.heat_input,
            r.max_temperature
        );
    }
    Ok(())
}

fn cmd_export(
    cycle: CycleType,
    overrides: &[(String, f64)],
    dir: &Path,
    format: ExportFormat,
) -> AppResult<()> {
    let params = build_parameters(cycle, overrides)?;
    let document = CycleDocument::evaluate(params);
    std::fs::create_dir_all(dir)?;

    if matches!(format, ExportFormat::Json | ExportFormat::All) {
        let path = dir.join(document_file_name(cycle));
        std::fs::write(&path, document.to_json_pretty()?)?;
        println!("✓ Wrote {}", path.display());
    }
    if matches!(format, ExportFormat::Report | ExportFormat::All) {
        let path = dir.join(report_file_name(cycle));
        std::fs::write(&path, render_report_today(&document))?;
        println!("✓ Wrote {}", path.display());
    }
    Ok(())
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    let warnings = project_service::validate_project(&project)?;
    for warning in &warnings {
        println!("  warning: {}", warning);
    }
    println!("✓ Project is valid");
    Ok(())
}

fn cmd_scenarios(project_path: &Path) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let scenarios = project_service::list_scenarios(&project);

    if scenarios.is_empty() {
        println!("No scenarios found in project");
    } else {
        println!("Scenarios in project:");
        for s in scenarios {
            let note = if s.out_of_range > 0 {
                format!(", {} out of range", s.out_of_range)
            } else {
                String::new()
            };
            println!("  {} - {} ({}{})", s.id, s.name, s.cycle_type, note);
        }
    }
    Ok(())
}

fn cmd_run(project_path: &Path, scenario_id: &str, use_cache: bool) -> AppResult<()> {
    println!("Evaluating scenario: {}", scenario_id);

    let request = RunRequest {
        project_path,
        scenario_id,
        options: RunOptions {
            use_cache,
            ..RunOptions::default()
        },
    };
    let response = run_service::ensure_run(&request)?;

    if response.loaded_from_cache {
        println!("✓ Loaded from cache: {}", response.run_id);
    } else {
        println!("✓ Run completed: {}", response.run_id);
    }
    print_result(response.document.cycle_type, &response.document.results);
    Ok(())
}

fn cmd_runs(project_path: &Path, scenario_id: &str) -> AppResult<()> {
    let runs = run_service::list_runs(project_path, scenario_id)?;

    if runs.is_empty() {
        println!("No cached runs found for scenario: {}", scenario_id);
    } else {
        println!("Cached runs for scenario '{}':", scenario_id);
        for manifest in runs {
            println!("  {} ({})", manifest.run_id, manifest.timestamp);
        }
    }
    Ok(())
}

fn cmd_show_run(project_path: &Path, run_id: &str) -> AppResult<()> {
    let (manifest, document) = run_service::load_run(project_path, run_id)?;
    println!(
        "Run {} of scenario '{}' (model {}, {})\n",
        manifest.run_id, manifest.scenario_id, manifest.model_version, manifest.timestamp
    );
    print!("{}", render_report_today(&document));
    Ok(())
}

fn cmd_sweep(project_path: &Path, sweep_id: &str, output: Option<&Path>) -> AppResult<()> {
    let project = project_service::load_project(project_path)?;
    let sweep = project_service::get_sweep(&project, sweep_id)?;
    let rows = tc_app::run_project_sweep(&project, sweep_id)?;
    let csv = tc_app::rows_to_csv(&sweep.parameter, &rows);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} sweep points to {}", rows.len(), path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}
