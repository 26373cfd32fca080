//! Project validation logic.

use crate::schema::{MAX_SWEEP_POINTS, Project, ScenarioDef, SweepDef, SweepSpacing};
use std::collections::HashSet;
use tc_core::numeric::{Tolerances, nearly_equal};
use tc_core::units::celsius_to_kelvin;
use tc_cycles::{RangeViolation, range_violations};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Scenario '{id}' declares {declared} but its parameters describe {actual}")]
    CycleMismatch {
        id: String,
        declared: String,
        actual: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// A scenario parameter outside its operating range. Not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioWarning {
    pub scenario_id: String,
    pub violation: RangeViolation,
}

impl std::fmt::Display for ScenarioWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v = &self.violation;
        write!(
            f,
            "scenario '{}': {} = {} is outside the operating range [{}, {}]",
            self.scenario_id, v.name, v.value, v.min, v.max
        )
    }
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version == 0 || project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut scenario_ids = HashSet::new();
    for scenario in &project.scenarios {
        if !scenario_ids.insert(&scenario.id) {
            return Err(ValidationError::DuplicateId {
                id: scenario.id.clone(),
                context: "scenarios".to_string(),
            });
        }
        validate_scenario(scenario)?;
    }

    let mut sweep_ids = HashSet::new();
    for sweep in &project.sweeps {
        if !sweep_ids.insert(&sweep.id) {
            return Err(ValidationError::DuplicateId {
                id: sweep.id.clone(),
                context: "sweeps".to_string(),
            });
        }
        let scenario = project.scenario(&sweep.scenario_id).ok_or_else(|| {
            ValidationError::MissingReference {
                id: sweep.scenario_id.clone(),
                context: format!("sweep '{}' scenarioId", sweep.id),
            }
        })?;
        validate_sweep(sweep, scenario)?;
    }

    for warning in range_warnings(project) {
        tracing::warn!(
            scenario = %warning.scenario_id,
            parameter = warning.violation.name,
            value = warning.violation.value,
            "parameter outside operating range"
        );
    }

    Ok(())
}

/// Operating-range violations across every scenario.
pub fn range_warnings(project: &Project) -> Vec<ScenarioWarning> {
    project
        .scenarios
        .iter()
        .flat_map(|scenario| {
            range_violations(&scenario.parameters)
                .into_iter()
                .map(|violation| ScenarioWarning {
                    scenario_id: scenario.id.clone(),
                    violation,
                })
        })
        .collect()
}

fn validate_scenario(scenario: &ScenarioDef) -> Result<(), ValidationError> {
    if scenario.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "scenario id".to_string(),
            value: format!("{:?}", scenario.id),
            reason: "must not be empty".to_string(),
        });
    }

    let actual = scenario.parameters.cycle_type();
    if actual != scenario.cycle_type {
        return Err(ValidationError::CycleMismatch {
            id: scenario.id.clone(),
            declared: scenario.cycle_type.to_string(),
            actual: actual.to_string(),
        });
    }

    for (name, value) in scenario.parameters.entries() {
        check_parameter(&format!("scenario '{}' {}", scenario.id, name), name, value)?;
    }
    Ok(())
}

/// Physical admissibility of a single named parameter.
pub fn check_parameter(field: &str, name: &str, value: f64) -> Result<(), ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    if !value.is_finite() {
        return Err(invalid("must be finite"));
    }

    if name.ends_with("Pressure") {
        if value <= 0.0 {
            return Err(invalid("pressure must be positive"));
        }
    } else if name.ends_with("Temperature") {
        if celsius_to_kelvin(value) <= 0.0 {
            return Err(invalid("temperature must be above absolute zero"));
        }
    } else if name.ends_with("Efficiency") {
        if value <= 0.0 || value > 1.0 {
            return Err(invalid("efficiency must be in (0, 1]"));
        }
    } else if name.ends_with("Ratio") {
        if value <= 1.0 {
            return Err(invalid("ratio must be greater than 1"));
        }
    } else if value <= 0.0 {
        return Err(invalid("must be positive"));
    }
    Ok(())
}

fn validate_sweep(sweep: &SweepDef, scenario: &ScenarioDef) -> Result<(), ValidationError> {
    let field = |what: &str| format!("sweep '{}' {}", sweep.id, what);

    if scenario.parameters.get(&sweep.parameter).is_none() {
        return Err(ValidationError::MissingReference {
            id: sweep.parameter.clone(),
            context: format!("sweep '{}' parameter ({} cycle)", sweep.id, scenario.cycle_type),
        });
    }

    if sweep.num_points < 2 {
        return Err(ValidationError::InvalidValue {
            field: field("numPoints"),
            value: sweep.num_points.to_string(),
            reason: "sweep must have at least 2 points".to_string(),
        });
    }

    if sweep.num_points > MAX_SWEEP_POINTS {
        return Err(ValidationError::InvalidValue {
            field: field("numPoints"),
            value: sweep.num_points.to_string(),
            reason: format!("sweep is limited to {} points", MAX_SWEEP_POINTS),
        });
    }

    for (what, value) in [("start", sweep.start), ("end", sweep.end)] {
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: field(what),
                value: value.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    if nearly_equal(sweep.start, sweep.end, Tolerances::default()) {
        return Err(ValidationError::InvalidValue {
            field: field("end"),
            value: sweep.end.to_string(),
            reason: "start and end values must be different".to_string(),
        });
    }

    if sweep.spacing == SweepSpacing::Logarithmic && (sweep.start <= 0.0 || sweep.end <= 0.0) {
        return Err(ValidationError::InvalidValue {
            field: field("spacing"),
            value: "logarithmic".to_string(),
            reason: "logarithmic sweeps need positive endpoints".to_string(),
        });
    }

    Ok(())
}
