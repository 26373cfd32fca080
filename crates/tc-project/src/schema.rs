//! Scenario file schema.

use serde::{Deserialize, Serialize};
use tc_cycles::{CycleParameters, CycleType};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub scenarios: Vec<ScenarioDef>,
    #[serde(default)]
    pub sweeps: Vec<SweepDef>,
}

impl Project {
    /// Empty project at the latest version.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            scenarios: Vec::new(),
            sweeps: Vec::new(),
        }
    }

    /// One nominal scenario per cycle type.
    pub fn with_default_scenarios(name: impl Into<String>) -> Self {
        let mut project = Self::new(name);
        project.scenarios = CycleType::ALL
            .into_iter()
            .map(|cycle| ScenarioDef {
                id: format!("{cycle}-nominal"),
                name: format!("Nominal {}", cycle.title()),
                cycle_type: cycle,
                parameters: CycleParameters::default_for(cycle),
            })
            .collect();
        project
    }

    pub fn scenario(&self, id: &str) -> Option<&ScenarioDef> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn sweep(&self, id: &str) -> Option<&SweepDef> {
        self.sweeps.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioDef {
    pub id: String,
    pub name: String,
    pub cycle_type: CycleType,
    pub parameters: CycleParameters,
}

/// Spacing of the points in a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepSpacing {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Upper bound on `numPoints`; every point is a full cycle evaluation.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// A one-parameter sweep over a scenario.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SweepDef {
    pub id: String,
    pub scenario_id: String,
    /// Parameter name, e.g. `compressionRatio`.
    pub parameter: String,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    #[serde(default)]
    pub spacing: SweepSpacing,
}

impl SweepDef {
    /// Generate all points in the sweep. Both endpoints are exact.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.spacing {
            SweepSpacing::Linear => self.generate_linear(),
            SweepSpacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let last = self.num_points - 1;
        let delta = (self.end - self.start) / last as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();
        points[last] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        // Validation rejects this; degrade to linear rather than emit NaN.
        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let last = self.num_points - 1;
        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / last as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();
        points[0] = self.start;
        points[last] = self.end;
        points
    }
}
