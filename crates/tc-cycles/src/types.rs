//! Result data types shared by all cycle models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three supported power cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleType {
    Rankine,
    Otto,
    Diesel,
}

impl CycleType {
    pub const ALL: [CycleType; 3] = [CycleType::Rankine, CycleType::Otto, CycleType::Diesel];

    /// Lowercase key, as used on the wire and in file names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rankine => "rankine",
            Self::Otto => "otto",
            Self::Diesel => "diesel",
        }
    }

    /// Capitalized name for headings.
    pub fn title(self) -> &'static str {
        match self {
            Self::Rankine => "Rankine",
            Self::Otto => "Otto",
            Self::Diesel => "Diesel",
        }
    }

    /// Whether the cycle runs in a piston-cylinder (vs. turbine machinery).
    pub fn is_reciprocating(self) -> bool {
        matches!(self, Self::Otto | Self::Diesel)
    }
}

impl fmt::Display for CycleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CycleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rankine" => Ok(Self::Rankine),
            "otto" => Ok(Self::Otto),
            "diesel" => Ok(Self::Diesel),
            other => Err(format!(
                "unknown cycle type '{other}' (expected rankine, otto or diesel)"
            )),
        }
    }
}

/// One vertex of a cycle diagram.
///
/// On the P-V diagram `x` is specific volume [m³/kg] and `y` is pressure [MPa];
/// on the T-s diagram `x` is specific entropy [kJ/(kg·K)] and `y` is temperature [K].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatePoint {
    pub x: f64,
    pub y: f64,
}

impl StatePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Close a four-vertex cycle by repeating the first vertex.
pub fn closed_loop(vertices: [StatePoint; 4]) -> Vec<StatePoint> {
    let mut points = Vec::with_capacity(5);
    points.extend_from_slice(&vertices);
    points.push(vertices[0]);
    points
}

/// Outcome of one cycle calculation.
///
/// Energies are per unit mass of working fluid [kJ/kg]. A result with every
/// metric at zero and empty diagram data is the "no valid cycle" sentinel,
/// see [`CycleResult::zeroed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleResult {
    /// Thermal efficiency [-]. Not clamped.
    pub efficiency: f64,
    pub work_output: f64,
    pub heat_input: f64,
    pub heat_rejected: f64,
    /// Turbine exit quality [-]. Meaningful for Rankine only; always 0 for
    /// the air-standard cycles but still serialized.
    #[serde(default)]
    pub steam_quality: f64,
    /// Peak cycle temperature [K] (boiler temperature for Rankine).
    pub max_temperature: f64,
    /// Peak cycle pressure [MPa] (boiler pressure for Rankine).
    pub max_pressure: f64,
    pub pv_data: Vec<StatePoint>,
    pub ts_data: Vec<StatePoint>,
}

impl CycleResult {
    /// The fallback returned when a calculation faults.
    pub fn zeroed() -> Self {
        Self {
            efficiency: 0.0,
            work_output: 0.0,
            heat_input: 0.0,
            heat_rejected: 0.0,
            steam_quality: 0.0,
            max_temperature: 0.0,
            max_pressure: 0.0,
            pv_data: Vec::new(),
            ts_data: Vec::new(),
        }
    }

    /// False for the zeroed sentinel.
    pub fn is_computed(&self) -> bool {
        !self.pv_data.is_empty() && !self.ts_data.is_empty()
    }

    /// Whether both diagrams end where they start.
    pub fn is_closed(&self) -> bool {
        fn closes(points: &[StatePoint]) -> bool {
            match (points.first(), points.last()) {
                (Some(first), Some(last)) => points.len() > 1 && first == last,
                _ => false,
            }
        }
        closes(&self.pv_data) && closes(&self.ts_data)
    }

    /// Every scalar and every diagram coordinate is finite.
    pub fn all_finite(&self) -> bool {
        let scalars = [
            self.efficiency,
            self.work_output,
            self.heat_input,
            self.heat_rejected,
            self.steam_quality,
            self.max_temperature,
            self.max_pressure,
        ];
        scalars.iter().all(|v| v.is_finite())
            && self.pv_data.iter().all(StatePoint::is_finite)
            && self.ts_data.iter().all(StatePoint::is_finite)
    }
}
