//! Parameter sets for each cycle.
//!
//! Field names serialize in camelCase (`boilerPressure`, `compressionRatio`, ...)
//! to match the exported JSON document. Each struct denies unknown fields so
//! the untagged [`CycleParameters`] can tell Otto and Diesel inputs apart.

use crate::error::{CalcResult, CycleError};
use crate::types::CycleType;
use serde::{Deserialize, Serialize};

/// Rankine cycle inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RankineParameters {
    /// Boiler pressure [MPa]
    pub boiler_pressure: f64,
    /// Boiler exit temperature [°C]
    pub boiler_temperature: f64,
    /// Condenser pressure [MPa]
    pub condenser_pressure: f64,
    /// Pump isentropic efficiency, in (0, 1]
    pub pump_efficiency: f64,
    /// Turbine isentropic efficiency, in (0, 1]
    pub turbine_efficiency: f64,
}

impl Default for RankineParameters {
    fn default() -> Self {
        Self {
            boiler_pressure: 8.0,
            boiler_temperature: 500.0,
            condenser_pressure: 0.008,
            pump_efficiency: 0.85,
            turbine_efficiency: 0.87,
        }
    }
}

impl RankineParameters {
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("boilerPressure", self.boiler_pressure),
            ("boilerTemperature", self.boiler_temperature),
            ("condenserPressure", self.condenser_pressure),
            ("pumpEfficiency", self.pump_efficiency),
            ("turbineEfficiency", self.turbine_efficiency),
        ]
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut f64> {
        match canonical_key(name).as_str() {
            "boilerpressure" => Some(&mut self.boiler_pressure),
            "boilertemperature" => Some(&mut self.boiler_temperature),
            "condenserpressure" => Some(&mut self.condenser_pressure),
            "pumpefficiency" => Some(&mut self.pump_efficiency),
            "turbineefficiency" => Some(&mut self.turbine_efficiency),
            _ => None,
        }
    }
}

/// Otto cycle inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OttoParameters {
    /// Pressure at start of compression [MPa]
    pub initial_pressure: f64,
    /// Temperature at start of compression [°C]
    pub initial_temperature: f64,
    /// v1 / v2, expected > 1
    pub compression_ratio: f64,
    /// Heat added at constant volume [kJ/kg]
    pub heat_input: f64,
}

impl Default for OttoParameters {
    fn default() -> Self {
        Self {
            initial_pressure: 0.1,
            initial_temperature: 25.0,
            compression_ratio: 8.0,
            heat_input: 1800.0,
        }
    }
}

impl OttoParameters {
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("initialPressure", self.initial_pressure),
            ("initialTemperature", self.initial_temperature),
            ("compressionRatio", self.compression_ratio),
            ("heatInput", self.heat_input),
        ]
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut f64> {
        match canonical_key(name).as_str() {
            "initialpressure" => Some(&mut self.initial_pressure),
            "initialtemperature" => Some(&mut self.initial_temperature),
            "compressionratio" => Some(&mut self.compression_ratio),
            "heatinput" => Some(&mut self.heat_input),
            _ => None,
        }
    }
}

/// Diesel cycle inputs: the Otto set plus a cutoff ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DieselParameters {
    /// Pressure at start of compression [MPa]
    pub initial_pressure: f64,
    /// Temperature at start of compression [°C]
    pub initial_temperature: f64,
    /// v1 / v2, expected > 1
    pub compression_ratio: f64,
    /// v3 / v2, expected > 1
    pub cutoff_ratio: f64,
    /// Nominal heat input [kJ/kg]. The reported heat input follows from the cutoff ratio.
    pub heat_input: f64,
}

impl Default for DieselParameters {
    fn default() -> Self {
        Self {
            initial_pressure: 0.1,
            initial_temperature: 25.0,
            compression_ratio: 16.0,
            cutoff_ratio: 2.0,
            heat_input: 1800.0,
        }
    }
}

impl DieselParameters {
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("initialPressure", self.initial_pressure),
            ("initialTemperature", self.initial_temperature),
            ("compressionRatio", self.compression_ratio),
            ("cutoffRatio", self.cutoff_ratio),
            ("heatInput", self.heat_input),
        ]
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut f64> {
        match canonical_key(name).as_str() {
            "initialpressure" => Some(&mut self.initial_pressure),
            "initialtemperature" => Some(&mut self.initial_temperature),
            "compressionratio" => Some(&mut self.compression_ratio),
            "cutoffratio" => Some(&mut self.cutoff_ratio),
            "heatinput" => Some(&mut self.heat_input),
            _ => None,
        }
    }
}

/// A parameter set for any of the three cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CycleParameters {
    Rankine(RankineParameters),
    Otto(OttoParameters),
    Diesel(DieselParameters),
}

impl CycleParameters {
    /// Nominal parameters for a cycle.
    pub fn default_for(cycle: CycleType) -> Self {
        match cycle {
            CycleType::Rankine => Self::Rankine(RankineParameters::default()),
            CycleType::Otto => Self::Otto(OttoParameters::default()),
            CycleType::Diesel => Self::Diesel(DieselParameters::default()),
        }
    }

    pub fn cycle_type(&self) -> CycleType {
        match self {
            Self::Rankine(_) => CycleType::Rankine,
            Self::Otto(_) => CycleType::Otto,
            Self::Diesel(_) => CycleType::Diesel,
        }
    }

    /// `(camelCase name, value)` pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::Rankine(p) => p.entries(),
            Self::Otto(p) => p.entries(),
            Self::Diesel(p) => p.entries(),
        }
    }

    /// Look a value up by name. Case, `_` and `-` are ignored.
    pub fn get(&self, name: &str) -> Option<f64> {
        let key = canonical_key(name);
        self.entries()
            .into_iter()
            .find(|(n, _)| canonical_key(n) == key)
            .map(|(_, v)| v)
    }

    /// Overwrite a value by name. Case, `_` and `-` are ignored.
    pub fn set(&mut self, name: &str, value: f64) -> CalcResult<()> {
        let cycle = self.cycle_type();
        let slot = match self {
            Self::Rankine(p) => p.slot_mut(name),
            Self::Otto(p) => p.slot_mut(name),
            Self::Diesel(p) => p.slot_mut(name),
        };
        match slot {
            Some(v) => {
                *v = value;
                Ok(())
            }
            None => Err(CycleError::UnknownParameter {
                cycle,
                name: name.to_string(),
            }),
        }
    }

    /// Builder-style [`CycleParameters::set`].
    pub fn with(mut self, name: &str, value: f64) -> CalcResult<Self> {
        self.set(name, value)?;
        Ok(self)
    }
}

impl From<RankineParameters> for CycleParameters {
    fn from(p: RankineParameters) -> Self {
        Self::Rankine(p)
    }
}

impl From<OttoParameters> for CycleParameters {
    fn from(p: OttoParameters) -> Self {
        Self::Otto(p)
    }
}

impl From<DieselParameters> for CycleParameters {
    fn from(p: DieselParameters) -> Self {
        Self::Diesel(p)
    }
}

/// Lowercase with `_`, `-` and whitespace removed: `boiler-pressure` == `boilerPressure`.
pub fn canonical_key(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-') && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
