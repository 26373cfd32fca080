//! Parameter catalog: labels, units, operating ranges and display precision.
//!
//! The ranges are the documented operating envelope of each cycle. Values
//! outside them are still evaluated; callers can report them with
//! [`range_violations`].

use crate::params::{CycleParameters, canonical_key};
use crate::types::CycleType;

/// Metadata for one input parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    /// camelCase key, as serialized
    pub name: &'static str,
    pub label: &'static str,
    pub unit: Option<&'static str>,
    pub min: f64,
    pub max: f64,
    /// Input granularity; also drives display precision
    pub step: f64,
    /// Hidden unless advanced parameters are shown
    pub advanced: bool,
}

impl ParameterSpec {
    /// `"Boiler Pressure (MPa)"`, or just the label for dimensionless inputs.
    pub fn display_label(&self) -> String {
        match self.unit {
            Some(unit) => format!("{} ({})", self.label, unit),
            None => self.label.to_string(),
        }
    }

    /// Decimal places used when showing a value of this parameter.
    pub fn precision(&self) -> usize {
        if self.step < 0.1 {
            3
        } else if self.step < 1.0 {
            2
        } else {
            0
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.precision(), value)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const RANKINE_PARAMETERS: &[ParameterSpec] = &[
    ParameterSpec {
        name: "boilerPressure",
        label: "Boiler Pressure",
        unit: Some("MPa"),
        min: 1.0,
        max: 20.0,
        step: 0.1,
        advanced: false,
    },
    ParameterSpec {
        name: "boilerTemperature",
        label: "Boiler Temperature",
        unit: Some("°C"),
        min: 300.0,
        max: 700.0,
        step: 5.0,
        advanced: false,
    },
    ParameterSpec {
        name: "condenserPressure",
        label: "Condenser Pressure",
        unit: Some("MPa"),
        min: 0.001,
        max: 0.1,
        step: 0.001,
        advanced: false,
    },
    ParameterSpec {
        name: "pumpEfficiency",
        label: "Pump Efficiency",
        unit: None,
        min: 0.5,
        max: 1.0,
        step: 0.01,
        advanced: true,
    },
    ParameterSpec {
        name: "turbineEfficiency",
        label: "Turbine Efficiency",
        unit: None,
        min: 0.5,
        max: 1.0,
        step: 0.01,
        advanced: true,
    },
];

pub const OTTO_PARAMETERS: &[ParameterSpec] = &[
    INITIAL_PRESSURE,
    INITIAL_TEMPERATURE,
    ParameterSpec {
        name: "compressionRatio",
        label: "Compression Ratio",
        unit: None,
        min: 4.0,
        max: 12.0,
        step: 0.1,
        advanced: false,
    },
    HEAT_INPUT,
];

pub const DIESEL_PARAMETERS: &[ParameterSpec] = &[
    INITIAL_PRESSURE,
    INITIAL_TEMPERATURE,
    ParameterSpec {
        name: "compressionRatio",
        label: "Compression Ratio",
        unit: None,
        min: 12.0,
        max: 24.0,
        step: 0.5,
        advanced: false,
    },
    ParameterSpec {
        name: "cutoffRatio",
        label: "Cutoff Ratio",
        unit: None,
        min: 1.2,
        max: 4.0,
        step: 0.1,
        advanced: false,
    },
    HEAT_INPUT,
];

const INITIAL_PRESSURE: ParameterSpec = ParameterSpec {
    name: "initialPressure",
    label: "Initial Pressure",
    unit: Some("MPa"),
    min: 0.05,
    max: 0.2,
    step: 0.01,
    advanced: false,
};

const INITIAL_TEMPERATURE: ParameterSpec = ParameterSpec {
    name: "initialTemperature",
    label: "Initial Temperature",
    unit: Some("°C"),
    min: 0.0,
    max: 50.0,
    step: 1.0,
    advanced: false,
};

const HEAT_INPUT: ParameterSpec = ParameterSpec {
    name: "heatInput",
    label: "Heat Input",
    unit: Some("kJ/kg"),
    min: 500.0,
    max: 3000.0,
    step: 50.0,
    advanced: true,
};

/// All parameter specs for a cycle, in display order.
pub fn parameter_specs(cycle: CycleType) -> &'static [ParameterSpec] {
    match cycle {
        CycleType::Rankine => RANKINE_PARAMETERS,
        CycleType::Otto => OTTO_PARAMETERS,
        CycleType::Diesel => DIESEL_PARAMETERS,
    }
}

/// Specs shown in the parameter panel, optionally including advanced ones.
pub fn visible_specs(
    cycle: CycleType,
    show_advanced: bool,
) -> impl Iterator<Item = &'static ParameterSpec> {
    parameter_specs(cycle)
        .iter()
        .filter(move |spec| show_advanced || !spec.advanced)
}

/// Find a spec by name. Case, `_` and `-` are ignored.
pub fn find_spec(cycle: CycleType, name: &str) -> Option<&'static ParameterSpec> {
    let key = canonical_key(name);
    parameter_specs(cycle)
        .iter()
        .find(|spec| canonical_key(spec.name) == key)
}

/// A parameter value outside its operating range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeViolation {
    pub name: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Every parameter whose value lies outside the catalog range.
pub fn range_violations(params: &CycleParameters) -> Vec<RangeViolation> {
    let cycle = params.cycle_type();
    params
        .entries()
        .into_iter()
        .filter_map(|(name, value)| {
            let spec = find_spec(cycle, name)?;
            (!spec.contains(value)).then_some(RangeViolation {
                name: spec.name,
                value,
                min: spec.min,
                max: spec.max,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_parameter_has_a_spec() {
        for cycle in CycleType::ALL {
            let params = CycleParameters::default_for(cycle);
            let names: Vec<_> = params.entries().into_iter().map(|(n, _)| n).collect();
            let spec_names: Vec<_> = parameter_specs(cycle).iter().map(|s| s.name).collect();
            assert_eq!(names, spec_names, "{cycle}");
        }
    }

    #[test]
    fn defaults_are_in_range() {
        for cycle in CycleType::ALL {
            let params = CycleParameters::default_for(cycle);
            assert!(range_violations(&params).is_empty(), "{cycle}");
        }
    }

    #[test]
    fn precision_follows_step() {
        let condenser = find_spec(CycleType::Rankine, "condenserPressure").unwrap();
        assert_eq!(condenser.format_value(0.008), "0.008");
        let boiler = find_spec(CycleType::Rankine, "boiler_pressure").unwrap();
        assert_eq!(boiler.format_value(8.0), "8.00");
        let heat = find_spec(CycleType::Otto, "heatInput").unwrap();
        assert_eq!(heat.format_value(1800.0), "1800");
    }

    #[test]
    fn advanced_specs_are_hidden_by_default() {
        assert_eq!(visible_specs(CycleType::Rankine, false).count(), 3);
        assert_eq!(visible_specs(CycleType::Rankine, true).count(), 5);
        assert_eq!(visible_specs(CycleType::Diesel, false).count(), 4);
    }

    #[test]
    fn out_of_range_values_are_reported() {
        let params = CycleParameters::default_for(CycleType::Otto)
            .with("compressionRatio", 20.0)
            .unwrap();
        let violations = range_violations(&params);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].name, "compressionRatio");
        assert_eq!(violations[0].max, 12.0);
    }

    #[test]
    fn display_label_includes_unit() {
        let spec = find_spec(CycleType::Diesel, "heatInput").unwrap();
        assert_eq!(spec.display_label(), "Heat Input (kJ/kg)");
        let spec = find_spec(CycleType::Diesel, "cutoffRatio").unwrap();
        assert_eq!(spec.display_label(), "Cutoff Ratio");
    }
}
