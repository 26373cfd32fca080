//! Physical and representative constants used by the cycle models.
//!
//! The Rankine values are representative steam properties, not table lookups.

// -- Air-standard properties (constant specific heats) --

/// Gas constant for air [kJ/(kg·K)].
pub const R_AIR: f64 = 0.287;

/// Specific heat ratio for air [-].
pub const K_AIR: f64 = 1.4;

/// Specific heat at constant volume for air [kJ/(kg·K)].
pub const CV_AIR: f64 = 0.718;

/// Specific heat at constant pressure for air [kJ/(kg·K)].
pub const CP_AIR: f64 = 1.005;

/// Reference specific volume for the T-s diagram entropy axis [m³/kg].
///
/// Only sets the origin of the plotted entropy, it is not a calibrated state.
pub const TS_REFERENCE_VOLUME: f64 = 0.7;

// -- Rankine representative states --

/// Saturated liquid enthalpy at the condenser [kJ/kg].
pub const RANKINE_H1: f64 = 200.0;

/// Saturated liquid entropy at the condenser [kJ/(kg·K)].
pub const RANKINE_S1: f64 = 0.6;

/// Liquid specific volume at pump inlet [m³/kg].
pub const RANKINE_V1: f64 = 0.001;

/// Superheated steam enthalpy at boiler exit [kJ/kg].
pub const RANKINE_H3: f64 = 3400.0;

/// Superheated steam entropy at boiler exit [kJ/(kg·K)].
pub const RANKINE_S3: f64 = 6.8;

/// Fraction of (h3 - h1) removed by the ideal turbine expansion.
pub const RANKINE_ISENTROPIC_FACTOR: f64 = 0.8;

/// Reported turbine exit quality. Not derived from h4.
pub const RANKINE_STEAM_QUALITY: f64 = 0.85;

/// Diagram volume at turbine inlet [m³/kg].
pub const RANKINE_V3_DIAGRAM: f64 = 0.2;

/// Diagram volume at turbine exit [m³/kg].
pub const RANKINE_V4_DIAGRAM: f64 = 2.0;

/// Diagram temperatures for states 1, 2 and 4 [K].
pub const RANKINE_T1_DIAGRAM: f64 = 300.0;
pub const RANKINE_T2_DIAGRAM: f64 = 310.0;
pub const RANKINE_T4_DIAGRAM: f64 = 350.0;
