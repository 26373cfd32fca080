//! Ideal air-standard relations shared by the Otto and Diesel models.
//!
//! Constant specific heats, `p·v = R·T` with p in kPa and v in m³/kg.

use crate::constants::{CV_AIR, K_AIR, R_AIR, TS_REFERENCE_VOLUME};
use crate::error::{CalcResult, check_finite};
use tc_core::units::{celsius_to_kelvin, mpa_to_kpa};

/// Gas state on the P-V / T-s diagrams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    /// Pressure [MPa]
    pub p: f64,
    /// Temperature [K]
    pub t: f64,
    /// Specific volume [m³/kg]
    pub v: f64,
}

/// States 1 and 2: intake conditions and the end of isentropic compression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compression {
    pub state1: GasState,
    pub state2: GasState,
}

/// Specific volume from the ideal gas law, p in MPa and T in K.
pub fn specific_volume(p_mpa: f64, t_k: f64) -> f64 {
    R_AIR * t_k / mpa_to_kpa(p_mpa)
}

/// Intake state and isentropic compression by `compression_ratio`.
pub fn compress(
    initial_pressure: f64,
    initial_temperature_c: f64,
    compression_ratio: f64,
) -> CalcResult<Compression> {
    let t1 = check_finite(celsius_to_kelvin(initial_temperature_c), "T1")?;
    let p1 = check_finite(initial_pressure, "p1")?;
    let v1 = check_finite(specific_volume(p1, t1), "v1")?;

    let v2 = check_finite(v1 / compression_ratio, "v2")?;
    let t2 = check_finite(t1 * compression_ratio.powf(K_AIR - 1.0), "T2")?;
    let p2 = check_finite(p1 * compression_ratio.powf(K_AIR), "p2")?;

    Ok(Compression {
        state1: GasState { p: p1, t: t1, v: v1 },
        state2: GasState { p: p2, t: t2, v: v2 },
    })
}

/// Diagram entropy for a constant-volume path from the reference volume.
pub fn ts_entropy(v: f64) -> CalcResult<f64> {
    check_finite(CV_AIR * (v / TS_REFERENCE_VOLUME).ln(), "diagram entropy")
}
