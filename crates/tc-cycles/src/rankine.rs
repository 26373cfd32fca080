//! Simplified Rankine steam cycle.
//!
//! Uses representative enthalpy/entropy values instead of steam tables:
//!
//! ```text
//! 1  saturated liquid      h1, s1, v1 fixed
//! 2  after pump            w_pump = v1·(p_boiler - p_cond)·1000 / η_pump
//! 3  superheated steam     h3, s3 fixed
//! 4  turbine exit          h4 = h3 - η_turb·(h3 - h4s)
//! ```
//!
//! The exit quality is reported as a fixed representative value; there is no
//! saturation model to derive it from h4.

use crate::constants::{
    RANKINE_H1, RANKINE_H3, RANKINE_ISENTROPIC_FACTOR, RANKINE_S1, RANKINE_S3,
    RANKINE_STEAM_QUALITY, RANKINE_T1_DIAGRAM, RANKINE_T2_DIAGRAM, RANKINE_T4_DIAGRAM,
    RANKINE_V1, RANKINE_V3_DIAGRAM, RANKINE_V4_DIAGRAM,
};
use crate::error::{CalcResult, check_finite};
use crate::params::RankineParameters;
use crate::traits::CycleModel;
use crate::types::{CycleResult, CycleType, StatePoint, closed_loop};
use tc_core::units::{celsius_to_kelvin, mpa_to_kpa};

/// Evaluate a Rankine cycle. Never fails; see [`CycleResult::zeroed`].
pub fn calculate_rankine_cycle(params: &RankineParameters) -> CycleResult {
    params.evaluate()
}

/// Pump work per unit mass [kJ/kg].
pub fn pump_work(params: &RankineParameters) -> f64 {
    let dp_kpa = mpa_to_kpa(params.boiler_pressure - params.condenser_pressure);
    RANKINE_V1 * dp_kpa / params.pump_efficiency
}

/// Turbine exit enthalpy after the real (non-isentropic) expansion [kJ/kg].
pub fn turbine_exit_enthalpy(turbine_efficiency: f64) -> f64 {
    let h4s = RANKINE_H1 + (RANKINE_H3 - RANKINE_H1) * (1.0 - RANKINE_ISENTROPIC_FACTOR);
    RANKINE_H3 - turbine_efficiency * (RANKINE_H3 - h4s)
}

impl CycleModel for RankineParameters {
    fn cycle_type(&self) -> CycleType {
        CycleType::Rankine
    }

    fn compute(&self) -> CalcResult<CycleResult> {
        let t3 = check_finite(celsius_to_kelvin(self.boiler_temperature), "T3")?;
        let p_boiler = check_finite(self.boiler_pressure, "boiler pressure")?;
        let p_cond = check_finite(self.condenser_pressure, "condenser pressure")?;

        let h1 = RANKINE_H1;
        let s1 = RANKINE_S1;

        let w_pump = check_finite(pump_work(self), "pump work")?;
        let h2 = h1 + w_pump;
        let s2 = s1;

        let h3 = RANKINE_H3;
        let s3 = RANKINE_S3;

        let h4 = check_finite(turbine_exit_enthalpy(self.turbine_efficiency), "h4")?;
        let s4 = s3;

        let heat_input = h3 - h2;
        let turbine_work = h3 - h4;
        let work_output = turbine_work - w_pump;
        let heat_rejected = h4 - h1;
        let efficiency = check_finite(work_output / heat_input, "efficiency")?;

        let pv_data = closed_loop([
            StatePoint::new(RANKINE_V1, p_cond),
            StatePoint::new(RANKINE_V1, p_boiler),
            StatePoint::new(RANKINE_V3_DIAGRAM, p_boiler),
            StatePoint::new(RANKINE_V4_DIAGRAM, p_cond),
        ]);
        let ts_data = closed_loop([
            StatePoint::new(s1, RANKINE_T1_DIAGRAM),
            StatePoint::new(s2, RANKINE_T2_DIAGRAM),
            StatePoint::new(s3, t3),
            StatePoint::new(s4, RANKINE_T4_DIAGRAM),
        ]);

        Ok(CycleResult {
            efficiency,
            work_output,
            heat_input,
            heat_rejected,
            steam_quality: RANKINE_STEAM_QUALITY,
            max_temperature: t3,
            max_pressure: p_boiler,
            pv_data,
            ts_data,
        })
    }
}
