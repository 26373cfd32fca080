//! Ideal air-standard Otto cycle.
//!
//! ```text
//! 1 → 2  isentropic compression      v2 = v1 / r
//! 2 → 3  constant-volume heat input  T3 = T2 + q_in / cv
//! 3 → 4  isentropic expansion        v4 = v1
//! 4 → 1  constant-volume rejection
//! η = 1 - r^-(k-1)
//! ```

use crate::air::{GasState, compress, ts_entropy};
use crate::constants::{CV_AIR, K_AIR};
use crate::error::{CalcResult, check_finite};
use crate::params::OttoParameters;
use crate::traits::CycleModel;
use crate::types::{CycleResult, CycleType, StatePoint, closed_loop};

/// Evaluate an Otto cycle. Never fails; see [`CycleResult::zeroed`].
pub fn calculate_otto_cycle(params: &OttoParameters) -> CycleResult {
    params.evaluate()
}

/// Ideal Otto efficiency for a compression ratio.
pub fn otto_efficiency(compression_ratio: f64) -> f64 {
    1.0 - 1.0 / compression_ratio.powf(K_AIR - 1.0)
}

impl CycleModel for OttoParameters {
    fn cycle_type(&self) -> CycleType {
        CycleType::Otto
    }

    fn compute(&self) -> CalcResult<CycleResult> {
        let r = self.compression_ratio;
        let c = compress(self.initial_pressure, self.initial_temperature, r)?;
        let s1 = c.state1;
        let s2 = c.state2;

        let t3 = check_finite(s2.t + self.heat_input / CV_AIR, "T3")?;
        let s3 = GasState {
            p: check_finite(s2.p * (t3 / s2.t), "p3")?,
            t: t3,
            v: s2.v,
        };

        let s4 = GasState {
            p: check_finite(s3.p / r.powf(K_AIR), "p4")?,
            t: check_finite(s3.t / r.powf(K_AIR - 1.0), "T4")?,
            v: s1.v,
        };

        let heat_input = check_finite(CV_AIR * (s3.t - s2.t), "heat input")?;
        let heat_rejected = check_finite(CV_AIR * (s4.t - s1.t), "heat rejected")?;
        let work_output = heat_input - heat_rejected;
        let efficiency = check_finite(otto_efficiency(r), "efficiency")?;

        let pv_data = closed_loop([
            StatePoint::new(s1.v, s1.p),
            StatePoint::new(s2.v, s2.p),
            StatePoint::new(s3.v, s3.p),
            StatePoint::new(s4.v, s4.p),
        ]);
        let ts_data = closed_loop([
            StatePoint::new(ts_entropy(s1.v)?, s1.t),
            StatePoint::new(ts_entropy(s2.v)?, s2.t),
            StatePoint::new(ts_entropy(s3.v)?, s3.t),
            StatePoint::new(ts_entropy(s4.v)?, s4.t),
        ]);

        Ok(CycleResult {
            efficiency,
            work_output,
            heat_input,
            heat_rejected,
            steam_quality: 0.0,
            max_temperature: s3.t,
            max_pressure: s3.p,
            pv_data,
            ts_data,
        })
    }
}
