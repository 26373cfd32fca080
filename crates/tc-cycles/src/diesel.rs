//! Ideal air-standard Diesel cycle.
//!
//! Shares intake and compression with the Otto model, then adds heat at
//! constant pressure up to the cutoff volume:
//!
//! ```text
//! 2 → 3  constant-pressure heat input  v3 = rc·v2, T3 = rc·T2
//! 3 → 4  isentropic expansion to v1
//! η = 1 - r^-(k-1) · (rc^k - 1) / (k·(rc - 1))
//! ```
//!
//! Expansion follows `T4 = T3·(v3/v1)^(1-k)` and the energy balance is
//! `w = cp·(T3-T2) - cv·(T4-T1)`. With small cutoff ratios this puts T4 above
//! T3 and the net work goes negative (about -1859 kJ/kg at the default
//! inputs) while `η` still comes from the closed-form expression above. The
//! two are reported as computed; they are not reconciled.
//!
//! At `rc = 1` exactly the efficiency term is 0/0; that input is treated as a
//! fault and yields the zeroed result.

use crate::air::{GasState, compress, ts_entropy};
use crate::constants::{CP_AIR, CV_AIR, K_AIR};
use crate::error::{CalcResult, check_finite};
use crate::params::DieselParameters;
use crate::traits::CycleModel;
use crate::types::{CycleResult, CycleType, StatePoint, closed_loop};

/// Evaluate a Diesel cycle. Never fails; see [`CycleResult::zeroed`].
pub fn calculate_diesel_cycle(params: &DieselParameters) -> CycleResult {
    params.evaluate()
}

/// Ideal Diesel efficiency. Non-finite at `cutoff_ratio == 1`.
pub fn diesel_efficiency(compression_ratio: f64, cutoff_ratio: f64) -> f64 {
    let cutoff_term = (cutoff_ratio.powf(K_AIR) - 1.0) / (K_AIR * (cutoff_ratio - 1.0));
    1.0 - (1.0 / compression_ratio.powf(K_AIR - 1.0)) * cutoff_term
}

impl CycleModel for DieselParameters {
    fn cycle_type(&self) -> CycleType {
        CycleType::Diesel
    }

    fn compute(&self) -> CalcResult<CycleResult> {
        let rc = self.cutoff_ratio;
        let c = compress(
            self.initial_pressure,
            self.initial_temperature,
            self.compression_ratio,
        )?;
        let s1 = c.state1;
        let s2 = c.state2;

        let s3 = GasState {
            p: s2.p,
            t: check_finite(s2.t * rc, "T3")?,
            v: check_finite(s2.v * rc, "v3")?,
        };

        let expansion = s3.v / s1.v;
        let s4 = GasState {
            p: check_finite(s3.p * expansion.powf(-K_AIR), "p4")?,
            t: check_finite(s3.t * expansion.powf(1.0 - K_AIR), "T4")?,
            v: s1.v,
        };

        let heat_input = check_finite(CP_AIR * (s3.t - s2.t), "heat input")?;
        let heat_rejected = check_finite(CV_AIR * (s4.t - s1.t), "heat rejected")?;
        let work_output = heat_input - heat_rejected;
        let efficiency = check_finite(
            diesel_efficiency(self.compression_ratio, rc),
            "efficiency",
        )?;

        // 2 → 3 adds cp·ln(v3/v2) on top of the state-2 baseline
        let s_2 = ts_entropy(s2.v)?;
        let s_3 = check_finite(CP_AIR * (s3.v / s2.v).ln() + s_2, "state 3 entropy")?;

        let pv_data = closed_loop([
            StatePoint::new(s1.v, s1.p),
            StatePoint::new(s2.v, s2.p),
            StatePoint::new(s3.v, s3.p),
            StatePoint::new(s4.v, s4.p),
        ]);
        let ts_data = closed_loop([
            StatePoint::new(ts_entropy(s1.v)?, s1.t),
            StatePoint::new(s_2, s2.t),
            StatePoint::new(s_3, s3.t),
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
