//! Common interface implemented by every cycle parameter set.

use crate::error::CalcResult;
use crate::params::CycleParameters;
use crate::types::{CycleResult, CycleType};

/// A parameter set that can be evaluated into a [`CycleResult`].
///
/// Implementors only provide the fallible [`CycleModel::compute`]; the
/// provided [`CycleModel::evaluate`] turns any fault into the zeroed result.
pub trait CycleModel {
    fn cycle_type(&self) -> CycleType;

    /// Run the cycle relations, failing on any non-finite intermediate.
    fn compute(&self) -> CalcResult<CycleResult>;

    /// Total evaluation: never fails, returns [`CycleResult::zeroed`] on fault.
    fn evaluate(&self) -> CycleResult {
        let cycle = self.cycle_type();
        match self.compute() {
            Ok(result) => {
                tracing::debug!(
                    cycle = %cycle,
                    efficiency = result.efficiency,
                    work_output = result.work_output,
                    "cycle computed"
                );
                result
            }
            Err(err) => {
                tracing::warn!(cycle = %cycle, error = %err, "cycle calculation failed, returning zeroed result");
                CycleResult::zeroed()
            }
        }
    }
}

impl CycleModel for CycleParameters {
    fn cycle_type(&self) -> CycleType {
        CycleParameters::cycle_type(self)
    }

    fn compute(&self) -> CalcResult<CycleResult> {
        match self {
            Self::Rankine(p) => p.compute(),
            Self::Otto(p) => p.compute(),
            Self::Diesel(p) => p.compute(),
        }
    }
}
