//! Side-by-side evaluation of several parameter sets.

use rayon::prelude::*;
use tc_cycles::{CycleModel, CycleParameters, CycleResult, CycleType};

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub cycle_type: CycleType,
    pub parameters: CycleParameters,
    pub result: CycleResult,
}

/// Evaluate every parameter set concurrently; rows keep input order.
pub fn compare_cycles(parameters: &[CycleParameters]) -> Vec<ComparisonRow> {
    parameters
        .par_iter()
        .map(|params| ComparisonRow {
            cycle_type: params.cycle_type(),
            parameters: *params,
            result: params.evaluate(),
        })
        .collect()
}

/// Nominal Rankine, Otto and Diesel cycles.
pub fn compare_defaults() -> Vec<ComparisonRow> {
    let defaults: Vec<_> = CycleType::ALL
        .into_iter()
        .map(CycleParameters::default_for)
        .collect();
    compare_cycles(&defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_cycles_in_order() {
        let rows = compare_defaults();
        let cycles: Vec<_> = rows.iter().map(|r| r.cycle_type).collect();
        assert_eq!(cycles, CycleType::ALL.to_vec());
        assert!(rows.iter().all(|r| r.result.is_computed()));
    }

    #[test]
    fn nominal_diesel_outperforms_nominal_otto() {
        let rows = compare_defaults();
        // Nominal diesel runs at twice the compression ratio.
        assert!(rows[2].result.efficiency > rows[1].result.efficiency);
    }
}
