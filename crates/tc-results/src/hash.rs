//! Content-based hashing for run IDs.

use sha2::{Digest, Sha256};
use tc_cycles::CycleParameters;

/// Hex SHA-256 over the scenario id, the parameters JSON, the cycle type and
/// the model version.
///
/// Two scenarios with identical parameters still get distinct runs.
pub fn compute_run_id(
    scenario_id: &str,
    parameters: &CycleParameters,
    model_version: &str,
) -> String {
    let mut hasher = Sha256::new();

    hasher.update(scenario_id.as_bytes());
    hasher.update([0u8]);

    let params_json = serde_json::to_string(parameters).unwrap_or_default();
    hasher.update(params_json.as_bytes());

    hasher.update(parameters.cycle_type().as_str().as_bytes());

    hasher.update(model_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
