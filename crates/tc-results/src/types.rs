//! Result data types.

use crate::{ResultsError, ResultsResult};
use serde::{Deserialize, Serialize};
use tc_cycles::{CycleModel, CycleParameters, CycleResult, CycleType};

pub type RunId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: RunId,
    pub scenario_id: String,
    pub cycle_type: CycleType,
    /// RFC 3339
    pub timestamp: String,
    pub model_version: String,
}

/// Exported cycle data: `{ cycleType, parameters, results }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleDocument {
    pub cycle_type: CycleType,
    pub parameters: CycleParameters,
    pub results: CycleResult,
}

impl CycleDocument {
    pub fn new(parameters: CycleParameters, results: CycleResult) -> Self {
        Self {
            cycle_type: parameters.cycle_type(),
            parameters,
            results,
        }
    }

    /// Evaluate `parameters` and wrap the outcome.
    pub fn evaluate(parameters: CycleParameters) -> Self {
        let results = parameters.evaluate();
        Self::new(parameters, results)
    }

    pub fn to_json_pretty(&self) -> ResultsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document, rejecting one whose `cycleType` disagrees with its parameters.
    pub fn from_json(text: &str) -> ResultsResult<Self> {
        let doc: Self = serde_json::from_str(text)?;
        let actual = doc.parameters.cycle_type();
        if actual != doc.cycle_type {
            return Err(ResultsError::CycleMismatch {
                declared: doc.cycle_type.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(doc)
    }
}

/// `<cycle>-cycle-data.json`
pub fn document_file_name(cycle: CycleType) -> String {
    format!("{cycle}-cycle-data.json")
}

/// `<cycle>-cycle-analysis.txt`
pub fn report_file_name(cycle: CycleType) -> String {
    format!("{cycle}-cycle-analysis.txt")
}
