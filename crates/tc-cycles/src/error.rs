//! Error types for cycle calculations.

use crate::types::CycleType;
use tc_core::error::TcError;
use thiserror::Error;

/// Faults raised inside a cycle computation.
///
/// These never escape the public calculators; they are turned into the zeroed
/// result there. They do surface from parameter access by name.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    #[error("Non-finite intermediate {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Unknown parameter '{name}' for {cycle} cycle")]
    UnknownParameter { cycle: CycleType, name: String },
}

pub type CalcResult<T> = Result<T, CycleError>;

impl From<TcError> for CycleError {
    fn from(e: TcError) -> Self {
        match e {
            TcError::NonFinite { what, value } => CycleError::NonFinite { what, value },
        }
    }
}

/// Ensure an intermediate is finite, returning CycleError if not.
pub(crate) fn check_finite(value: f64, what: &'static str) -> CalcResult<f64> {
    Ok(tc_core::numeric::ensure_finite(value, what)?)
}
