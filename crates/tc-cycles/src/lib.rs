//! tc-cycles: air-standard and vapor power cycle calculators.
//!
//! Provides closed-form models for three classical cycles:
//! - Rankine (simplified four-state steam cycle with representative properties)
//! - Otto (constant-volume heat addition)
//! - Diesel (constant-pressure heat addition)
//!
//! Every calculator is a total, deterministic function of its parameters. A
//! parameter set that drives any intermediate non-finite yields
//! [`CycleResult::zeroed`] instead of an error, so callers always receive a
//! well-formed result.
//!
//! # Example
//!
//! ```
//! use tc_cycles::{calculate_otto_cycle, OttoParameters};
//!
//! let result = calculate_otto_cycle(&OttoParameters::default());
//! assert!(result.is_computed());
//! assert_eq!(result.pv_data.len(), 5);
//! println!("efficiency: {:.4}", result.efficiency);
//! ```

pub mod air;
pub mod animation;
pub mod catalog;
pub mod constants;
pub mod diesel;
pub mod error;
pub mod otto;
pub mod params;
pub mod rankine;
pub mod traits;
pub mod types;

// Re-exports
pub use animation::{AnimationFrame, Playback, sample_frame, stage_label};
pub use catalog::{ParameterSpec, RangeViolation, find_spec, parameter_specs, range_violations};
pub use diesel::calculate_diesel_cycle;
pub use error::{CalcResult, CycleError};
pub use otto::calculate_otto_cycle;
pub use params::{CycleParameters, DieselParameters, OttoParameters, RankineParameters};
pub use rankine::calculate_rankine_cycle;
pub use traits::CycleModel;
pub use types::{CycleResult, CycleType, StatePoint};
