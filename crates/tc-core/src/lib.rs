//! tc-core: stable foundation for thermocycle.
//!
//! Contains:
//! - units (uom SI types + constructors for the MPa / °C inputs the cycles take)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TcError, TcResult};
pub use numeric::*;
pub use units::*;
