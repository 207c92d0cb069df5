//! rt-core: stable foundation for reactherm.
//!
//! Contains:
//! - units (uom SI types + constructors, f64 aliases for specific quantities)
//! - numeric (Real + tolerances + float helpers)
//! - constants (dimensioned physical constants + process-wide registry)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use constants::{ConstantsRegistry, DimensionedScalar, Dimensions};
pub use error::{RtError, RtResult};
pub use numeric::*;
pub use units::*;
