//! rt-liquids: pure-liquid saturation and transport property models.
//!
//! A liquid is described by its critical/triple-point constants plus
//! thirteen named sub-functions of (p, T): density, vapor pressure, latent
//! heat, liquid and vapor heat capacity, raw enthalpy, second virial
//! coefficient, liquid/vapor viscosity, liquid/vapor conductivity, surface
//! tension, and vapor diffusivity. Each sub-function is independently
//! overridable from configuration; whatever a block does not name keeps
//! its previous definition. Cross-relations that are definitional (thermal
//! diffusivity = kappa/cp) are derived, never stored.

pub mod error;
pub mod function;
pub mod liquid;
pub mod water;

pub use error::{LiquidError, LiquidResult};
pub use function::PropertyFunction;
pub use liquid::LiquidProperties;
pub use water::water;
