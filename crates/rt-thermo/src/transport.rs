//! Transport axis models.

mod const_transport;

pub use const_transport::ConstTransport;

use rt_config::TransportDef;

use crate::error::ThermoResult;

/// Momentum and heat transport coefficients of one species.
///
/// Stateless function objects; thermal conductivity is derived from the
/// caloric heat capacity supplied by the caller, so transport never grows
/// its own copy of the caloric model.
pub trait Transport: Send + Sync {
    /// Dynamic viscosity [Pa·s].
    fn mu(&self, p: f64, t: f64) -> f64;

    /// Thermal conductivity [W/(m·K)], given the isobaric heat capacity.
    fn kappa(&self, cp: f64, p: f64, t: f64) -> f64;
}

/// Construction from the `transport` block of a species entry.
pub trait TransportFromDef: Transport + Sized {
    fn from_block(def: &TransportDef, path: &str) -> ThermoResult<Self>;
}
