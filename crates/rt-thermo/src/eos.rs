//! Equation-of-state axis models.

mod perfect_gas;
mod r_polynomial;
mod rho_const;

pub use perfect_gas::PerfectGas;
pub use r_polynomial::RPolynomial;
pub use rho_const::RhoConst;

use std::sync::Arc;

use rt_config::EosDef;

use crate::error::ThermoResult;
use crate::species::Specie;

/// p-v-T behavior of one species.
///
/// Implementations are pure function objects: no mutable state, identical
/// inputs give identical outputs. Caloric models route every density or
/// compressibility term through their owned equation of state instead of
/// carrying their own p-v-T relations.
///
/// All arguments and results are SI: p [Pa], T [K].
pub trait EquationOfState: Send + Sync {
    fn specie(&self) -> &Specie;

    /// Density [kg/m³].
    fn rho(&self, p: f64, t: f64) -> f64;

    /// Compressibility ∂ρ/∂p at constant T [s²/m²].
    fn psi(&self, p: f64, t: f64) -> f64;

    /// Compression factor p/(ρ·R·T).
    fn z(&self, p: f64, t: f64) -> f64;

    /// Isobaric minus isochoric heat capacity [J/(kg·K)].
    fn cp_m_cv(&self, p: f64, t: f64) -> f64;

    /// Pressure-dependent enthalpy contribution [J/kg].
    fn h_contribution(&self, p: f64, t: f64) -> f64;

    /// Pressure-dependent entropy contribution [J/(kg·K)].
    fn s_contribution(&self, p: f64, t: f64) -> f64;
}

/// Construction from the `equationOfState` block of a species entry.
///
/// `path` is the species name, used in error key paths.
pub trait EosFromDef: EquationOfState + Sized {
    fn from_block(specie: Arc<Specie>, eos: Option<&EosDef>, path: &str) -> ThermoResult<Self>;
}
