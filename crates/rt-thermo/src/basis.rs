//! Energy-basis selection.
//!
//! The basis decides which caloric quantity is native — enthalpy or
//! internal energy — and therefore which correction term appears in the
//! derived one. It is a zero-sized type parameter: the choice is made when
//! a combination is compiled, not branched on per call.

use crate::caloric::Caloric;

pub trait EnergyBasis: Send + Sync + 'static {
    const NAME: &'static str;

    /// The basis-native sensible energy [J/kg].
    fn he<C: Caloric>(caloric: &C, p: f64, t: f64) -> f64;

    /// The basis-native heat capacity [J/(kg·K)].
    fn cpv<C: Caloric>(caloric: &C, p: f64, t: f64) -> f64;
}

/// Enthalpy-based energy bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensibleEnthalpy;

impl EnergyBasis for SensibleEnthalpy {
    const NAME: &'static str = "sensibleEnthalpy";

    fn he<C: Caloric>(caloric: &C, p: f64, t: f64) -> f64 {
        caloric.hs(p, t)
    }

    fn cpv<C: Caloric>(caloric: &C, p: f64, t: f64) -> f64 {
        caloric.cp(p, t)
    }
}

/// Internal-energy-based energy bookkeeping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensibleInternalEnergy;

impl EnergyBasis for SensibleInternalEnergy {
    const NAME: &'static str = "sensibleInternalEnergy";

    fn he<C: Caloric>(caloric: &C, p: f64, t: f64) -> f64 {
        caloric.es(p, t)
    }

    fn cpv<C: Caloric>(caloric: &C, p: f64, t: f64) -> f64 {
        caloric.cv(p, t)
    }
}
