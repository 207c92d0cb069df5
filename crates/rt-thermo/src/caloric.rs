//! Caloric axis models: heat capacity, enthalpy/internal energy, entropy.

mod e_ref_const;
mod h_ref_const;
mod janaf;

pub use e_ref_const::ERefConst;
pub use h_ref_const::HRefConst;
pub use janaf::Janaf;

use rt_config::CaloricDef;

use crate::eos::EquationOfState;
use crate::error::ThermoResult;

/// Caloric behavior of one species, built atop an owned equation of state.
///
/// Implementations provide the natively tabulated quantities; the
/// cross-relations below derive the rest through the owned equation of
/// state, which stays the single source of p-v-T truth. All arguments and
/// results are SI: p [Pa], T [K], energies [J/kg], entropies and heat
/// capacities [J/(kg·K)].
pub trait Caloric: Send + Sync {
    type Eos: EquationOfState;

    fn eos(&self) -> &Self::Eos;

    /// Heat capacity at constant pressure.
    fn cp(&self, p: f64, t: f64) -> f64;

    /// Sensible enthalpy (datum at the reference state, no formation term).
    fn hs(&self, p: f64, t: f64) -> f64;

    /// Heat of formation.
    fn hf(&self) -> f64;

    /// Specific entropy.
    fn s(&self, p: f64, t: f64) -> f64;

    /// Temperature limiting for tabulated models; identity by default.
    fn limit(&self, t: f64) -> f64 {
        t
    }

    /// Actual enthalpy, including the formation term.
    fn ha(&self, p: f64, t: f64) -> f64 {
        self.hs(p, t) + self.hf()
    }

    /// Sensible internal energy: e = h − p·v through the owned EOS.
    fn es(&self, p: f64, t: f64) -> f64 {
        self.hs(p, t) - p / self.eos().rho(p, t)
    }

    /// Actual internal energy.
    fn ea(&self, p: f64, t: f64) -> f64 {
        self.ha(p, t) - p / self.eos().rho(p, t)
    }

    /// Heat capacity at constant volume, via the EOS departure.
    fn cv(&self, p: f64, t: f64) -> f64 {
        self.cp(p, t) - self.eos().cp_m_cv(p, t)
    }
}

/// Construction from the `thermodynamics` block of a species entry.
///
/// Fails when the block's coefficients belong to a different caloric model
/// than the one the thermo type requested.
pub trait CaloricFromDef<E: EquationOfState>: Caloric<Eos = E> + Sized {
    fn from_block(eos: E, def: &CaloricDef, path: &str) -> ThermoResult<Self>;
}
