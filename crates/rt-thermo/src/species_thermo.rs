//! Per-species composite: caloric + transport + energy basis.

use std::marker::PhantomData;

use crate::basis::EnergyBasis;
use crate::caloric::Caloric;
use crate::eos::EquationOfState;
use crate::transport::Transport;

/// One species' complete property model.
///
/// Binds a caloric model (which owns the equation of state) with a
/// transport model and an energy-basis tag. Everything here is a thin
/// delegation; the composite adds only the basis dispatch and the derived
/// quantities that need both axes (kappa, alphah, gamma).
#[derive(Debug, Clone)]
pub struct SpeciesThermo<C, T, B> {
    caloric: C,
    transport: T,
    _basis: PhantomData<B>,
}

impl<C, T, B> SpeciesThermo<C, T, B>
where
    C: Caloric,
    T: Transport,
    B: EnergyBasis,
{
    pub fn new(caloric: C, transport: T) -> Self {
        Self {
            caloric,
            transport,
            _basis: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        self.caloric.eos().specie().name()
    }

    /// Molecular weight [kg/kmol].
    pub fn w(&self) -> f64 {
        self.caloric.eos().specie().w()
    }

    pub fn rho(&self, p: f64, t: f64) -> f64 {
        self.caloric.eos().rho(p, t)
    }

    pub fn psi(&self, p: f64, t: f64) -> f64 {
        self.caloric.eos().psi(p, t)
    }

    pub fn cp(&self, p: f64, t: f64) -> f64 {
        self.caloric.cp(p, t)
    }

    pub fn cv(&self, p: f64, t: f64) -> f64 {
        self.caloric.cv(p, t)
    }

    /// Heat capacity of the basis-native energy.
    pub fn cpv(&self, p: f64, t: f64) -> f64 {
        B::cpv(&self.caloric, p, t)
    }

    /// Basis-native sensible energy.
    pub fn he(&self, p: f64, t: f64) -> f64 {
        B::he(&self.caloric, p, t)
    }

    pub fn ha(&self, p: f64, t: f64) -> f64 {
        self.caloric.ha(p, t)
    }

    pub fn hs(&self, p: f64, t: f64) -> f64 {
        self.caloric.hs(p, t)
    }

    pub fn s(&self, p: f64, t: f64) -> f64 {
        self.caloric.s(p, t)
    }

    pub fn gamma(&self, p: f64, t: f64) -> f64 {
        self.cp(p, t) / self.cv(p, t)
    }

    pub fn mu(&self, p: f64, t: f64) -> f64 {
        self.transport.mu(p, t)
    }

    pub fn kappa(&self, p: f64, t: f64) -> f64 {
        self.transport.kappa(self.cp(p, t), p, t)
    }

    /// Thermal diffusivity for enthalpy, kappa/cp [kg/(m·s)].
    pub fn alphah(&self, p: f64, t: f64) -> f64 {
        self.kappa(p, t) / self.cp(p, t)
    }
}
