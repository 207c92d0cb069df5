use crate::basis::EnergyBasis;
use crate::caloric::Caloric;
use crate::species_thermo::SpeciesThermo;
use crate::transport::Transport;

use super::Mixture;

/// Single-species mixture: every call delegates to the one composite with
/// an implicit composition weight of 1.
#[derive(Debug, Clone)]
pub struct PureMixture<C, T, B> {
    thermo: SpeciesThermo<C, T, B>,
}

impl<C, T, B> PureMixture<C, T, B>
where
    C: Caloric,
    T: Transport,
    B: EnergyBasis,
{
    pub fn new(thermo: SpeciesThermo<C, T, B>) -> Self {
        Self { thermo }
    }
}

impl<C, T, B> Mixture for PureMixture<C, T, B>
where
    C: Caloric,
    T: Transport,
    B: EnergyBasis,
{
    fn species(&self) -> Vec<&str> {
        vec![self.thermo.name()]
    }

    fn w(&self, _y: &[f64]) -> f64 {
        self.thermo.w()
    }

    fn rho(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.rho(p, t)
    }

    fn psi(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.psi(p, t)
    }

    fn cp(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.cp(p, t)
    }

    fn cv(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.cv(p, t)
    }

    fn cpv(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.cpv(p, t)
    }

    fn he(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.he(p, t)
    }

    fn ha(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.ha(p, t)
    }

    fn s(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.s(p, t)
    }

    fn mu(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.mu(p, t)
    }

    fn kappa(&self, p: f64, t: f64, _y: &[f64]) -> f64 {
        self.thermo.kappa(p, t)
    }
}
