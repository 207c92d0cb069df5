//! The assembled thermo package handed to solvers.

use rt_core::units::{
    Density, DynVisc, Pressure, SpecEnergy, SpecEnthalpy, SpecEntropy, SpecHeatCapacity,
    Temperature, ThermalCond, ThermalDiffusivity, kgm3, pas, wmk,
};

use crate::factory::ModelSelection;
use crate::mixture::Mixture;

/// Fully composed property-evaluation object.
///
/// Constructed once at case setup by the factory, immutable for the run.
/// All methods are pure and `&self`; a package can be shared across solver
/// threads without locking. `y` is the mass-fraction vector in species
/// declaration order (ignored by pure mixtures).
pub trait ThermoPackage: Send + Sync {
    /// The axis selections this package was built from.
    fn selection(&self) -> &ModelSelection;

    /// Species names in declaration order.
    fn species(&self) -> Vec<&str>;

    /// Mean molecular weight [kg/kmol].
    fn w(&self, y: &[f64]) -> f64;

    fn rho(&self, p: Pressure, t: Temperature, y: &[f64]) -> Density;

    /// Compressibility ∂ρ/∂p [s²/m²].
    fn psi(&self, p: Pressure, t: Temperature, y: &[f64]) -> f64;

    fn cp(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecHeatCapacity;
    fn cv(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecHeatCapacity;

    /// Heat capacity of the basis-native energy.
    fn cpv(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecHeatCapacity;

    /// Basis-native sensible energy: enthalpy or internal energy.
    fn he(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecEnergy;

    /// Actual enthalpy, including formation terms.
    fn ha(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecEnthalpy;

    fn s(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecEntropy;

    fn gamma(&self, p: Pressure, t: Temperature, y: &[f64]) -> f64;

    fn mu(&self, p: Pressure, t: Temperature, y: &[f64]) -> DynVisc;
    fn kappa(&self, p: Pressure, t: Temperature, y: &[f64]) -> ThermalCond;

    /// Thermal diffusivity for enthalpy, kappa/cp [kg/(m·s)].
    fn alphah(&self, p: Pressure, t: Temperature, y: &[f64]) -> ThermalDiffusivity;
}

/// The one concrete package shape: a mixture policy over species
/// composites, tagged with the selection it was built from.
pub struct MixtureThermoPackage<M> {
    selection: ModelSelection,
    mixture: M,
}

impl<M: Mixture> MixtureThermoPackage<M> {
    pub fn new(selection: ModelSelection, mixture: M) -> Self {
        Self { selection, mixture }
    }
}

impl<M: Mixture> ThermoPackage for MixtureThermoPackage<M> {
    fn selection(&self) -> &ModelSelection {
        &self.selection
    }

    fn species(&self) -> Vec<&str> {
        self.mixture.species()
    }

    fn w(&self, y: &[f64]) -> f64 {
        self.mixture.w(y)
    }

    fn rho(&self, p: Pressure, t: Temperature, y: &[f64]) -> Density {
        kgm3(self.mixture.rho(p.value, t.value, y))
    }

    fn psi(&self, p: Pressure, t: Temperature, y: &[f64]) -> f64 {
        self.mixture.psi(p.value, t.value, y)
    }

    fn cp(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecHeatCapacity {
        self.mixture.cp(p.value, t.value, y)
    }

    fn cv(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecHeatCapacity {
        self.mixture.cv(p.value, t.value, y)
    }

    fn cpv(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecHeatCapacity {
        self.mixture.cpv(p.value, t.value, y)
    }

    fn he(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecEnergy {
        self.mixture.he(p.value, t.value, y)
    }

    fn ha(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecEnthalpy {
        self.mixture.ha(p.value, t.value, y)
    }

    fn s(&self, p: Pressure, t: Temperature, y: &[f64]) -> SpecEntropy {
        self.mixture.s(p.value, t.value, y)
    }

    fn gamma(&self, p: Pressure, t: Temperature, y: &[f64]) -> f64 {
        self.mixture.cp(p.value, t.value, y) / self.mixture.cv(p.value, t.value, y)
    }

    fn mu(&self, p: Pressure, t: Temperature, y: &[f64]) -> DynVisc {
        pas(self.mixture.mu(p.value, t.value, y))
    }

    fn kappa(&self, p: Pressure, t: Temperature, y: &[f64]) -> ThermalCond {
        wmk(self.mixture.kappa(p.value, t.value, y))
    }

    fn alphah(&self, p: Pressure, t: Temperature, y: &[f64]) -> ThermalDiffusivity {
        self.mixture.kappa(p.value, t.value, y) / self.mixture.cp(p.value, t.value, y)
    }
}
