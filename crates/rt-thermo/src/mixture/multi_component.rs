use crate::basis::EnergyBasis;
use crate::caloric::Caloric;
use crate::error::{ThermoError, ThermoResult};
use crate::species_thermo::SpeciesThermo;
use crate::transport::Transport;

use super::Mixture;

/// Multi-component mixture over species composites of one compiled model
/// combination.
///
/// Every bulk property is the mass-fraction-weighted sum of the per-species
/// property at the same (p, T). Summation runs in species declaration
/// order so floating-point rounding reproduces across runs.
#[derive(Debug, Clone)]
pub struct MultiComponentMixture<C, T, B> {
    entries: Vec<SpeciesThermo<C, T, B>>,
}

impl<C, T, B> MultiComponentMixture<C, T, B>
where
    C: Caloric,
    T: Transport,
    B: EnergyBasis,
{
    pub fn new(entries: Vec<SpeciesThermo<C, T, B>>) -> ThermoResult<Self> {
        if entries.is_empty() {
            return Err(ThermoError::Configuration {
                path: "species".to_string(),
                reason: "multiComponentMixture requires at least one species".to_string(),
            });
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn weighted(&self, y: &[f64], f: impl Fn(&SpeciesThermo<C, T, B>) -> f64) -> f64 {
        debug_assert_eq!(
            y.len(),
            self.entries.len(),
            "composition vector length must match species count"
        );
        self.entries.iter().zip(y).map(|(st, yi)| yi * f(st)).sum()
    }
}

impl<C, T, B> Mixture for MultiComponentMixture<C, T, B>
where
    C: Caloric,
    T: Transport,
    B: EnergyBasis,
{
    fn species(&self) -> Vec<&str> {
        self.entries.iter().map(|st| st.name()).collect()
    }

    /// Harmonic mass-fraction mean: W = 1/Σ(yᵢ/Wᵢ).
    fn w(&self, y: &[f64]) -> f64 {
        1.0 / self.weighted(y, |st| 1.0 / st.w())
    }

    fn rho(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.rho(p, t))
    }

    fn psi(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.psi(p, t))
    }

    fn cp(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.cp(p, t))
    }

    fn cv(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.cv(p, t))
    }

    fn cpv(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.cpv(p, t))
    }

    fn he(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.he(p, t))
    }

    fn ha(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.ha(p, t))
    }

    fn s(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.s(p, t))
    }

    fn mu(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.mu(p, t))
    }

    fn kappa(&self, p: f64, t: f64, y: &[f64]) -> f64 {
        self.weighted(y, |st| st.kappa(p, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::SensibleEnthalpy;
    use crate::caloric::HRefConst;
    use crate::eos::{EosFromDef, PerfectGas};
    use crate::species::Specie;
    use crate::transport::ConstTransport;
    use rt_core::numeric::{Tolerances, nearly_equal};
    use std::collections::BTreeMap;
    use std::sync::Arc;

    type St = SpeciesThermo<HRefConst<PerfectGas>, ConstTransport, SensibleEnthalpy>;

    fn species_thermo(name: &str, mol_weight: f64, cp: f64) -> St {
        let specie = Arc::new(
            Specie::from_def(
                name,
                &rt_config::SpecieDef {
                    mol_weight,
                    elements: BTreeMap::new(),
                },
            )
            .unwrap(),
        );
        let eos = PerfectGas::from_block(specie, None, name).unwrap();
        let caloric = HRefConst::new(eos, cp, 0.0, 298.15, 0.0).unwrap();
        let transport = ConstTransport::new(1.8e-5, 0.7).unwrap();
        SpeciesThermo::new(caloric, transport)
    }

    fn two_species() -> MultiComponentMixture<HRefConst<PerfectGas>, ConstTransport, SensibleEnthalpy>
    {
        MultiComponentMixture::new(vec![
            species_thermo("A", 10.0, 10.0),
            species_thermo("B", 20.0, 20.0),
        ])
        .unwrap()
    }

    #[test]
    fn bulk_property_is_declaration_order_weighted_sum() {
        let mix = two_species();
        // cp values are 10 and 20; fractions 0.3/0.7 give exactly 17.
        let cp = mix.cp(1e5, 300.0, &[0.3, 0.7]);
        assert!(nearly_equal(cp, 17.0, Tolerances::default()));
    }

    #[test]
    fn species_order_is_declaration_order() {
        let mix = two_species();
        assert_eq!(mix.species(), vec!["A", "B"]);
    }

    #[test]
    fn fractions_are_not_normalized() {
        let mix = two_species();
        let double = mix.cp(1e5, 300.0, &[0.6, 1.4]);
        let single = mix.cp(1e5, 300.0, &[0.3, 0.7]);
        assert!(nearly_equal(double, 2.0 * single, Tolerances::default()));
    }

    #[test]
    fn mean_molecular_weight_is_harmonic() {
        let mix = two_species();
        let w = mix.w(&[0.5, 0.5]);
        // 1/(0.5/10 + 0.5/20) = 13.333...
        assert!(nearly_equal(w, 40.0 / 3.0, Tolerances::default()));
    }

    #[test]
    fn single_species_weight_one_matches_pure() {
        let mix = MultiComponentMixture::new(vec![species_thermo("A", 28.0, 1000.0)]).unwrap();
        let st = species_thermo("A", 28.0, 1000.0);
        let (p, t) = (1e5, 300.0);
        assert_eq!(mix.he(p, t, &[1.0]), st.he(p, t));
        assert_eq!(mix.rho(p, t, &[1.0]), st.rho(p, t));
    }

    #[test]
    fn empty_mixture_rejected() {
        assert!(
            MultiComponentMixture::<HRefConst<PerfectGas>, ConstTransport, SensibleEnthalpy>::new(
                vec![]
            )
            .is_err()
        );
    }
}
