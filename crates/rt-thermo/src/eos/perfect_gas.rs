use std::sync::Arc;

use rt_config::EosDef;
use rt_core::constants;

use crate::error::{ThermoError, ThermoResult};
use crate::species::Specie;

use super::{EosFromDef, EquationOfState};

/// Ideal gas: ρ = p/(R·T).
#[derive(Debug, Clone)]
pub struct PerfectGas {
    specie: Arc<Specie>,
    /// Standard pressure for the entropy datum, captured at construction.
    p_std: f64,
}

impl PerfectGas {
    pub fn new(specie: Arc<Specie>) -> Self {
        Self {
            specie,
            p_std: constants::standard_pressure(),
        }
    }
}

impl EquationOfState for PerfectGas {
    fn specie(&self) -> &Specie {
        &self.specie
    }

    fn rho(&self, p: f64, t: f64) -> f64 {
        p / (self.specie.r() * t)
    }

    fn psi(&self, _p: f64, t: f64) -> f64 {
        1.0 / (self.specie.r() * t)
    }

    fn z(&self, _p: f64, _t: f64) -> f64 {
        1.0
    }

    fn cp_m_cv(&self, _p: f64, _t: f64) -> f64 {
        self.specie.r()
    }

    fn h_contribution(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn s_contribution(&self, p: f64, _t: f64) -> f64 {
        -self.specie.r() * (p / self.p_std).ln()
    }
}

impl EosFromDef for PerfectGas {
    fn from_block(specie: Arc<Specie>, eos: Option<&EosDef>, path: &str) -> ThermoResult<Self> {
        match eos {
            None | Some(EosDef::PerfectGas {}) => Ok(Self::new(specie)),
            Some(_) => Err(ThermoError::Configuration {
                path: format!("{path}.equationOfState"),
                reason: "coefficient block does not match perfectGas".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_core::numeric::{Tolerances, nearly_equal};
    use std::collections::BTreeMap;

    fn n2() -> Arc<Specie> {
        Arc::new(
            Specie::from_def(
                "N2",
                &rt_config::SpecieDef {
                    mol_weight: 28.014,
                    elements: BTreeMap::new(),
                },
            )
            .unwrap(),
        )
    }

    #[test]
    fn density_follows_ideal_gas_law() {
        let gas = PerfectGas::new(n2());
        let rho = gas.rho(101_325.0, 300.0);
        // p/(R T) = 101325/(296.8*300) ≈ 1.138
        assert!(nearly_equal(rho, 1.138, Tolerances { abs: 2e-3, rel: 2e-3 }));
    }

    #[test]
    fn psi_is_density_over_pressure() {
        let gas = PerfectGas::new(n2());
        let (p, t) = (2.0e5, 450.0);
        let tol = Tolerances::default();
        assert!(nearly_equal(gas.psi(p, t) * p, gas.rho(p, t), tol));
        assert_eq!(gas.z(p, t), 1.0);
    }

    #[test]
    fn cp_m_cv_equals_specific_gas_constant() {
        let s = n2();
        let gas = PerfectGas::new(s.clone());
        assert_eq!(gas.cp_m_cv(1e5, 300.0), s.r());
    }

    #[test]
    fn entropy_contribution_vanishes_at_standard_pressure() {
        let gas = PerfectGas::new(n2());
        assert_eq!(gas.s_contribution(constants::standard_pressure(), 300.0), 0.0);
        assert!(gas.s_contribution(2.0e5, 300.0) < 0.0);
    }

    #[test]
    fn rejects_foreign_coefficient_block() {
        let err = PerfectGas::from_block(n2(), Some(&EosDef::RhoConst { rho: 1000.0 }), "N2");
        assert!(err.is_err());
    }
}
