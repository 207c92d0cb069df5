use std::sync::Arc;

use rt_config::EosDef;

use crate::error::{ThermoError, ThermoResult};
use crate::species::Specie;

use super::{EosFromDef, EquationOfState};

/// Reciprocal polynomial of specific volume, suited to liquids and weakly
/// compressible fluids:
///
/// v = C0 + C1·T + C2·T² − C3·p − C4·p·T
#[derive(Debug, Clone)]
pub struct RPolynomial {
    specie: Arc<Specie>,
    c: [f64; 5],
}

impl RPolynomial {
    pub fn new(specie: Arc<Specie>, c: [f64; 5]) -> ThermoResult<Self> {
        if c.iter().any(|ci| !ci.is_finite()) {
            return Err(ThermoError::NonPhysical {
                what: "rPolynomial coefficients",
            });
        }
        Ok(Self { specie, c })
    }

    /// Specific volume [m³/kg].
    fn v(&self, p: f64, t: f64) -> f64 {
        let c = &self.c;
        c[0] + c[1] * t + c[2] * t * t - c[3] * p - c[4] * p * t
    }

    /// ∂v/∂T at constant p.
    fn dvdt(&self, p: f64, t: f64) -> f64 {
        self.c[1] + 2.0 * self.c[2] * t - self.c[4] * p
    }

    /// −∂v/∂p at constant T.
    fn dvdp_neg(&self, t: f64) -> f64 {
        self.c[3] + self.c[4] * t
    }
}

impl EquationOfState for RPolynomial {
    fn specie(&self) -> &Specie {
        &self.specie
    }

    fn rho(&self, p: f64, t: f64) -> f64 {
        1.0 / self.v(p, t)
    }

    fn psi(&self, p: f64, t: f64) -> f64 {
        let v = self.v(p, t);
        self.dvdp_neg(t) / (v * v)
    }

    fn z(&self, p: f64, t: f64) -> f64 {
        p * self.v(p, t) / (self.specie.r() * t)
    }

    fn cp_m_cv(&self, p: f64, t: f64) -> f64 {
        // −T·(∂v/∂T)²/(∂v/∂p); zero for the pressure-independent fit.
        let dvdp_neg = self.dvdp_neg(t);
        if dvdp_neg == 0.0 {
            return 0.0;
        }
        let dvdt = self.dvdt(p, t);
        t * dvdt * dvdt / dvdp_neg
    }

    fn h_contribution(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn s_contribution(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }
}

impl EosFromDef for RPolynomial {
    fn from_block(specie: Arc<Specie>, eos: Option<&EosDef>, path: &str) -> ThermoResult<Self> {
        match eos {
            Some(EosDef::RPolynomial { c }) => Self::new(specie, *c),
            _ => Err(ThermoError::Configuration {
                path: format!("{path}.equationOfState"),
                reason: "rPolynomial requires a 5-entry `C` coefficient list".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_core::numeric::{Tolerances, nearly_equal};
    use std::collections::BTreeMap;

    fn specie() -> Arc<Specie> {
        Arc::new(
            Specie::from_def(
                "H2O",
                &rt_config::SpecieDef {
                    mol_weight: 18.015,
                    elements: BTreeMap::new(),
                },
            )
            .unwrap(),
        )
    }

    // Liquid-water-like fit used across the r-polynomial tests.
    const C: [f64; 5] = [1.0e-3, 2.0e-7, 1.0e-9, 1.0e-13, 1.0e-16];

    #[test]
    fn density_is_reciprocal_volume() {
        let eos = RPolynomial::new(specie(), C).unwrap();
        let (p, t) = (1e5, 300.0);
        let v = C[0] + C[1] * t + C[2] * t * t - C[3] * p - C[4] * p * t;
        assert_eq!(eos.rho(p, t), 1.0 / v);
    }

    #[test]
    fn psi_matches_finite_difference() {
        let eos = RPolynomial::new(specie(), C).unwrap();
        let (p, t) = (1e5, 300.0);
        let dp = 100.0;
        let numeric = (eos.rho(p + dp, t) - eos.rho(p - dp, t)) / (2.0 * dp);
        assert!(nearly_equal(
            eos.psi(p, t),
            numeric,
            Tolerances { abs: 1e-12, rel: 1e-6 }
        ));
    }

    #[test]
    fn cp_m_cv_is_zero_for_pressure_independent_fit() {
        let eos = RPolynomial::new(specie(), [1.0e-3, 2.0e-7, 1.0e-9, 0.0, 0.0]).unwrap();
        assert_eq!(eos.cp_m_cv(1e5, 300.0), 0.0);
    }

    #[test]
    fn cp_m_cv_positive_for_compressible_fit() {
        let eos = RPolynomial::new(specie(), C).unwrap();
        assert!(eos.cp_m_cv(1e5, 300.0) > 0.0);
    }

    #[test]
    fn requires_coefficient_block() {
        assert!(RPolynomial::from_block(specie(), None, "H2O").is_err());
    }
}
