use std::sync::Arc;

use rt_config::EosDef;

use crate::error::{ThermoError, ThermoResult};
use crate::species::Specie;

use super::{EosFromDef, EquationOfState};

/// Constant density, independent of pressure and temperature.
#[derive(Debug, Clone)]
pub struct RhoConst {
    specie: Arc<Specie>,
    rho: f64,
}

impl RhoConst {
    pub fn new(specie: Arc<Specie>, rho: f64) -> ThermoResult<Self> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(ThermoError::NonPhysical { what: "density" });
        }
        Ok(Self { specie, rho })
    }
}

impl EquationOfState for RhoConst {
    fn specie(&self) -> &Specie {
        &self.specie
    }

    fn rho(&self, _p: f64, _t: f64) -> f64 {
        self.rho
    }

    fn psi(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    fn z(&self, p: f64, t: f64) -> f64 {
        p / (self.rho * self.specie.r() * t)
    }

    fn cp_m_cv(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }

    /// Flow work of the incompressible substance.
    fn h_contribution(&self, p: f64, _t: f64) -> f64 {
        p / self.rho
    }

    fn s_contribution(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }
}

impl EosFromDef for RhoConst {
    fn from_block(specie: Arc<Specie>, eos: Option<&EosDef>, path: &str) -> ThermoResult<Self> {
        match eos {
            Some(EosDef::RhoConst { rho }) => Self::new(specie, *rho),
            _ => Err(ThermoError::Configuration {
                path: format!("{path}.equationOfState"),
                reason: "rhoConst requires a `rho` coefficient".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn water_vapor() -> Arc<Specie> {
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

    #[test]
    fn density_is_constant() {
        let eos = RhoConst::new(water_vapor(), 998.2).unwrap();
        assert_eq!(eos.rho(1e5, 300.0), 998.2);
        assert_eq!(eos.rho(5e6, 500.0), 998.2);
        assert_eq!(eos.psi(1e5, 300.0), 0.0);
        assert_eq!(eos.cp_m_cv(1e5, 300.0), 0.0);
    }

    #[test]
    fn enthalpy_contribution_is_flow_work() {
        let eos = RhoConst::new(water_vapor(), 1000.0).unwrap();
        assert_eq!(eos.h_contribution(1e5, 300.0), 100.0);
    }

    #[test]
    fn requires_coefficient_block() {
        let err = RhoConst::from_block(water_vapor(), None, "H2O");
        assert!(matches!(err, Err(ThermoError::Configuration { .. })));
    }

    #[test]
    fn rejects_non_physical_density() {
        assert!(RhoConst::new(water_vapor(), 0.0).is_err());
        assert!(RhoConst::new(water_vapor(), f64::INFINITY).is_err());
    }
}
