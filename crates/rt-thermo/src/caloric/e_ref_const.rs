use rt_config::CaloricDef;
use rt_core::constants;

use crate::eos::EquationOfState;
use crate::error::{ThermoError, ThermoResult};

use super::{Caloric, CaloricFromDef};

/// Constant isochoric heat capacity with an internal-energy reference
/// state: es = cv·(T − Tref) + Eref. The enthalpy side is derived through
/// the owned equation of state.
#[derive(Debug, Clone)]
pub struct ERefConst<E> {
    eos: E,
    cv: f64,
    ef: f64,
    tref: f64,
    eref: f64,
    t_std: f64,
}

impl<E: EquationOfState> ERefConst<E> {
    pub fn new(eos: E, cv: f64, ef: f64, tref: f64, eref: f64) -> ThermoResult<Self> {
        if !cv.is_finite() || cv <= 0.0 {
            return Err(ThermoError::NonPhysical { what: "cv" });
        }
        if !tref.is_finite() || tref <= 0.0 {
            return Err(ThermoError::NonPhysical { what: "Tref" });
        }
        Ok(Self {
            eos,
            cv,
            ef,
            tref,
            eref,
            t_std: constants::standard_temperature(),
        })
    }
}

impl<E: EquationOfState> Caloric for ERefConst<E> {
    type Eos = E;

    fn eos(&self) -> &E {
        &self.eos
    }

    fn cp(&self, p: f64, t: f64) -> f64 {
        self.cv + self.eos.cp_m_cv(p, t)
    }

    fn hs(&self, p: f64, t: f64) -> f64 {
        self.es(p, t) + p / self.eos.rho(p, t)
    }

    fn hf(&self) -> f64 {
        self.ef
    }

    fn s(&self, p: f64, t: f64) -> f64 {
        self.cp(p, t) * (t / self.t_std).ln() + self.eos.s_contribution(p, t)
    }

    // Native quantities, overriding the h-based cross-relations.

    fn es(&self, _p: f64, t: f64) -> f64 {
        self.cv * (t - self.tref) + self.eref
    }

    fn ea(&self, p: f64, t: f64) -> f64 {
        self.es(p, t) + self.ef
    }

    fn cv(&self, _p: f64, _t: f64) -> f64 {
        self.cv
    }
}

impl<E: EquationOfState> CaloricFromDef<E> for ERefConst<E> {
    fn from_block(eos: E, def: &CaloricDef, path: &str) -> ThermoResult<Self> {
        match def {
            CaloricDef::ERefConst { cv, ef, tref, eref } => {
                Self::new(eos, *cv, *ef, *tref, *eref)
            }
            _ => Err(ThermoError::Configuration {
                path: format!("{path}.thermodynamics"),
                reason: "eRefConst requires Cv/Ef/Tref/Eref coefficients".to_string(),
            }),
        }
    }
}
