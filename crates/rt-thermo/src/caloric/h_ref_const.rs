use rt_config::CaloricDef;
use rt_core::constants;

use crate::eos::EquationOfState;
use crate::error::{ThermoError, ThermoResult};

use super::{Caloric, CaloricFromDef};

/// Constant heat capacity with an enthalpy reference state:
/// hs = cp·(T − Tref) + Href.
#[derive(Debug, Clone)]
pub struct HRefConst<E> {
    eos: E,
    cp: f64,
    hf: f64,
    tref: f64,
    href: f64,
    /// Entropy datum temperature, captured at construction.
    t_std: f64,
}

impl<E: EquationOfState> HRefConst<E> {
    pub fn new(eos: E, cp: f64, hf: f64, tref: f64, href: f64) -> ThermoResult<Self> {
        if !cp.is_finite() || cp <= 0.0 {
            return Err(ThermoError::NonPhysical { what: "cp" });
        }
        if !tref.is_finite() || tref <= 0.0 {
            return Err(ThermoError::NonPhysical { what: "Tref" });
        }
        Ok(Self {
            eos,
            cp,
            hf,
            tref,
            href,
            t_std: constants::standard_temperature(),
        })
    }
}

impl<E: EquationOfState> Caloric for HRefConst<E> {
    type Eos = E;

    fn eos(&self) -> &E {
        &self.eos
    }

    fn cp(&self, _p: f64, _t: f64) -> f64 {
        self.cp
    }

    fn hs(&self, p: f64, t: f64) -> f64 {
        self.cp * (t - self.tref) + self.href + self.eos.h_contribution(p, t)
    }

    fn hf(&self) -> f64 {
        self.hf
    }

    fn s(&self, p: f64, t: f64) -> f64 {
        self.cp * (t / self.t_std).ln() + self.eos.s_contribution(p, t)
    }
}

impl<E: EquationOfState> CaloricFromDef<E> for HRefConst<E> {
    fn from_block(eos: E, def: &CaloricDef, path: &str) -> ThermoResult<Self> {
        match def {
            CaloricDef::HRefConst { cp, hf, tref, href } => {
                Self::new(eos, *cp, *hf, *tref, *href)
            }
            _ => Err(ThermoError::Configuration {
                path: format!("{path}.thermodynamics"),
                reason: "hRefConst requires Cp/Hf/Tref/Href coefficients".to_string(),
            }),
        }
    }
}
