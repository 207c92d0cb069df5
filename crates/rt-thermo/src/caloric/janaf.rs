use rt_config::CaloricDef;
use rt_core::constants;
use rt_core::numeric::polyval;

use crate::eos::EquationOfState;
use crate::error::{ThermoError, ThermoResult};

use super::{Caloric, CaloricFromDef};

/// JANAF/NASA 7-coefficient polynomials over two temperature ranges.
///
/// cp/R  = a0 + a1·T + a2·T² + a3·T³ + a4·T⁴
/// h/RT  = a0 + a1·T/2 + a2·T²/3 + a3·T³/4 + a4·T⁴/5 + a5/T
/// s/R   = a0·ln T + a1·T + a2·T²/2 + a3·T³/3 + a4·T⁴/4 + a6
///
/// The tabulated enthalpy is absolute; the formation part is the value at
/// the standard temperature, captured at construction so sensible and
/// actual enthalpy split consistently.
#[derive(Debug, Clone)]
pub struct Janaf<E> {
    eos: E,
    t_low: f64,
    t_high: f64,
    t_common: f64,
    high: [f64; 7],
    low: [f64; 7],
    hf: f64,
    t_std: f64,
}

impl<E: EquationOfState> Janaf<E> {
    pub fn new(
        eos: E,
        t_low: f64,
        t_high: f64,
        t_common: f64,
        high: [f64; 7],
        low: [f64; 7],
    ) -> ThermoResult<Self> {
        if !(t_low > 0.0 && t_low < t_common && t_common < t_high) {
            return Err(ThermoError::NonPhysical {
                what: "janaf temperature ranges",
            });
        }
        if high.iter().chain(low.iter()).any(|a| !a.is_finite()) {
            return Err(ThermoError::NonPhysical {
                what: "janaf coefficients",
            });
        }
        let t_std = constants::standard_temperature();
        let mut janaf = Self {
            eos,
            t_low,
            t_high,
            t_common,
            high,
            low,
            hf: 0.0,
            t_std,
        };
        janaf.hf = janaf.h_poly(t_std);
        Ok(janaf)
    }

    fn coeffs(&self, t: f64) -> &[f64; 7] {
        if t < self.t_common { &self.low } else { &self.high }
    }

    fn r(&self) -> f64 {
        self.eos.specie().r()
    }

    /// Absolute tabulated enthalpy [J/kg], before any EOS contribution.
    fn h_poly(&self, t: f64) -> f64 {
        let a = self.coeffs(t);
        self.r()
            * (t * (a[0]
                + t * (a[1] / 2.0 + t * (a[2] / 3.0 + t * (a[3] / 4.0 + t * a[4] / 5.0))))
                + a[5])
    }
}

impl<E: EquationOfState> Caloric for Janaf<E> {
    type Eos = E;

    fn eos(&self) -> &E {
        &self.eos
    }

    fn cp(&self, _p: f64, t: f64) -> f64 {
        let t = self.limit(t);
        self.r() * polyval(&self.coeffs(t)[0..5], t)
    }

    fn hs(&self, p: f64, t: f64) -> f64 {
        let t = self.limit(t);
        self.h_poly(t) - self.hf + self.eos.h_contribution(p, t)
    }

    fn hf(&self) -> f64 {
        self.hf
    }

    fn s(&self, p: f64, t: f64) -> f64 {
        let t = self.limit(t);
        let a = self.coeffs(t);
        self.r()
            * (a[0] * t.ln()
                + t * (a[1] + t * (a[2] / 2.0 + t * (a[3] / 3.0 + t * a[4] / 4.0)))
                + a[6])
            + self.eos.s_contribution(p, t)
    }

    /// Clamp to the tabulated range.
    fn limit(&self, t: f64) -> f64 {
        t.clamp(self.t_low, self.t_high)
    }
}

impl<E: EquationOfState> CaloricFromDef<E> for Janaf<E> {
    fn from_block(eos: E, def: &CaloricDef, path: &str) -> ThermoResult<Self> {
        match def {
            CaloricDef::Janaf {
                t_low,
                t_high,
                t_common,
                high_cp_coeffs,
                low_cp_coeffs,
            } => Self::new(eos, *t_low, *t_high, *t_common, *high_cp_coeffs, *low_cp_coeffs),
            _ => Err(ThermoError::Configuration {
                path: format!("{path}.thermodynamics"),
                reason: "janaf requires Tlow/Thigh/Tcommon and both coefficient sets".to_string(),
            }),
        }
    }
}
