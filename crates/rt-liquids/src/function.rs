//! Property functions of (p, T).

use rt_config::FunctionDef;
use rt_core::numeric::polyval;

/// A pure property correlation.
///
/// Most published correlations depend on temperature only; pressure is
/// accepted so every sub-property shares one call shape.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyFunction {
    Constant {
        value: f64,
    },
    /// Ascending polynomial in T.
    Polynomial {
        coeffs: Vec<f64>,
    },
    /// exp(a + b/T + c·ln T) — vapor-pressure and viscosity form.
    Antoine {
        a: f64,
        b: f64,
        c: f64,
    },
    /// a·(1 − T/tc)^n — latent-heat and surface-tension form, zero at and
    /// above the critical temperature.
    Watson {
        a: f64,
        n: f64,
        tc: f64,
    },
}

impl PropertyFunction {
    pub fn evaluate(&self, _p: f64, t: f64) -> f64 {
        match self {
            PropertyFunction::Constant { value } => *value,
            PropertyFunction::Polynomial { coeffs } => polyval(coeffs, t),
            PropertyFunction::Antoine { a, b, c } => (a + b / t + c * t.ln()).exp(),
            PropertyFunction::Watson { a, n, tc } => a * (1.0 - t / tc).max(0.0).powf(*n),
        }
    }

    pub fn from_def(def: &FunctionDef) -> Self {
        match def {
            FunctionDef::Constant { value } => PropertyFunction::Constant { value: *value },
            FunctionDef::Polynomial { coeffs } => PropertyFunction::Polynomial {
                coeffs: coeffs.clone(),
            },
            FunctionDef::Antoine { a, b, c } => PropertyFunction::Antoine {
                a: *a,
                b: *b,
                c: *c,
            },
            FunctionDef::Watson { a, n, tc } => PropertyFunction::Watson {
                a: *a,
                n: *n,
                tc: *tc,
            },
        }
    }

    pub fn to_def(&self) -> FunctionDef {
        match self {
            PropertyFunction::Constant { value } => FunctionDef::Constant { value: *value },
            PropertyFunction::Polynomial { coeffs } => FunctionDef::Polynomial {
                coeffs: coeffs.clone(),
            },
            PropertyFunction::Antoine { a, b, c } => FunctionDef::Antoine {
                a: *a,
                b: *b,
                c: *c,
            },
            PropertyFunction::Watson { a, n, tc } => FunctionDef::Watson {
                a: *a,
                n: *n,
                tc: *tc,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_core::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constant_ignores_state() {
        let f = PropertyFunction::Constant { value: 42.0 };
        assert_eq!(f.evaluate(1e5, 300.0), 42.0);
        assert_eq!(f.evaluate(9e9, 1.0), 42.0);
    }

    #[test]
    fn polynomial_is_ascending_in_t() {
        let f = PropertyFunction::Polynomial {
            coeffs: vec![1.0, 2.0, 3.0],
        };
        // 1 + 2·2 + 3·4 = 17
        assert_eq!(f.evaluate(1e5, 2.0), 17.0);
    }

    #[test]
    fn antoine_reduces_to_exponential() {
        let f = PropertyFunction::Antoine {
            a: 1.0,
            b: 0.0,
            c: 0.0,
        };
        let tol = Tolerances::default();
        assert!(nearly_equal(f.evaluate(1e5, 300.0), 1.0_f64.exp(), tol));
    }

    #[test]
    fn watson_vanishes_at_critical_point() {
        let f = PropertyFunction::Watson {
            a: 2.0e6,
            n: 0.38,
            tc: 540.0,
        };
        assert_eq!(f.evaluate(1e5, 540.0), 0.0);
        assert_eq!(f.evaluate(1e5, 600.0), 0.0);
        assert!(f.evaluate(1e5, 300.0) > 0.0);
        // Latent heat decreases toward the critical point.
        assert!(f.evaluate(1e5, 300.0) > f.evaluate(1e5, 500.0));
    }

    #[test]
    fn evaluation_is_pressure_independent_for_t_only_forms() {
        let f = PropertyFunction::Watson {
            a: 2.0e6,
            n: 0.38,
            tc: 540.0,
        };
        assert_eq!(f.evaluate(1e5, 400.0), f.evaluate(8e6, 400.0));
    }

    #[test]
    fn def_conversion_roundtrips() {
        let functions = [
            PropertyFunction::Constant { value: 1.5 },
            PropertyFunction::Polynomial {
                coeffs: vec![0.5, -1.0],
            },
            PropertyFunction::Antoine {
                a: 20.0,
                b: -5000.0,
                c: -3.0,
            },
            PropertyFunction::Watson {
                a: 3.0e6,
                n: 0.38,
                tc: 647.1,
            },
        ];
        for f in functions {
            assert_eq!(PropertyFunction::from_def(&f.to_def()), f);
        }
    }
}
