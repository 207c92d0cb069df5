use crate::RtError;

/// Floating point type used throughout the system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, RtError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(RtError::NonFinite { what, value: v })
    }
}

/// Horner evaluation of `c[0] + c[1]*x + c[2]*x^2 + ...`.
///
/// Coefficients are in ascending order. An empty slice evaluates to zero.
pub fn polyval(coeffs: &[Real], x: Real) -> Real {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn polyval_ascending_coefficients() {
        // 2 + 3x + x^2 at x = 2 -> 12
        assert_eq!(polyval(&[2.0, 3.0, 1.0], 2.0), 12.0);
        assert_eq!(polyval(&[], 5.0), 0.0);
        assert_eq!(polyval(&[7.5], 123.0), 7.5);
    }

    #[test]
    fn polyval_matches_naive_sum() {
        let coeffs = [1.0, -0.5, 0.25, 1e-3];
        let x: Real = 3.7;
        let naive: Real = coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powi(i as i32))
            .sum();
        assert!(nearly_equal(polyval(&coeffs, x), naive, Tolerances::default()));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn polyval_linear_case(a in -1e3_f64..1e3, b in -1e3_f64..1e3, x in -1e2_f64..1e2) {
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            prop_assert!(nearly_equal(polyval(&[a, b], x), a + b * x, tol));
        }
    }
}
