//! Compiled water model.

use rt_config::{FunctionDef, LiquidPropertiesDef};

use crate::liquid::LiquidProperties;

/// Liquid water with literature correlations for every sub-function.
///
/// Valid from just above the triple point to near the normal boiling
/// point; the correlations degrade gracefully toward the critical point.
pub fn water() -> LiquidProperties {
    let mut def = LiquidPropertiesDef {
        mol_weight: Some(18.015),
        tc: Some(647.096),
        pc: Some(22.064e6),
        vc: Some(0.003106),
        zc: Some(0.229),
        tt: Some(273.16),
        pt: Some(611.66),
        tb: Some(373.15),
        dipm: Some(1.8),
        omega: Some(0.3449),
        delta: Some(47.8e3),
        ..Default::default()
    };

    let functions: [(&str, FunctionDef); 13] = [
        (
            "rho",
            FunctionDef::Polynomial {
                coeffs: vec![765.33, 1.8142, -0.0035],
            },
        ),
        (
            "pv",
            FunctionDef::Antoine {
                a: 74.23,
                b: -7258.2,
                c: -7.3037,
            },
        ),
        (
            "hl",
            FunctionDef::Watson {
                a: 3.086e6,
                n: 0.38,
                tc: 647.096,
            },
        ),
        (
            "Cp",
            FunctionDef::Polynomial {
                coeffs: vec![
                    6.73532071e5,
                    -1.20295166e4,
                    9.02139176e1,
                    -3.61290267e-1,
                    8.14780736e-4,
                    -9.80939941e-7,
                    4.92521605e-10,
                ],
            },
        ),
        (
            "h",
            FunctionDef::Polynomial {
                coeffs: vec![-1_248_354.05, 4187.0],
            },
        ),
        (
            "Cpg",
            FunctionDef::Polynomial {
                coeffs: vec![1850.0, 0.28],
            },
        ),
        (
            "B",
            FunctionDef::Polynomial {
                coeffs: vec![-0.0012, 1.2e-6],
            },
        ),
        (
            "mu",
            FunctionDef::Antoine {
                a: -12.992,
                b: 1776.7,
                c: 0.0,
            },
        ),
        (
            "mug",
            FunctionDef::Polynomial {
                coeffs: vec![-2.8e-6, 4.0e-8],
            },
        ),
        (
            "kappa",
            FunctionDef::Polynomial {
                coeffs: vec![-0.432, 5.725e-3, -8.078e-6, 1.861e-9],
            },
        ),
        (
            "kappag",
            FunctionDef::Polynomial {
                coeffs: vec![-7.4e-3, 8.7e-5],
            },
        ),
        (
            "sigma",
            FunctionDef::Watson {
                a: 0.13415,
                n: 0.99,
                tc: 647.3,
            },
        ),
        (
            "D",
            FunctionDef::Polynomial {
                coeffs: vec![-1.813e-6, 2.90e-8, 2.12e-10],
            },
        ),
    ];
    for (key, f) in functions {
        def.functions.insert(key.to_string(), f);
    }

    LiquidProperties::from_def(&def).expect("compiled water block is complete")
}
