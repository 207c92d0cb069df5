//! Thermophysical dictionary schema definitions.
//!
//! The key layout matches the dictionaries a case supplies at setup time:
//! a `thermoType` block naming the axis selections, a `species` list in
//! declaration order, and one coefficient block per species. Liquid blocks
//! carry optional scalar constants plus named sub-function entries, so a
//! partially specified block can override an existing model in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level thermophysical properties dictionary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThermoPackageDef {
    #[serde(rename = "thermoType")]
    pub thermo_type: ThermoTypeDef,

    /// Species names in declaration order. Exactly one for pure mixtures.
    pub species: Vec<String>,

    /// Per-species coefficient blocks, keyed by species name.
    #[serde(flatten)]
    pub blocks: BTreeMap<String, SpeciesEntryDef>,
}

/// The five independent axis selections plus the species descriptor kind.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ThermoTypeDef {
    pub mixture: String,
    pub transport: String,
    pub thermo: String,
    #[serde(rename = "equationOfState")]
    pub equation_of_state: String,
    pub specie: String,
    pub energy: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesEntryDef {
    pub specie: SpecieDef,
    pub thermodynamics: CaloricDef,
    /// Absent for equations of state without coefficients (perfect gas).
    #[serde(
        rename = "equationOfState",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub equation_of_state: Option<EosDef>,
    pub transport: TransportDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecieDef {
    /// Molecular weight [kg/kmol].
    #[serde(rename = "molWeight")]
    pub mol_weight: f64,

    /// Elemental composition, element symbol → atom count.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub elements: BTreeMap<String, f64>,
}

/// Caloric coefficient block. Untagged: the field sets of the variants are
/// disjoint, so the block contents select the variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CaloricDef {
    /// Constant cp with an enthalpy reference state.
    HRefConst {
        #[serde(rename = "Cp")]
        cp: f64,
        #[serde(rename = "Hf")]
        hf: f64,
        #[serde(rename = "Tref")]
        tref: f64,
        #[serde(rename = "Href")]
        href: f64,
    },
    /// Constant cv with an internal-energy reference state.
    ERefConst {
        #[serde(rename = "Cv")]
        cv: f64,
        #[serde(rename = "Ef")]
        ef: f64,
        #[serde(rename = "Tref")]
        tref: f64,
        #[serde(rename = "Eref")]
        eref: f64,
    },
    /// JANAF 7-coefficient polynomials over two temperature ranges.
    Janaf {
        #[serde(rename = "Tlow")]
        t_low: f64,
        #[serde(rename = "Thigh")]
        t_high: f64,
        #[serde(rename = "Tcommon")]
        t_common: f64,
        #[serde(rename = "highCpCoeffs")]
        high_cp_coeffs: [f64; 7],
        #[serde(rename = "lowCpCoeffs")]
        low_cp_coeffs: [f64; 7],
    },
}

/// Equation-of-state coefficient block. The perfect-gas variant has no
/// coefficients and must stay last so untagged resolution tries it after
/// the coefficient-bearing forms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EosDef {
    /// Reciprocal polynomial: v = C0 + C1·T + C2·T² − C3·p − C4·p·T.
    RPolynomial {
        #[serde(rename = "C")]
        c: [f64; 5],
    },
    /// Constant density.
    RhoConst { rho: f64 },
    PerfectGas {},
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransportDef {
    /// Dynamic viscosity [Pa·s].
    pub mu: f64,
    /// Prandtl number.
    #[serde(rename = "Pr")]
    pub pr: f64,
}

/// A property function of (p, T), selected by a `type` tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FunctionDef {
    Constant {
        value: f64,
    },
    /// Ascending coefficients in T.
    Polynomial {
        coeffs: Vec<f64>,
    },
    /// Vapor-pressure form: exp(a + b/T + c·ln T).
    Antoine {
        a: f64,
        b: f64,
        c: f64,
    },
    /// Reduced-temperature power law: a·(1 − T/tc)^n.
    Watson {
        a: f64,
        n: f64,
        tc: f64,
    },
}

/// Liquid property block. Every entry is optional: reading a block onto an
/// existing model only replaces what the block names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LiquidPropertiesDef {
    #[serde(rename = "molWeight", default, skip_serializing_if = "Option::is_none")]
    pub mol_weight: Option<f64>,
    #[serde(rename = "Tc", default, skip_serializing_if = "Option::is_none")]
    pub tc: Option<f64>,
    #[serde(rename = "Pc", default, skip_serializing_if = "Option::is_none")]
    pub pc: Option<f64>,
    #[serde(rename = "Vc", default, skip_serializing_if = "Option::is_none")]
    pub vc: Option<f64>,
    #[serde(rename = "Zc", default, skip_serializing_if = "Option::is_none")]
    pub zc: Option<f64>,
    #[serde(rename = "Tt", default, skip_serializing_if = "Option::is_none")]
    pub tt: Option<f64>,
    #[serde(rename = "Pt", default, skip_serializing_if = "Option::is_none")]
    pub pt: Option<f64>,
    #[serde(rename = "Tb", default, skip_serializing_if = "Option::is_none")]
    pub tb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dipm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omega: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,

    /// Heat of formation [J/kg]. Configuring it splits actual from
    /// sensible enthalpy.
    #[serde(rename = "Hf", default, skip_serializing_if = "Option::is_none")]
    pub hf: Option<f64>,
    /// Heat of combustion [J/kg].
    #[serde(rename = "Hc", default, skip_serializing_if = "Option::is_none")]
    pub hc: Option<f64>,

    /// Sub-function blocks keyed by property name (rho, pv, hl, Cp, h,
    /// Cpg, B, mu, mug, kappa, kappag, sigma, D).
    #[serde(flatten)]
    pub functions: BTreeMap<String, FunctionDef>,
}

impl LiquidPropertiesDef {
    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }
}

/// Dimensioned-constant dictionary: group → name → value.
pub type ConstantsDef = BTreeMap<String, BTreeMap<String, f64>>;
