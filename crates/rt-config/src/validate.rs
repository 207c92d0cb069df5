//! Dictionary validation logic.

use crate::schema::{LiquidPropertiesDef, SpeciesEntryDef, ThermoPackageDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate species: {name}")]
    DuplicateSpecies { name: String },

    #[error("Missing coefficient block for species: {name}")]
    MissingSpeciesBlock { name: String },

    #[error("Empty species list")]
    EmptySpecies,

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown liquid property key: {name}")]
    UnknownLiquidKey { name: String },
}

/// The recognized liquid sub-function names, in write order.
pub const LIQUID_FUNCTION_KEYS: [&str; 13] = [
    "rho", "pv", "hl", "Cp", "h", "Cpg", "B", "mu", "mug", "kappa", "kappag", "sigma", "D",
];

pub fn validate_thermo_package(def: &ThermoPackageDef) -> Result<(), ValidationError> {
    if def.species.is_empty() {
        return Err(ValidationError::EmptySpecies);
    }

    let mut seen = HashSet::new();
    for name in &def.species {
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateSpecies { name: name.clone() });
        }
        let block = def
            .blocks
            .get(name)
            .ok_or_else(|| ValidationError::MissingSpeciesBlock { name: name.clone() })?;
        validate_species_entry(name, block)?;
    }

    Ok(())
}

fn validate_species_entry(name: &str, block: &SpeciesEntryDef) -> Result<(), ValidationError> {
    let w = block.specie.mol_weight;
    if !w.is_finite() || w <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{name}.specie.molWeight"),
            value: w.to_string(),
            reason: "molecular weight must be positive and finite".to_string(),
        });
    }

    let mu = block.transport.mu;
    if !mu.is_finite() || mu < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{name}.transport.mu"),
            value: mu.to_string(),
            reason: "viscosity must be non-negative and finite".to_string(),
        });
    }

    let pr = block.transport.pr;
    if !pr.is_finite() || pr <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("{name}.transport.Pr"),
            value: pr.to_string(),
            reason: "Prandtl number must be positive and finite".to_string(),
        });
    }

    Ok(())
}

/// Strict pass over a liquid block: reports sub-function names outside the
/// recognized set. The in-place read ignores them; solvers that want typos
/// to be hard errors call this first.
pub fn validate_liquid_block(def: &LiquidPropertiesDef) -> Result<(), ValidationError> {
    for name in def.functions.keys() {
        if !LIQUID_FUNCTION_KEYS.contains(&name.as_str()) {
            return Err(ValidationError::UnknownLiquidKey { name: name.clone() });
        }
    }

    for (field, value) in [
        ("Tc", def.tc),
        ("Pc", def.pc),
        ("Vc", def.vc),
        ("Tt", def.tt),
        ("Pt", def.pt),
        ("Tb", def.tb),
    ] {
        if let Some(v) = value {
            if !v.is_finite() || v <= 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    value: v.to_string(),
                    reason: "must be positive and finite".to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CaloricDef, FunctionDef, SpecieDef, ThermoTypeDef, TransportDef};
    use std::collections::BTreeMap;

    fn thermo_type() -> ThermoTypeDef {
        ThermoTypeDef {
            mixture: "pureMixture".to_string(),
            transport: "const".to_string(),
            thermo: "hRefConst".to_string(),
            equation_of_state: "perfectGas".to_string(),
            specie: "specie".to_string(),
            energy: "sensibleEnthalpy".to_string(),
        }
    }

    fn entry(mol_weight: f64, mu: f64, pr: f64) -> SpeciesEntryDef {
        SpeciesEntryDef {
            specie: SpecieDef {
                mol_weight,
                elements: BTreeMap::new(),
            },
            thermodynamics: CaloricDef::HRefConst {
                cp: 1000.0,
                hf: 0.0,
                tref: 298.15,
                href: 0.0,
            },
            equation_of_state: None,
            transport: TransportDef { mu, pr },
        }
    }

    fn package(species: &[&str]) -> ThermoPackageDef {
        ThermoPackageDef {
            thermo_type: thermo_type(),
            species: species.iter().map(|s| s.to_string()).collect(),
            blocks: species
                .iter()
                .map(|s| (s.to_string(), entry(28.0, 1.8e-5, 0.7)))
                .collect(),
        }
    }

    #[test]
    fn valid_package_passes() {
        assert!(validate_thermo_package(&package(&["N2"])).is_ok());
    }

    #[test]
    fn empty_species_rejected() {
        let mut def = package(&["N2"]);
        def.species.clear();
        assert!(matches!(
            validate_thermo_package(&def),
            Err(ValidationError::EmptySpecies)
        ));
    }

    #[test]
    fn duplicate_species_rejected() {
        let mut def = package(&["N2"]);
        def.species.push("N2".to_string());
        assert!(matches!(
            validate_thermo_package(&def),
            Err(ValidationError::DuplicateSpecies { .. })
        ));
    }

    #[test]
    fn missing_block_rejected() {
        let mut def = package(&["N2"]);
        def.species.push("O2".to_string());
        assert!(matches!(
            validate_thermo_package(&def),
            Err(ValidationError::MissingSpeciesBlock { name }) if name == "O2"
        ));
    }

    #[test]
    fn bad_mol_weight_rejected() {
        let mut def = package(&["N2"]);
        def.blocks.get_mut("N2").unwrap().specie.mol_weight = -1.0;
        assert!(matches!(
            validate_thermo_package(&def),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn strict_liquid_pass_flags_unknown_key() {
        let mut def = LiquidPropertiesDef::default();
        def.functions
            .insert("sgima".to_string(), FunctionDef::Constant { value: 1.0 });
        assert!(matches!(
            validate_liquid_block(&def),
            Err(ValidationError::UnknownLiquidKey { name }) if name == "sgima"
        ));
    }

    #[test]
    fn strict_liquid_pass_accepts_known_keys() {
        let mut def = LiquidPropertiesDef::default();
        def.tc = Some(540.2);
        def.functions
            .insert("sigma".to_string(), FunctionDef::Constant { value: 0.05 });
        def.functions.insert(
            "rho".to_string(),
            FunctionDef::Polynomial {
                coeffs: vec![1000.0, -0.1],
            },
        );
        assert!(validate_liquid_block(&def).is_ok());
    }
}
