//! Chemical species descriptor.

use std::collections::BTreeMap;

use rt_config::SpecieDef;
use rt_core::constants;

use crate::error::{ThermoError, ThermoResult};

/// Identity, molecular weight, and elemental composition of one species.
///
/// Immutable after construction. The specific gas constant is captured here
/// so repeated property evaluation never touches the constants registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Specie {
    name: String,
    /// Molecular weight [kg/kmol].
    mol_weight: f64,
    /// Element symbol → atom count.
    elements: BTreeMap<String, f64>,
    /// Specific gas constant [J/(kg·K)].
    r: f64,
}

impl Specie {
    pub fn from_def(name: &str, def: &SpecieDef) -> ThermoResult<Self> {
        if !def.mol_weight.is_finite() || def.mol_weight <= 0.0 {
            return Err(ThermoError::Configuration {
                path: format!("{name}.specie.molWeight"),
                reason: "molecular weight must be positive and finite".to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            mol_weight: def.mol_weight,
            elements: def.elements.clone(),
            r: constants::universal_gas_constant() / def.mol_weight,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Molecular weight [kg/kmol].
    pub fn w(&self) -> f64 {
        self.mol_weight
    }

    /// Specific gas constant [J/(kg·K)].
    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn elements(&self) -> &BTreeMap<String, f64> {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(mol_weight: f64) -> SpecieDef {
        SpecieDef {
            mol_weight,
            elements: BTreeMap::new(),
        }
    }

    #[test]
    fn specific_gas_constant_from_molecular_weight() {
        let n2 = Specie::from_def("N2", &def(28.014)).unwrap();
        // R/W = 8314.46/28.014
        assert!((n2.r() - 296.8).abs() < 0.1);
        assert_eq!(n2.name(), "N2");
        assert_eq!(n2.w(), 28.014);
    }

    #[test]
    fn rejects_non_positive_molecular_weight() {
        assert!(Specie::from_def("bad", &def(0.0)).is_err());
        assert!(Specie::from_def("bad", &def(-5.0)).is_err());
        assert!(Specie::from_def("bad", &def(f64::NAN)).is_err());
    }

    #[test]
    fn keeps_elemental_composition() {
        let mut d = def(16.043);
        d.elements.insert("C".to_string(), 1.0);
        d.elements.insert("H".to_string(), 4.0);
        let ch4 = Specie::from_def("CH4", &d).unwrap();
        assert_eq!(ch4.elements()["H"], 4.0);
    }
}
