//! rt-config: canonical thermophysical dictionary format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{
    LIQUID_FUNCTION_KEYS, ValidationError, validate_liquid_block, validate_thermo_package,
};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_thermo_yaml(path: &std::path::Path) -> ConfigResult<ThermoPackageDef> {
    let content = std::fs::read_to_string(path)?;
    let def: ThermoPackageDef = serde_yaml::from_str(&content)?;
    validate_thermo_package(&def)?;
    Ok(def)
}

pub fn save_thermo_yaml(path: &std::path::Path, def: &ThermoPackageDef) -> ConfigResult<()> {
    validate_thermo_package(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_liquid_yaml(path: &std::path::Path) -> ConfigResult<LiquidPropertiesDef> {
    let content = std::fs::read_to_string(path)?;
    let def: LiquidPropertiesDef = serde_yaml::from_str(&content)?;
    Ok(def)
}

pub fn save_liquid_yaml(path: &std::path::Path, def: &LiquidPropertiesDef) -> ConfigResult<()> {
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_constants_yaml(path: &std::path::Path) -> ConfigResult<ConstantsDef> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Bridge a parsed constants dictionary to the registry's input shape.
pub fn to_constant_groups(def: &ConstantsDef) -> rt_core::constants::ConstantGroups {
    def.iter()
        .map(|(group, entries)| {
            (
                group.clone(),
                entries
                    .iter()
                    .map(|(name, value)| (name.clone(), *value))
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rt_core::constants::{ConstantsRegistry, Dimensions};

    #[test]
    fn constants_dictionary_feeds_the_registry() {
        let yaml = r#"
standard:
  Pstd: 101325.0
physicoChemical:
  R: 8314.5
"#;
        let def: ConstantsDef = serde_yaml::from_str(yaml).unwrap();

        let mut reg = ConstantsRegistry::new();
        reg.register_with_default("standard", "Pstd", Dimensions::new(1, -1, -2, 0, 0, 0, 0), 1.0e5);
        reg.register_with_default(
            "physicoChemical",
            "R",
            Dimensions::new(1, 2, -2, -1, -1, 0, 0),
            8314.46261815324,
        );
        reg.reload(&to_constant_groups(&def));

        assert_eq!(reg.value("Pstd").unwrap(), 101325.0);
        assert_eq!(reg.value("R").unwrap(), 8314.5);
    }
}
