//! Thermo-package factory.
//!
//! A configuration dictionary names five independent axis selections; the
//! factory matches them against the registration table of compiled
//! combinations and constructs the matching composite. The table is built
//! by explicit `register` calls — the compiled set is fixed at build time,
//! and anything outside it is a configuration error, never a fallback.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use rt_config::{ThermoPackageDef, ThermoTypeDef, validate_thermo_package};

use crate::basis::{EnergyBasis, SensibleEnthalpy, SensibleInternalEnergy};
use crate::caloric::{CaloricFromDef, ERefConst, HRefConst, Janaf};
use crate::eos::{EosFromDef, PerfectGas, RPolynomial, RhoConst};
use crate::error::{ThermoError, ThermoResult};
use crate::mixture::{MultiComponentMixture, PureMixture};
use crate::package::{MixtureThermoPackage, ThermoPackage};
use crate::species::Specie;
use crate::species_thermo::SpeciesThermo;
use crate::transport::{ConstTransport, TransportFromDef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MixtureTag {
    Pure,
    MultiComponent,
}

impl MixtureTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            MixtureTag::Pure => "pureMixture",
            MixtureTag::MultiComponent => "multiComponentMixture",
        }
    }
}

impl FromStr for MixtureTag {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pureMixture" => Ok(MixtureTag::Pure),
            "multiComponentMixture" => Ok(MixtureTag::MultiComponent),
            _ => Err("unknown mixture kind"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportTag {
    Const,
}

impl TransportTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportTag::Const => "const",
        }
    }
}

impl FromStr for TransportTag {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "const" => Ok(TransportTag::Const),
            _ => Err("unknown transport kind"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaloricTag {
    HRefConst,
    ERefConst,
    Janaf,
}

impl CaloricTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaloricTag::HRefConst => "hRefConst",
            CaloricTag::ERefConst => "eRefConst",
            CaloricTag::Janaf => "janaf",
        }
    }
}

impl FromStr for CaloricTag {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hRefConst" => Ok(CaloricTag::HRefConst),
            "eRefConst" => Ok(CaloricTag::ERefConst),
            "janaf" => Ok(CaloricTag::Janaf),
            _ => Err("unknown thermo kind"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EosTag {
    PerfectGas,
    RPolynomial,
    RhoConst,
}

impl EosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EosTag::PerfectGas => "perfectGas",
            EosTag::RPolynomial => "rPolynomial",
            EosTag::RhoConst => "rhoConst",
        }
    }
}

impl FromStr for EosTag {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perfectGas" => Ok(EosTag::PerfectGas),
            "rPolynomial" => Ok(EosTag::RPolynomial),
            "rhoConst" => Ok(EosTag::RhoConst),
            _ => Err("unknown equation of state"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyTag {
    SensibleEnthalpy,
    SensibleInternalEnergy,
}

impl EnergyTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyTag::SensibleEnthalpy => "sensibleEnthalpy",
            EnergyTag::SensibleInternalEnergy => "sensibleInternalEnergy",
        }
    }
}

impl FromStr for EnergyTag {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sensibleEnthalpy" => Ok(EnergyTag::SensibleEnthalpy),
            "sensibleInternalEnergy" => Ok(EnergyTag::SensibleInternalEnergy),
            _ => Err("unknown energy basis"),
        }
    }
}

/// The raw axis selections as requested by the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelSelection {
    pub mixture: String,
    pub transport: String,
    pub thermo: String,
    pub equation_of_state: String,
    pub specie: String,
    pub energy: String,
}

impl ModelSelection {
    pub fn from_def(def: &ThermoTypeDef) -> Self {
        Self {
            mixture: def.mixture.clone(),
            transport: def.transport.clone(),
            thermo: def.thermo.clone(),
            equation_of_state: def.equation_of_state.clone(),
            specie: def.specie.clone(),
            energy: def.energy.clone(),
        }
    }
}

impl fmt::Display for ModelSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {} {} {} {})",
            self.mixture,
            self.transport,
            self.thermo,
            self.equation_of_state,
            self.specie,
            self.energy
        )
    }
}

/// Parsed tag tuple — the key into the combination table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagTuple {
    pub mixture: MixtureTag,
    pub transport: TransportTag,
    pub thermo: CaloricTag,
    pub eos: EosTag,
    pub energy: EnergyTag,
}

impl TagTuple {
    /// Parse the dictionary selections; `None` for any unrecognized tag.
    pub fn parse(def: &ThermoTypeDef) -> Option<Self> {
        if def.specie != "specie" {
            return None;
        }
        Some(Self {
            mixture: def.mixture.parse().ok()?,
            transport: def.transport.parse().ok()?,
            thermo: def.thermo.parse().ok()?,
            eos: def.equation_of_state.parse().ok()?,
            energy: def.energy.parse().ok()?,
        })
    }
}

impl fmt::Display for TagTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} {} {} {} specie {})",
            self.mixture.as_str(),
            self.transport.as_str(),
            self.thermo.as_str(),
            self.eos.as_str(),
            self.energy.as_str()
        )
    }
}

type BuildFn = fn(&ThermoPackageDef, ModelSelection) -> ThermoResult<Box<dyn ThermoPackage>>;

/// Registration table mapping tag tuples to monomorphized builders.
#[derive(Default)]
pub struct CombinationTable {
    builders: Vec<(TagTuple, BuildFn)>,
}

impl CombinationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tags: TagTuple, build: BuildFn) {
        debug_assert!(
            !self.builders.iter().any(|(t, _)| *t == tags),
            "duplicate combination registered"
        );
        self.builders.push((tags, build));
    }

    /// Canonical strings of every registered tuple.
    pub fn known(&self) -> Vec<String> {
        self.builders.iter().map(|(t, _)| t.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Select and construct the package the dictionary requests.
    pub fn create(&self, def: &ThermoPackageDef) -> ThermoResult<Box<dyn ThermoPackage>> {
        validate_thermo_package(def)?;
        let selection = ModelSelection::from_def(&def.thermo_type);
        let Some(tags) = TagTuple::parse(&def.thermo_type) else {
            return Err(self.unknown(&selection));
        };
        let Some(build) = self
            .builders
            .iter()
            .find(|(t, _)| *t == tags)
            .map(|(_, b)| *b)
        else {
            return Err(self.unknown(&selection));
        };
        tracing::debug!(selection = %selection, "building thermo package");
        build(def, selection)
    }

    fn unknown(&self, selection: &ModelSelection) -> ThermoError {
        ThermoError::UnknownModelCombination {
            requested: selection.to_string(),
            known: self.known(),
        }
    }
}

fn species_thermo<E, C, B>(
    name: &str,
    def: &ThermoPackageDef,
) -> ThermoResult<SpeciesThermo<C, ConstTransport, B>>
where
    E: EosFromDef,
    C: CaloricFromDef<E>,
    B: EnergyBasis,
{
    let block = def.blocks.get(name).ok_or_else(|| ThermoError::Configuration {
        path: name.to_string(),
        reason: "no coefficient block for listed species".to_string(),
    })?;
    let specie = Arc::new(Specie::from_def(name, &block.specie)?);
    let eos = E::from_block(specie, block.equation_of_state.as_ref(), name)?;
    let caloric = C::from_block(eos, &block.thermodynamics, name)?;
    let transport = ConstTransport::from_block(&block.transport, name)?;
    Ok(SpeciesThermo::new(caloric, transport))
}

fn build_pure<E, C, B>(
    def: &ThermoPackageDef,
    selection: ModelSelection,
) -> ThermoResult<Box<dyn ThermoPackage>>
where
    E: EosFromDef + 'static,
    C: CaloricFromDef<E> + 'static,
    B: EnergyBasis,
{
    if def.species.len() != 1 {
        return Err(ThermoError::Configuration {
            path: "species".to_string(),
            reason: format!(
                "pureMixture requires exactly one species, got {}",
                def.species.len()
            ),
        });
    }
    let st = species_thermo::<E, C, B>(&def.species[0], def)?;
    Ok(Box::new(MixtureThermoPackage::new(
        selection,
        PureMixture::new(st),
    )))
}

fn build_multi<E, C, B>(
    def: &ThermoPackageDef,
    selection: ModelSelection,
) -> ThermoResult<Box<dyn ThermoPackage>>
where
    E: EosFromDef + 'static,
    C: CaloricFromDef<E> + 'static,
    B: EnergyBasis,
{
    let entries = def
        .species
        .iter()
        .map(|name| species_thermo::<E, C, B>(name, def))
        .collect::<ThermoResult<Vec<_>>>()?;
    Ok(Box::new(MixtureThermoPackage::new(
        selection,
        MultiComponentMixture::new(entries)?,
    )))
}

const fn tags(mixture: MixtureTag, thermo: CaloricTag, eos: EosTag, energy: EnergyTag) -> TagTuple {
    TagTuple {
        mixture,
        transport: TransportTag::Const,
        thermo,
        eos,
        energy,
    }
}

/// The compiled combination set.
pub fn standard_combinations() -> CombinationTable {
    use CaloricTag as Th;
    use EnergyTag as En;
    use EosTag as Eq;
    use MixtureTag as Mx;

    let mut table = CombinationTable::new();

    // pureMixture, sensibleEnthalpy:
    table.register(
        tags(Mx::Pure, Th::HRefConst, Eq::PerfectGas, En::SensibleEnthalpy),
        build_pure::<PerfectGas, HRefConst<PerfectGas>, SensibleEnthalpy>,
    );
    table.register(
        tags(Mx::Pure, Th::HRefConst, Eq::RPolynomial, En::SensibleEnthalpy),
        build_pure::<RPolynomial, HRefConst<RPolynomial>, SensibleEnthalpy>,
    );
    table.register(
        tags(Mx::Pure, Th::HRefConst, Eq::RhoConst, En::SensibleEnthalpy),
        build_pure::<RhoConst, HRefConst<RhoConst>, SensibleEnthalpy>,
    );

    // pureMixture, sensibleInternalEnergy:
    table.register(
        tags(Mx::Pure, Th::ERefConst, Eq::PerfectGas, En::SensibleInternalEnergy),
        build_pure::<PerfectGas, ERefConst<PerfectGas>, SensibleInternalEnergy>,
    );
    table.register(
        tags(Mx::Pure, Th::ERefConst, Eq::RPolynomial, En::SensibleInternalEnergy),
        build_pure::<RPolynomial, ERefConst<RPolynomial>, SensibleInternalEnergy>,
    );
    table.register(
        tags(Mx::Pure, Th::ERefConst, Eq::RhoConst, En::SensibleInternalEnergy),
        build_pure::<RhoConst, ERefConst<RhoConst>, SensibleInternalEnergy>,
    );

    // multiComponentMixture, sensibleInternalEnergy:
    table.register(
        tags(Mx::MultiComponent, Th::ERefConst, Eq::PerfectGas, En::SensibleInternalEnergy),
        build_multi::<PerfectGas, ERefConst<PerfectGas>, SensibleInternalEnergy>,
    );
    table.register(
        tags(Mx::MultiComponent, Th::ERefConst, Eq::RPolynomial, En::SensibleInternalEnergy),
        build_multi::<RPolynomial, ERefConst<RPolynomial>, SensibleInternalEnergy>,
    );
    table.register(
        tags(Mx::MultiComponent, Th::ERefConst, Eq::RhoConst, En::SensibleInternalEnergy),
        build_multi::<RhoConst, ERefConst<RhoConst>, SensibleInternalEnergy>,
    );
    table.register(
        tags(Mx::MultiComponent, Th::Janaf, Eq::RhoConst, En::SensibleInternalEnergy),
        build_multi::<RhoConst, Janaf<RhoConst>, SensibleInternalEnergy>,
    );

    // multiComponentMixture, sensibleEnthalpy:
    table.register(
        tags(Mx::MultiComponent, Th::HRefConst, Eq::RhoConst, En::SensibleEnthalpy),
        build_multi::<RhoConst, HRefConst<RhoConst>, SensibleEnthalpy>,
    );
    table.register(
        tags(Mx::MultiComponent, Th::HRefConst, Eq::RPolynomial, En::SensibleEnthalpy),
        build_multi::<RPolynomial, HRefConst<RPolynomial>, SensibleEnthalpy>,
    );
    table.register(
        tags(Mx::MultiComponent, Th::HRefConst, Eq::PerfectGas, En::SensibleEnthalpy),
        build_multi::<PerfectGas, HRefConst<PerfectGas>, SensibleEnthalpy>,
    );

    table
}

static STANDARD: LazyLock<CombinationTable> = LazyLock::new(standard_combinations);

/// Construct a thermo package from a dictionary against the standard
/// combination table.
pub fn create_thermo_package(def: &ThermoPackageDef) -> ThermoResult<Box<dyn ThermoPackage>> {
    STANDARD.create(def)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_strings_roundtrip() {
        for tag in ["pureMixture", "multiComponentMixture"] {
            assert_eq!(tag.parse::<MixtureTag>().unwrap().as_str(), tag);
        }
        for tag in ["hRefConst", "eRefConst", "janaf"] {
            assert_eq!(tag.parse::<CaloricTag>().unwrap().as_str(), tag);
        }
        for tag in ["perfectGas", "rPolynomial", "rhoConst"] {
            assert_eq!(tag.parse::<EosTag>().unwrap().as_str(), tag);
        }
        for tag in ["sensibleEnthalpy", "sensibleInternalEnergy"] {
            assert_eq!(tag.parse::<EnergyTag>().unwrap().as_str(), tag);
        }
        assert!("polynomialTransport".parse::<TransportTag>().is_err());
    }

    #[test]
    fn standard_table_has_thirteen_combinations() {
        let table = standard_combinations();
        assert_eq!(table.len(), 13);
        let known = table.known();
        assert!(
            known
                .iter()
                .any(|k| k == "(pureMixture const hRefConst perfectGas specie sensibleEnthalpy)")
        );
        assert!(
            known.iter().any(|k| {
                k == "(multiComponentMixture const janaf rhoConst specie sensibleInternalEnergy)"
            })
        );
    }

    #[test]
    fn selection_display_matches_dictionary_order() {
        let def = ThermoTypeDef {
            mixture: "pureMixture".to_string(),
            transport: "const".to_string(),
            thermo: "hRefConst".to_string(),
            equation_of_state: "perfectGas".to_string(),
            specie: "specie".to_string(),
            energy: "sensibleEnthalpy".to_string(),
        };
        let selection = ModelSelection::from_def(&def);
        assert_eq!(
            selection.to_string(),
            "(pureMixture const hRefConst perfectGas specie sensibleEnthalpy)"
        );
        assert_eq!(TagTuple::parse(&def).unwrap().to_string(), selection.to_string());
    }

    #[test]
    fn unrecognized_specie_kind_fails_parse() {
        let def = ThermoTypeDef {
            mixture: "pureMixture".to_string(),
            transport: "const".to_string(),
            thermo: "hRefConst".to_string(),
            equation_of_state: "perfectGas".to_string(),
            specie: "ion".to_string(),
            energy: "sensibleEnthalpy".to_string(),
        };
        assert!(TagTuple::parse(&def).is_none());
    }
}
