//! Dimensioned physical constants and the process-wide registry.
//!
//! Every constant carries the exponents of the seven SI base dimensions so
//! that unit bookkeeping stays attached to the value as it moves through
//! configuration reloads. Modules declare their constants with an explicit
//! `register` call against the shared registry; nothing is registered as a
//! static-initialization side effect, so there is no initialization-order
//! hazard. Unknown names are only discovered at lookup time.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::{Div, Mul};
use std::sync::{LazyLock, RwLock};

use crate::error::{RtError, RtResult};

/// Exponents of the seven SI base dimensions, ordered
/// [mass, length, time, temperature, moles, current, luminous intensity].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions([i8; 7]);

impl Dimensions {
    pub const DIMLESS: Dimensions = Dimensions([0; 7]);

    pub const fn new(
        mass: i8,
        length: i8,
        time: i8,
        temperature: i8,
        moles: i8,
        current: i8,
        luminous: i8,
    ) -> Self {
        Self([mass, length, time, temperature, moles, current, luminous])
    }

    pub fn exponents(&self) -> [i8; 7] {
        self.0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {} {} {} {} {}]",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5], self.0[6]
        )
    }
}

impl Mul for Dimensions {
    type Output = Dimensions;

    fn mul(self, rhs: Dimensions) -> Dimensions {
        let mut out = [0i8; 7];
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.0[i] + rhs.0[i];
        }
        Dimensions(out)
    }
}

impl Div for Dimensions {
    type Output = Dimensions;

    fn div(self, rhs: Dimensions) -> Dimensions {
        let mut out = [0i8; 7];
        for (i, o) in out.iter_mut().enumerate() {
            *o = self.0[i] - rhs.0[i];
        }
        Dimensions(out)
    }
}

/// A named scalar with attached physical dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionedScalar {
    pub name: String,
    pub dimensions: Dimensions,
    pub value: f64,
}

impl DimensionedScalar {
    pub fn new(name: impl Into<String>, dimensions: Dimensions, value: f64) -> Self {
        Self {
            name: name.into(),
            dimensions,
            value,
        }
    }
}

impl fmt::Display for DimensionedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.dimensions, self.value)
    }
}

/// Group → name → value, the shape a constants dictionary deserializes to.
pub type ConstantGroups = HashMap<String, HashMap<String, f64>>;

#[derive(Clone, Debug)]
struct ConstantEntry {
    group: String,
    dimensions: Dimensions,
    value: f64,
    /// Compiled-in fallback; present only for with-default registrations.
    default: Option<f64>,
}

/// Registry of dimensioned constants, keyed by name.
///
/// Registration creates the entry with its compiled value unless the most
/// recently loaded dictionary already names it, in which case the dictionary
/// value wins. `reload` updates every registered entry whose (group, name)
/// appears in the new dictionary; absent plain entries keep their previous
/// value, absent with-default entries fall back to the compiled default.
/// Locked groups are skipped entirely on reload.
#[derive(Default)]
pub struct ConstantsRegistry {
    entries: HashMap<String, ConstantEntry>,
    loaded: ConstantGroups,
    locked: HashSet<String>,
}

impl ConstantsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constant with no compiled default (initial value zero).
    pub fn register(&mut self, group: &str, name: &str, dimensions: Dimensions) -> DimensionedScalar {
        self.register_entry(group, name, dimensions, 0.0, None)
    }

    /// Register a constant that remembers its compiled-in default.
    pub fn register_with_default(
        &mut self,
        group: &str,
        name: &str,
        dimensions: Dimensions,
        default: f64,
    ) -> DimensionedScalar {
        self.register_entry(group, name, dimensions, default, Some(default))
    }

    fn register_entry(
        &mut self,
        group: &str,
        name: &str,
        dimensions: Dimensions,
        compiled: f64,
        default: Option<f64>,
    ) -> DimensionedScalar {
        let entry = self.entries.entry(name.to_string()).or_insert_with(|| {
            let value = self
                .loaded
                .get(group)
                .and_then(|g| g.get(name))
                .copied()
                .unwrap_or(compiled);
            ConstantEntry {
                group: group.to_string(),
                dimensions,
                value,
                default,
            }
        });
        DimensionedScalar::new(name, entry.dimensions, entry.value)
    }

    pub fn lookup(&self, name: &str) -> RtResult<DimensionedScalar> {
        self.entries
            .get(name)
            .map(|e| DimensionedScalar::new(name, e.dimensions, e.value))
            .ok_or_else(|| RtError::UnknownConstant {
                name: name.to_string(),
            })
    }

    pub fn value(&self, name: &str) -> RtResult<f64> {
        self.lookup(name).map(|c| c.value)
    }

    /// Re-read every registered constant from a freshly loaded dictionary.
    pub fn reload(&mut self, groups: &ConstantGroups) {
        self.loaded = groups.clone();
        let mut updated = 0usize;
        for (name, entry) in &mut self.entries {
            if self.locked.contains(&entry.group) {
                continue;
            }
            match groups.get(&entry.group).and_then(|g| g.get(name)) {
                Some(v) => {
                    entry.value = *v;
                    updated += 1;
                }
                None => {
                    if let Some(d) = entry.default {
                        entry.value = d;
                    }
                }
            }
        }
        tracing::debug!(updated, total = self.entries.len(), "constants reloaded");
    }

    /// Exclude a group from future reloads. Sticky for the registry lifetime.
    pub fn lock_group(&mut self, group: &str) {
        self.locked.insert(group.to_string());
    }

    pub fn is_locked(&self, group: &str) -> bool {
        self.locked.contains(group)
    }

    /// Registered names, for diagnostics.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.keys().cloned().collect();
        names.sort();
        names
    }
}

static REGISTRY: LazyLock<RwLock<ConstantsRegistry>> =
    LazyLock::new(|| RwLock::new(ConstantsRegistry::new()));

/// The process-wide registry. Mutation belongs to the setup phase; the host
/// must not reload while evaluation threads are reading.
pub fn registry() -> &'static RwLock<ConstantsRegistry> {
    &REGISTRY
}

/// Register the stock physical constants. Idempotent; call once at startup
/// or lean on the accessors below, which call it on first use.
pub fn init_standard() {
    let mut reg = REGISTRY.write().expect("constants registry poisoned");
    // J/(kmol·K): molar-mass bookkeeping is per kmol throughout.
    reg.register_with_default(
        "physicoChemical",
        "R",
        Dimensions::new(1, 2, -2, -1, -1, 0, 0),
        8314.46261815324,
    );
    reg.register_with_default(
        "physicoChemical",
        "NA",
        Dimensions::new(0, 0, 0, 0, -1, 0, 0),
        6.02214076e26,
    );
    reg.register_with_default(
        "physicoChemical",
        "k",
        Dimensions::new(1, 2, -2, -1, 0, 0, 0),
        1.380649e-23,
    );
    reg.register_with_default(
        "standard",
        "Pstd",
        Dimensions::new(1, -1, -2, 0, 0, 0, 0),
        1.0e5,
    );
    reg.register_with_default(
        "standard",
        "Tstd",
        Dimensions::new(0, 0, 0, 1, 0, 0, 0),
        298.15,
    );
}

/// Look a constant up in the process-wide registry.
pub fn lookup(name: &str) -> RtResult<DimensionedScalar> {
    REGISTRY
        .read()
        .expect("constants registry poisoned")
        .lookup(name)
}

/// Re-read the process-wide registry from a loaded constants dictionary.
pub fn reload(groups: &ConstantGroups) {
    REGISTRY
        .write()
        .expect("constants registry poisoned")
        .reload(groups);
}

/// Universal gas constant [J/(kmol·K)].
pub fn universal_gas_constant() -> f64 {
    init_standard();
    lookup("R").map(|c| c.value).expect("R is registered")
}

/// Standard pressure [Pa].
pub fn standard_pressure() -> f64 {
    init_standard();
    lookup("Pstd").map(|c| c.value).expect("Pstd is registered")
}

/// Standard temperature [K].
pub fn standard_temperature() -> f64 {
    init_standard();
    lookup("Tstd").map(|c| c.value).expect("Tstd is registered")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(entries: &[(&str, &str, f64)]) -> ConstantGroups {
        let mut g = ConstantGroups::new();
        for (group, name, value) in entries {
            g.entry(group.to_string())
                .or_default()
                .insert(name.to_string(), *value);
        }
        g
    }

    #[test]
    fn register_then_lookup() {
        let mut reg = ConstantsRegistry::new();
        reg.register_with_default("test", "g0", Dimensions::new(0, 1, -2, 0, 0, 0, 0), 9.80665);
        let c = reg.lookup("g0").unwrap();
        assert_eq!(c.value, 9.80665);
        assert_eq!(c.dimensions, Dimensions::new(0, 1, -2, 0, 0, 0, 0));
    }

    #[test]
    fn lookup_unknown_name_fails() {
        let reg = ConstantsRegistry::new();
        assert!(matches!(
            reg.lookup("nope"),
            Err(RtError::UnknownConstant { .. })
        ));
    }

    #[test]
    fn reload_overrides_named_constants() {
        let mut reg = ConstantsRegistry::new();
        reg.register_with_default("test", "c", Dimensions::DIMLESS, 1.0);
        reg.reload(&groups(&[("test", "c", 2.5)]));
        assert_eq!(reg.value("c").unwrap(), 2.5);
    }

    #[test]
    fn reload_omitting_name_restores_compiled_default() {
        let mut reg = ConstantsRegistry::new();
        reg.register_with_default("test", "c", Dimensions::DIMLESS, 1.0);
        reg.reload(&groups(&[("test", "c", 2.5)]));
        assert_eq!(reg.value("c").unwrap(), 2.5);
        // A dictionary without the name resets the with-default variant.
        reg.reload(&groups(&[("other", "x", 9.0)]));
        assert_eq!(reg.value("c").unwrap(), 1.0);
    }

    #[test]
    fn reload_keeps_plain_constant_value_when_absent() {
        let mut reg = ConstantsRegistry::new();
        reg.register("test", "c", Dimensions::DIMLESS);
        reg.reload(&groups(&[("test", "c", 4.0)]));
        reg.reload(&groups(&[]));
        assert_eq!(reg.value("c").unwrap(), 4.0);
    }

    #[test]
    fn registration_after_load_sees_dictionary_value() {
        let mut reg = ConstantsRegistry::new();
        reg.reload(&groups(&[("test", "c", 3.0)]));
        let c = reg.register_with_default("test", "c", Dimensions::DIMLESS, 1.0);
        assert_eq!(c.value, 3.0);
    }

    #[test]
    fn locked_group_is_skipped_on_reload() {
        let mut reg = ConstantsRegistry::new();
        reg.register_with_default("test", "c", Dimensions::DIMLESS, 1.0);
        reg.lock_group("test");
        reg.reload(&groups(&[("test", "c", 99.0)]));
        assert_eq!(reg.value("c").unwrap(), 1.0);
        assert!(reg.is_locked("test"));
    }

    #[test]
    fn dimension_algebra() {
        let pressure = Dimensions::new(1, -1, -2, 0, 0, 0, 0);
        let volume = Dimensions::new(0, 3, 0, 0, 0, 0, 0);
        let energy = Dimensions::new(1, 2, -2, 0, 0, 0, 0);
        assert_eq!(pressure * volume, energy);
        assert_eq!(energy / volume, pressure);
        assert_eq!(format!("{pressure}"), "[1 -1 -2 0 0 0 0]");
    }

    #[test]
    fn standard_constants_available() {
        init_standard();
        let r = lookup("R").unwrap();
        assert!((r.value - 8314.462618).abs() < 1e-3);
        assert_eq!(r.dimensions, Dimensions::new(1, 2, -2, -1, -1, 0, 0));
        assert!(universal_gas_constant() > 8000.0);
        assert_eq!(standard_pressure(), 1.0e5);
        assert_eq!(standard_temperature(), 298.15);
    }
}
