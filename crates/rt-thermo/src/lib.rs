//! rt-thermo: composable thermophysical property models for reacting-flow
//! solvers.
//!
//! Provides:
//! - Species descriptors (molecular weight, elemental composition)
//! - Equation-of-state models (perfect gas, reciprocal polynomial, constant
//!   density)
//! - Caloric models (reference enthalpy, reference internal energy, JANAF),
//!   each routing p-v-T terms through its owned equation of state
//! - Constant-coefficient transport
//! - Energy-basis tags and the per-species composite
//! - Mixture policies (pure, multi-component mass-fraction weighted)
//! - The thermo-package factory, keyed on the five-axis tag tuple of a
//!   configuration dictionary
//!
//! # Architecture
//!
//! Axis composition is by generics — every compiled combination is a fully
//! monomorphized type — while the factory hands solvers an object-safe
//! `Box<dyn ThermoPackage>` built from a registration table of tag tuples.
//! Evaluation is pure and `&self`: a constructed package can be shared
//! across solver threads without locking.
//!
//! # Example
//!
//! ```no_run
//! use rt_config::ThermoPackageDef;
//! use rt_thermo::create_thermo_package;
//! use rt_core::units::{k, pa};
//!
//! let yaml = std::fs::read_to_string("thermophysicalProperties.yaml").unwrap();
//! let def: ThermoPackageDef = serde_yaml::from_str(&yaml).unwrap();
//!
//! let thermo = create_thermo_package(&def).unwrap();
//! let rho = thermo.rho(pa(101_325.0), k(300.0), &[1.0]);
//! println!("Density: {} kg/m³", rho.value);
//! ```

pub mod basis;
pub mod caloric;
pub mod eos;
pub mod error;
pub mod factory;
pub mod mixture;
pub mod package;
pub mod species;
pub mod species_thermo;
pub mod transport;

// Re-exports for ergonomics
pub use basis::{EnergyBasis, SensibleEnthalpy, SensibleInternalEnergy};
pub use caloric::{Caloric, CaloricFromDef, ERefConst, HRefConst, Janaf};
pub use eos::{EosFromDef, EquationOfState, PerfectGas, RPolynomial, RhoConst};
pub use error::{ThermoError, ThermoResult};
pub use factory::{
    CombinationTable, ModelSelection, create_thermo_package, standard_combinations,
};
pub use mixture::{Mixture, MultiComponentMixture, PureMixture};
pub use package::{MixtureThermoPackage, ThermoPackage};
pub use species::Specie;
pub use species_thermo::SpeciesThermo;
pub use transport::{ConstTransport, Transport, TransportFromDef};
