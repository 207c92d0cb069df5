//! Thermophysical model errors.

use thiserror::Error;

/// Result type for thermo operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors raised while constructing thermophysical models.
///
/// All of these are deterministic configuration or logic errors surfaced at
/// case setup; nothing here is transient or retried.
#[derive(Error, Debug)]
pub enum ThermoError {
    /// The requested axis tuple is not among the compiled combinations.
    #[error(
        "no compiled thermo package matches {requested}; known combinations:\n  {}",
        .known.join("\n  ")
    )]
    UnknownModelCombination {
        requested: String,
        known: Vec<String>,
    },

    /// A required key is missing or malformed in the dictionary.
    #[error("configuration error at `{path}`: {reason}")]
    Configuration { path: String, reason: String },

    /// Non-physical value encountered during construction.
    #[error("non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error(transparent)]
    Validation(#[from] rt_config::ValidationError),

    #[error(transparent)]
    Core(#[from] rt_core::RtError),
}
