//! Liquid property errors.

use thiserror::Error;

pub type LiquidResult<T> = Result<T, LiquidError>;

#[derive(Error, Debug)]
pub enum LiquidError {
    /// A required key is missing or malformed in the liquid block.
    #[error("configuration error at `{path}`: {reason}")]
    Configuration { path: String, reason: String },

    #[error(transparent)]
    Validation(#[from] rt_config::ValidationError),
}
