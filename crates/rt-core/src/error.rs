use thiserror::Error;

pub type RtResult<T> = Result<T, RtError>;

#[derive(Error, Debug)]
pub enum RtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown constant: {name}")]
    UnknownConstant { name: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
