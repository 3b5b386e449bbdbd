//! Error types for probability distributions

use thiserror::Error;

use crate::limits::Interval;

/// Distribution error type
#[derive(Error, Debug)]
pub enum Error {
    /// A constructor parameter lies outside its declared limit.
    #[error("parameter {name} = {value} is outside its domain {name} ∈ {limit}")]
    ParameterDomain {
        /// Parameter name as declared in the limit table.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Declared interval.
        limit: Interval,
    },

    /// An evaluation argument lies outside the support.
    #[error("argument {name} = {value} is outside the support {name} ∈ {limit}")]
    SupportDomain {
        /// Argument name as declared in the limit table.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Declared interval.
        limit: Interval,
    },

    /// Frequency and probability vectors differ in length.
    #[error(
        "number of frequencies ({frequencies}) does not match number of probabilities ({probabilities})"
    )]
    CardinalityMismatch {
        /// Length of the frequency vector.
        frequencies: usize,
        /// Length of the probability vector.
        probabilities: usize,
    },

    /// Probabilities that do not form a distribution.
    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),

    /// Parameters that are individually valid but violate a joint constraint.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// A value was submitted with no declared limit for its name.
    #[error("no limit declared for {0}")]
    UnknownLimit(String),

    /// Interval notation that could not be parsed.
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    /// Not implemented
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
