//! Core types for closed-form probability distributions.
//!
//! - [`Error`] / [`Result`]: the failure taxonomy shared by every distribution
//! - [`limits`]: interval descriptors and the domain validator
//! - [`traits`]: capability traits (density, cumulative, moments, quantile)

pub mod error;
pub mod limits;
pub mod traits;

pub use error::{Error, Result};
pub use limits::{Bound, Domain, Interval, Limits, check_limits};
pub use traits::{
    ContinuousDistribution, DiscreteDistribution, Limited, Moments, Quantile, check_probability,
};
