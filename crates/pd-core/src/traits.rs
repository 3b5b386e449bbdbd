//! Capability traits shared by every distribution.
//!
//! A distribution is an immutable value built once from validated
//! parameters. Each capability (density, cumulative, moments, quantile) is a
//! separate trait so a type implements exactly what it has a closed form for.

use crate::Result;
use crate::limits::{Domain, Limits, check_limits};

/// Static domain tables attached to a distribution type.
pub trait Limited {
    /// Legal domain of each constructor parameter.
    const PARAMETER_LIMITS: Limits;
    /// Legal domain of the evaluation argument.
    const SUPPORT_LIMITS: Limits;

    /// Check constructor parameters against [`Self::PARAMETER_LIMITS`].
    fn check_parameters(values: &[(&str, f64)]) -> Result<()> {
        check_limits(Domain::Parameter, Self::PARAMETER_LIMITS, values)
    }

    /// Check an evaluation argument against [`Self::SUPPORT_LIMITS`].
    fn check_support(name: &str, value: f64) -> Result<()> {
        check_limits(Domain::Support, Self::SUPPORT_LIMITS, &[(name, value)])
    }
}

/// Summary statistics computed from stored parameters.
///
/// Undefined moments are `NaN`; divergent ones are `+∞`.
pub trait Moments {
    /// Expected value.
    fn mean(&self) -> f64;
    /// Variance.
    fn variance(&self) -> f64;
    /// Standard deviation.
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

/// A distribution over the reals with a density.
pub trait ContinuousDistribution: Limited + Moments + Send + Sync {
    /// Probability density at `x`.
    fn pdf(&self, x: f64) -> Result<f64>;
    /// `P(X <= x)`.
    fn cdf(&self, x: f64) -> Result<f64>;
    /// Natural log of the density at `x`.
    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Ok(self.pdf(x)?.ln())
    }
}

/// A distribution over the integers with a mass function.
pub trait DiscreteDistribution: Limited + Moments + Send + Sync {
    /// `P(X = k)`.
    fn pmf(&self, k: i64) -> Result<f64>;
    /// `P(X <= k)`.
    fn cdf(&self, k: i64) -> Result<f64>;
    /// Natural log of the mass at `k`.
    fn ln_pmf(&self, k: i64) -> Result<f64> {
        Ok(self.pmf(k)?.ln())
    }
}

/// Closed-form inverse of the cumulative distribution function.
pub trait Quantile {
    /// Smallest `x` with `cdf(x) >= p`; `p` must lie in `[0,1]`.
    fn inverse(&self, p: f64) -> Result<f64>;
}

/// Limits of the probability argument accepted by [`Quantile::inverse`].
pub const PROBABILITY_LIMITS: Limits = &[("p", crate::Interval::UNIT)];

/// Check a quantile argument against [`PROBABILITY_LIMITS`].
pub fn check_probability(p: f64) -> Result<()> {
    check_limits(Domain::Support, PROBABILITY_LIMITS, &[("p", p)])
}
