//! Closed-form probability distributions.
//!
//! Each distribution is an immutable value built by a validating constructor
//! and evaluated through the capability traits re-exported from `pd_core`:
//! - discrete families: pmf/cdf over the integers
//! - continuous families: pdf/cdf over the reals, closed-form inverse where one exists
//! - [`multinomial`]: a stateless pmf taking every parameter per call
//! - [`Distribution`]: the closed set of families, buildable from JSON

pub mod combinatorics;
pub mod distributions;
pub mod math;
pub mod multinomial;

pub mod bernoulli;
pub mod binomial;
pub mod discrete_uniform;
pub mod geometric;
pub mod neg_binomial;
pub mod poisson;

pub mod beta;
pub mod cauchy;
pub mod chi_squared;
pub mod exponential;
pub mod gamma;
pub mod laplace;
pub mod log_normal;
pub mod logistic;
pub mod normal;
pub mod pareto;
pub mod student_t;
pub mod uniform;
pub mod weibull;

pub use pd_core::{
    ContinuousDistribution, DiscreteDistribution, Error, Interval, Limited, Moments, Quantile,
    Result,
};

pub use bernoulli::Bernoulli;
pub use beta::Beta;
pub use binomial::Binomial;
pub use cauchy::Cauchy;
pub use chi_squared::ChiSquared;
pub use discrete_uniform::DiscreteUniform;
pub use distributions::{Distribution, DistributionConfig};
pub use exponential::Exponential;
pub use gamma::Gamma;
pub use geometric::Geometric;
pub use laplace::Laplace;
pub use log_normal::LogNormal;
pub use logistic::Logistic;
pub use neg_binomial::NegativeBinomial;
pub use normal::Normal;
pub use pareto::Pareto;
pub use poisson::Poisson;
pub use student_t::StudentT;
pub use uniform::Uniform;
pub use weibull::Weibull;
