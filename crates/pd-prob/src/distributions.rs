//! Closed set of distribution variants and their JSON description.
//!
//! [`DistributionConfig`] is the raw, unvalidated shape of a description such as
//! `{"family": "poisson", "lambda": 2.0}`. Converting it into a [`Distribution`]
//! runs the validating constructor of the chosen family, so a `Distribution`
//! always holds legal parameters.

use pd_core::{
    ContinuousDistribution, DiscreteDistribution, Error, Limited, Moments, Quantile, Result,
};
use serde::{Deserialize, Serialize};

use crate::bernoulli::Bernoulli;
use crate::beta::Beta;
use crate::binomial::Binomial;
use crate::cauchy::Cauchy;
use crate::chi_squared::ChiSquared;
use crate::discrete_uniform::DiscreteUniform;
use crate::exponential::Exponential;
use crate::gamma::Gamma;
use crate::geometric::Geometric;
use crate::laplace::Laplace;
use crate::log_normal::LogNormal;
use crate::logistic::Logistic;
use crate::neg_binomial::NegativeBinomial;
use crate::normal::Normal;
use crate::pareto::Pareto;
use crate::poisson::Poisson;
use crate::student_t::StudentT;
use crate::uniform::Uniform;
use crate::weibull::Weibull;

/// Unvalidated distribution description, tagged by `family`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum DistributionConfig {
    Poisson {
        lambda: f64,
    },
    Bernoulli {
        p: f64,
    },
    Binomial {
        n: u64,
        p: f64,
    },
    Geometric {
        p: f64,
    },
    NegativeBinomial {
        r: f64,
        p: f64,
    },
    DiscreteUniform {
        a: i64,
        b: i64,
    },
    Laplace {
        mu: f64,
        b: f64,
    },
    Normal {
        mu: f64,
        sigma: f64,
    },
    Exponential {
        rate: f64,
    },
    Uniform {
        a: f64,
        b: f64,
    },
    Gamma {
        shape: f64,
        scale: f64,
    },
    ChiSquared {
        k: f64,
    },
    Beta {
        alpha: f64,
        beta: f64,
    },
    /// Location and scale default to the standard form.
    StudentT {
        #[serde(default)]
        mu: f64,
        #[serde(default = "default_unit")]
        sigma: f64,
        nu: f64,
    },
    Weibull {
        k: f64,
        lambda: f64,
    },
    Cauchy {
        x0: f64,
        gamma: f64,
    },
    Logistic {
        mu: f64,
        s: f64,
    },
    LogNormal {
        mu: f64,
        sigma: f64,
    },
    Pareto {
        scale: f64,
        alpha: f64,
    },
}

fn default_unit() -> f64 {
    1.0
}

/// A constructed distribution of any supported family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DistributionConfig", into = "DistributionConfig")]
pub enum Distribution {
    Poisson(Poisson),
    Bernoulli(Bernoulli),
    Binomial(Binomial),
    Geometric(Geometric),
    NegativeBinomial(NegativeBinomial),
    DiscreteUniform(DiscreteUniform),
    Laplace(Laplace),
    Normal(Normal),
    Exponential(Exponential),
    Uniform(Uniform),
    Gamma(Gamma),
    ChiSquared(ChiSquared),
    Beta(Beta),
    StudentT(StudentT),
    Weibull(Weibull),
    Cauchy(Cauchy),
    Logistic(Logistic),
    LogNormal(LogNormal),
    Pareto(Pareto),
}

/// Match every variant, binding discrete ones to `$d` and continuous ones to `$c`.
macro_rules! dispatch {
    ($value:expr, discrete $d:ident => $disc:expr, continuous $c:ident => $cont:expr $(,)?) => {
        match $value {
            Distribution::Poisson($d) => $disc,
            Distribution::Bernoulli($d) => $disc,
            Distribution::Binomial($d) => $disc,
            Distribution::Geometric($d) => $disc,
            Distribution::NegativeBinomial($d) => $disc,
            Distribution::DiscreteUniform($d) => $disc,
            Distribution::Laplace($c) => $cont,
            Distribution::Normal($c) => $cont,
            Distribution::Exponential($c) => $cont,
            Distribution::Uniform($c) => $cont,
            Distribution::Gamma($c) => $cont,
            Distribution::ChiSquared($c) => $cont,
            Distribution::Beta($c) => $cont,
            Distribution::StudentT($c) => $cont,
            Distribution::Weibull($c) => $cont,
            Distribution::Cauchy($c) => $cont,
            Distribution::Logistic($c) => $cont,
            Distribution::LogNormal($c) => $cont,
            Distribution::Pareto($c) => $cont,
        }
    };
}

/// Convert `x` to an integer argument for a discrete family.
///
/// Non-integral or non-finite `x` lies outside every integer support.
fn integer_argument<D: Limited>(_: &D, x: f64) -> Result<i64> {
    // 2^63 is exactly representable; i64::MAX is not.
    const I64_EDGE: f64 = 9_223_372_036_854_775_808.0;
    if x.is_finite() && x.fract() == 0.0 && (-I64_EDGE..I64_EDGE).contains(&x) {
        return Ok(x as i64);
    }
    let (name, limit) = D::SUPPORT_LIMITS[0];
    log::debug!("non-integral argument {name} = {x} for a discrete distribution");
    Err(Error::SupportDomain { name, value: x, limit })
}

impl Distribution {
    /// Parse and validate a JSON description.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DistributionConfig = serde_json::from_str(json)?;
        let dist = Distribution::try_from(config)?;
        log::debug!("built {} distribution from JSON", dist.family());
        Ok(dist)
    }

    /// Serialize back to the tagged JSON description.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Family tag as used in the JSON description.
    pub fn family(&self) -> &'static str {
        match self {
            Distribution::Poisson(_) => "poisson",
            Distribution::Bernoulli(_) => "bernoulli",
            Distribution::Binomial(_) => "binomial",
            Distribution::Geometric(_) => "geometric",
            Distribution::NegativeBinomial(_) => "negative_binomial",
            Distribution::DiscreteUniform(_) => "discrete_uniform",
            Distribution::Laplace(_) => "laplace",
            Distribution::Normal(_) => "normal",
            Distribution::Exponential(_) => "exponential",
            Distribution::Uniform(_) => "uniform",
            Distribution::Gamma(_) => "gamma",
            Distribution::ChiSquared(_) => "chi_squared",
            Distribution::Beta(_) => "beta",
            Distribution::StudentT(_) => "student_t",
            Distribution::Weibull(_) => "weibull",
            Distribution::Cauchy(_) => "cauchy",
            Distribution::Logistic(_) => "logistic",
            Distribution::LogNormal(_) => "log_normal",
            Distribution::Pareto(_) => "pareto",
        }
    }

    /// Whether the family has a mass function over the integers.
    pub fn is_discrete(&self) -> bool {
        dispatch!(self, discrete _d => true, continuous _c => false)
    }

    /// pmf for discrete families (`x` must be integral), pdf otherwise.
    pub fn density(&self, x: f64) -> Result<f64> {
        dispatch!(
            self,
            discrete d => d.pmf(integer_argument(d, x)?),
            continuous c => c.pdf(x),
        )
    }

    /// Natural log of [`Distribution::density`].
    pub fn ln_density(&self, x: f64) -> Result<f64> {
        dispatch!(
            self,
            discrete d => d.ln_pmf(integer_argument(d, x)?),
            continuous c => c.ln_pdf(x),
        )
    }

    /// `P(X <= x)`; `x` must be integral for discrete families.
    pub fn cdf(&self, x: f64) -> Result<f64> {
        dispatch!(
            self,
            discrete d => DiscreteDistribution::cdf(d, integer_argument(d, x)?),
            continuous c => ContinuousDistribution::cdf(c, x),
        )
    }

    /// Closed-form inverse cdf, where the family has one.
    pub fn inverse(&self, p: f64) -> Result<f64> {
        match self {
            Distribution::Laplace(d) => d.inverse(p),
            Distribution::Normal(d) => d.inverse(p),
            Distribution::Exponential(d) => d.inverse(p),
            Distribution::Uniform(d) => d.inverse(p),
            Distribution::Weibull(d) => d.inverse(p),
            Distribution::Cauchy(d) => d.inverse(p),
            Distribution::Logistic(d) => d.inverse(p),
            Distribution::LogNormal(d) => d.inverse(p),
            Distribution::Pareto(d) => d.inverse(p),
            other => {
                Err(Error::NotImplemented(format!(
                    "closed-form inverse cdf for {}",
                    other.family()
                )))
            }
        }
    }
}

impl Moments for Distribution {
    fn mean(&self) -> f64 {
        dispatch!(self, discrete d => d.mean(), continuous c => c.mean())
    }

    fn variance(&self) -> f64 {
        dispatch!(self, discrete d => d.variance(), continuous c => c.variance())
    }
}

impl TryFrom<DistributionConfig> for Distribution {
    type Error = Error;

    fn try_from(config: DistributionConfig) -> Result<Self> {
        use DistributionConfig as C;
        Ok(match config {
            C::Poisson { lambda } => Distribution::Poisson(Poisson::new(lambda)?),
            C::Bernoulli { p } => Distribution::Bernoulli(Bernoulli::new(p)?),
            C::Binomial { n, p } => Distribution::Binomial(Binomial::new(n, p)?),
            C::Geometric { p } => Distribution::Geometric(Geometric::new(p)?),
            C::NegativeBinomial { r, p } => {
                Distribution::NegativeBinomial(NegativeBinomial::new(r, p)?)
            }
            C::DiscreteUniform { a, b } => {
                Distribution::DiscreteUniform(DiscreteUniform::new(a, b)?)
            }
            C::Laplace { mu, b } => Distribution::Laplace(Laplace::new(mu, b)?),
            C::Normal { mu, sigma } => Distribution::Normal(Normal::new(mu, sigma)?),
            C::Exponential { rate } => Distribution::Exponential(Exponential::new(rate)?),
            C::Uniform { a, b } => Distribution::Uniform(Uniform::new(a, b)?),
            C::Gamma { shape, scale } => Distribution::Gamma(Gamma::new(shape, scale)?),
            C::ChiSquared { k } => Distribution::ChiSquared(ChiSquared::new(k)?),
            C::Beta { alpha, beta } => Distribution::Beta(Beta::new(alpha, beta)?),
            C::StudentT { mu, sigma, nu } => Distribution::StudentT(StudentT::new(mu, sigma, nu)?),
            C::Weibull { k, lambda } => Distribution::Weibull(Weibull::new(k, lambda)?),
            C::Cauchy { x0, gamma } => Distribution::Cauchy(Cauchy::new(x0, gamma)?),
            C::Logistic { mu, s } => Distribution::Logistic(Logistic::new(mu, s)?),
            C::LogNormal { mu, sigma } => Distribution::LogNormal(LogNormal::new(mu, sigma)?),
            C::Pareto { scale, alpha } => Distribution::Pareto(Pareto::new(scale, alpha)?),
        })
    }
}

impl From<Distribution> for DistributionConfig {
    fn from(dist: Distribution) -> Self {
        use DistributionConfig as C;
        match dist {
            Distribution::Poisson(d) => C::Poisson { lambda: d.lambda() },
            Distribution::Bernoulli(d) => C::Bernoulli { p: d.p() },
            Distribution::Binomial(d) => C::Binomial { n: d.n(), p: d.p() },
            Distribution::Geometric(d) => C::Geometric { p: d.p() },
            Distribution::NegativeBinomial(d) => C::NegativeBinomial { r: d.r(), p: d.p() },
            Distribution::DiscreteUniform(d) => C::DiscreteUniform { a: d.a(), b: d.b() },
            Distribution::Laplace(d) => C::Laplace { mu: d.mu(), b: d.b() },
            Distribution::Normal(d) => C::Normal { mu: d.mu(), sigma: d.sigma() },
            Distribution::Exponential(d) => C::Exponential { rate: d.rate() },
            Distribution::Uniform(d) => C::Uniform { a: d.a(), b: d.b() },
            Distribution::Gamma(d) => C::Gamma { shape: d.shape(), scale: d.scale() },
            Distribution::ChiSquared(d) => C::ChiSquared { k: d.k() },
            Distribution::Beta(d) => C::Beta { alpha: d.alpha(), beta: d.beta() },
            Distribution::StudentT(d) => C::StudentT { mu: d.mu(), sigma: d.sigma(), nu: d.nu() },
            Distribution::Weibull(d) => C::Weibull { k: d.k(), lambda: d.lambda() },
            Distribution::Cauchy(d) => C::Cauchy { x0: d.x0(), gamma: d.gamma() },
            Distribution::Logistic(d) => C::Logistic { mu: d.mu(), s: d.s() },
            Distribution::LogNormal(d) => C::LogNormal { mu: d.mu(), sigma: d.sigma() },
            Distribution::Pareto(d) => C::Pareto { scale: d.scale(), alpha: d.alpha() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_json_builds_validated_distribution() {
        let d = Distribution::from_json(r#"{"family": "poisson", "lambda": 2.0}"#).unwrap();
        assert_eq!(d.family(), "poisson");
        assert!(d.is_discrete());
        assert_abs_diff_eq!(d.density(0.0).unwrap(), (-2.0f64).exp(), epsilon = 1e-15);
        assert_eq!(d.mean(), 2.0);
    }

    #[test]
    fn test_from_json_rejects_parameters_out_of_domain() {
        let err = Distribution::from_json(r#"{"family": "laplace", "mu": 0.0, "b": -1.0}"#);
        assert!(matches!(err, Err(Error::ParameterDomain { name: "b", .. })));
    }

    #[test]
    fn test_from_json_rejects_unknown_family() {
        let err = Distribution::from_json(r#"{"family": "zipf", "s": 1.0}"#);
        assert!(matches!(err, Err(Error::Json(_))));
    }

    #[test]
    fn test_serde_deserialize_validates_too() {
        let bad = serde_json::from_str::<Distribution>(
            r#"{"family": "normal", "mu": 0.0, "sigma": 0.0}"#,
        );
        assert!(bad.is_err());
        let ok: Distribution =
            serde_json::from_str(r#"{"family": "normal", "mu": 1.0, "sigma": 2.0}"#).unwrap();
        assert_eq!(ok, Distribution::Normal(Normal::new(1.0, 2.0).unwrap()));
    }

    #[test]
    fn test_json_round_trip() {
        let d = Distribution::Laplace(Laplace::new(5.0, 1.0).unwrap());
        let json = d.to_json().unwrap();
        assert_eq!(json, r#"{"family":"laplace","mu":5.0,"b":1.0}"#);
        assert_eq!(Distribution::from_json(&json).unwrap(), d);
    }

    #[test]
    fn test_student_t_defaults_to_standard_form() {
        let d = Distribution::from_json(r#"{"family": "student_t", "nu": 4.0}"#).unwrap();
        assert_eq!(d, Distribution::StudentT(StudentT::standard(4.0).unwrap()));
    }

    #[test]
    fn test_discrete_density_requires_integral_argument() {
        let d = Distribution::Poisson(Poisson::new(2.0).unwrap());
        assert!(matches!(d.density(1.5), Err(Error::SupportDomain { name: "k", .. })));
        assert!(matches!(d.cdf(f64::NAN), Err(Error::SupportDomain { .. })));
        assert!(matches!(d.density(-1.0), Err(Error::SupportDomain { .. })));
    }

    #[test]
    fn test_dispatch_matches_concrete_types() {
        let laplace = Laplace::new(0.0, 1.0).unwrap();
        let d = Distribution::Laplace(laplace);
        assert!(!d.is_discrete());
        assert_eq!(d.density(1.0).unwrap(), laplace.pdf(1.0).unwrap());
        assert_eq!(d.cdf(1.0).unwrap(), ContinuousDistribution::cdf(&laplace, 1.0).unwrap());
        assert_eq!(d.ln_density(1.0).unwrap(), laplace.ln_pdf(1.0).unwrap());
        assert_eq!(d.variance(), 2.0);

        let binom = Binomial::new(10, 0.5).unwrap();
        let d = Distribution::Binomial(binom);
        assert_eq!(d.cdf(3.0).unwrap(), DiscreteDistribution::cdf(&binom, 3).unwrap());
    }

    #[test]
    fn test_inverse_where_available() {
        let d = Distribution::from_json(r#"{"family": "exponential", "rate": 1.0}"#).unwrap();
        assert_abs_diff_eq!(d.inverse(0.5).unwrap(), 2.0f64.ln(), epsilon = 1e-15);
        let g =
            Distribution::from_json(r#"{"family": "gamma", "shape": 2.0, "scale": 1.0}"#).unwrap();
        assert!(matches!(g.inverse(0.5), Err(Error::NotImplemented(_))));
    }

    #[test]
    fn test_every_family_round_trips_through_config() {
        let all = [
            r#"{"family":"poisson","lambda":1.5}"#,
            r#"{"family":"bernoulli","p":0.2}"#,
            r#"{"family":"binomial","n":7,"p":0.4}"#,
            r#"{"family":"geometric","p":0.3}"#,
            r#"{"family":"negative_binomial","r":2.5,"p":0.6}"#,
            r#"{"family":"discrete_uniform","a":-3,"b":4}"#,
            r#"{"family":"laplace","mu":1.0,"b":2.0}"#,
            r#"{"family":"normal","mu":0.0,"sigma":1.0}"#,
            r#"{"family":"exponential","rate":3.0}"#,
            r#"{"family":"uniform","a":0.0,"b":2.0}"#,
            r#"{"family":"gamma","shape":2.0,"scale":0.5}"#,
            r#"{"family":"chi_squared","k":3.0}"#,
            r#"{"family":"beta","alpha":2.0,"beta":5.0}"#,
            r#"{"family":"student_t","mu":0.0,"sigma":1.0,"nu":3.0}"#,
            r#"{"family":"weibull","k":1.5,"lambda":2.0}"#,
            r#"{"family":"cauchy","x0":0.0,"gamma":1.0}"#,
            r#"{"family":"logistic","mu":0.0,"s":1.0}"#,
            r#"{"family":"log_normal","mu":0.0,"sigma":0.5}"#,
            r#"{"family":"pareto","scale":1.0,"alpha":3.0}"#,
        ];
        for json in all {
            let d = Distribution::from_json(json).unwrap();
            assert_eq!(d.to_json().unwrap(), json, "family {}", d.family());
            assert!(d.cdf(1.0).unwrap() >= 0.0);
        }
    }
}
