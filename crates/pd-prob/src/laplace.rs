//! Laplace (double exponential) distribution.

use pd_core::{
    ContinuousDistribution, Interval, Limited, Limits, Moments, Quantile, Result, check_probability,
};

/// Laplace distribution with location `μ` and scale `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Laplace {
    mu: f64,
    b: f64,
}

impl Limited for Laplace {
    const PARAMETER_LIMITS: Limits = &[("μ", Interval::REAL), ("b", Interval::POSITIVE)];
    const SUPPORT_LIMITS: Limits = &[("x", Interval::REAL)];
}

impl Laplace {
    /// Create a Laplace distribution; `μ ∈ (-∞,∞)`, `b ∈ (0,∞)`.
    pub fn new(mu: f64, b: f64) -> Result<Self> {
        Self::check_parameters(&[("μ", mu), ("b", b)])?;
        Ok(Self { mu, b })
    }

    /// Location.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Scale.
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Median; equal to `μ`.
    pub fn median(&self) -> f64 {
        self.mu
    }
}

impl Moments for Laplace {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        2.0 * self.b * self.b
    }
}

impl ContinuousDistribution for Laplace {
    /// `exp(−|x − μ| / b) / 2b`
    fn pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok((-(x - self.mu).abs() / self.b).exp() / (2.0 * self.b))
    }

    /// `½ exp((x − μ)/b)` below `μ`, `1 − ½ exp(−(x − μ)/b)` from `μ` on.
    fn cdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        let z = (x - self.mu) / self.b;
        if x < self.mu { Ok(0.5 * z.exp()) } else { Ok(1.0 - 0.5 * (-z).exp()) }
    }

    fn ln_pdf(&self, x: f64) -> Result<f64> {
        Self::check_support("x", x)?;
        Ok(-(x - self.mu).abs() / self.b - (2.0 * self.b).ln())
    }
}

impl Quantile for Laplace {
    fn inverse(&self, p: f64) -> Result<f64> {
        check_probability(p)?;
        if p < 0.5 {
            Ok(self.mu + self.b * (2.0 * p).ln())
        } else {
            Ok(self.mu - self.b * (2.0 - 2.0 * p).ln())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pd_core::Error;

    // (x, μ, b, expected)
    const PDF_CASES: [(f64, f64, f64, f64); 7] = [
        (1.0, 0.0, 1.0, 0.1839397206),
        (1.1, 0.0, 1.0, 0.1664355418),
        (1.2, 0.0, 1.0, 0.150597106),
        (5.0, 0.0, 1.0, 0.0033689735),
        (1.0, 2.0, 1.4, 0.174836307),
        (1.1, 2.0, 1.4, 0.1877814373),
        (2.9, 2.0, 1.4, 0.1877814373),
    ];

    const CDF_CASES: [(f64, f64, f64, f64); 7] = [
        (1.0, 0.0, 1.0, 0.8160602794),
        (1.1, 0.0, 1.0, 0.8335644582),
        (1.2, 0.0, 1.0, 0.849402894),
        (5.0, 0.0, 1.0, 0.9966310265),
        (1.0, 2.0, 1.4, 0.2447708298),
        (1.1, 2.0, 1.4, 0.2628940122),
        (2.9, 2.0, 1.4, 0.7371059878),
    ];

    #[test]
    fn test_pdf_fixtures() {
        for (x, mu, b, expected) in PDF_CASES {
            let d = Laplace::new(mu, b).unwrap();
            assert_abs_diff_eq!(d.pdf(x).unwrap(), expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_cdf_fixtures() {
        for (x, mu, b, expected) in CDF_CASES {
            let d = Laplace::new(mu, b).unwrap();
            assert_abs_diff_eq!(d.cdf(x).unwrap(), expected, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_mean_is_mu_exactly() {
        let d = Laplace::new(5.0, 1.0).unwrap();
        assert_eq!(d.mean(), 5.0);
        assert_eq!(d.median(), 5.0);
        assert_eq!(d.variance(), 2.0);
    }

    #[test]
    fn test_cdf_is_half_at_mu() {
        let d = Laplace::new(-3.0, 0.7).unwrap();
        assert_eq!(d.cdf(-3.0).unwrap(), 0.5);
    }

    #[test]
    fn test_ln_pdf_matches_pdf() {
        let d = Laplace::new(2.0, 1.4).unwrap();
        for x in [-3.0, 0.0, 2.0, 2.9, 10.0] {
            assert_abs_diff_eq!(d.ln_pdf(x).unwrap(), d.pdf(x).unwrap().ln(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        let d = Laplace::new(1.0, 2.0).unwrap();
        for p in [0.01, 0.2, 0.5, 0.8, 0.99] {
            assert_abs_diff_eq!(d.cdf(d.inverse(p).unwrap()).unwrap(), p, epsilon = 1e-12);
        }
        assert_eq!(d.inverse(0.0).unwrap(), f64::NEG_INFINITY);
        assert_eq!(d.inverse(1.0).unwrap(), f64::INFINITY);
        assert!(d.inverse(1.5).is_err());
    }

    #[test]
    fn test_invalid_params_and_support() {
        assert!(matches!(Laplace::new(0.0, 0.0), Err(Error::ParameterDomain { name: "b", .. })));
        assert!(matches!(
            Laplace::new(f64::NAN, 1.0),
            Err(Error::ParameterDomain { name: "μ", .. })
        ));
        let d = Laplace::new(0.0, 1.0).unwrap();
        assert!(matches!(d.pdf(f64::NAN), Err(Error::SupportDomain { name: "x", .. })));
    }
}
