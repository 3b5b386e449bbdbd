//! Interval descriptors and the shared domain validator.
//!
//! Every distribution declares its parameter and support domains as static
//! tables of `(name, Interval)` pairs. [`check_limits`] is the single gate
//! run at construction (parameters) and before each evaluation (support).
//!
//! Intervals render and parse in the usual bracket notation: `[0,∞)`,
//! `(0,1]`, `(-∞,∞)`. An infinite endpoint is always open.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A static limit table: parameter (or argument) name to its interval.
pub type Limits = &'static [(&'static str, Interval)];

/// One side of an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// `[a` or `b]`: the endpoint itself is admitted.
    Inclusive(f64),
    /// `(a` or `b)`: the endpoint itself is rejected.
    Exclusive(f64),
    /// `-∞` or `∞`: every finite or infinite value passes this side.
    Unbounded,
}

impl Bound {
    #[inline]
    fn admits_above(self, x: f64) -> bool {
        match self {
            Bound::Inclusive(a) => x >= a,
            Bound::Exclusive(a) => x > a,
            Bound::Unbounded => true,
        }
    }

    #[inline]
    fn admits_below(self, x: f64) -> bool {
        match self {
            Bound::Inclusive(b) => x <= b,
            Bound::Exclusive(b) => x < b,
            Bound::Unbounded => true,
        }
    }

    fn endpoint(self) -> Option<f64> {
        match self {
            Bound::Inclusive(v) | Bound::Exclusive(v) => Some(v),
            Bound::Unbounded => None,
        }
    }
}

/// A real interval with independently inclusive, exclusive or infinite sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Interval {
    /// Lower side.
    pub lower: Bound,
    /// Upper side.
    pub upper: Bound,
}

impl Interval {
    /// `(-∞,∞)`
    pub const REAL: Interval = Interval::new(Bound::Unbounded, Bound::Unbounded);
    /// `(0,∞)`
    pub const POSITIVE: Interval = Interval::new(Bound::Exclusive(0.0), Bound::Unbounded);
    /// `[0,∞)`
    pub const NON_NEGATIVE: Interval = Interval::new(Bound::Inclusive(0.0), Bound::Unbounded);
    /// `[0,1]`
    pub const UNIT: Interval = Interval::new(Bound::Inclusive(0.0), Bound::Inclusive(1.0));
    /// `(0,1)`
    pub const OPEN_UNIT: Interval = Interval::new(Bound::Exclusive(0.0), Bound::Exclusive(1.0));
    /// `(0,1]`
    pub const LEFT_OPEN_UNIT: Interval =
        Interval::new(Bound::Exclusive(0.0), Bound::Inclusive(1.0));

    /// Build an interval from its two sides.
    pub const fn new(lower: Bound, upper: Bound) -> Self {
        Self { lower, upper }
    }

    /// `[a,b]`
    pub const fn closed(a: f64, b: f64) -> Self {
        Self::new(Bound::Inclusive(a), Bound::Inclusive(b))
    }

    /// `(a,b)`
    pub const fn open(a: f64, b: f64) -> Self {
        Self::new(Bound::Exclusive(a), Bound::Exclusive(b))
    }

    /// Whether `x` lies in the interval. `NaN` is never contained.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        !x.is_nan() && self.lower.admits_above(x) && self.upper.admits_below(x)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower {
            Bound::Inclusive(a) => write!(f, "[{a},")?,
            Bound::Exclusive(a) => write!(f, "({a},")?,
            Bound::Unbounded => f.write_str("(-∞,")?,
        }
        match self.upper {
            Bound::Inclusive(b) => write!(f, "{b}]"),
            Bound::Exclusive(b) => write!(f, "{b})"),
            Bound::Unbounded => f.write_str("∞)"),
        }
    }
}

fn parse_endpoint(token: &str, notation: &str) -> Result<f64> {
    let token = token.trim();
    match token {
        "∞" | "+∞" | "inf" | "+inf" | "infinity" | "+infinity" => return Ok(f64::INFINITY),
        "-∞" | "-inf" | "-infinity" => return Ok(f64::NEG_INFINITY),
        _ => {}
    }
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::InvalidLimit(format!("bad endpoint '{token}' in '{notation}'"))),
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let notation = s.trim();
        let (lower_inclusive, rest) = if let Some(rest) = notation.strip_prefix('[') {
            (true, rest)
        } else if let Some(rest) = notation.strip_prefix('(') {
            (false, rest)
        } else {
            return Err(Error::InvalidLimit(format!("'{notation}' must start with '[' or '('")));
        };
        let (upper_inclusive, body) = if let Some(body) = rest.strip_suffix(']') {
            (true, body)
        } else if let Some(body) = rest.strip_suffix(')') {
            (false, body)
        } else {
            return Err(Error::InvalidLimit(format!("'{notation}' must end with ']' or ')'")));
        };

        let mut parts = body.split(',');
        let (Some(lo), Some(hi), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(Error::InvalidLimit(format!(
                "'{notation}' must have exactly two endpoints"
            )));
        };
        let lo = parse_endpoint(lo, notation)?;
        let hi = parse_endpoint(hi, notation)?;

        let lower = if lo == f64::NEG_INFINITY {
            Bound::Unbounded
        } else if lo == f64::INFINITY {
            return Err(Error::InvalidLimit(format!("lower endpoint of '{notation}' is +∞")));
        } else if lower_inclusive {
            Bound::Inclusive(lo)
        } else {
            Bound::Exclusive(lo)
        };
        let upper = if hi == f64::INFINITY {
            Bound::Unbounded
        } else if hi == f64::NEG_INFINITY {
            return Err(Error::InvalidLimit(format!("upper endpoint of '{notation}' is -∞")));
        } else if upper_inclusive {
            Bound::Inclusive(hi)
        } else {
            Bound::Exclusive(hi)
        };

        if let (Some(a), Some(b)) = (lower.endpoint(), upper.endpoint()) {
            let empty = match (lower, upper) {
                (Bound::Inclusive(_), Bound::Inclusive(_)) => a > b,
                _ => a >= b,
            };
            if empty {
                return Err(Error::InvalidLimit(format!("'{notation}' is empty")));
            }
        }

        Ok(Interval::new(lower, upper))
    }
}

impl TryFrom<String> for Interval {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.to_string()
    }
}

/// Which table a value is being checked against; selects the error variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// Constructor parameters (`PARAMETER_LIMITS`).
    Parameter,
    /// Evaluation arguments (`SUPPORT_LIMITS`).
    Support,
}

impl Domain {
    fn violation(self, name: &'static str, value: f64, limit: Interval) -> Error {
        match self {
            Domain::Parameter => Error::ParameterDomain { name, value, limit },
            Domain::Support => Error::SupportDomain { name, value, limit },
        }
    }
}

/// Check every named value against its declared interval.
///
/// Values are checked in order and the first violation is returned. A name
/// without an entry in `limits` is an [`Error::UnknownLimit`]. Parameters
/// must also be finite; support arguments may sit at an unbounded side's `±∞`.
pub fn check_limits(
    domain: Domain,
    limits: &[(&'static str, Interval)],
    values: &[(&str, f64)],
) -> Result<()> {
    for &(name, value) in values {
        let Some(&(declared, limit)) = limits.iter().find(|(n, _)| *n == name) else {
            return Err(Error::UnknownLimit(name.to_string()));
        };
        let finite_ok = domain == Domain::Support || value.is_finite();
        if !(finite_ok && limit.contains(value)) {
            log::debug!("{domain:?} limit violated: {declared} = {value} not in {limit}");
            return Err(domain.violation(declared, value, limit));
        }
    }
    Ok(())
}
