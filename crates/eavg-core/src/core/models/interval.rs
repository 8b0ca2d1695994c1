use nalgebra::Point3;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Invalid interval '{input}': expected two values \"lo hi\", found {found}")]
    WrongTokenCount { input: String, found: usize },
    #[error("Invalid interval '{input}': '{token}' is not a number")]
    InvalidNumber { input: String, token: String },
}

/// Open interval `(lo, hi)` along one spatial axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Strict on both ends: values equal to `lo` or `hi` are outside.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lo < value && value < self.hi
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    /// Parses `"lo hi"`, e.g. `"-7.0 7.0"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(IntervalError::WrongTokenCount {
                input: s.to_string(),
                found: tokens.len(),
            });
        }
        let parse = |token: &str| {
            token
                .parse::<f64>()
                .map_err(|_| IntervalError::InvalidNumber {
                    input: s.to_string(),
                    token: token.to_string(),
                })
        };
        Ok(Self::new(parse(tokens[0])?, parse(tokens[1])?))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

/// Region of interest made of one [`Interval`] per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl BoundingBox {
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        Self { x, y, z }
    }

    pub fn contains(&self, point: &Point3<f64>) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y) && self.z.contains(point.z)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x {} y {} z {}", self.x, self.y, self.z)
    }
}
