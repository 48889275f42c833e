use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Non-negative real cost of traversing a single edge.
///
/// Equality and hashing use the bit pattern so costs can serve as multigraph
/// labels; ordering is `f64::total_cmp`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    /// Wrap a raw value without validation.
    ///
    /// Searches re-validate every cost they read, so a negative value built
    /// here is rejected when a search reaches it.
    pub fn new(cost: f64) -> Self {
        // -0.0 and 0.0 must compare and hash alike
        Cost(if cost == 0.0 { 0.0 } else { cost })
    }

    /// Wrap a value, rejecting negative and NaN costs
    pub fn try_new(cost: f64) -> Result<Self> {
        let cost = Cost::new(cost);
        cost.validate()?;
        Ok(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_nan() && self.0 >= 0.0
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GraphError::InvalidCost { value: self.0 })
        }
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Cost {}

impl Hash for Cost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost::new(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(units: u32) -> Self {
        Cost(units as f64)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Cost {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let raw: f64 = s
            .trim()
            .parse()
            .map_err(|_| GraphError::invalid_value("cost", s))?;
        Cost::try_new(raw)
    }
}

/// A 2D coordinate used as a node identifier, compared by value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        let normalize = |v: f64| if v == 0.0 { 0.0 } else { v };
        Point {
            x: normalize(x),
            y: normalize(y),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*})", p, self.x, p, self.y),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

impl FromStr for Point {
    type Err = GraphError;

    /// Parse `"x,y"` (surrounding parentheses and whitespace allowed)
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let Some((x, y)) = inner.split_once(',') else {
            return Err(GraphError::invalid_value("point", s));
        };
        let parse = |v: &str| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| GraphError::invalid_value("point", s))
        };
        Ok(Point::new(parse(x)?, parse(y)?))
    }
}
