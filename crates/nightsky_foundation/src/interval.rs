//! Closed-open ranges that randomized particle attributes are drawn from.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A range `[min, max)` of `f32` values; `min == max` is a fixed value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f32; 2]", into = "[f32; 2]"))]
pub struct Interval {
    min: f32,
    max: f32,
}

impl Interval {
    /// Creates an interval.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidInterval`](crate::ErrorKind::InvalidInterval)
    /// if a bound is not finite, `min > max`, or the width `max - min`
    /// overflows.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max || !(max - min).is_finite() {
            return Err(Error::invalid_interval(min, max));
        }
        Ok(Self { min, max })
    }

    /// An interval that always yields `value`.
    ///
    /// Non-finite values collapse to zero.
    #[must_use]
    pub fn fixed(value: f32) -> Self {
        let value = if value.is_finite() { value } else { 0.0 };
        Self {
            min: value,
            max: value,
        }
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound (exclusive unless the interval is fixed).
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn mean(&self) -> f32 {
        self.min + (self.max - self.min) / 2.0
    }

    /// Returns true if the interval always yields the same value.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        (self.max - self.min).abs() <= f32::EPSILON
    }

    /// Returns true if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

}

impl TryFrom<[f32; 2]> for Interval {
    type Error = Error;

    fn try_from([min, max]: [f32; 2]) -> Result<Self> {
        Self::new(min, max)
    }
}

impl From<Interval> for [f32; 2] {
    fn from(interval: Interval) -> Self {
        [interval.min, interval.max]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "[{}, {})", self.min, self.max)
        }
    }
}
