//! Screen-space geometry.

use std::fmt;
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A 2D vector in screen space (x grows right, y grows down).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Returns true if both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Coordinate space a particle position is expressed in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Units {
    /// Percent of the viewport (0..100 on each axis); survives resizes.
    #[default]
    Percent,
    /// CSS pixels relative to the viewport's top-left corner.
    Pixels,
}

/// Size of the host window in CSS pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawViewport"))]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Creates a viewport, rejecting non-positive or non-finite extents.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidViewport`](crate::ErrorKind::InvalidViewport)
    /// if either extent is not a positive finite number.
    pub fn new(width: f32, height: f32) -> Result<Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(Error::invalid_viewport(width, height));
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Centre of the viewport in pixels.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Converts a position in `units` to pixels.
    #[must_use]
    pub fn to_pixels(&self, position: Vec2, units: Units) -> Vec2 {
        match units {
            Units::Pixels => position,
            Units::Percent => Vec2::new(
                position.x / 100.0 * self.width,
                position.y / 100.0 * self.height,
            ),
        }
    }
}

/// Unvalidated viewport as it appears in config files.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawViewport {
    width: f32,
    height: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawViewport> for Viewport {
    type Error = Error;

    fn try_from(raw: RawViewport) -> Result<Self> {
        Self::new(raw.width, raw.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}
