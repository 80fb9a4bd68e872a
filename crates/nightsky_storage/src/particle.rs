//! The particle value object.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nightsky_foundation::{Color, ParticleId, Timestamp, Units, Vec2};

/// Depth layer of a particle.
///
/// Near particles are larger, slower, and follow the pointer parallax.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Depth {
    /// Background layer; never offset.
    #[default]
    Far,
    /// Foreground layer; offset by parallax.
    Near,
}

/// A transient visual entity: star, shooting star, sparkle or trail dot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Particle {
    /// Identity, used only for removal.
    pub id: ParticleId,
    /// Position in `units`.
    pub position: Vec2,
    /// Coordinate space of `position`.
    pub units: Units,
    /// Diameter in pixels.
    pub size: f32,
    /// Base opacity in `[0, 1]`.
    pub opacity: f32,
    /// Fill color.
    pub color: Color,
    /// Duration of the per-instance CSS-style animation loop, in ms.
    pub animation_ms: u64,
    /// Start delay of the animation loop, in ms.
    pub delay_ms: u64,
    /// Streak length in pixels (shooting stars only).
    pub length: Option<f32>,
    /// Depth layer.
    pub depth: Depth,
    /// When the particle entered the live set.
    pub born_at: Timestamp,
    /// When the particle leaves the live set; `None` lives until unmount.
    pub expires_at: Option<Timestamp>,
}

impl Particle {
    /// Creates a particle with neutral visual defaults.
    #[must_use]
    pub fn new(id: ParticleId, position: Vec2, units: Units, born_at: Timestamp) -> Self {
        Self {
            id,
            position,
            units,
            size: 1.0,
            opacity: 1.0,
            color: Color::WHITE,
            animation_ms: 0,
            delay_ms: 0,
            length: None,
            depth: Depth::Far,
            born_at,
            expires_at: None,
        }
    }

    /// Sets the lifetime, measured from `born_at`.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime_ms: u64) -> Self {
        self.expires_at = Some(self.born_at.after(lifetime_ms));
        self
    }

    /// Returns true if the particle never expires.
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.expires_at.is_none()
    }

    /// Declared lifetime in ms, if any.
    #[must_use]
    pub fn lifetime_ms(&self) -> Option<u64> {
        self.expires_at.map(|at| at.since(self.born_at))
    }

    /// Milliseconds since birth.
    #[must_use]
    pub fn age(&self, now: Timestamp) -> u64 {
        now.since(self.born_at)
    }

    /// Fraction of the lifetime elapsed at `now`, in `[0, 1]`.
    ///
    /// Permanent particles always report `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self, now: Timestamp) -> f32 {
        match self.lifetime_ms() {
            None => 0.0,
            Some(0) => 1.0,
            Some(lifetime) => (self.age(now) as f32 / lifetime as f32).clamp(0.0, 1.0),
        }
    }

    /// Opacity at `now` for particles that fade out linearly over their lifetime.
    #[must_use]
    pub fn fading_opacity(&self, now: Timestamp) -> f32 {
        self.opacity * (1.0 - self.progress(now))
    }
}
