//! Render-ready snapshots of a field.

use serde::{Deserialize, Serialize};

use nightsky_foundation::{Color, ParticleId, Timestamp, Vec2};
use nightsky_storage::Depth;

use crate::proximity::Link;

/// One particle as drawn, in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    /// Particle id.
    pub id: ParticleId,
    /// Pixel position, parallax applied.
    pub position: Vec2,
    /// Diameter (or streak thickness) in pixels.
    pub size: f32,
    /// Effective opacity at the frame's time.
    pub opacity: f32,
    /// Fill color.
    pub color: Color,
    /// Streak length, for shooting stars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f32>,
    /// Parallax layer.
    pub depth: Depth,
    /// Twinkle period in ms.
    pub animation_ms: u64,
    /// Twinkle phase delay in ms.
    pub delay_ms: u64,
}

/// Everything one field draws at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Field name.
    pub field: String,
    /// Simulated time of the snapshot.
    pub at: Timestamp,
    /// Live-set version the snapshot was taken from.
    pub version: u64,
    /// Live particles, in id order.
    pub sprites: Vec<Sprite>,
    /// Proximity links, empty when the field has no threshold.
    pub links: Vec<Link>,
}

impl Frame {
    /// Number of sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Returns true if nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Looks up a sprite by particle id.
    #[must_use]
    pub fn sprite(&self, id: ParticleId) -> Option<&Sprite> {
        self.sprites
            .binary_search_by_key(&id, |s| s.id)
            .ok()
            .and_then(|i| self.sprites.get(i))
    }
}
