//! Proximity graph between trail particles.
//!
//! Two particles are linked when they are strictly closer than the threshold.
//! The link's opacity fades linearly from 1 at distance 0 to 0 at the
//! threshold. Pairs are unordered: each appears once, with `a < b`.

use serde::{Deserialize, Serialize};

use nightsky_foundation::{Error, ParticleId, Result, Vec2};

/// An edge of the proximity graph.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Lower particle id.
    pub a: ParticleId,
    /// Higher particle id.
    pub b: ParticleId,
    /// Euclidean distance in pixels.
    pub distance: f32,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f32,
}

/// Opacity of a link of length `distance` under `threshold`.
///
/// Returns 0 for non-positive or non-finite thresholds.
#[must_use]
pub fn link_opacity(distance: f32, threshold: f32) -> f32 {
    if !threshold.is_finite() || threshold <= 0.0 || distance.is_nan() {
        return 0.0;
    }
    (1.0 - distance / threshold).clamp(0.0, 1.0)
}

/// Pairwise links below a distance threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProximityGraph {
    threshold: f32,
}

impl ProximityGraph {
    /// Creates a graph builder.
    ///
    /// # Errors
    /// Returns an error if `threshold` is not a positive finite number.
    pub fn new(threshold: f32) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(Error::invalid_config(format!(
                "link threshold must be a positive number, got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    /// The link threshold in pixels.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Computes every link among `points`.
    ///
    /// Quadratic in the number of points; trails are capped well below the
    /// size where that matters. Non-finite positions never link.
    pub fn links<I>(&self, points: I) -> Vec<Link>
    where
        I: IntoIterator<Item = (ParticleId, Vec2)>,
    {
        let mut points: Vec<(ParticleId, Vec2)> = points
            .into_iter()
            .filter(|(_, position)| position.is_finite())
            .collect();
        points.sort_by_key(|(id, _)| *id);

        let mut links = Vec::new();
        for (i, &(a, pa)) in points.iter().enumerate() {
            for &(b, pb) in &points[i + 1..] {
                let distance = pa.distance(pb);
                if a == b || distance >= self.threshold {
                    continue;
                }
                links.push(Link {
                    a,
                    b,
                    distance,
                    opacity: link_opacity(distance, self.threshold),
                });
            }
        }
        links
    }
}
