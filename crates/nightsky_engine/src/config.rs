//! Configuration records for particle fields.
//!
//! Every decorative instance on the site (stars, shooting stars, cursor
//! sparkles, mouse trail) is a `FieldConfig` value driving the same
//! [`ParticleField`](crate::ParticleField).

use serde::{Deserialize, Serialize};

use nightsky_foundation::{Color, Error, ErrorContext, Interval, Result};

fn default_chance() -> f32 {
    1.0
}

fn default_palette() -> Vec<Color> {
    vec![Color::WHITE]
}

fn default_size() -> Interval {
    Interval::fixed(1.0)
}

fn default_opacity() -> Interval {
    Interval::fixed(1.0)
}

fn zero() -> Interval {
    Interval::fixed(0.0)
}

/// When new particles are created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Emission {
    /// A periodic generator tick every `every_ms`; each tick yields a particle
    /// with probability `chance`.
    Interval {
        /// Tick period in ms. Must be positive.
        every_ms: u64,
        /// Probability that a tick produces a particle.
        #[serde(default = "default_chance")]
        chance: f32,
    },
    /// One particle per pointer sample.
    Pointer,
    /// `count` particles once, at mount.
    Burst {
        /// Number of particles.
        count: usize,
    },
}

impl Emission {
    /// A generator ticking every `every_ms` that always emits.
    #[must_use]
    pub fn every(every_ms: u64) -> Self {
        Self::Interval {
            every_ms,
            chance: 1.0,
        }
    }
}

/// How long particles stay live.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// Live until the field is torn down.
    Permanent,
    /// Lifetime in ms drawn uniformly from the interval.
    Timed(Interval),
}

impl Lifetime {
    /// A fixed lifetime in ms.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fixed(ms: u64) -> Self {
        Self::Timed(Interval::fixed(ms as f32))
    }

    /// Mean lifetime in ms, `None` for permanent particles.
    #[must_use]
    pub fn mean_ms(&self) -> Option<f32> {
        match self {
            Self::Permanent => None,
            Self::Timed(range) => Some(range.mean()),
        }
    }
}

/// Where new particles appear.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Distribution {
    /// Uniform over a rectangle given in viewport percent.
    Region {
        /// Horizontal range, percent of width.
        x: Interval,
        /// Vertical range, percent of height.
        y: Interval,
    },
    /// At the latest pointer sample, in pixels, jittered by up to `jitter`
    /// on each axis.
    Pointer {
        /// Maximum jitter in pixels.
        #[serde(default)]
        jitter: f32,
    },
}

impl Distribution {
    /// The whole viewport.
    #[must_use]
    pub fn full_viewport() -> Self {
        Self::Region {
            x: interval(0.0, 100.0),
            y: interval(0.0, 100.0),
        }
    }
}

/// Split between far and near depth layers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthMix {
    /// Probability a particle lands on the near layer.
    pub near_chance: f32,
    /// Added to the sampled size of near particles, in pixels.
    #[serde(default)]
    pub near_size_bonus: f32,
    /// Added to the sampled animation duration of near particles, in ms.
    #[serde(default)]
    pub near_animation_bonus_ms: f32,
}

/// Configuration of one particle field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Name used in logs, seeds and frames.
    pub name: String,
    /// When particles are created.
    pub emission: Emission,
    /// How long they live.
    pub lifetime: Lifetime,
    /// Where they appear.
    pub distribution: Distribution,
    /// Diameter range in pixels.
    #[serde(default = "default_size")]
    pub size: Interval,
    /// Base opacity range.
    #[serde(default = "default_opacity")]
    pub opacity: Interval,
    /// Per-instance animation loop duration in ms.
    #[serde(default = "zero")]
    pub animation_ms: Interval,
    /// Runs each particle's animation over exactly its own lifetime instead
    /// of drawing a separate duration from `animation_ms`.
    #[serde(default)]
    pub animate_over_lifetime: bool,
    /// Per-instance animation delay in ms.
    #[serde(default = "zero")]
    pub delay_ms: Interval,
    /// Streak length range in pixels, for shooting stars.
    #[serde(default)]
    pub length: Option<Interval>,
    /// Colors picked uniformly per particle.
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    /// Near/far layering; `None` puts everything on the far layer.
    #[serde(default)]
    pub depth: Option<DepthMix>,
    /// Cap on the live set; generation is skipped while full.
    #[serde(default)]
    pub max_live: Option<usize>,
    /// Link distance threshold in pixels for the proximity graph.
    #[serde(default)]
    pub proximity: Option<f32>,
    /// Whether particles fade out linearly over their lifetime.
    #[serde(default)]
    pub fade: bool,
}

impl FieldConfig {
    /// Creates a config with neutral visual attributes.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        emission: Emission,
        lifetime: Lifetime,
        distribution: Distribution,
    ) -> Self {
        Self {
            name: name.into(),
            emission,
            lifetime,
            distribution,
            size: default_size(),
            opacity: default_opacity(),
            animation_ms: zero(),
            animate_over_lifetime: false,
            delay_ms: zero(),
            length: None,
            palette: default_palette(),
            depth: None,
            max_live: None,
            proximity: None,
            fade: false,
        }
    }

    /// Builder method to rename the field.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder method to replace the emission schedule.
    #[must_use]
    pub fn with_emission(mut self, emission: Emission) -> Self {
        self.emission = emission;
        self
    }

    /// Builder method to replace the lifetime.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Builder method to set the size range.
    #[must_use]
    pub fn with_size(mut self, size: Interval) -> Self {
        self.size = size;
        self
    }

    /// Builder method to set the opacity range.
    #[must_use]
    pub fn with_opacity(mut self, opacity: Interval) -> Self {
        self.opacity = opacity;
        self
    }

    /// Builder method to set the animation duration range.
    #[must_use]
    pub fn with_animation(mut self, animation_ms: Interval) -> Self {
        self.animation_ms = animation_ms;
        self
    }

    /// Builder method to tie each animation to its particle's lifetime.
    #[must_use]
    pub fn with_animation_over_lifetime(mut self) -> Self {
        self.animate_over_lifetime = true;
        self
    }

    /// Builder method to set the animation delay range.
    #[must_use]
    pub fn with_delay(mut self, delay_ms: Interval) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Builder method to set the streak length range.
    #[must_use]
    pub fn with_length(mut self, length: Interval) -> Self {
        self.length = Some(length);
        self
    }

    /// Builder method to set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    /// Builder method to set the depth mix.
    #[must_use]
    pub fn with_depth(mut self, depth: DepthMix) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Builder method to cap the live set.
    #[must_use]
    pub fn with_max_live(mut self, max_live: usize) -> Self {
        self.max_live = Some(max_live);
        self
    }

    /// Builder method to enable proximity links.
    #[must_use]
    pub fn with_proximity(mut self, threshold: f32) -> Self {
        self.proximity = Some(threshold);
        self
    }

    /// Builder method to enable fading.
    #[must_use]
    pub fn with_fade(mut self, fade: bool) -> Self {
        self.fade = fade;
        self
    }

    /// Expected live count once generation and expiry balance out
    /// (`rate × mean lifetime`).
    ///
    /// `None` for pointer-driven or permanent fields, where the count depends
    /// on input or never decays.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn steady_state(&self) -> Option<f32> {
        let Emission::Interval { every_ms, chance } = self.emission else {
            return None;
        };
        let lifetime = self.lifetime.mean_ms()?;
        let estimate = chance.clamp(0.0, 1.0) * lifetime / every_ms as f32;
        Some(match self.max_live {
            Some(cap) => estimate.min(cap as f32),
            None => estimate,
        })
    }

    /// Checks the configuration for values a field cannot run with.
    ///
    /// # Errors
    /// Returns [`ErrorKind::InvalidConfig`](nightsky_foundation::ErrorKind::InvalidConfig)
    /// with the offending field in the context.
    pub fn validate(&self) -> Result<()> {
        let fail = |field: &str, message: &str| {
            Err(Error::invalid_config(message).with_context(
                ErrorContext::new()
                    .with_source(self.name.clone())
                    .with_field(field),
            ))
        };

        if self.name.trim().is_empty() {
            return fail("name", "field name must not be empty");
        }
        if let Emission::Interval { every_ms, chance } = self.emission {
            if every_ms == 0 {
                return fail("emission.every_ms", "tick interval must be positive");
            }
            if !(0.0..=1.0).contains(&chance) {
                return fail("emission.chance", "chance must lie in [0, 1]");
            }
        }
        if let Lifetime::Timed(range) = &self.lifetime {
            if range.min() < 0.0 {
                return fail("lifetime", "lifetime must not be negative");
            }
        }
        if let Distribution::Pointer { jitter } = self.distribution {
            if !(2.0 * jitter).is_finite() || jitter < 0.0 {
                return fail("distribution.jitter", "jitter must be a non-negative number");
            }
        }
        if self.size.min() < 0.0 {
            return fail("size", "size must not be negative");
        }
        if self.opacity.min() < 0.0 || self.opacity.max() > 1.0 {
            return fail("opacity", "opacity must lie in [0, 1]");
        }
        if self.animation_ms.min() < 0.0 {
            return fail("animation_ms", "animation duration must not be negative");
        }
        if self.delay_ms.min() < 0.0 {
            return fail("delay_ms", "animation delay must not be negative");
        }
        if self.length.is_some_and(|length| length.min() < 0.0) {
            return fail("length", "streak length must not be negative");
        }
        if self.palette.is_empty() {
            return fail("palette", "palette must not be empty");
        }
        if let Some(depth) = &self.depth {
            if !(0.0..=1.0).contains(&depth.near_chance) {
                return fail("depth.near_chance", "near chance must lie in [0, 1]");
            }
            let bonus = |v: f32| v.is_finite() && v >= 0.0;
            if !bonus(depth.near_size_bonus) {
                return fail("depth.near_size_bonus", "size bonus must be a non-negative number");
            }
            if !bonus(depth.near_animation_bonus_ms) {
                return fail(
                    "depth.near_animation_bonus_ms",
                    "animation bonus must be a non-negative number",
                );
            }
        }
        if self.max_live == Some(0) {
            return fail("max_live", "live cap must be positive");
        }
        if let Some(threshold) = self.proximity {
            if !threshold.is_finite() || threshold <= 0.0 {
                return fail("proximity", "link threshold must be a positive number");
            }
        }
        Ok(())
    }
}

/// Shorthand for intervals whose bounds are known-good constants.
pub(crate) fn interval(min: f32, max: f32) -> Interval {
    Interval::new(min, max).unwrap_or_else(|_| Interval::fixed(min))
}
