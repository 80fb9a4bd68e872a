//! Configuration for headless simulations.

use std::path::Path;

use serde::{Deserialize, Serialize};

use nightsky_engine::FieldConfig;
use nightsky_foundation::{Error, ErrorContext, Result, Vec2, Viewport};

use crate::event_loop::EventLoop;
use crate::scene::Scene;

/// A synthetic pointer circling the viewport center.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerPath {
    /// Circle radius in pixels.
    pub radius: f32,
    /// Time for one full turn, in ms.
    pub period_ms: u64,
    /// Time between pointer samples, in ms. Zero disables the pointer.
    pub every_ms: u64,
}

impl Default for PointerPath {
    fn default() -> Self {
        Self {
            radius: 200.0,
            period_ms: 4_000,
            every_ms: 16,
        }
    }
}

impl PointerPath {
    /// A path that never moves the pointer.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            every_ms: 0,
            ..Self::default()
        }
    }

    /// Returns true if the path produces samples.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.every_ms > 0
    }

    /// Pointer position at `at_ms` around `center`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, center: Vec2, at_ms: u64) -> Vec2 {
        let period = self.period_ms.max(1);
        let phase = (at_ms % period) as f32 / period as f32;
        let angle = phase * std::f32::consts::TAU;
        Vec2::new(
            center.x + self.radius * angle.cos(),
            center.y + self.radius * angle.sin(),
        )
    }
}

/// Configuration of one headless simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Which layers to mount.
    pub scene: Scene,
    /// Simulated time to run, in ms.
    pub duration_ms: u64,
    /// Seed every field stream is derived from.
    pub seed: u64,
    /// Frame period in ms.
    pub frame_ms: u64,
    /// Window size.
    pub viewport: Viewport,
    /// Synthetic pointer movement.
    pub pointer: PointerPath,
    /// Replacements for presets with the same name.
    pub overrides: Vec<FieldConfig>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scene: Scene::default(),
            duration_ms: 10_000,
            seed: 0,
            frame_ms: EventLoop::DEFAULT_FRAME_MS,
            viewport: Viewport::default(),
            pointer: PointerPath::default(),
            overrides: Vec::new(),
        }
    }
}

impl SimulationConfig {
    /// Creates a configuration for `scene` with default settings.
    #[must_use]
    pub fn for_scene(scene: Scene) -> Self {
        Self {
            scene,
            ..Self::default()
        }
    }

    /// Parses a JSON configuration. Missing keys take their defaults.
    ///
    /// # Errors
    /// Returns an invalid-config error if the text is not a valid configuration.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|err| Error::invalid_config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or an invalid-config
    /// error naming the file if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let text = std::fs::read_to_string(path)
            .map_err(|err| Error::from(err).in_source(source.clone()))?;
        Self::from_json(&text).map_err(|err| err.in_source(source))
    }

    /// Checks every override and the run settings.
    ///
    /// # Errors
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.frame_ms == 0 {
            return Err(Error::invalid_config("frame period must be positive")
                .with_context(ErrorContext::new().with_field("frame_ms")));
        }
        if !self.pointer.radius.is_finite() {
            return Err(Error::invalid_config("pointer radius must be finite")
                .with_context(ErrorContext::new().with_field("pointer.radius")));
        }
        for field in &self.overrides {
            field.validate()?;
        }
        Ok(())
    }

    /// Builder method to set the scene.
    #[must_use]
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Builder method to set the run length.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Builder method to set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the frame period.
    #[must_use]
    pub fn with_frame_ms(mut self, frame_ms: u64) -> Self {
        self.frame_ms = frame_ms;
        self
    }

    /// Builder method to set the viewport.
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Builder method to set the pointer path.
    #[must_use]
    pub fn with_pointer(mut self, pointer: PointerPath) -> Self {
        self.pointer = pointer;
        self
    }

    /// Builder method to add a preset override.
    #[must_use]
    pub fn with_override(mut self, field: FieldConfig) -> Self {
        self.overrides.push(field);
        self
    }
}
