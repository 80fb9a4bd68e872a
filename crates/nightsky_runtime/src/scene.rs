//! Scenes: the sets of layers each part of the site mounts together.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use nightsky_engine::{FieldConfig, FieldStats, Frame, Parallax, presets};
use nightsky_foundation::{Error, Result, Vec2};

use crate::event_loop::EventLoop;
use crate::layer::{CursorLayer, ParticleLayer};

/// A group of layers mounted together.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    /// Page-wide starfield with shooting stars.
    #[default]
    Backdrop,
    /// Colored sparkles and the spring cursor ring.
    Sparkles,
    /// Linked pointer trail.
    Trail,
    /// Hero-section starfield with its own shooting stars.
    Hero,
    /// Everything the home page shows at once.
    All,
}

impl Scene {
    /// Every scene, in help-text order.
    pub const ALL: [Self; 5] = [Self::Backdrop, Self::Sparkles, Self::Trail, Self::Hero, Self::All];

    /// Command-line name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::Sparkles => "sparkles",
            Self::Trail => "trail",
            Self::Hero => "hero",
            Self::All => "all",
        }
    }

    /// The field presets this scene mounts, with whether each follows parallax.
    #[must_use]
    pub fn fields(self) -> Vec<(FieldConfig, bool)> {
        match self {
            Self::Backdrop => vec![(presets::stars(), true), (presets::shooting_stars(), false)],
            Self::Sparkles => vec![(presets::cursor_sparkles(), false)],
            Self::Trail => vec![(presets::mouse_trail(), false)],
            Self::Hero => vec![
                (presets::stars().with_name("hero_stars"), true),
                (presets::hero_shooting_stars(), false),
            ],
            Self::All => [Self::Backdrop, Self::Hero, Self::Sparkles, Self::Trail]
                .into_iter()
                .flat_map(Self::fields)
                .collect(),
        }
    }

    /// Returns true if the scene shows the cursor ring.
    #[must_use]
    pub fn has_cursor(self) -> bool {
        matches!(self, Self::Sparkles | Self::All)
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scene {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|scene| scene.name() == text)
            .ok_or_else(|| {
                Error::invalid_config(format!(
                    "unknown scene {text:?}; expected one of backdrop, sparkles, trail, hero, all"
                ))
            })
    }
}

/// A scene's layers, mounted on one event loop.
#[derive(Debug)]
pub struct MountedScene {
    scene: Scene,
    layers: Vec<ParticleLayer>,
    cursor: Option<CursorLayer>,
}

impl MountedScene {
    /// Mounts `scene`, replacing any preset whose name matches an override.
    ///
    /// Each field draws from its own stream derived from `seed` and its name.
    ///
    /// # Errors
    /// Returns an error if any field configuration is invalid; layers mounted
    /// before the failure are unmounted again.
    pub fn mount(
        event_loop: &EventLoop,
        scene: Scene,
        seed: u64,
        overrides: &[FieldConfig],
    ) -> Result<Self> {
        let mut layers = Vec::new();
        for (preset, parallax) in scene.fields() {
            let config = overrides
                .iter()
                .find(|o| o.name == preset.name)
                .cloned()
                .unwrap_or(preset);
            let layer = if parallax {
                ParticleLayer::mount_with_parallax(
                    event_loop,
                    config,
                    seed,
                    Parallax::new(event_loop.viewport()),
                )
            } else {
                ParticleLayer::mount(event_loop, config, seed)
            };
            layers.push(layer?);
        }
        let cursor = scene.has_cursor().then(|| CursorLayer::mount(event_loop));

        debug!(%scene, layers = layers.len(), cursor = cursor.is_some(), "scene mounted");
        Ok(Self {
            scene,
            layers,
            cursor,
        })
    }

    /// Which scene this is.
    #[must_use]
    pub fn scene(&self) -> Scene {
        self.scene
    }

    /// The mounted particle layers.
    #[must_use]
    pub fn layers(&self) -> &[ParticleLayer] {
        &self.layers
    }

    /// Looks up a layer by field name.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&ParticleLayer> {
        self.layers.iter().find(|layer| layer.name() == name)
    }

    /// Where the cursor ring is drawn, if the scene has one.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor.as_ref().map(CursorLayer::position)
    }

    /// Total live particles across layers.
    #[must_use]
    pub fn live(&self) -> usize {
        self.layers.iter().map(ParticleLayer::len).sum()
    }

    /// Takes every changed layer's frame.
    pub fn take_frames(&mut self) -> Vec<Frame> {
        self.layers.iter_mut().filter_map(ParticleLayer::take_frame).collect()
    }

    /// Current counters of every layer.
    #[must_use]
    pub fn stats(&self) -> Vec<FieldStats> {
        self.layers.iter().map(ParticleLayer::stats).collect()
    }

    /// Tears every layer down, returning the particles discarded.
    pub fn teardown(&mut self) -> usize {
        if let Some(cursor) = &mut self.cursor {
            cursor.teardown();
        }
        self.layers.iter_mut().map(ParticleLayer::teardown).sum()
    }
}
