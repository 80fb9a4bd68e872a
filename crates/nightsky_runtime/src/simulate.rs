//! Headless scene simulation.
//!
//! Runs a scene on an [`EventLoop`] in simulated time, feeding it a circular
//! pointer path, and summarizes what every layer did.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use nightsky_engine::FieldStats;
use nightsky_foundation::{Result, Timestamp, Vec2};

use crate::config::SimulationConfig;
use crate::event_loop::{EventLoop, HostEvent};
use crate::scene::{MountedScene, Scene};

/// What one layer did during a run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerReport {
    /// Counters taken just before teardown.
    pub stats: FieldStats,
    /// Frames rendered because something changed.
    pub frames_taken: u64,
    /// Most proximity links in one frame.
    pub max_links: usize,
    /// `rate × mean lifetime`, for generator-driven fields.
    pub expected_live: Option<f32>,
}

/// Summary of a simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// The scene that ran.
    pub scene: Scene,
    /// Seed used.
    pub seed: u64,
    /// Simulated time covered, in ms.
    pub duration_ms: u64,
    /// Frames dispatched.
    pub frames: u64,
    /// Pointer samples dispatched.
    pub pointer_samples: u64,
    /// Per-layer results, in mount order.
    pub layers: Vec<LayerReport>,
    /// Final drawn cursor position, for scenes with a cursor ring.
    pub cursor: Option<Vec2>,
    /// Particles discarded when the scene was torn down.
    pub discarded: usize,
}

impl SimulationReport {
    /// Looks up a layer's report by field name.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&LayerReport> {
        self.layers.iter().find(|layer| layer.stats.name == name)
    }

    /// Live particles across layers at the end of the run.
    #[must_use]
    pub fn live(&self) -> usize {
        self.layers.iter().map(|layer| layer.stats.store.live).sum()
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "scene {} for {}ms (seed {}): {} frames, {} pointer samples",
            self.scene, self.duration_ms, self.seed, self.frames, self.pointer_samples
        )?;
        for layer in &self.layers {
            let stats = &layer.stats;
            write!(
                f,
                "  {:<20} live {:>4}  peak {:>4}  spawned {:>6}  expired {:>6}  skipped {:>5}  frames {:>5}",
                stats.name,
                stats.store.live,
                stats.peak_live,
                stats.store.spawned,
                stats.store.expired,
                stats.skipped,
                layer.frames_taken,
            )?;
            if layer.max_links > 0 {
                write!(f, "  links {}", layer.max_links)?;
            }
            if let Some(expected) = layer.expected_live {
                write!(f, "  expected {expected:.1}")?;
            }
            writeln!(f)?;
        }
        if let Some(cursor) = self.cursor {
            writeln!(f, "  cursor at ({:.1}, {:.1})", cursor.x, cursor.y)?;
        }
        write!(f, "  {} particles discarded at teardown", self.discarded)
    }
}

/// Runs `config` to completion.
///
/// Frames arrive every `frame_ms`, the last one exactly at the end of the
/// run. Pointer samples due at or before a frame are dispatched first.
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationReport> {
    config.validate()?;
    info!(
        scene = %config.scene,
        duration_ms = config.duration_ms,
        seed = config.seed,
        "simulation started"
    );

    let mut event_loop = EventLoop::new(config.viewport).with_frame_ms(config.frame_ms);
    let mut scene = MountedScene::mount(&event_loop, config.scene, config.seed, &config.overrides)?;

    let center = config.viewport.center();
    let end = Timestamp::from_millis(config.duration_ms);
    let mut next_sample = config.pointer.is_enabled().then_some(config.pointer.every_ms);
    let mut pointer_samples = 0;

    while event_loop.now() < end {
        let frame_at = event_loop.now().after(event_loop.frame_ms()).min(end);
        while let Some(at) = next_sample.filter(|at| *at <= frame_at.as_millis()) {
            event_loop.dispatch(&HostEvent::PointerMove {
                position: config.pointer.position(center, at),
                now: Timestamp::from_millis(at),
            });
            pointer_samples += 1;
            next_sample = Some(at + config.pointer.every_ms);
        }
        event_loop.dispatch(&HostEvent::Frame { now: frame_at });
        scene.take_frames();
    }

    let layers: Vec<LayerReport> = scene
        .layers()
        .iter()
        .map(|layer| LayerReport {
            expected_live: layer.config().steady_state(),
            stats: layer.stats(),
            frames_taken: layer.frames_taken(),
            max_links: layer.max_links(),
        })
        .collect();
    let cursor = scene.cursor();
    let discarded = scene.teardown();
    debug!(discarded, "scene torn down");

    let report = SimulationReport {
        scene: config.scene,
        seed: config.seed,
        duration_ms: config.duration_ms,
        frames: event_loop.frames(),
        pointer_samples,
        layers,
        cursor,
        discarded,
    };
    info!(live = report.live(), frames = report.frames, "simulation finished");
    Ok(report)
}
