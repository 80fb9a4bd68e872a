//! Runtime for Nightsky particle layers.
//!
//! This crate provides:
//! - [`EventLoop`] - Single-threaded host event dispatch in simulated time
//! - [`Subscription`] - RAII listener registration
//! - [`ParticleLayer`] and [`CursorLayer`] - Fields and the cursor ring bound to a loop
//! - [`Scene`] - The layer groups each part of the site mounts
//! - [`simulate`] - Headless scene runs with per-layer reports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod event_loop;
pub mod layer;
pub mod scene;
pub mod simulate;

pub use config::{PointerPath, SimulationConfig};
pub use event_loop::{EventLoop, HostEvent, Subscription};
pub use layer::{CursorLayer, LayerProbe, ParticleLayer};
pub use scene::{MountedScene, Scene};
pub use simulate::{LayerReport, SimulationReport, simulate};
