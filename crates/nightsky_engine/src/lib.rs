//! Particle fields and pointer effects for Nightsky.
//!
//! This crate provides:
//! - [`FieldConfig`] - One configuration record per decorative instance
//! - [`ParticleField`] - Generator, expiry and teardown for one instance
//! - [`ProximityGraph`] - Distance-faded links between trail particles
//! - [`Parallax`] - Pointer-driven offset for the near star layer
//! - [`CursorFollower`] - Spring-damped custom cursor ring
//! - [`presets`] - The site's stars, shooting stars, sparkles and trail

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod cursor;
pub mod field;
pub mod frame;
pub mod parallax;
pub mod presets;
pub mod proximity;

pub use config::{DepthMix, Distribution, Emission, FieldConfig, Lifetime};
pub use cursor::CursorFollower;
pub use field::{AdvanceReport, FieldStats, ParticleField};
pub use frame::{Frame, Sprite};
pub use parallax::{Parallax, map_linear};
pub use proximity::{Link, ProximityGraph, link_opacity};
