//! Core types for Nightsky.
//!
//! This crate provides:
//! - [`ParticleId`] - Never-reused particle identifiers
//! - [`Timestamp`] - Simulated milliseconds since mount
//! - [`Vec2`], [`Viewport`], [`Units`] - Screen-space geometry
//! - [`Color`] and [`Interval`] - Visual attribute ranges
//! - [`FieldRng`] - Deterministic seeded randomness
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod color;
pub mod error;
pub mod geometry;
pub mod id;
pub mod interval;
pub mod rng;
pub mod time;

pub use color::Color;
pub use error::{Error, ErrorContext, ErrorKind};
pub use geometry::{Units, Vec2, Viewport};
pub use id::ParticleId;
pub use interval::Interval;
pub use rng::FieldRng;
pub use time::Timestamp;

/// Result type alias using Nightsky's Error type.
pub type Result<T> = std::result::Result<T, Error>;
