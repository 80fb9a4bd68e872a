//! Particle storage for Nightsky.
//!
//! This crate provides:
//! - [`Particle`] - The transient value object every field renders
//! - [`LiveSet`] - The live collection, snapshot-cheap via structural sharing
//! - [`ExpiryQueue`] - A min-heap of expiry deadlines
//! - [`ParticleStore`] - Id allocation, insertion and exactly-once expiry

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod expiry;
pub mod live;
pub mod particle;
pub mod store;

pub use expiry::{Deadline, ExpiryQueue};
pub use live::LiveSet;
pub use particle::{Depth, Particle};
pub use store::{ParticleStore, StoreStats};
