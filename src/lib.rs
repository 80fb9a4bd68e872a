//! Nightsky - decorative particle fields for a portfolio site
//!
//! This crate re-exports all layers of the Nightsky system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: nightsky_runtime    : event loop, subscriptions, layers, scenes, CLI
//! Layer 2: nightsky_engine     : particle fields, proximity graph, parallax, presets
//!          nightsky_portfolio  : API payloads, pagination, skills, typewriter
//! Layer 1: nightsky_storage    : particle records, live set, expiry queue
//! Layer 0: nightsky_foundation : core types (ParticleId, Timestamp, Vec2, Error)
//! ```

pub use nightsky_engine as engine;
pub use nightsky_foundation as foundation;
pub use nightsky_portfolio as portfolio;
pub use nightsky_runtime as runtime;
pub use nightsky_storage as storage;
