//! Integration tests for Layer 0: Foundation
//!
//! Tests for geometry, attribute ranges, colors, seeded randomness and errors.

mod errors;
mod geometry;
mod values;
