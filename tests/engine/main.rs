//! Integration tests for Layer 2: Engine
//!
//! Tests for particle fields, proximity links, parallax, the cursor spring
//! and the site presets.

mod cursor;
mod parallax;
