//! Cross-layer integration tests for Nightsky
//!
//! Tests that verify fields, layers, scenes and the event loop working together.

mod lifecycle;
mod scenes;
