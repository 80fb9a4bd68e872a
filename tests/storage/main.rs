//! Integration tests for Layer 1: Storage
//!
//! Tests for the expiry heap, the live set and exactly-once particle removal.

mod expiry;
mod live;
mod store;
