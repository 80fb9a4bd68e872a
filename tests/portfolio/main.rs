//! Integration tests for the portfolio presentation layer
//!
//! Tests for backend payloads, gallery paging, skill badges and the bio reveal.

mod gallery;
mod reveal;
