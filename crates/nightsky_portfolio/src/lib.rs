//! Presentation logic for the Nightsky portfolio.
//!
//! This crate provides:
//! - [`payload`] - Profile, project, timeline and contact payload models
//! - [`ApiConfig`] - Backend base URL and endpoint paths
//! - [`PageCursor`] - Responsive project gallery paging with swipe support
//! - [`parse_skills`] - Comma-separated stack lists and badge icons
//! - [`Typewriter`] - Timed character-by-character text reveal

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod pagination;
pub mod payload;
pub mod skills;
pub mod typewriter;

pub use api::{API_URL_ENV, ApiConfig, DEFAULT_API_URL, Endpoint};
pub use pagination::{PageCursor, Swipe, classify_swipe, per_page_for_width, swipe_power};
pub use payload::{
    ContactMessage, Education, Experience, ListEnvelope, Profile, Project, parse_education,
    parse_experiences, parse_profile, parse_project, parse_projects,
};
pub use skills::{StackCategory, StackIcon, parse_skills, stack_icon};
pub use typewriter::{PLACEHOLDER_BIO, Typewriter};
