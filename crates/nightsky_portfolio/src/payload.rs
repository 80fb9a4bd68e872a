//! Payload models for the portfolio's REST backend.
//!
//! Every display field is optional: the site renders whatever the backend
//! sends and falls back to placeholders for the rest.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use nightsky_foundation::{Error, ErrorContext, Result};

use crate::skills::{StackCategory, parse_skills};

/// The site owner's profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Display name.
    pub name: Option<String>,
    /// Headline under the name.
    pub title: Option<String>,
    /// About-section text.
    pub bio: Option<String>,
    /// Link to a downloadable resume.
    pub resume_url: Option<String>,
    /// Portrait image URL.
    pub profile_image: Option<String>,
}

/// A gallery entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Backend primary key.
    pub id: u64,
    /// Card title.
    pub title: String,
    /// Card blurb.
    pub short_description: Option<String>,
    /// Detail-page text.
    pub long_description: Option<String>,
    /// Cover image URL.
    pub image: Option<String>,
    /// Technology tags.
    pub technologies: Vec<String>,
    /// Source repository link.
    pub github_url: Option<String>,
    /// Live deployment link.
    pub project_url: Option<String>,
    /// Comma-separated frontend stack.
    pub frontend: Option<String>,
    /// Comma-separated backend stack.
    pub backend: Option<String>,
    /// Comma-separated database stack.
    pub database: Option<String>,
    /// Comma-separated deployment stack.
    pub deployment: Option<String>,
}

impl Project {
    /// Detail text: the long description, else the short one.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.long_description
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .or(self.short_description.as_deref())
    }

    /// Raw comma-separated stack string for `category`.
    #[must_use]
    pub fn stack_field(&self, category: StackCategory) -> Option<&str> {
        match category {
            StackCategory::Frontend => self.frontend.as_deref(),
            StackCategory::Backend => self.backend.as_deref(),
            StackCategory::Database => self.database.as_deref(),
            StackCategory::Deployment => self.deployment.as_deref(),
        }
    }

    /// Parsed stacks, skipping categories with no entries.
    #[must_use]
    pub fn stacks(&self) -> Vec<(StackCategory, Vec<String>)> {
        StackCategory::ALL
            .iter()
            .filter_map(|&category| {
                let skills = parse_skills(self.stack_field(category).unwrap_or_default());
                (!skills.is_empty()).then_some((category, skills))
            })
            .collect()
    }
}

/// A timeline job entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    /// Backend primary key.
    pub id: u64,
    /// Role title.
    pub title: String,
    /// Employer.
    pub company: Option<String>,
    /// Start date as sent by the backend.
    pub start_date: Option<String>,
    /// End date; absent while the role is current.
    pub end_date: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Location.
    pub location: Option<String>,
}

impl Experience {
    /// Returns true if the role has no end date.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.end_date.as_deref().is_none_or(|end| end.trim().is_empty())
    }
}

/// A timeline education entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    /// Backend primary key.
    pub id: u64,
    /// Degree level.
    pub level: Option<String>,
    /// School or university.
    pub institution: Option<String>,
    /// Course of study.
    pub course: Option<String>,
    /// Start year.
    pub start_year: Option<String>,
    /// End year.
    pub end_year: Option<String>,
    /// Location.
    pub location: Option<String>,
}

/// Body of `POST /contact/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender's name.
    pub sender_name: String,
    /// Sender's reply address.
    pub sender_email: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

impl ContactMessage {
    /// Creates a message.
    #[must_use]
    pub fn new(
        sender_name: impl Into<String>,
        sender_email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            sender_name: sender_name.into(),
            sender_email: sender_email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Encodes the request body.
    ///
    /// # Errors
    /// Returns a payload error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| payload_error("contact", &err))
    }
}

/// A list response: either a bare array or a page envelope with `results`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// `[...]`
    Bare(Vec<T>),
    /// `{"results": [...], ...}`
    Page {
        /// The page's items.
        results: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    /// The items, whichever shape they came in.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Page { results: items } => items,
        }
    }
}

fn payload_error(endpoint: &str, err: &serde_json::Error) -> Error {
    Error::payload(err.to_string()).with_context(ErrorContext::new().with_source(endpoint))
}

/// Parses `GET /profile/`: a list whose first element is the profile.
///
/// An empty list yields `None`. A bare object is accepted as the profile.
///
/// # Errors
/// Returns a payload error if the body is not JSON of either shape.
pub fn parse_profile(body: &str) -> Result<Option<Profile>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shape {
        List(Vec<Profile>),
        Single(Profile),
    }

    match serde_json::from_str(body).map_err(|err| payload_error("profile", &err))? {
        Shape::List(list) => Ok(list.into_iter().next()),
        Shape::Single(profile) => Ok(Some(profile)),
    }
}

/// Parses `GET /projects/`, accepting a bare array or a page envelope.
///
/// # Errors
/// Returns a payload error if the body matches neither shape.
pub fn parse_projects(body: &str) -> Result<Vec<Project>> {
    let envelope: ListEnvelope<Project> =
        serde_json::from_str(body).map_err(|err| payload_error("projects", &err))?;
    Ok(envelope.into_items())
}

/// Parses `GET /projects/{id}/`.
///
/// # Errors
/// Returns a payload error if the body is not a project object.
pub fn parse_project(body: &str) -> Result<Project> {
    serde_json::from_str(body).map_err(|err| payload_error("project", &err))
}

/// Parses `GET /experiences/`. Anything but an array renders as an empty timeline.
///
/// # Errors
/// Returns a payload error if the body is not JSON, or an array element is malformed.
pub fn parse_experiences(body: &str) -> Result<Vec<Experience>> {
    parse_timeline(body, "experiences")
}

/// Parses `GET /education/`. Anything but an array renders as an empty timeline.
///
/// # Errors
/// Returns a payload error if the body is not JSON, or an array element is malformed.
pub fn parse_education(body: &str) -> Result<Vec<Education>> {
    parse_timeline(body, "education")
}

fn parse_timeline<T: for<'de> Deserialize<'de>>(body: &str, endpoint: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(body).map_err(|err| payload_error(endpoint, &err))?;
    if !value.is_array() {
        warn!(endpoint, "expected an array, rendering an empty timeline");
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|err| payload_error(endpoint, &err))
}
