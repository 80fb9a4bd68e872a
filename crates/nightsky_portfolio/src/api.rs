//! Backend endpoint addressing.
//!
//! Only URLs are built here; fetching is left to whichever HTTP client the
//! host uses.

use serde::{Deserialize, Serialize};

use nightsky_foundation::{Error, Result};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "NIGHTSKY_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

/// The backend's resources.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /profile/`
    Profile,
    /// `GET /projects/`
    Projects,
    /// `GET /projects/{id}/`
    Project(u64),
    /// `GET /experiences/`
    Experiences,
    /// `GET /education/`
    Education,
    /// `POST /contact/`
    Contact,
}

impl Endpoint {
    /// Path relative to the base URL, with leading and trailing slashes.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Profile => "/profile/".to_string(),
            Self::Projects => "/projects/".to_string(),
            Self::Project(id) => format!("/projects/{id}/"),
            Self::Experiences => "/experiences/".to_string(),
            Self::Education => "/education/".to_string(),
            Self::Contact => "/contact/".to_string(),
        }
    }

    /// HTTP method.
    #[must_use]
    pub fn method(self) -> &'static str {
        match self {
            Self::Contact => "POST",
            _ => "GET",
        }
    }
}

/// Where the backend lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Creates a configuration for `base_url`.
    ///
    /// # Errors
    /// Returns an error if the URL is not `http` or `https`.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let scheme_ok = trimmed.starts_with("http://") || trimmed.starts_with("https://");
        let host_ok = trimmed
            .split_once("://")
            .is_some_and(|(_, rest)| !rest.is_empty());
        if !scheme_ok || !host_ok {
            return Err(Error::invalid_config(format!(
                "API base URL must be an http(s) URL, got {base_url:?}"
            ))
            .in_source(API_URL_ENV));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Reads the base URL from the environment, falling back to the default.
    ///
    /// # Errors
    /// Returns an error if the variable is set to something that is not an
    /// http(s) URL.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// # Errors
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        match lookup(API_URL_ENV).filter(|value| !value.trim().is_empty()) {
            Some(value) => Self::new(&value),
            None => Ok(Self::default()),
        }
    }

    /// Absolute URL of `endpoint`.
    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}
