//! Error types for the Nightsky system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Note that the particle lifecycle itself has no failure modes: removing an
//! absent particle or firing a timer after teardown are silent no-ops. Errors
//! come from configuration, viewport input and API payloads.

use std::fmt;

use thiserror::Error;

/// The main error type for Nightsky operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Adds a source label, creating the context if needed.
    #[must_use]
    pub fn in_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Creates an invalid interval error.
    #[must_use]
    pub fn invalid_interval(min: f32, max: f32) -> Self {
        Self::new(ErrorKind::InvalidInterval { min, max })
    }

    /// Creates an invalid viewport error.
    #[must_use]
    pub fn invalid_viewport(width: f32, height: f32) -> Self {
        Self::new(ErrorKind::InvalidViewport { width, height })
    }

    /// Creates an invalid color error.
    #[must_use]
    pub fn invalid_color(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidColor(text.into()))
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig(message.into()))
    }

    /// Creates a payload parsing error.
    #[must_use]
    pub fn payload(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Payload(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An attribute range had non-finite or inverted bounds.
    #[error("invalid interval: [{min}, {max})")]
    InvalidInterval {
        /// Lower bound as given.
        min: f32,
        /// Upper bound as given.
        max: f32,
    },

    /// Viewport extents must be positive and finite.
    #[error("invalid viewport: {width}x{height}")]
    InvalidViewport {
        /// Width as given.
        width: f32,
        /// Height as given.
        height: f32,
    },

    /// A color string was not `#RGB` or `#RRGGBB`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A field or simulation configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An API payload could not be decoded.
    #[error("malformed payload: {0}")]
    Payload(String),

    /// Reading a configuration file failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Config file, preset or endpoint name.
    pub source: Option<String>,
    /// Path of nested fields leading to the error, outermost first.
    pub path: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Appends a field to the path.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.path.push(field.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if !self.path.is_empty() {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "at {}", self.path.join("."))?;
        }
        Ok(())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}
