//! Integration tests for error reporting

use nightsky_foundation::{Error, ErrorContext, ErrorKind, Interval};

#[test]
fn kinds_render_readably() {
    let err = Interval::new(3.0, 1.0).unwrap_err();
    assert_eq!(err.to_string(), "invalid interval: [3, 1)");

    let err = Error::invalid_config("tick interval must be positive");
    assert_eq!(err.to_string(), "invalid configuration: tick interval must be positive");
}

#[test]
fn context_describes_origin() {
    let context = ErrorContext::new().with_source("shooting_stars").with_field("emission").with_field("every_ms");
    assert_eq!(context.to_string(), "in shooting_stars at emission.every_ms");

    let only_field = ErrorContext::new().with_field("palette");
    assert_eq!(only_field.to_string(), "at palette");
}

#[test]
fn in_source_keeps_existing_path() {
    let err = Error::payload("expected an array")
        .with_context(ErrorContext::new().with_field("results"))
        .in_source("/projects/");
    let context = err.context.unwrap();
    assert_eq!(context.source.as_deref(), Some("/projects/"));
    assert_eq!(context.path, vec!["results".to_string()]);
    assert!(matches!(err.kind, ErrorKind::Payload(_)));
}

#[test]
fn io_errors_convert() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io.into();
    assert!(matches!(err.kind, ErrorKind::Io(_)));
}
