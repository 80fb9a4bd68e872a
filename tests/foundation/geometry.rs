//! Integration tests for screen-space geometry

use nightsky_foundation::{ErrorKind, Units, Vec2, Viewport};

// =============================================================================
// Viewport
// =============================================================================

#[test]
fn viewport_rejects_degenerate_sizes() {
    for (w, h) in [(0.0, 10.0), (10.0, 0.0), (-1.0, 10.0), (f32::NAN, 10.0), (10.0, f32::INFINITY)] {
        let err = Viewport::new(w, h).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidViewport { .. }));
    }
}

#[test]
fn percent_positions_scale_with_viewport() {
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let pixels = viewport.to_pixels(Vec2::new(50.0, 25.0), Units::Percent);
    assert_eq!(pixels, Vec2::new(400.0, 150.0));

    let offscreen = viewport.to_pixels(Vec2::new(-10.0, 60.0), Units::Percent);
    assert_eq!(offscreen, Vec2::new(-80.0, 360.0));
}

#[test]
fn pixel_positions_are_unchanged() {
    let viewport = Viewport::new(800.0, 600.0).unwrap();
    let p = Vec2::new(12.5, 900.0);
    assert_eq!(viewport.to_pixels(p, Units::Pixels), p);
}

#[test]
fn viewport_center() {
    let viewport = Viewport::new(1000.0, 500.0).unwrap();
    assert_eq!(viewport.center(), Vec2::new(500.0, 250.0));
}

#[test]
fn viewport_deserialization_validates() {
    let ok: Viewport = serde_json::from_str(r#"{"width": 320, "height": 480}"#).unwrap();
    assert_eq!(ok.width(), 320.0);
    assert!(serde_json::from_str::<Viewport>(r#"{"width": 0, "height": 480}"#).is_err());
}

// =============================================================================
// Vectors
// =============================================================================

#[test]
fn distance_is_euclidean() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(3.0, 4.0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(a.distance_squared(b), 25.0);
    assert_eq!(b.distance(a), 5.0);
}

#[test]
fn finiteness() {
    assert!(Vec2::new(1.0, -1.0).is_finite());
    assert!(!Vec2::new(f32::NAN, 0.0).is_finite());
    assert!(!Vec2::new(0.0, f32::NEG_INFINITY).is_finite());
}
