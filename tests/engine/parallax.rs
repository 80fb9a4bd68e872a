//! Integration tests for the near-layer parallax offset

use nightsky_engine::{Parallax, ParticleField, map_linear, presets};
use nightsky_foundation::{Interval, Timestamp, Vec2, Viewport};
use nightsky_storage::Depth;
use proptest::prelude::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn edges_map_to_the_range_ends() {
    let parallax = Parallax::new(Viewport::new(1200.0, 900.0).unwrap());
    assert!(approx(parallax.offset_for(Vec2::new(0.0, 0.0)).x, -50.0));
    assert!(approx(parallax.offset_for(Vec2::new(1200.0, 0.0)).x, 50.0));
    assert!(approx(parallax.offset_for(Vec2::new(600.0, 450.0)).x, 0.0));
    assert!(approx(parallax.offset_for(Vec2::new(600.0, 450.0)).y, 0.0));
}

#[test]
fn offset_starts_at_the_origin_sample() {
    let parallax = Parallax::new(Viewport::default());
    assert_eq!(parallax.pointer(), Vec2::ZERO);
    assert!(approx(parallax.offset().x, -50.0));
    assert!(approx(parallax.offset().y, -50.0));
}

#[test]
fn resize_changes_the_input_range() {
    let mut parallax = Parallax::new(Viewport::new(1000.0, 1000.0).unwrap());
    parallax.pointer_moved(Vec2::new(500.0, 500.0));
    assert!(approx(parallax.offset().x, 0.0));

    parallax.resize(Viewport::new(500.0, 1000.0).unwrap());
    assert!(approx(parallax.offset().x, 50.0));
}

#[test]
fn degenerate_input_maps_to_the_middle() {
    let output = Interval::new(-50.0, 50.0).unwrap();
    assert_eq!(map_linear(7.0, Interval::fixed(3.0), output), 0.0);
    assert_eq!(map_linear(f32::NAN, Interval::new(0.0, 1.0).unwrap(), output), 0.0);
}

#[test]
fn only_near_stars_move() {
    let field = ParticleField::mount(presets::stars(), 5, Viewport::default(), Timestamp::ZERO).unwrap();
    let still = field.frame(Vec2::ZERO);
    let shifted = field.frame(Vec2::new(25.0, -10.0));

    let mut near = 0;
    for (a, b) in still.sprites.iter().zip(&shifted.sprites) {
        assert_eq!(a.id, b.id);
        if a.depth == Depth::Near {
            near += 1;
            assert!(approx(b.position.x - a.position.x, 25.0));
            assert!(approx(b.position.y - a.position.y, -10.0));
        } else {
            assert_eq!(a.position, b.position);
        }
    }
    assert!(near > 0 && near < presets::STAR_COUNT);
}

proptest! {
    #[test]
    fn offsets_stay_in_range(x in -5_000.0f32..5_000.0, y in -5_000.0f32..5_000.0, w in 1.0f32..4_000.0, h in 1.0f32..4_000.0) {
        let parallax = Parallax::new(Viewport::new(w, h).unwrap());
        let offset = parallax.offset_for(Vec2::new(x, y));
        prop_assert!((-50.0..=50.0).contains(&offset.x));
        prop_assert!((-50.0..=50.0).contains(&offset.y));
    }

    #[test]
    fn offset_grows_with_the_pointer(a in 0.0f32..1_000.0, b in 0.0f32..1_000.0) {
        let parallax = Parallax::new(Viewport::new(1_000.0, 1_000.0).unwrap());
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(parallax.offset_for(Vec2::new(lo, 0.0)).x <= parallax.offset_for(Vec2::new(hi, 0.0)).x);
    }
}
