//! Integration tests for the spring-damped cursor ring

use nightsky_engine::CursorFollower;
use nightsky_foundation::Vec2;

#[test]
fn ring_settles_on_the_pointer() {
    let mut ring = CursorFollower::default();
    ring.pointer_moved(Vec2::new(400.0, 300.0));
    ring.advance(2_000);

    assert!(ring.is_settled(0.5));
    let drawn = ring.drawn();
    assert!((drawn.x - 390.0).abs() < 0.5);
    assert!((drawn.y - 290.0).abs() < 0.5);
}

#[test]
fn motion_depends_only_on_elapsed_time() {
    let mut coarse = CursorFollower::default();
    let mut fine = CursorFollower::default();
    coarse.pointer_moved(Vec2::new(100.0, 0.0));
    fine.pointer_moved(Vec2::new(100.0, 0.0));

    coarse.advance(48);
    for _ in 0..3 {
        fine.advance(16);
    }
    assert_eq!(coarse.position(), fine.position());
}

#[test]
fn ring_lags_behind_a_jump() {
    let mut ring = CursorFollower::default();
    ring.pointer_moved(Vec2::new(500.0, 0.0));
    ring.advance(16);
    let position = ring.position();
    assert!(position.x > 0.0 && position.x < 500.0);
    assert!(!ring.is_settled(0.5));
}

#[test]
fn non_finite_samples_are_ignored() {
    let mut ring = CursorFollower::new(Vec2::new(10.0, 10.0));
    ring.pointer_moved(Vec2::new(f32::NAN, 0.0));
    ring.advance(500);
    assert_eq!(ring.position(), Vec2::new(10.0, 10.0));
}
