//! Integration tests for attribute ranges, colors, ids and randomness

use nightsky_foundation::{Color, FieldRng, Interval, ParticleId, Timestamp};
use proptest::prelude::*;

// =============================================================================
// Intervals
// =============================================================================

#[test]
fn interval_bounds() {
    let range = Interval::new(2.0, 5.0).unwrap();
    assert_eq!(range.min(), 2.0);
    assert_eq!(range.max(), 5.0);
    assert_eq!(range.mean(), 3.5);
    assert!(range.contains(2.0));
    assert!(!range.contains(1.9));
    assert!(!range.contains(5.5));
}

#[test]
fn inverted_or_non_finite_interval_is_rejected() {
    assert!(Interval::new(5.0, 2.0).is_err());
    assert!(Interval::new(f32::NAN, 2.0).is_err());
    assert!(Interval::new(0.0, f32::INFINITY).is_err());
}

#[test]
fn intervals_serialize_as_pairs() {
    let range: Interval = serde_json::from_str("[100, 250]").unwrap();
    assert_eq!(range, Interval::new(100.0, 250.0).unwrap());
    assert!(serde_json::from_str::<Interval>("[5, 1]").is_err());
}

#[test]
fn fixed_interval() {
    let fixed = Interval::fixed(0.8);
    assert!(fixed.is_fixed());
    assert_eq!(fixed.mean(), 0.8);
}

// =============================================================================
// Colors
// =============================================================================

#[test]
fn color_hex_forms() {
    assert_eq!(Color::from_hex("#FFD700").unwrap(), Color::rgb(0xFF, 0xD7, 0x00));
    assert_eq!(Color::from_hex("ff69b4").unwrap(), Color::rgb(0xFF, 0x69, 0xB4));
    assert_eq!(Color::from_hex("#fff").unwrap(), Color::WHITE);
    assert_eq!(Color::rgb(0x7F, 0xFF, 0xD4).to_hex(), "#7FFFD4");
}

#[test]
fn bad_colors_are_rejected() {
    for text in ["", "#12", "#GGGGGG", "#1234567", "#ééé"] {
        assert!(Color::from_hex(text).is_err(), "{text:?} should not parse");
    }
}

#[test]
fn colors_serialize_as_hex_strings() {
    let json = serde_json::to_string(&Color::rgb(0, 0xBF, 0xFF)).unwrap();
    assert_eq!(json, "\"#00BFFF\"");
    let back: Color = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Color::rgb(0, 0xBF, 0xFF));
}

// =============================================================================
// Ids and time
// =============================================================================

#[test]
fn ids_are_monotonic() {
    let first = ParticleId::default();
    let second = first.next();
    assert!(second > first);
    assert_eq!(second, ParticleId::new(1));
}

#[test]
fn timestamps() {
    let t = Timestamp::from_millis(1_500);
    assert_eq!(t.after(500), Timestamp::from_millis(2_000));
    assert_eq!(t.since(Timestamp::from_millis(1_000)), 500);
    assert_eq!(Timestamp::ZERO.since(t), 0);
}

// =============================================================================
// Randomness
// =============================================================================

#[test]
fn same_seed_same_stream() {
    let range = Interval::new(0.0, 100.0).unwrap();
    let mut a = FieldRng::seed_from_u64(99);
    let mut b = FieldRng::seed_from_u64(99);
    for _ in 0..32 {
        assert_eq!(a.sample(&range), b.sample(&range));
    }
}

#[test]
fn labels_separate_streams() {
    let range = Interval::new(0.0, 1.0).unwrap();
    let mut stars = FieldRng::for_label(1, "stars");
    let mut trail = FieldRng::for_label(1, "mouse_trail");
    let a: Vec<f32> = (0..8).map(|_| stars.sample(&range)).collect();
    let b: Vec<f32> = (0..8).map(|_| trail.sample(&range)).collect();
    assert_ne!(a, b);
}

#[test]
fn chance_extremes() {
    let mut rng = FieldRng::seed_from_u64(0);
    assert!((0..100).all(|_| rng.chance(1.0)));
    assert!((0..100).all(|_| !rng.chance(0.0)));
    assert!(!rng.chance(f32::NAN));
}

#[test]
fn pick_from_empty_is_none() {
    let mut rng = FieldRng::seed_from_u64(0);
    let empty: [u8; 0] = [];
    assert!(rng.pick(&empty).is_none());
    assert_eq!(rng.pick(&[7]), Some(&7));
}

proptest! {
    #[test]
    fn samples_stay_in_half_open_range(seed in any::<u64>(), min in -1000.0f32..1000.0, width in 0.001f32..500.0) {
        let range = Interval::new(min, min + width).unwrap();
        let mut rng = FieldRng::seed_from_u64(seed);
        for _ in 0..16 {
            let value = rng.sample(&range);
            prop_assert!(value >= range.min());
            prop_assert!(value <= range.max());
        }
    }
}
