//! The site's decorative instances as field configurations.
//!
//! Each preset is an ordinary [`FieldConfig`]; callers can tweak any value
//! with the builder methods before mounting.

use nightsky_foundation::{Color, Interval};

use crate::config::{DepthMix, Distribution, Emission, FieldConfig, Lifetime, interval};

/// Backdrop shooting-star period, in ms.
pub const SHOOTING_STAR_PERIOD_MS: u64 = 2_000;
/// Hero-section shooting-star period, in ms.
pub const HERO_SHOOTING_STAR_PERIOD_MS: u64 = 2_500;
/// Number of static stars in the starfield.
pub const STAR_COUNT: usize = 200;
/// Sparkle lifetime, in ms.
pub const SPARKLE_LIFETIME_MS: u64 = 700;
/// Trail particle lifetime, in ms.
pub const TRAIL_LIFETIME_MS: u64 = 1_200;
/// Upper bound on live trail particles.
pub const TRAIL_MAX_LIVE: usize = 64;
/// Distance under which trail particles are linked, in pixels.
pub const TRAIL_LINK_THRESHOLD: f32 = 100.0;

/// Sparkle colors: gold, hot pink, aquamarine, deep sky blue, orange red.
pub const SPARKLE_PALETTE: [Color; 5] = [
    Color::rgb(0xFF, 0xD7, 0x00),
    Color::rgb(0xFF, 0x69, 0xB4),
    Color::rgb(0x7F, 0xFF, 0xD4),
    Color::rgb(0x00, 0xBF, 0xFF),
    Color::rgb(0xFF, 0x45, 0x00),
];

/// Two-layer twinkling starfield.
#[must_use]
pub fn stars() -> FieldConfig {
    FieldConfig::new(
        "stars",
        Emission::Burst { count: STAR_COUNT },
        Lifetime::Permanent,
        Distribution::full_viewport(),
    )
    .with_size(interval(0.0, 2.0))
    .with_opacity(interval(0.2, 1.0))
    .with_animation(interval(15_000.0, 30_000.0))
    .with_delay(interval(0.0, 10_000.0))
    .with_depth(DepthMix {
        near_chance: 0.5,
        near_size_bonus: 1.0,
        near_animation_bonus_ms: 10_000.0,
    })
}

/// Shooting stars streaking from the left edge of the backdrop.
#[must_use]
pub fn shooting_stars() -> FieldConfig {
    shooting("shooting_stars", SHOOTING_STAR_PERIOD_MS)
}

/// Shooting stars of the hero section, on a slower period.
#[must_use]
pub fn hero_shooting_stars() -> FieldConfig {
    shooting("hero_shooting_stars", HERO_SHOOTING_STAR_PERIOD_MS)
}

fn shooting(name: &str, every_ms: u64) -> FieldConfig {
    FieldConfig::new(
        name,
        Emission::every(every_ms),
        Lifetime::Timed(interval(1_000.0, 2_000.0)),
        Distribution::Region {
            x: Interval::fixed(-10.0),
            y: interval(0.0, 60.0),
        },
    )
    .with_size(Interval::fixed(2.0))
    .with_opacity(Interval::fixed(0.8))
    .with_animation_over_lifetime()
    .with_length(interval(100.0, 250.0))
}

/// Colored sparkles dropped at every pointer sample.
#[must_use]
pub fn cursor_sparkles() -> FieldConfig {
    FieldConfig::new(
        "cursor_sparkles",
        Emission::Pointer,
        Lifetime::fixed(SPARKLE_LIFETIME_MS),
        Distribution::Pointer { jitter: 0.0 },
    )
    .with_size(interval(4.0, 10.0))
    .with_palette(SPARKLE_PALETTE.to_vec())
    .with_fade(true)
}

/// Pointer trail whose nearby particles are joined by fading lines.
#[must_use]
pub fn mouse_trail() -> FieldConfig {
    FieldConfig::new(
        "mouse_trail",
        Emission::Pointer,
        Lifetime::fixed(TRAIL_LIFETIME_MS),
        Distribution::Pointer { jitter: 0.0 },
    )
    .with_size(interval(2.0, 5.0))
    .with_opacity(interval(0.5, 1.0))
    .with_max_live(TRAIL_MAX_LIVE)
    .with_proximity(TRAIL_LINK_THRESHOLD)
    .with_fade(true)
}

/// Every preset, in the order scenes stack them.
#[must_use]
pub fn all() -> Vec<FieldConfig> {
    vec![
        stars(),
        shooting_stars(),
        hero_shooting_stars(),
        cursor_sparkles(),
        mouse_trail(),
    ]
}
