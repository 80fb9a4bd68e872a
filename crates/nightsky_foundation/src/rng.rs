//! Deterministic randomness for particle attributes.
//!
//! Every field owns its own seeded stream so a simulation replays
//! identically for the same seed, independent of how many other fields exist.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Interval;

/// Seeded random source owned by one particle field.
#[derive(Clone, Debug)]
pub struct FieldRng {
    inner: ChaCha8Rng,
}

impl FieldRng {
    /// Creates a generator from a seed.
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a generator whose stream is derived from a base seed and a label.
    ///
    /// Fields sharing a scene seed get independent streams by label.
    #[must_use]
    pub fn for_label(seed: u64, label: &str) -> Self {
        Self::seed_from_u64(seed ^ fnv1a(label))
    }

    /// Draws a value uniformly from `interval`.
    pub fn sample(&mut self, interval: &Interval) -> f32 {
        if interval.is_fixed() {
            interval.min()
        } else {
            self.inner.gen_range(interval.min()..interval.max())
        }
    }

    /// Returns true with probability `p` (clamped to `[0, 1]`, NaN is never).
    pub fn chance(&mut self, p: f32) -> bool {
        if p.is_nan() || p <= 0.0 {
            return false;
        }
        if p >= 1.0 {
            return true;
        }
        self.inner.gen_bool(f64::from(p))
    }

    /// Picks one element uniformly, or `None` for an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.inner.gen_range(0..items.len()))
        }
    }
}

/// 64-bit FNV-1a; stable across platforms and releases, unlike `DefaultHasher`.
fn fnv1a(text: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    text.bytes()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
