//! Particle identifiers.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a single particle.
///
/// Ids are allocated from a monotonically increasing serial and are never
/// reused, so an expired particle's id can never alias a newer one.
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticleId {
    /// Allocation serial, unique within one field.
    pub serial: u64,
}

impl ParticleId {
    /// Creates a particle ID from its serial.
    #[must_use]
    pub const fn new(serial: u64) -> Self {
        Self { serial }
    }

    /// Returns the ID allocated after this one.
    ///
    /// Saturates at `u64::MAX`, which is never handed out in practice.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            serial: self.serial.saturating_add(1),
        }
    }
}

impl fmt::Debug for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticleId({})", self.serial)
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Particle({})", self.serial)
    }
}
