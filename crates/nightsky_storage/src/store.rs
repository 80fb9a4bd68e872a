//! Particle lifecycle bookkeeping.
//!
//! The `ParticleStore` owns the id allocator, the live set and the expiry
//! queue of one field, and guarantees that every inserted particle leaves the
//! live set exactly once.

use tracing::trace;

use nightsky_foundation::{ParticleId, Timestamp};

use crate::expiry::ExpiryQueue;
use crate::live::LiveSet;
use crate::particle::Particle;

/// Counters describing a store's history.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StoreStats {
    /// Particles currently live.
    pub live: usize,
    /// Pending expiry entries (including ones for manually removed particles).
    pub pending: usize,
    /// Particles ever inserted.
    pub spawned: u64,
    /// Particles removed by their expiry.
    pub expired: u64,
    /// Particles removed explicitly by id.
    pub removed: u64,
    /// Particles discarded by teardown.
    pub discarded: u64,
}

/// Id allocation, live set and expiry queue for one field.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    live: LiveSet,
    expiry: ExpiryQueue,
    next_id: ParticleId,
    spawned: u64,
    expired: u64,
    removed: u64,
    discarded: u64,
}

impl ParticleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh, never-used particle id.
    pub fn allocate_id(&mut self) -> ParticleId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    /// Inserts a particle and schedules its expiry, if it has one.
    ///
    /// Returns `false` without scheduling anything if the id is already live.
    pub fn insert(&mut self, particle: Particle) -> bool {
        let id = particle.id;
        let expires_at = particle.expires_at;
        if !self.live.insert(particle) {
            return false;
        }
        if let Some(at) = expires_at {
            self.expiry.schedule(id, at);
        }
        self.spawned += 1;
        trace!(%id, ?expires_at, "particle spawned");
        true
    }

    /// Removes every particle whose expiry is due at or before `now`.
    ///
    /// Entries left behind by explicit removals are skipped, so each particle
    /// is reported at most once.
    pub fn expire_due(&mut self, now: Timestamp) -> Vec<Particle> {
        let mut expired = Vec::new();
        while let Some(deadline) = self.expiry.pop_due(now) {
            if let Some(particle) = self.live.remove(deadline.id) {
                self.expired += 1;
                trace!(id = %deadline.id, at = %deadline.at, "particle expired");
                expired.push(particle);
            }
        }
        expired
    }

    /// Removes a particle before its expiry. Absent ids are a no-op.
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        let removed = self.live.remove(id);
        if removed.is_some() {
            self.removed += 1;
        }
        removed
    }

    /// Cancels every pending expiry and empties the live set.
    ///
    /// Returns the number of particles discarded.
    pub fn clear(&mut self) -> usize {
        self.expiry.cancel_all();
        let count = self.live.clear();
        self.discarded += count as u64;
        count
    }

    /// The earliest pending expiry.
    #[must_use]
    pub fn next_expiry(&self) -> Option<Timestamp> {
        self.expiry.next_deadline()
    }

    /// The live set.
    #[must_use]
    pub fn live(&self) -> &LiveSet {
        &self.live
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true if nothing is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            live: self.live.len(),
            pending: self.expiry.len(),
            spawned: self.spawned,
            expired: self.expired,
            removed: self.removed,
            discarded: self.discarded,
        }
    }
}
