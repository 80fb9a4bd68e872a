//! The live collection of a particle field.
//!
//! Backed by a persistent ordered map: iteration is in id order, so seeded
//! runs render and link particles in the same order every time, and
//! [`LiveSet::snapshot`] hands out the membership without copying it.

use im::OrdMap;

use nightsky_foundation::ParticleId;

use crate::particle::Particle;

/// The set of not-yet-expired particles of one field.
///
/// Every mutation bumps [`version`](Self::version), which the render layer
/// uses to consume each change exactly once.
#[derive(Clone, Debug, Default)]
pub struct LiveSet {
    particles: OrdMap<ParticleId, Particle>,
    version: u64,
}

impl LiveSet {
    /// Creates an empty live set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a particle.
    ///
    /// Returns `false` and leaves the set untouched if the id is already live.
    pub fn insert(&mut self, particle: Particle) -> bool {
        if self.particles.contains_key(&particle.id) {
            return false;
        }
        self.particles.insert(particle.id, particle);
        self.version += 1;
        true
    }

    /// Removes a particle by id.
    ///
    /// Removing an absent id is a no-op: it returns `None` and does not bump
    /// the version.
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        let removed = self.particles.remove(&id);
        if removed.is_some() {
            self.version += 1;
        }
        removed
    }

    /// Removes every particle, returning how many were live.
    pub fn clear(&mut self) -> usize {
        let count = self.particles.len();
        if count > 0 {
            self.particles.clear();
            self.version += 1;
        }
        count
    }

    /// Returns the particle with the given id, if live.
    #[must_use]
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(&id)
    }

    /// Returns true if the id is live.
    #[must_use]
    pub fn contains(&self, id: ParticleId) -> bool {
        self.particles.contains_key(&id)
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Returns true if nothing is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Iterates over live particles in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.values()
    }

    /// Mutation counter; changes whenever membership changes.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Cheap structural-sharing copy of the current membership.
    #[must_use]
    pub fn snapshot(&self) -> OrdMap<ParticleId, Particle> {
        self.particles.clone()
    }
}
