//! Integration tests for particle lifecycle bookkeeping

use nightsky_foundation::{ParticleId, Timestamp, Units, Vec2};
use nightsky_storage::{Particle, ParticleStore};
use proptest::prelude::*;

fn spawn(store: &mut ParticleStore, born: u64, lifetime: Option<u64>) -> ParticleId {
    let id = store.allocate_id();
    let mut particle = Particle::new(id, Vec2::ZERO, Units::Percent, Timestamp::from_millis(born));
    if let Some(lifetime) = lifetime {
        particle = particle.with_lifetime(lifetime);
    }
    assert!(store.insert(particle));
    id
}

// =============================================================================
// Expiry
// =============================================================================

#[test]
fn particles_expire_at_their_deadline() {
    let mut store = ParticleStore::new();
    let short = spawn(&mut store, 0, Some(500));
    let long = spawn(&mut store, 0, Some(1_500));
    let forever = spawn(&mut store, 0, None);

    let gone: Vec<ParticleId> = store.expire_due(Timestamp::from_millis(500)).iter().map(|p| p.id).collect();
    assert_eq!(gone, vec![short]);
    assert!(store.live().contains(long));
    assert!(store.live().contains(forever));

    store.expire_due(Timestamp::from_millis(10_000));
    assert_eq!(store.len(), 1);
    assert_eq!(store.stats().expired, 2);
}

#[test]
fn early_removal_is_not_reported_again_by_expiry() {
    let mut store = ParticleStore::new();
    let id = spawn(&mut store, 0, Some(100));
    assert!(store.remove(id).is_some());
    assert!(store.remove(id).is_none());

    assert!(store.expire_due(Timestamp::from_millis(100)).is_empty());
    let stats = store.stats();
    assert_eq!(stats.removed, 1);
    assert_eq!(stats.expired, 0);
    assert_eq!(stats.pending, 0);
}

#[test]
fn clear_cancels_pending_expiries() {
    let mut store = ParticleStore::new();
    for born in 0..20 {
        spawn(&mut store, born, Some(1_000));
    }
    assert_eq!(store.clear(), 20);
    assert_eq!(store.next_expiry(), None);
    assert!(store.expire_due(Timestamp::from_millis(u64::MAX)).is_empty());
    assert_eq!(store.stats().discarded, 20);
}

#[test]
fn ids_are_never_reused() {
    let mut store = ParticleStore::new();
    let first = spawn(&mut store, 0, Some(1));
    store.expire_due(Timestamp::from_millis(1));
    let second = spawn(&mut store, 2, Some(1));
    assert_ne!(first, second);
    assert!(second > first);
}

proptest! {
    #[test]
    fn every_particle_leaves_exactly_once(
        lifetimes in prop::collection::vec(0u64..5_000, 1..64),
        removals in prop::collection::vec(any::<bool>(), 64),
    ) {
        let mut store = ParticleStore::new();
        let ids: Vec<ParticleId> = lifetimes
            .iter()
            .enumerate()
            .map(|(born, lifetime)| spawn(&mut store, born as u64, Some(*lifetime)))
            .collect();

        let mut left = 0usize;
        for (id, remove) in ids.iter().zip(&removals) {
            if *remove && store.remove(*id).is_some() {
                left += 1;
            }
        }
        left += store.expire_due(Timestamp::from_millis(10_000)).len();

        prop_assert_eq!(left, ids.len());
        prop_assert!(store.is_empty());
        let stats = store.stats();
        prop_assert_eq!(stats.expired + stats.removed, ids.len() as u64);
    }
}
