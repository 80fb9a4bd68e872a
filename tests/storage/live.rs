//! Integration tests for the live collection

use nightsky_foundation::{ParticleId, Timestamp, Units, Vec2};
use nightsky_storage::{LiveSet, Particle};

fn particle(serial: u64) -> Particle {
    Particle::new(ParticleId::new(serial), Vec2::new(1.0, 2.0), Units::Pixels, Timestamp::ZERO)
}

#[test]
fn duplicate_insert_is_refused() {
    let mut live = LiveSet::new();
    assert!(live.insert(particle(1)));
    let version = live.version();
    assert!(!live.insert(particle(1)));
    assert_eq!(live.len(), 1);
    assert_eq!(live.version(), version);
}

#[test]
fn removing_absent_id_changes_nothing() {
    let mut live = LiveSet::new();
    live.insert(particle(1));
    let version = live.version();

    assert!(live.remove(ParticleId::new(42)).is_none());
    assert_eq!(live.version(), version);
    assert_eq!(live.len(), 1);
}

#[test]
fn double_removal_is_a_no_op() {
    let mut live = LiveSet::new();
    live.insert(particle(1));
    assert!(live.remove(ParticleId::new(1)).is_some());
    let version = live.version();
    assert!(live.remove(ParticleId::new(1)).is_none());
    assert_eq!(live.version(), version);
    assert!(live.is_empty());
}

#[test]
fn snapshots_are_isolated_from_later_changes() {
    let mut live = LiveSet::new();
    for serial in 0..5 {
        live.insert(particle(serial));
    }
    let snapshot = live.snapshot();
    live.remove(ParticleId::new(0));
    live.insert(particle(99));

    assert_eq!(snapshot.len(), 5);
    assert!(snapshot.contains_key(&ParticleId::new(0)));
    assert!(!snapshot.contains_key(&ParticleId::new(99)));
}

#[test]
fn iteration_is_in_id_order() {
    let mut live = LiveSet::new();
    for serial in [4, 1, 3] {
        live.insert(particle(serial));
    }
    let ids: Vec<u64> = live.iter().map(|p| p.id.serial).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}
