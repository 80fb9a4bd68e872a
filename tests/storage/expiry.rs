//! Integration tests for expiry scheduling

use nightsky_foundation::{ParticleId, Timestamp};
use nightsky_storage::ExpiryQueue;

fn t(ms: u64) -> Timestamp {
    Timestamp::from_millis(ms)
}

#[test]
fn deadlines_pop_in_time_order() {
    let mut queue = ExpiryQueue::new();
    queue.schedule(ParticleId::new(0), t(300));
    queue.schedule(ParticleId::new(1), t(100));
    queue.schedule(ParticleId::new(2), t(200));

    let order: Vec<u64> = queue.drain_due(t(1_000)).iter().map(|d| d.id.serial).collect();
    assert_eq!(order, vec![1, 2, 0]);
    assert!(queue.is_empty());
}

#[test]
fn equal_deadlines_keep_scheduling_order() {
    let mut queue = ExpiryQueue::new();
    for serial in [5, 3, 9] {
        queue.schedule(ParticleId::new(serial), t(50));
    }
    let order: Vec<u64> = queue.drain_due(t(50)).iter().map(|d| d.id.serial).collect();
    assert_eq!(order, vec![5, 3, 9]);
}

#[test]
fn deadline_is_due_at_its_instant() {
    let mut queue = ExpiryQueue::new();
    queue.schedule(ParticleId::new(0), t(1_000));
    assert!(queue.pop_due(t(999)).is_none());
    assert_eq!(queue.next_deadline(), Some(t(1_000)));
    assert!(queue.pop_due(t(1_000)).is_some());
}

#[test]
fn cancel_all_empties_the_heap() {
    let mut queue = ExpiryQueue::new();
    for serial in 0..10 {
        queue.schedule(ParticleId::new(serial), t(serial * 10));
    }
    assert_eq!(queue.cancel_all(), 10);
    assert!(queue.drain_due(t(u64::MAX)).is_empty());
    assert_eq!(queue.next_deadline(), None);
}
