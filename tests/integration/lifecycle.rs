//! Mount, update and teardown of layers driven by the event loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use nightsky_engine::{Distribution, Emission, FieldConfig, Lifetime, presets};
use nightsky_foundation::{Timestamp, Vec2, Viewport};
use nightsky_runtime::{EventLoop, ParticleLayer, Subscription};

fn t(ms: u64) -> Timestamp {
    Timestamp::from_millis(ms)
}

fn two_second_generator() -> FieldConfig {
    FieldConfig::new(
        "periodic",
        Emission::every(2_000),
        Lifetime::fixed(1_000),
        Distribution::full_viewport(),
    )
}

// =============================================================================
// End-to-end timing
// =============================================================================

#[test]
fn live_size_at_the_documented_instants() {
    let mut lp = EventLoop::new(Viewport::default());
    let layer = ParticleLayer::mount(&lp, two_second_generator(), 1).unwrap();

    lp.run_until(t(4_500));
    assert_eq!(layer.len(), 1);

    lp.run_until(t(5_000));
    assert!(layer.len() <= 2);
}

#[test]
fn live_size_bounded_over_a_minute_of_frames() {
    let mut lp = EventLoop::new(Viewport::default());
    let layer = ParticleLayer::mount(&lp, two_second_generator(), 1).unwrap();

    let mut peak = 0;
    while lp.now() < t(60_000) {
        lp.step();
        peak = peak.max(layer.len());
    }
    assert!(peak <= 1);
    assert_eq!(layer.stats().store.spawned, 30);
}

// =============================================================================
// Teardown
// =============================================================================

#[test]
fn unmount_mid_flight_stops_all_mutation() {
    let mut lp = EventLoop::new(Viewport::default());
    let mut layer = ParticleLayer::mount(&lp, two_second_generator(), 1).unwrap();
    lp.run_until(t(2_500));
    assert_eq!(layer.len(), 1);

    let discarded = layer.teardown();
    assert_eq!(discarded, 1);
    let frozen = layer.stats();

    for _ in 0..1_000 {
        lp.step();
    }
    lp.pointer_move(Vec2::new(50.0, 50.0));
    assert_eq!(layer.stats(), frozen);
    assert!(layer.is_empty());
}

#[test]
fn dropped_layers_leave_no_listeners_behind() {
    let mut lp = EventLoop::new(Viewport::default());
    let probes: Vec<_> = (0..5)
        .map(|seed| {
            let layer = ParticleLayer::mount(&lp, presets::mouse_trail(), seed).unwrap();
            lp.pointer_move(Vec2::new(1.0, 1.0));
            let probe = layer.probe();
            drop(layer);
            probe
        })
        .collect();

    assert_eq!(lp.listener_count(), 0);
    assert!(probes.iter().all(|probe| !probe.is_alive()));
    lp.run_until(t(10_000));
}

#[test]
fn layer_unmounted_by_another_listener_mid_frame() {
    let mut lp = EventLoop::new(Viewport::default());
    let slot: Rc<RefCell<Option<ParticleLayer>>> = Rc::new(RefCell::new(None));

    let killer_slot = Rc::clone(&slot);
    let fired = Rc::new(Cell::new(0));
    let fired_in = Rc::clone(&fired);
    let _killer: Subscription = lp.subscribe(move |event| {
        if event.now() >= t(3_000) {
            if let Some(mut layer) = killer_slot.borrow_mut().take() {
                fired_in.set(fired_in.get() + 1);
                layer.teardown();
            }
        }
    });

    let layer = ParticleLayer::mount(&lp, presets::shooting_stars(), 2).unwrap();
    let probe = layer.probe();
    *slot.borrow_mut() = Some(layer);

    lp.run_until(t(20_000));
    assert_eq!(fired.get(), 1);
    assert!(!probe.is_alive());
    assert_eq!(lp.listener_count(), 1);
}

// =============================================================================
// Resize
// =============================================================================

#[test]
fn resize_rescales_percent_positions() {
    let mut lp = EventLoop::new(Viewport::new(1000.0, 1000.0).unwrap());
    let mut layer = ParticleLayer::mount(&lp, presets::stars(), 4).unwrap();
    let before = layer.take_frame().unwrap();

    lp.resize(Viewport::new(500.0, 1000.0).unwrap());
    let after = layer.take_frame().unwrap();

    for (a, b) in before.sprites.iter().zip(&after.sprites) {
        assert!((b.position.x - a.position.x / 2.0).abs() < 1e-3);
        assert!((b.position.y - a.position.y).abs() < 1e-3);
    }
}
