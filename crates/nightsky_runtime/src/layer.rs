//! Fields and the cursor ring mounted on an event loop.
//!
//! A mounted layer owns its state and the [`Subscription`] that feeds it. The
//! listener only holds a weak reference, so unmounting (or simply dropping
//! the layer) unregisters the listener and frees the field in one step.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use nightsky_engine::{CursorFollower, FieldConfig, FieldStats, Frame, Parallax, ParticleField};
use nightsky_foundation::{ParticleId, Result, Timestamp, Vec2};
use nightsky_storage::Particle;

use crate::event_loop::{EventLoop, HostEvent, Subscription};

#[derive(Debug)]
struct LayerState {
    field: ParticleField,
    parallax: Option<Parallax>,
    dirty: bool,
    frames_taken: u64,
    max_links: usize,
}

impl LayerState {
    fn handle(&mut self, event: &HostEvent) {
        match *event {
            HostEvent::Frame { now } => {
                let report = self.field.advance(now);
                let fading = self.field.config().fade && !self.field.is_empty();
                if report.changed() || fading {
                    self.dirty = true;
                }
            }
            HostEvent::PointerMove { position, now } => {
                let before = self.field.version();
                self.field.pointer_moved(position, now);
                if self.field.version() != before {
                    self.dirty = true;
                }
                if let Some(parallax) = &mut self.parallax {
                    parallax.pointer_moved(position);
                    self.dirty = true;
                }
            }
            HostEvent::Resize { viewport, now } => {
                self.field.advance(now);
                self.field.resize(viewport);
                if let Some(parallax) = &mut self.parallax {
                    parallax.resize(viewport);
                }
                self.dirty = true;
            }
        }
    }

    fn render(&self) -> Frame {
        let offset = self.parallax.map_or(Vec2::ZERO, |p| p.offset());
        self.field.frame(offset)
    }
}

/// A particle field bound to an event loop.
#[derive(Debug)]
pub struct ParticleLayer {
    state: Rc<RefCell<LayerState>>,
    subscription: Option<Subscription>,
}

impl ParticleLayer {
    /// Mounts a field at the loop's current time and viewport.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn mount(event_loop: &EventLoop, config: FieldConfig, seed: u64) -> Result<Self> {
        Self::mount_inner(event_loop, config, seed, None)
    }

    /// Mounts a field whose near layer follows the pointer.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn mount_with_parallax(
        event_loop: &EventLoop,
        config: FieldConfig,
        seed: u64,
        parallax: Parallax,
    ) -> Result<Self> {
        Self::mount_inner(event_loop, config, seed, Some(parallax))
    }

    fn mount_inner(
        event_loop: &EventLoop,
        config: FieldConfig,
        seed: u64,
        parallax: Option<Parallax>,
    ) -> Result<Self> {
        let field = ParticleField::mount(config, seed, event_loop.viewport(), event_loop.now())?;
        let state = Rc::new(RefCell::new(LayerState {
            field,
            parallax,
            dirty: true,
            frames_taken: 0,
            max_links: 0,
        }));

        let weak = Rc::downgrade(&state);
        let subscription = event_loop.subscribe(move |event| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().handle(event);
            }
        });

        Ok(Self {
            state,
            subscription: Some(subscription),
        })
    }

    /// Field name.
    #[must_use]
    pub fn name(&self) -> String {
        self.state.borrow().field.config().name.clone()
    }

    /// A copy of the field's configuration.
    #[must_use]
    pub fn config(&self) -> FieldConfig {
        self.state.borrow().field.config().clone()
    }

    /// Returns true until the layer is torn down.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().field.len()
    }

    /// Returns true if nothing is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().field.is_empty()
    }

    /// Field counters.
    #[must_use]
    pub fn stats(&self) -> FieldStats {
        self.state.borrow().field.stats()
    }

    /// Frames handed out by [`take_frame`](Self::take_frame).
    #[must_use]
    pub fn frames_taken(&self) -> u64 {
        self.state.borrow().frames_taken
    }

    /// Most proximity links seen in a taken frame.
    #[must_use]
    pub fn max_links(&self) -> usize {
        self.state.borrow().max_links
    }

    /// The field's current time.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.state.borrow().field.now()
    }

    /// Returns a frame if anything changed since the last one was taken.
    pub fn take_frame(&mut self) -> Option<Frame> {
        let mut state = self.state.borrow_mut();
        if !state.dirty {
            return None;
        }
        state.dirty = false;
        let frame = state.render();
        state.frames_taken += 1;
        state.max_links = state.max_links.max(frame.links.len());
        Some(frame)
    }

    /// Renders the current state without consuming the change.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.state.borrow().render()
    }

    /// Removes one particle early. Absent ids are a no-op.
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        let mut state = self.state.borrow_mut();
        let removed = state.field.remove(id);
        if removed.is_some() {
            state.dirty = true;
        }
        removed
    }

    /// Unsubscribes from the loop and tears the field down.
    ///
    /// Returns the number of particles discarded; later calls return 0.
    pub fn teardown(&mut self) -> usize {
        drop(self.subscription.take());
        let mut state = self.state.borrow_mut();
        let discarded = state.field.teardown();
        if discarded > 0 {
            state.dirty = true;
        }
        discarded
    }

    /// Tears the layer down and returns its final counters.
    #[must_use]
    pub fn unmount(mut self) -> FieldStats {
        self.teardown();
        let stats = self.stats();
        debug!(field = %stats.name, spawned = stats.store.spawned, "layer unmounted");
        stats
    }

    /// A weak handle that outlives the layer, for checking it was freed.
    #[must_use]
    pub fn probe(&self) -> LayerProbe {
        LayerProbe {
            state: Rc::downgrade(&self.state),
        }
    }
}

/// Observes a layer's state without keeping it alive.
#[derive(Debug, Clone)]
pub struct LayerProbe {
    state: Weak<RefCell<LayerState>>,
}

impl LayerProbe {
    /// Returns true while the layer's state still exists.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.state.strong_count() > 0
    }

    /// Live count, if the state still exists.
    #[must_use]
    pub fn live_count(&self) -> Option<usize> {
        self.state.upgrade().map(|state| state.borrow().field.len())
    }
}

#[derive(Debug)]
struct CursorState {
    follower: CursorFollower,
    last: Timestamp,
}

impl CursorState {
    fn handle(&mut self, event: &HostEvent) {
        let now = event.now();
        self.follower.advance(now.since(self.last));
        if now > self.last {
            self.last = now;
        }
        if let HostEvent::PointerMove { position, .. } = *event {
            self.follower.pointer_moved(position);
        }
    }
}

/// The spring-following cursor ring bound to an event loop.
#[derive(Debug)]
pub struct CursorLayer {
    state: Rc<RefCell<CursorState>>,
    subscription: Option<Subscription>,
}

impl CursorLayer {
    /// Mounts a ring at rest at the origin.
    #[must_use]
    pub fn mount(event_loop: &EventLoop) -> Self {
        Self::mount_with(event_loop, CursorFollower::default())
    }

    /// Mounts a preconfigured follower.
    #[must_use]
    pub fn mount_with(event_loop: &EventLoop, follower: CursorFollower) -> Self {
        let state = Rc::new(RefCell::new(CursorState {
            follower,
            last: event_loop.now(),
        }));
        let weak = Rc::downgrade(&state);
        let subscription = event_loop.subscribe(move |event| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().handle(event);
            }
        });
        Self {
            state,
            subscription: Some(subscription),
        }
    }

    /// Where the ring is drawn.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.state.borrow().follower.drawn()
    }

    /// Returns true until the layer is torn down.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Stops following the pointer.
    pub fn teardown(&mut self) {
        drop(self.subscription.take());
    }
}
