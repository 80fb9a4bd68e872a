//! Single-threaded host event loop.
//!
//! Hosts (a browser shim, the CLI simulator, tests) feed pointer samples,
//! resizes and animation frames into an [`EventLoop`]. Interested parties
//! register a listener and receive a [`Subscription`]; dropping the
//! subscription unregisters the listener, even in the middle of a dispatch.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::trace;

use nightsky_foundation::{Timestamp, Vec2, Viewport};

/// Something that happened in the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// An animation frame at `now`.
    Frame {
        /// Frame time.
        now: Timestamp,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position in pixels.
        position: Vec2,
        /// Sample time.
        now: Timestamp,
    },
    /// The window changed size.
    Resize {
        /// The new viewport.
        viewport: Viewport,
        /// Event time.
        now: Timestamp,
    },
}

impl HostEvent {
    /// When the event happened.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        match *self {
            Self::Frame { now } | Self::PointerMove { now, .. } | Self::Resize { now, .. } => now,
        }
    }
}

type Callback = Rc<RefCell<dyn FnMut(&HostEvent)>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct ListenerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, Callback)>,
}

impl Registry {
    fn add(&mut self, callback: Callback) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, callback));
        id
    }

    fn take(&mut self, id: ListenerId) -> Option<Callback> {
        let index = self.listeners.iter().position(|(listener, _)| *listener == id)?;
        Some(self.listeners.remove(index).1)
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(listener, _)| *listener == id)
    }
}

/// Handle keeping a listener registered. Dropping it unregisters the listener.
#[must_use = "dropping a subscription immediately unregisters its listener"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: ListenerId,
}

impl Subscription {
    /// Returns true while the listener is registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.borrow().contains(self.id))
    }

    /// Unregisters the listener now.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // The callback may own subscriptions itself, so it is dropped only
        // after the registry borrow ends.
        let removed = registry
            .try_borrow_mut()
            .ok()
            .and_then(|mut registry| registry.take(self.id));
        if removed.is_some() {
            trace!(listener = self.id.0, "listener unsubscribed");
        }
        drop(removed);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id.0)
            .field("active", &self.is_active())
            .finish()
    }
}

/// Drives listeners with host events in simulated time.
pub struct EventLoop {
    registry: Rc<RefCell<Registry>>,
    now: Timestamp,
    viewport: Viewport,
    pointer: Option<Vec2>,
    frame_ms: u64,
    frames: u64,
}

impl EventLoop {
    /// Default frame period, roughly 60 frames per second.
    pub const DEFAULT_FRAME_MS: u64 = 16;

    /// Creates a loop at time zero.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry::default())),
            now: Timestamp::ZERO,
            viewport,
            pointer: None,
            frame_ms: Self::DEFAULT_FRAME_MS,
            frames: 0,
        }
    }

    /// Builder method to set the frame period. Zero is treated as one.
    #[must_use]
    pub fn with_frame_ms(mut self, frame_ms: u64) -> Self {
        self.frame_ms = frame_ms.max(1);
        self
    }

    /// Registers a listener.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&HostEvent) + 'static,
    {
        let callback: Callback = Rc::new(RefCell::new(listener));
        let id = self.registry.borrow_mut().add(callback);
        trace!(listener = id.0, "listener subscribed");
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Current simulated time.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.now
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Latest pointer position.
    #[must_use]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Frame period in ms.
    #[must_use]
    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }

    /// Frames dispatched so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Delivers `event` to every listener registered when dispatch starts.
    ///
    /// A listener unregistered by an earlier listener in the same dispatch is
    /// skipped. Listeners registered during dispatch first see the next event.
    pub fn dispatch(&mut self, event: &HostEvent) {
        if event.now() > self.now {
            self.now = event.now();
        }
        match *event {
            HostEvent::Frame { .. } => self.frames += 1,
            HostEvent::PointerMove { position, .. } => self.pointer = Some(position),
            HostEvent::Resize { viewport, .. } => self.viewport = viewport,
        }

        let snapshot: Vec<(ListenerId, Callback)> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        for (id, callback) in snapshot {
            if !self.registry.borrow().contains(id) {
                continue;
            }
            if let Ok(mut callback) = callback.try_borrow_mut() {
                (&mut *callback)(event);
            }
        }
    }

    /// Sends a pointer sample at the current time.
    pub fn pointer_move(&mut self, position: Vec2) {
        let now = self.now;
        self.dispatch(&HostEvent::PointerMove { position, now });
    }

    /// Sends a resize at the current time.
    pub fn resize(&mut self, viewport: Viewport) {
        let now = self.now;
        self.dispatch(&HostEvent::Resize { viewport, now });
    }

    /// Sends one frame, `frame_ms` after the current time.
    pub fn step(&mut self) -> Timestamp {
        let now = self.now.after(self.frame_ms);
        self.dispatch(&HostEvent::Frame { now });
        now
    }

    /// Sends frames until `end`, the last one exactly at `end`.
    pub fn run_until(&mut self, end: Timestamp) {
        while self.now < end {
            let next = self.now.after(self.frame_ms).min(end);
            self.dispatch(&HostEvent::Frame { now: next });
        }
    }
}

impl fmt::Debug for EventLoop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventLoop")
            .field("now", &self.now)
            .field("viewport", &self.viewport)
            .field("pointer", &self.pointer)
            .field("frame_ms", &self.frame_ms)
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}
