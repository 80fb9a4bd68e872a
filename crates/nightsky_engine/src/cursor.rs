//! Spring-damped custom cursor ring.

use nightsky_foundation::Vec2;

/// A damped spring chasing the pointer.
///
/// Integrated with semi-implicit Euler in fixed 1 ms sub-steps so the result
/// depends only on elapsed time, not on how frames slice it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CursorFollower {
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    stiffness: f32,
    damping: f32,
    offset: Vec2,
}

impl CursorFollower {
    /// Spring constant of the site's cursor ring.
    pub const STIFFNESS: f32 = 500.0;
    /// Damping coefficient of the site's cursor ring.
    pub const DAMPING: f32 = 30.0;
    /// Ring offset so a 20px ring centres on the pointer.
    pub const OFFSET: f32 = -10.0;

    const STEP_SECONDS: f32 = 0.001;

    /// Creates a follower at rest at `start`.
    #[must_use]
    pub fn new(start: Vec2) -> Self {
        Self {
            position: start,
            velocity: Vec2::ZERO,
            target: start,
            stiffness: Self::STIFFNESS,
            damping: Self::DAMPING,
            offset: Vec2::new(Self::OFFSET, Self::OFFSET),
        }
    }

    /// Builder method to set the spring constants.
    #[must_use]
    pub fn with_spring(mut self, stiffness: f32, damping: f32) -> Self {
        self.stiffness = stiffness.max(0.0);
        self.damping = damping.max(0.0);
        self
    }

    /// Builder method to set the drawing offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the point the spring pulls towards. Non-finite samples are ignored.
    pub fn pointer_moved(&mut self, target: Vec2) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Integrates `elapsed_ms` of motion and returns the drawn position.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec2 {
        for _ in 0..elapsed_ms {
            let pull = (self.target - self.position) * self.stiffness;
            let drag = self.velocity * self.damping;
            self.velocity = self.velocity + (pull - drag) * Self::STEP_SECONDS;
            self.position = self.position + self.velocity * Self::STEP_SECONDS;
        }
        self.drawn()
    }

    /// The spring's current point, without offset.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Where the ring is drawn: the spring's point plus the offset.
    #[must_use]
    pub fn drawn(&self) -> Vec2 {
        self.position + self.offset
    }

    /// Returns true once the ring is within `tolerance` px of the pointer and
    /// nearly still.
    #[must_use]
    pub fn is_settled(&self, tolerance: f32) -> bool {
        self.position.distance(self.target) <= tolerance
            && self.velocity.distance(Vec2::ZERO) <= tolerance
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}
