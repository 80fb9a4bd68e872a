//! Pointer-driven parallax for the near star layer.

use nightsky_foundation::{Interval, Vec2, Viewport};

/// Maps `value` linearly from `input` onto `output`, clamping to `output`.
///
/// A degenerate input range maps everything to the output midpoint.
#[must_use]
pub fn map_linear(value: f32, input: Interval, output: Interval) -> f32 {
    let span = input.max() - input.min();
    if span <= 0.0 || value.is_nan() {
        return output.mean();
    }
    let t = ((value - input.min()) / span).clamp(0.0, 1.0);
    output.min() + t * (output.max() - output.min())
}

/// Offset applied to near-layer particles, recomputed from the latest pointer
/// sample.
///
/// Before any pointer sample the pointer is taken to be at the origin, which
/// places the near layer at the most negative offset on both axes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parallax {
    viewport: Viewport,
    range: Interval,
    pointer: Vec2,
}

impl Parallax {
    /// Default maximum displacement, in pixels, on each side.
    pub const DEFAULT_RANGE: f32 = 50.0;

    /// Creates a parallax mapping for `viewport` with the default range.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            range: Interval::new(-Self::DEFAULT_RANGE, Self::DEFAULT_RANGE)
                .unwrap_or_else(|_| Interval::fixed(0.0)),
            pointer: Vec2::ZERO,
        }
    }

    /// Builder method to set a symmetric displacement range.
    ///
    /// Negative or non-finite values disable the offset.
    #[must_use]
    pub fn with_range(mut self, max_offset: f32) -> Self {
        self.range = Interval::new(-max_offset, max_offset).unwrap_or_else(|_| Interval::fixed(0.0));
        self
    }

    /// Records a pointer sample. Non-finite samples are ignored.
    pub fn pointer_moved(&mut self, pointer: Vec2) {
        if pointer.is_finite() {
            self.pointer = pointer;
        }
    }

    /// Changes the input range.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The latest pointer sample.
    #[must_use]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// The offset for the latest pointer sample.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset_for(self.pointer)
    }

    /// The offset a pointer at `pointer` would produce.
    #[must_use]
    pub fn offset_for(&self, pointer: Vec2) -> Vec2 {
        let horizontal = Interval::new(0.0, self.viewport.width()).unwrap_or_else(|_| Interval::fixed(0.0));
        let vertical = Interval::new(0.0, self.viewport.height()).unwrap_or_else(|_| Interval::fixed(0.0));
        Vec2::new(
            map_linear(pointer.x, horizontal, self.range),
            map_linear(pointer.y, vertical, self.range),
        )
    }
}
