//! Project gallery paging and swipe navigation.
//!
//! The gallery shows one card per page on narrow viewports and two otherwise.
//! The page index always lies in `[0, page_count - 1]` (or is 0 for an empty
//! list), including after a resize changes the page size.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Viewport width, in pixels, at which the gallery switches to two cards.
pub const WIDE_BREAKPOINT: f32 = 640.0;

/// Swipe power past which a drag turns the page.
pub const SWIPE_THRESHOLD: f32 = 1_000.0;

/// Cards per page for a viewport `width`.
#[must_use]
pub fn per_page_for_width(width: f32) -> usize {
    if width < WIDE_BREAKPOINT { 1 } else { 2 }
}

/// A drag gesture's navigation outcome.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Swipe {
    /// Go forward one page.
    Next,
    /// Go back one page.
    Previous,
}

/// Strength of a drag: `|offset| * velocity`.
#[must_use]
pub fn swipe_power(offset: f32, velocity: f32) -> f32 {
    offset.abs() * velocity
}

/// Classifies a finished drag.
///
/// A strongly negative power (fast drag towards the left) advances; a strongly
/// positive one goes back; anything within the threshold is ignored.
#[must_use]
pub fn classify_swipe(offset: f32, velocity: f32) -> Option<Swipe> {
    let power = swipe_power(offset, velocity);
    if power < -SWIPE_THRESHOLD {
        Some(Swipe::Next)
    } else if power > SWIPE_THRESHOLD {
        Some(Swipe::Previous)
    } else {
        None
    }
}

/// Page index into a list of `len` items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    len: usize,
    per_page: usize,
    page: usize,
}

impl PageCursor {
    /// Creates a cursor on the first page, sized for viewport `width`.
    #[must_use]
    pub fn new(len: usize, width: f32) -> Self {
        Self {
            len,
            per_page: per_page_for_width(width),
            page: 0,
        }
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Items per page.
    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Current page index.
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages; 0 for an empty list.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.per_page)
    }

    fn last_page(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// Moves forward one page, stopping at the last.
    pub fn next_page(&mut self) -> usize {
        self.page = (self.page + 1).min(self.last_page());
        self.page
    }

    /// Moves back one page, stopping at the first.
    pub fn previous_page(&mut self) -> usize {
        self.page = self.page.saturating_sub(1);
        self.page
    }

    /// Jumps to `page`, clamped to the valid range.
    pub fn go_to(&mut self, page: usize) -> usize {
        self.page = page.min(self.last_page());
        self.page
    }

    /// Applies a swipe, if any.
    pub fn swipe(&mut self, swipe: Option<Swipe>) -> usize {
        match swipe {
            Some(Swipe::Next) => self.next_page(),
            Some(Swipe::Previous) => self.previous_page(),
            None => self.page,
        }
    }

    /// Recomputes the page size for viewport `width`.
    ///
    /// Keeps the first visible item on screen, then clamps.
    pub fn resize(&mut self, width: f32) {
        let per_page = per_page_for_width(width);
        if per_page == self.per_page {
            return;
        }
        let first = self.page * self.per_page;
        self.per_page = per_page;
        self.page = (first / per_page).min(self.last_page());
    }

    /// Updates the item count, clamping the page.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.page = self.page.min(self.last_page());
    }

    /// Index range of the visible items.
    #[must_use]
    pub fn visible(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.len);
        let end = (start + self.per_page).min(self.len);
        start..end
    }

    /// The visible slice of `items`.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }
}
