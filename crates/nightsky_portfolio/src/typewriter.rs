//! Character-by-character text reveal for the about section.

use nightsky_foundation::Timestamp;

use crate::payload::Profile;

/// Bio shown when the profile has none.
pub const PLACEHOLDER_BIO: &str =
    "Write your professional bio in the admin panel. This text is loaded from the API.";

/// Reveals `text` one character every `char_ms`, starting at `started`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    chars: usize,
    char_ms: u64,
    started: Timestamp,
}

impl Typewriter {
    /// Default reveal speed.
    pub const CHAR_MS: u64 = 50;

    /// Starts revealing `text` at `started`.
    #[must_use]
    pub fn new(text: impl Into<String>, started: Timestamp) -> Self {
        let text = text.into();
        let chars = text.chars().count();
        Self {
            text,
            chars,
            char_ms: Self::CHAR_MS,
            started,
        }
    }

    /// Starts revealing a profile's bio, or the placeholder.
    #[must_use]
    pub fn for_bio(profile: Option<&Profile>, started: Timestamp) -> Self {
        let bio = profile
            .and_then(|p| p.bio.as_deref())
            .filter(|bio| !bio.trim().is_empty())
            .unwrap_or(PLACEHOLDER_BIO);
        Self::new(bio, started)
    }

    /// Builder method to set the per-character delay. Zero reveals at once.
    #[must_use]
    pub fn with_char_ms(mut self, char_ms: u64) -> Self {
        self.char_ms = char_ms;
        self
    }

    /// The full text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters shown at `now`.
    #[must_use]
    pub fn shown_chars(&self, now: Timestamp) -> usize {
        if self.char_ms == 0 {
            return self.chars;
        }
        let steps = now.since(self.started) / self.char_ms;
        usize::try_from(steps).map_or(self.chars, |steps| steps.min(self.chars))
    }

    /// The revealed prefix at `now`, always cut on a character boundary.
    #[must_use]
    pub fn visible(&self, now: Timestamp) -> &str {
        let shown = self.shown_chars(now);
        match self.text.char_indices().nth(shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    /// Returns true once the whole text is shown.
    #[must_use]
    pub fn is_complete(&self, now: Timestamp) -> bool {
        self.shown_chars(now) == self.chars
    }

    /// When the last character appears.
    #[must_use]
    pub fn completes_at(&self) -> Timestamp {
        let total = u64::try_from(self.chars).unwrap_or(u64::MAX);
        self.started.after(total.saturating_mul(self.char_ms))
    }
}
