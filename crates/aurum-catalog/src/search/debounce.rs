//! Debounced search input.

use std::time::{Duration, Instant};

/// Default quiescence window between the last keystroke and the commit.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Holds the draft query the user is typing and releases it once typing
/// has paused for the debounce window.
///
/// The caller supplies the clock, so this type never sleeps or spawns.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    window: Duration,
    draft: String,
    last_edit: Option<Instant>,
}

impl SearchDebouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            draft: String::new(),
            last_edit: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// The text as currently typed.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether an edit is waiting to be committed.
    pub fn is_pending(&self) -> bool {
        self.last_edit.is_some()
    }

    /// Record an edit made at `now`. Restarts the window.
    pub fn edit(&mut self, text: impl Into<String>, now: Instant) {
        self.draft = text.into();
        self.last_edit = Some(now);
    }

    /// Replace the draft without scheduling a commit, e.g. when the
    /// committed query is changed from elsewhere.
    pub fn sync(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.last_edit = None;
    }

    /// Return the draft once the window has elapsed since the last edit.
    /// Each edit is released at most once.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let last_edit = self.last_edit?;
        if now.saturating_duration_since(last_edit) < self.window {
            return None;
        }
        self.last_edit = None;
        Some(self.draft.clone())
    }

    /// Instant at which the pending edit becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.last_edit.map(|t| t + self.window)
    }

    /// Clear the draft. Clearing bypasses the window.
    pub fn clear(&mut self) {
        self.sync(String::new());
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEBOUNCE)
    }
}
