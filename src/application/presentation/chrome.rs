// SPDX-License-Identifier: MPL-2.0
//! Session-scoped status bar bookkeeping.
//!
//! The tracker snapshots the ambient status bar before the first message of
//! a session and puts it back once the session ends, while letting each
//! message apply its own overrides in between.

use crate::application::port::StatusBar;
use crate::domain::chrome::{ChromeOverrides, StatusBarState};

/// Captures and restores ambient status-bar state around a session.
pub struct ChromeStateTracker {
    status_bar: Box<dyn StatusBar>,
    snapshot: Option<StatusBarState>,
}

impl ChromeStateTracker {
    /// Creates a tracker over the given status bar.
    pub fn new(status_bar: Box<dyn StatusBar>) -> Self {
        Self {
            status_bar,
            snapshot: None,
        }
    }

    /// Records the current ambient state if no snapshot is held.
    ///
    /// Returns `true` if a snapshot was taken by this call.
    pub fn capture_if_absent(&mut self) -> bool {
        if self.snapshot.is_some() {
            return false;
        }
        self.snapshot = Some(self.status_bar.state());
        true
    }

    /// Applies the present override fields to the ambient state.
    ///
    /// Absent fields keep whatever the status bar currently shows, which may
    /// differ from the snapshot if an earlier message changed it.
    pub fn apply_overrides(&mut self, overrides: ChromeOverrides) {
        if overrides.is_empty() {
            return;
        }
        if let Some(hidden) = overrides.hidden {
            self.status_bar.set_hidden(hidden);
        }
        if let Some(style) = overrides.style {
            self.status_bar.set_style(style);
        }
    }

    /// Restores the snapshot and discards it. No-op without a snapshot.
    ///
    /// Returns `true` if a snapshot was restored.
    pub fn restore_and_clear(&mut self) -> bool {
        match self.snapshot.take() {
            Some(state) => {
                self.status_bar.apply(state);
                true
            }
            None => false,
        }
    }

    /// Returns the held snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<StatusBarState> {
        self.snapshot
    }

    /// Returns the ambient status bar.
    #[must_use]
    pub fn status_bar(&self) -> &dyn StatusBar {
        self.status_bar.as_ref()
    }
}

impl std::fmt::Debug for ChromeStateTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChromeStateTracker")
            .field("ambient", &self.status_bar.state())
            .field("snapshot", &self.snapshot)
            .finish()
    }
}
