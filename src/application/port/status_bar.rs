// SPDX-License-Identifier: MPL-2.0
//! Status bar port definition.
//!
//! The [`StatusBar`] trait gives the scheduler read/write access to the
//! environment's status bar. [`InMemoryStatusBar`] is a headless adapter used
//! by default, by tests, and by the demo application's simulated status strip.

use crate::domain::chrome::{StatusBarState, StatusBarStyle};

/// Read/write access to the ambient status bar.
pub trait StatusBar: Send {
    /// Returns the current visibility and style.
    fn state(&self) -> StatusBarState;

    /// Shows or hides the status bar.
    fn set_hidden(&mut self, hidden: bool);

    /// Changes the status bar style.
    fn set_style(&mut self, style: StatusBarStyle);

    /// Applies a complete state.
    fn apply(&mut self, state: StatusBarState) {
        self.set_hidden(state.hidden);
        self.set_style(state.style);
    }
}

/// Status bar kept in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusBar {
    state: StatusBarState,
}

impl InMemoryStatusBar {
    /// Creates a status bar with the given initial state.
    #[must_use]
    pub fn new(state: StatusBarState) -> Self {
        Self { state }
    }
}

impl StatusBar for InMemoryStatusBar {
    fn state(&self) -> StatusBarState {
        self.state
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.state.hidden = hidden;
    }

    fn set_style(&mut self, style: StatusBarStyle) {
        self.state.style = style;
    }
}
