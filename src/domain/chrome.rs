// SPDX-License-Identifier: MPL-2.0
//! Ambient status-bar ("chrome") state.
//!
//! The status bar is owned by the surrounding environment. Messages may ask
//! for it to be hidden or restyled while they are on screen; these types
//! describe that state and the per-message overrides.

use serde::{Deserialize, Serialize};

/// Visual style of the status bar text and glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    /// Platform default appearance.
    #[default]
    Default,
    /// Light glyphs, for dark backgrounds.
    LightContent,
    /// Dark glyphs, for light backgrounds.
    DarkContent,
}

/// Complete status-bar state as observed in the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusBarState {
    /// Whether the status bar is hidden.
    pub hidden: bool,
    /// Current status bar style.
    pub style: StatusBarStyle,
}

impl StatusBarState {
    /// Creates a new state value.
    #[must_use]
    pub fn new(hidden: bool, style: StatusBarStyle) -> Self {
        Self { hidden, style }
    }
}

/// Per-message status-bar overrides.
///
/// `None` fields leave the ambient state as it currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeOverrides {
    /// Requested visibility, if any.
    pub hidden: Option<bool>,
    /// Requested style, if any.
    pub style: Option<StatusBarStyle>,
}

impl ChromeOverrides {
    /// Returns true if neither field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hidden.is_none() && self.style.is_none()
    }
}
