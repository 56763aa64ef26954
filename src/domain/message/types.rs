// SPDX-License-Identifier: MPL-2.0
//! Message value types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    /// Creates a new unique message ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Message type. Dictates the background, stroke and icon of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    /// Something went wrong.
    Error,
    /// Operation completed successfully.
    Success,
    /// Informational message.
    Info,
}

impl MessageType {
    /// All message types, in declaration order.
    pub const ALL: [MessageType; 3] = [MessageType::Error, MessageType::Success, MessageType::Info];
}

/// Screen edge a message slides in from (and back out to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayLocation {
    #[default]
    Top,
    Bottom,
}

impl std::str::FromStr for DisplayLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(DisplayLocation::Top),
            "bottom" => Ok(DisplayLocation::Bottom),
            other => Err(format!("invalid display location: {}", other)),
        }
    }
}
