// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for presentation tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::message::{DisplayLocation, MessageType};

/// Lifecycle milestones of the presentation scheduler.
///
/// Messages are referred to by their numeric id only; titles and
/// descriptions never reach the diagnostics buffer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PresentationEvent {
    /// A message was submitted.
    Queued {
        message: u64,
        message_type: MessageType,
        /// Messages already waiting when this one arrived.
        pending: usize,
    },

    /// The status bar was captured for a new session.
    SessionStarted,

    /// The entry animation started.
    Entering {
        message: u64,
        location: DisplayLocation,
    },

    /// The entry animation completed.
    Visible {
        message: u64,
        /// `None` when the message stays until tapped.
        #[serde(skip_serializing_if = "Option::is_none")]
        auto_dismiss_secs: Option<f64>,
    },

    /// The visible message was tapped.
    Tapped {
        message: u64,
        /// Whether a tap callback was attached and run.
        callback: bool,
    },

    /// The display timer expired.
    AutoDismissed { message: u64 },

    /// The exit animation completed.
    Exited { message: u64 },

    /// Everything was cancelled.
    Cancelled {
        animated: bool,
        /// Queued messages dropped without being shown.
        discarded: usize,
    },

    /// The queue drained and the status bar was restored.
    SessionEnded,
}

/// Categories of non-fatal anomalies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A timer or animation completion arrived for a phase already left.
    StaleCallback,
    /// The configuration file could not be read.
    ConfigurationIssue,
    Other,
}

/// A categorized warning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and data of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    Presentation { event: PresentationEvent },
    Warning { event: WarningEvent },
}
