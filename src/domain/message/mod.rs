// SPDX-License-Identifier: MPL-2.0
//! The message request entity.
//!
//! A [`Message`] is built by the caller, handed to the manager, and stays
//! unchanged while it waits in the queue. Unset options (duration, edge)
//! are resolved against the manager's defaults when the message is shown.

mod newtypes;
mod types;

pub use newtypes::DisplayDuration;
pub use types::{DisplayLocation, MessageId, MessageType};

use super::chrome::{ChromeOverrides, StatusBarStyle};
use std::fmt;

/// Zero-argument callback run when the user taps a visible message.
pub type TapCallback = Box<dyn FnOnce() + Send + 'static>;

/// A notification request: title, description, type and presentation options.
pub struct Message {
    id: MessageId,
    title: String,
    description: String,
    kind: MessageType,
    /// Custom display duration (overrides the manager default).
    duration: Option<DisplayDuration>,
    /// Custom edge (overrides the manager default).
    display_location: Option<DisplayLocation>,
    status_bar_hidden: Option<bool>,
    status_bar_style: Option<StatusBarStyle>,
    on_tap: Option<TapCallback>,
}

impl Message {
    /// Creates a message with the given title, description and type.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: MessageType,
    ) -> Self {
        Self {
            id: MessageId::new(),
            title: title.into(),
            description: description.into(),
            kind,
            duration: None,
            display_location: None,
            status_bar_hidden: None,
            status_bar_style: None,
            on_tap: None,
        }
    }

    /// Creates an error message.
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, MessageType::Error)
    }

    /// Creates a success message.
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, MessageType::Success)
    }

    /// Creates an info message.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, MessageType::Info)
    }

    /// Sets the display duration in seconds.
    ///
    /// `0.0` keeps the message on screen until it is tapped or cancelled.
    /// Negative and non-finite values are treated as `0.0`.
    #[must_use]
    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = Some(DisplayDuration::from_secs_f64(secs));
        self
    }

    /// Sets the edge the message slides in from.
    #[must_use]
    pub fn display_location(mut self, location: DisplayLocation) -> Self {
        self.display_location = Some(location);
        self
    }

    /// Requests the status bar be hidden (or shown) while this message is up.
    #[must_use]
    pub fn status_bar_hidden(mut self, hidden: bool) -> Self {
        self.status_bar_hidden = Some(hidden);
        self
    }

    /// Requests a status bar style while this message is up.
    #[must_use]
    pub fn status_bar_style(mut self, style: StatusBarStyle) -> Self {
        self.status_bar_style = Some(style);
        self
    }

    /// Sets the callback run when the visible message is tapped.
    #[must_use]
    pub fn on_tap(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_tap = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn kind(&self) -> MessageType {
        self.kind
    }

    /// Returns the custom duration, if one was set.
    #[must_use]
    pub fn custom_duration(&self) -> Option<DisplayDuration> {
        self.duration
    }

    /// Returns the custom duration or `default`.
    #[must_use]
    pub fn duration_or(&self, default: DisplayDuration) -> DisplayDuration {
        self.duration.unwrap_or(default)
    }

    /// Returns the custom edge, if one was set.
    #[must_use]
    pub fn custom_location(&self) -> Option<DisplayLocation> {
        self.display_location
    }

    /// Returns the custom edge or `default`.
    #[must_use]
    pub fn location_or(&self, default: DisplayLocation) -> DisplayLocation {
        self.display_location.unwrap_or(default)
    }

    /// Returns the status bar overrides requested by this message.
    #[must_use]
    pub fn chrome_overrides(&self) -> ChromeOverrides {
        ChromeOverrides {
            hidden: self.status_bar_hidden,
            style: self.status_bar_style,
        }
    }

    /// Returns whether a tap callback is attached.
    #[must_use]
    pub fn has_tap_callback(&self) -> bool {
        self.on_tap.is_some()
    }

    /// Takes the tap callback out of the message so it can only run once.
    pub(crate) fn take_tap_callback(&mut self) -> Option<TapCallback> {
        self.on_tap.take()
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Message")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("description", &self.description)
            .field("kind", &self.kind)
            .field("duration", &self.duration)
            .field("display_location", &self.display_location)
            .field("status_bar_hidden", &self.status_bar_hidden)
            .field("status_bar_style", &self.status_bar_style)
            .field("on_tap", &self.on_tap.is_some())
            .finish()
    }
}
