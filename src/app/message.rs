// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::application::presentation::Token;
use crate::domain::message::{DisplayLocation, MessageType};
use crate::ui::message_bar::Interaction;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show one message of the given type.
    Show(MessageType),
    /// Show a message that stays until tapped and hides the status bar.
    ShowSticky,
    /// Queue three messages at once.
    Burst,
    /// Cancel everything.
    HideAll { animated: bool },
    /// Interaction with the presented bar.
    Bar(Interaction),
    /// Periodic tick driving slide animations and diagnostics draining.
    Tick(Instant),
    /// A display timer armed under `Token` ran out.
    TimerFired(Token),
    /// Write the diagnostics buffer to the config directory.
    ExportDiagnostics,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `MESSAGE_BAR_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Edge override for messages that do not pick one.
    pub location: Option<DisplayLocation>,
}
