// SPDX-License-Identifier: MPL-2.0
//! `message_bar` shows transient notification bars one at a time.
//!
//! Requests are queued in strict FIFO order and presented by a token-guarded
//! state machine (`Idle → Entering → Visible → Exiting`). The status bar is
//! captured when a session starts, adjusted per message, and restored once
//! the queue drains or everything is cancelled.
//!
//! Start with [`MessageBarManager`]. The [`ui`] module holds a reference
//! rendering built on Iced, used by the `message_bar` demo binary.

#![doc(html_root_url = "https://docs.rs/message_bar/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
mod manager;
pub mod ui;

pub use manager::MessageBarManager;

#[cfg(test)]
pub(crate) mod test_utils;
