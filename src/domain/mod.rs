// SPDX-License-Identifier: MPL-2.0
//! Domain layer - core presentation types with no framework dependencies.
//!
//! This module contains the value objects and entities the scheduler works
//! with. Apart from `serde` derives for configuration and diagnostics, it
//! depends only on `std`, which keeps it testable without a renderer.
//!
//! # Modules
//!
//! - [`message`]: The [`Message`](message::Message) request entity and its
//!   value types ([`MessageType`](message::MessageType),
//!   [`DisplayLocation`](message::DisplayLocation),
//!   [`DisplayDuration`](message::DisplayDuration))
//! - [`chrome`]: Ambient status-bar state ([`StatusBarState`](chrome::StatusBarState),
//!   [`StatusBarStyle`](chrome::StatusBarStyle))

pub mod chrome;
pub mod message;
