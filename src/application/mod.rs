// SPDX-License-Identifier: MPL-2.0
//! Application layer - the presentation scheduler and its ports.
//!
//! - [`port`]: Trait definitions for the environment the scheduler runs in
//! - [`presentation`]: Queue, chrome tracking and the lifecycle state machine
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Environment adapters implement application layer ports
//! - The UI layer drives the scheduler and renders its active message
//!
//! # Example
//!
//! ```
//! use message_bar::application::port::InMemoryStatusBar;
//! use message_bar::application::presentation::Phase;
//! use message_bar::MessageBarManager;
//! use message_bar::domain::message::MessageType;
//!
//! let mut manager = MessageBarManager::new(Box::new(InMemoryStatusBar::default()));
//! manager.show("Saved", "Your changes were saved", MessageType::Success);
//! assert_eq!(manager.phase(), Phase::Entering);
//! ```

pub mod port;
pub mod presentation;
