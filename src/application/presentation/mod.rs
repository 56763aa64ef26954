// SPDX-License-Identifier: MPL-2.0
//! Presentation scheduling.
//!
//! - [`queue`]: FIFO of messages awaiting the visible slot
//! - [`chrome`]: Status bar snapshot and restore around a session
//! - [`controller`]: The `Idle → Entering → Visible → Exiting` state machine
//!
//! A *session* runs from the moment a message is presented while idle until
//! the queue drains (or is cancelled) and the controller returns to idle.

pub mod chrome;
pub mod controller;
pub mod queue;

pub use chrome::ChromeStateTracker;
pub use controller::{
    ActiveMessage, Effect, Event, Phase, PresentationController, PresentationDefaults, Token,
    Transition,
};
pub use queue::MessageQueue;
