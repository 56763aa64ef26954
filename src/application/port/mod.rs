// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits describe what the scheduler needs from its surroundings.
//! They use only domain types, so the scheduler can run against the
//! in-memory adapters in tests and against a real window system in an app.
//!
//! # Available Ports
//!
//! - [`status_bar`]: Ambient status-bar visibility and style
//!
//! Timers and slide animations are not ports: the controller emits
//! [`Effect`](crate::application::presentation::Effect)s and the host
//! reports completion back, following the `Task` return pattern.

pub mod status_bar;

pub use status_bar::{InMemoryStatusBar, StatusBar};
