// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for the presentation scheduler.
//!
//! Lifecycle milestones and anomalies (such as stale callbacks) are sent
//! through a [`DiagnosticsHandle`], stored in a memory-bounded
//! [`CircularBuffer`] by the [`DiagnosticsCollector`], and can be exported as
//! a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event with a [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;
mod export;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, PresentationEvent, WarningEvent, WarningType};
pub use export::{generate_default_filename, DiagnosticReport, ExportError, SerializableEvent};
