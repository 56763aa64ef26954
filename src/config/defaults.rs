// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Presentation**: Display duration and slide animation timing
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Display duration applied when a show request omits one (in seconds).
pub const DEFAULT_DISPLAY_DURATION_SECS: f64 = 3.0;

/// Default length of the enter/exit slide animation (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 250;

/// Minimum animation length. Zero disables the slide entirely.
pub const MIN_ANIMATION_DURATION_MS: u32 = 0;

/// Maximum animation length (in milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u32 = 2000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

/// Capacity of the channel between diagnostics handles and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 256;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ANIMATION_DURATION_MS <= DEFAULT_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
