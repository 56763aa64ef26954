// SPDX-License-Identifier: MPL-2.0
//! Reference rendering of message bars with Iced.
//!
//! The scheduler itself is renderer-agnostic; this module shows the active
//! message the way the built-in style sheet describes it.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons per message type
//! - [`style`] - Replaceable [`StyleProvider`](style::StyleProvider) and font fallbacks
//! - [`animation`] - Slide timing for enter/exit effects
//! - [`message_bar`] - The bar widget itself

pub mod animation;
pub mod design_tokens;
pub mod icons;
pub mod message_bar;
pub mod style;
