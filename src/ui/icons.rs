// SPDX-License-Identifier: MPL-2.0
//! Message type icons.
//!
//! SVGs are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`, so every call after the first is a cheap clone.

use crate::domain::message::MessageType;
use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// Defines a function returning a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(error, "error.svg", "Error icon: warning triangle.");
define_icon!(success, "success.svg", "Success icon: check mark in a circle.");
define_icon!(info, "info.svg", "Info icon: letter i in a circle.");

/// Returns the built-in icon for a message type.
#[must_use]
pub fn for_type(kind: MessageType) -> Handle {
    match kind {
        MessageType::Error => error(),
        MessageType::Success => success(),
        MessageType::Info => info(),
    }
}
