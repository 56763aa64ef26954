// SPDX-License-Identifier: MPL-2.0
//! Per-type visual styling of message bars.
//!
//! A [`StyleProvider`] supplies colors, icon and (optionally) fonts for each
//! [`MessageType`]. [`DefaultStyleProvider`] is used unless the host installs
//! its own. [`ResolvedStyle`] is what the view actually renders with, after
//! missing fonts have been replaced by the system fallbacks.

use super::design_tokens::{opacity, palette};
use super::icons;
use crate::domain::message::MessageType;
use iced::font::Weight;
use iced::widget::svg;
use iced::{Color, Font};

/// Supplies the look of each message type.
pub trait StyleProvider: Send {
    /// Bar background.
    fn background_color(&self, kind: MessageType) -> Color;

    /// Stroke drawn on the edge facing the screen interior.
    fn stroke_color(&self, kind: MessageType) -> Color;

    /// Icon shown left of the text.
    fn icon(&self, kind: MessageType) -> svg::Handle;

    /// Title font, or `None` for the bold system font.
    fn title_font(&self, _kind: MessageType) -> Option<Font> {
        None
    }

    /// Description font, or `None` for the regular system font.
    fn description_font(&self, _kind: MessageType) -> Option<Font> {
        None
    }
}

/// Built-in palette: orange errors, green successes, blue info.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStyleProvider;

impl StyleProvider for DefaultStyleProvider {
    fn background_color(&self, kind: MessageType) -> Color {
        let base = match kind {
            MessageType::Error => palette::ERROR_BACKGROUND,
            MessageType::Success => palette::SUCCESS_BACKGROUND,
            MessageType::Info => palette::INFO_BACKGROUND,
        };
        Color {
            a: opacity::BAR,
            ..base
        }
    }

    fn stroke_color(&self, kind: MessageType) -> Color {
        match kind {
            MessageType::Error => palette::ERROR_STROKE,
            MessageType::Success => palette::SUCCESS_STROKE,
            MessageType::Info => palette::INFO_STROKE,
        }
    }

    fn icon(&self, kind: MessageType) -> svg::Handle {
        icons::for_type(kind)
    }
}

/// Bold variant of the default system font.
pub const FALLBACK_TITLE_FONT: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Regular default system font.
pub const FALLBACK_DESCRIPTION_FONT: Font = Font::DEFAULT;

/// Fully resolved style for one message type.
#[derive(Debug, Clone)]
pub struct ResolvedStyle {
    pub background: Color,
    pub stroke: Color,
    pub icon: svg::Handle,
    pub title_font: Font,
    pub description_font: Font,
}

impl ResolvedStyle {
    /// Queries `provider` for `kind`, substituting fallback fonts where the
    /// provider has none.
    #[must_use]
    pub fn resolve(provider: &dyn StyleProvider, kind: MessageType) -> Self {
        Self {
            background: provider.background_color(kind),
            stroke: provider.stroke_color(kind),
            icon: provider.icon(kind),
            title_font: provider.title_font(kind).unwrap_or(FALLBACK_TITLE_FONT),
            description_font: provider
                .description_font(kind)
                .unwrap_or(FALLBACK_DESCRIPTION_FONT),
        }
    }
}
