// SPDX-License-Identifier: MPL-2.0
//! Message bar view.
//!
//! Renders the active message as a full-width bar: icon, bold title and
//! description, with a thin stroke on the side facing the screen interior.
//! The bar is clipped to the currently revealed height and anchored to its
//! edge, so shrinking the height makes it slide towards that edge.

use super::design_tokens::{border, palette, sizing, spacing, typography};
use super::style::ResolvedStyle;
use crate::domain::message::DisplayLocation;
use iced::alignment::Vertical;
use iced::widget::{column, container, mouse_area, row, svg, text, Column, Space};
use iced::{Color, Element, Length};

/// User interaction with the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The bar was pressed.
    Tapped,
}

/// Everything the view needs to draw one bar.
#[derive(Debug, Clone)]
pub struct BarContent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub location: DisplayLocation,
    pub style: ResolvedStyle,
    /// Fraction of the bar on screen, `0.0..=1.0`.
    pub reveal: f32,
}

impl BarContent<'_> {
    /// On-screen height for the current reveal fraction.
    #[must_use]
    pub fn visible_height(&self) -> f32 {
        sizing::BAR_HEIGHT * self.reveal.clamp(0.0, 1.0)
    }
}

/// Builds the bar element.
pub fn view<'a>(content: BarContent<'a>) -> Element<'a, Interaction> {
    let style = &content.style;
    let stroke_color = style.stroke;
    let background = style.background;

    let icon = svg::Svg::new(style.icon.clone())
        .width(Length::Fixed(sizing::MESSAGE_ICON))
        .height(Length::Fixed(sizing::MESSAGE_ICON));

    let mut texts = Column::new().spacing(spacing::XXS).push(
        text(content.title)
            .size(typography::TITLE)
            .font(style.title_font)
            .color(palette::WHITE),
    );
    if !content.description.is_empty() {
        texts = texts.push(
            text(content.description)
                .size(typography::BODY)
                .font(style.description_font)
                .color(palette::WHITE),
        );
    }

    let body = container(
        row![icon, texts]
            .spacing(spacing::BAR_PADDING)
            .align_y(Vertical::Center),
    )
    .padding(spacing::BAR_PADDING)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(Vertical::Center);

    let stroke = container(
        Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(border::STROKE)),
    )
    .style(move |_theme| solid(stroke_color));

    // The stroke faces the interior: below a top bar, above a bottom bar
    let bar = match content.location {
        DisplayLocation::Top => column![body, stroke],
        DisplayLocation::Bottom => column![stroke, body],
    }
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BAR_HEIGHT));

    let bar = container(bar).style(move |_theme| solid(background));

    let anchor = match content.location {
        DisplayLocation::Top => Vertical::Bottom,
        DisplayLocation::Bottom => Vertical::Top,
    };
    let clipped = container(bar)
        .width(Length::Fill)
        .height(Length::Fixed(content.visible_height()))
        .align_y(anchor)
        .clip(true);

    mouse_area(clipped).on_press(Interaction::Tapped).into()
}

fn solid(color: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(color)),
        ..Default::default()
    }
}
