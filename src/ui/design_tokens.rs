// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants for the message bar and the demo window.

## Organization

- **Palette**: Base colors, plus one background/stroke pair per message type
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px steps)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Shadow**: Shadow definitions

## Examples

```
use message_bar::ui::design_tokens::{palette, opacity};
use iced::Color;

let error_bg = Color {
    a: opacity::BAR,
    ..palette::ERROR_BACKGROUND
};
assert!(error_bg.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Message bar backgrounds (opaque; alpha applied by callers)
    pub const ERROR_BACKGROUND: Color = Color::from_rgb(1.0, 0.611, 0.0);
    pub const SUCCESS_BACKGROUND: Color = Color::from_rgb(0.0, 0.831, 0.176);
    pub const INFO_BACKGROUND: Color = Color::from_rgb(0.0, 0.482, 1.0);

    // Message bar bottom strokes
    pub const ERROR_STROKE: Color = Color::from_rgb(0.949, 0.580, 0.0);
    pub const SUCCESS_STROKE: Color = Color::from_rgb(0.0, 0.772, 0.164);
    pub const INFO_STROKE: Color = Color::from_rgb(0.0, 0.415, 0.803);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Message bar background, slightly translucent.
    pub const BAR: f32 = 0.96;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    /// Inner padding of the message bar.
    pub const BAR_PADDING: f32 = 10.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Message type icon (square).
    pub const MESSAGE_ICON: f32 = 36.0;
    /// Fully revealed message bar, stroke included.
    pub const BAR_HEIGHT: f32 = 72.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
    /// Simulated status strip in the demo window.
    pub const STATUS_STRIP_HEIGHT: f32 = 24.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Message title.
    pub const TITLE: f32 = 16.0;
    /// Message description.
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border
// ============================================================================

pub mod border {
    /// Bottom stroke under the message bar.
    pub const STROKE: f32 = 1.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::BAR_PADDING > spacing::XS);
    assert!(spacing::SM > spacing::BAR_PADDING);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BAR > 0.0 && opacity::BAR < 1.0);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::STROKE > 0.0);
    assert!(sizing::BAR_HEIGHT > sizing::MESSAGE_ICON + 2.0 * spacing::BAR_PADDING);
};
