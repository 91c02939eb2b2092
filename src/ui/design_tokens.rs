// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Centralized design tokens for the strip.

## Organization

- **Palette**: Base colors
- **Opacity**: Tile opacity levels
- **Sizing**: Component sizes

## Examples

```
use image_strip::ui::design_tokens::{opacity, palette};
use iced::Color;

let dimmed = Color {
    a: opacity::TILE_RESTING,
    ..palette::WHITE
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OPAQUE: f32 = 1.0;

    /// Side tiles at rest when hover effects are on.
    pub const TILE_RESTING: f32 = 0.7;
    /// Centre tile at rest when hover effects are on.
    pub const TILE_CENTER_RESTING: f32 = 0.9;
    /// Any tile under the cursor.
    pub const TILE_HOVER: f32 = OPAQUE;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_XL: f32 = 48.0;

    /// Stroke width of the loading spinner arc.
    pub const SPINNER_STROKE: f32 = 3.0;
}
