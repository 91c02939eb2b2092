// SPDX-License-Identifier: MPL-2.0
//! Style records written by the tile and read back by its view.
//!
//! The tile mutates these the way a retained-mode toolkit mutates element
//! styles; the Iced view is rebuilt from them on every frame.

/// Whether an element is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// How the renderer should scale the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scaling {
    /// Renderer default.
    #[default]
    Default,
    /// Explicit smooth interpolation.
    Smooth,
}

/// Opacity, guaranteed to be within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Creates a new opacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Opacity as a whole percentage (0.7 → 70).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // value is clamped to 0..=1, so the rounded percentage fits in u8
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }

    /// Legacy `alpha()` filter equivalent of this opacity.
    #[must_use]
    pub fn legacy_filter(self) -> String {
        format!("alpha(opacity = {})", self.percent())
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Box of the tile's root element, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxStyle {
    pub left: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
}

/// Style of the image element inside a tile.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageStyle {
    pub visibility: Visibility,
    pub opacity: Option<Opacity>,
    /// Written alongside `opacity` when legacy opacity syntax is enabled.
    pub legacy_filter: Option<String>,
    pub left: Option<i32>,
    pub bottom: Option<u32>,
    pub scaling: Scaling,
}

impl ImageStyle {
    /// Initial style of a freshly created image: hidden until loaded.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visibility: Visibility::Hidden,
            ..Self::default()
        }
    }

    /// Sets the opacity, and the legacy filter in tandem when requested.
    pub fn set_opacity(&mut self, opacity: Opacity, legacy_syntax: bool) {
        self.opacity = Some(opacity);
        if legacy_syntax {
            self.legacy_filter = Some(opacity.legacy_filter());
        }
    }

    /// Effective opacity used when drawing.
    #[must_use]
    pub fn effective_opacity(&self) -> f32 {
        self.opacity.unwrap_or_default().value()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}
