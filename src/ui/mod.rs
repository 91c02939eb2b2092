// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`tile`] - One image of the strip with its loading overlay
//! - [`fit_image`] - Image element constrained by max width/height
//! - [`strip`] - Row of tiles used by the demo binary
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`design_tokens`] - Design system constants (colors, opacity, sizing)

pub mod design_tokens;
pub mod fit_image;
pub mod strip;
pub mod tile;
pub mod widgets;
