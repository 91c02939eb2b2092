// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Tile**: Image inset and hover behavior
//! - **Logging**: Default log filter

// ==========================================================================
// Tile Defaults
// ==========================================================================

/// Default horizontal inset around the image inside a tile (in pixels).
pub const DEFAULT_HORIZONTAL_MARGIN: u32 = 10;

/// Default vertical inset around the image inside a tile (in pixels).
pub const DEFAULT_VERTICAL_MARGIN: u32 = 10;

/// Largest inset accepted from a settings file (in pixels).
pub const MAX_MARGIN: u32 = 512;

/// Hover opacity effects are enabled unless turned off.
pub const DEFAULT_MOUSE_OVER_EFFECTS: bool = true;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log level used when neither `RUST_LOG` nor the settings file says otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "info";
