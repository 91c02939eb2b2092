// SPDX-License-Identifier: MPL-2.0
//! `image_strip` renders a row of image tiles with the Iced GUI framework.
//!
//! Each tile shows a loading indicator until its image is decoded, fits the
//! image inside configurable margins, dims side images until hovered and
//! reports clicks to its owner.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
