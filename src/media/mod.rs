// SPDX-License-Identifier: MPL-2.0
//! Media loading for the strip.

pub mod image;

pub use image::{load_image, load_uri, resolve_uri, ImageData};
