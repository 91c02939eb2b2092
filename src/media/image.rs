// SPDX-License-Identifier: MPL-2.0
//! Image decoding for tiles.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Turns an image URI into a filesystem path.
///
/// Plain paths and `file://` URIs are accepted. Other schemes are rejected.
pub fn resolve_uri(uri: &str) -> Result<PathBuf> {
    if let Some(rest) = uri.strip_prefix("file://") {
        // file://localhost/path and file:///path
        let path = rest.strip_prefix("localhost").unwrap_or(rest);
        if path.is_empty() {
            return Err(Error::Io(format!("empty file URI: {uri}")));
        }
        return Ok(PathBuf::from(path));
    }

    match uri.split_once("://") {
        Some((scheme, _)) => Err(Error::Io(format!("unsupported URI scheme: {scheme}"))),
        None => Ok(PathBuf::from(uri)),
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Image`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref())?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    let (width, height) = decoded.dimensions();
    let pixels = decoded.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Decodes the image behind `uri` on a blocking worker.
pub async fn load_uri(uri: String) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || {
        let path = resolve_uri(&uri)?;
        load_image(path)
    })
    .await
    .map_err(|e| Error::Io(e.to_string()))?
}
