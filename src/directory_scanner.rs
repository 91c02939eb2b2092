// SPDX-License-Identifier: MPL-2.0
//! Directory scanner turning command-line inputs into image URIs.
//!
//! Directories are scanned (not recursively) for supported image formats and
//! sorted alphabetically. Files named explicitly are kept as given.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff", "ico",
];

/// Returns whether the file extension is a decodable image format.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Lists the supported images of `directory`, sorted by file name.
pub fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

/// Expands inputs into the URIs shown by the strip, in order.
pub fn collect_uris(inputs: &[PathBuf]) -> Result<Vec<String>> {
    let mut uris = Vec::new();

    for input in inputs {
        if input.is_dir() {
            uris.extend(
                scan_directory(input)?
                    .iter()
                    .map(|path| path.to_string_lossy().into_owned()),
            );
        } else if input.exists() {
            uris.push(input.to_string_lossy().into_owned());
        } else {
            return Err(Error::Io(format!("No such file: {}", input.display())));
        }
    }

    Ok(uris)
}
