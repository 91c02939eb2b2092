// SPDX-License-Identifier: MPL-2.0
//! This module handles the strip's configuration, loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use image_strip::config::{self, Config};
//! use std::path::PathBuf;
//!
//! let mut config = config::load().unwrap_or_default();
//! config.tile.horizontal_margin = 4;
//! config::save(&config).expect("Failed to save config");
//!
//! let temp_file = PathBuf::from("./temp_config_dir/settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.tile.horizontal_margin, 4);
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::tile::RenderCapabilities;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ImageStrip";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub tile: TileConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

/// Settings applied to every tile of the strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub horizontal_margin: u32,
    pub vertical_margin: u32,
    pub mouse_over_effects: bool,
    /// Also write the `alpha(opacity = N)` filter next to the opacity value.
    pub legacy_opacity_syntax: bool,
    /// Ask the renderer for smooth image scaling.
    pub legacy_interpolation_hint: bool,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
            vertical_margin: DEFAULT_VERTICAL_MARGIN,
            mouse_over_effects: DEFAULT_MOUSE_OVER_EFFECTS,
            legacy_opacity_syntax: false,
            legacy_interpolation_hint: false,
        }
    }
}

impl TileConfig {
    /// Margins clamped to the supported range.
    #[must_use]
    pub fn margins(&self) -> (u32, u32) {
        (
            self.horizontal_margin.min(MAX_MARGIN),
            self.vertical_margin.min(MAX_MARGIN),
        )
    }

    #[must_use]
    pub fn capabilities(&self) -> RenderCapabilities {
        RenderCapabilities {
            legacy_opacity_syntax: self.legacy_opacity_syntax,
            legacy_interpolation_hint: self.legacy_interpolation_hint,
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!(
                "Ignoring invalid settings file {}: {}",
                path.display(),
                err
            );
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
