// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::strip;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Strip(strip::Message),
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Files or directories to show, in order.
    pub inputs: Vec<PathBuf>,
}
