// SPDX-License-Identifier: MPL-2.0
//! Logger setup for the demo binary.

use crate::config::{Config, DEFAULT_LOG_LEVEL};

/// Initializes `env_logger`.
///
/// `RUST_LOG` wins over the level stored in the settings file. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init(config: &Config) {
    let level = config
        .general
        .log_level
        .as_deref()
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let env = env_logger::Env::default().default_filter_or(level);
    if env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialized");
    }
}
