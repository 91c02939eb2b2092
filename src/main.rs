// SPDX-License-Identifier: MPL-2.0
use image_strip::app::{self, Flags};
use image_strip::{config, logging};
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let config_path: Option<PathBuf> = match args.opt_value_from_str("--config") {
        Ok(path) => path,
        Err(err) => {
            eprintln!("Invalid --config argument: {err}");
            None
        }
    };

    let loaded = match &config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let config = loaded.clone().unwrap_or_default();
    logging::init(&config);
    if let Err(err) = loaded {
        log::warn!("Using default settings: {}", err);
    }

    let flags = Flags {
        inputs: args.finish().into_iter().map(PathBuf::from).collect(),
    };

    app::run(flags, config)
}
