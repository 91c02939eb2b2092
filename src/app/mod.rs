// SPDX-License-Identifier: MPL-2.0
//! Application root wiring a single image strip into an Iced window.

mod message;

pub use message::{Flags, Message};

use crate::config::Config;
use crate::directory_scanner;
use crate::ui::strip::{self, ImageStrip};
use crate::ui::tile::OwnerId;
use iced::{event, window, Element, Subscription, Task};
use log::{info, warn};

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 320.0;

const APP_TITLE: &str = "Image Strip";

/// Root Iced application state.
pub struct App {
    strip: ImageStrip,
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: Config) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags, config: &Config) -> (Self, Task<Message>) {
        let uris = match directory_scanner::collect_uris(&flags.inputs) {
            Ok(uris) => uris,
            Err(err) => {
                warn!("Failed to collect images: {}", err);
                Vec::new()
            }
        };
        info!("Showing {} images", uris.len());

        let (strip, task) = ImageStrip::new(
            OwnerId::new(0),
            &uris,
            &config.tile,
            iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        );

        (App { strip }, task.map(Message::Strip))
    }

    fn title(&self) -> String {
        match self.strip.selected() {
            Some(index) => format!(
                "{APP_TITLE} - {}/{}",
                index + 1,
                self.strip.tiles().len()
            ),
            None => APP_TITLE.to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Strip(message) => self.strip.update(message).map(Message::Strip),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.strip.view().map(Message::Strip)
    }

    fn subscription(&self) -> Subscription<Message> {
        let resize = event::listen_with(|event, _status, _window| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::Strip(strip::Message::Resized(size)))
            }
            _ => None,
        });

        Subscription::batch([self.strip.subscription().map(Message::Strip), resize])
    }
}
