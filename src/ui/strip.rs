// SPDX-License-Identifier: MPL-2.0
//! Minimal host for a row of tiles.
//!
//! The strip gives every tile its index, owner, margins and an equal share
//! of the available width, marks the middle tile as the centre one and
//! remembers which tile was clicked last. It does not animate.

use crate::config::TileConfig;
use crate::ui::tile::{self, Effect, ImageTile, OwnerId};
use iced::widget::Stack;
use iced::{Element, Length, Size, Subscription, Task};
use log::info;

#[derive(Debug, Clone)]
pub enum Message {
    Tile { index: usize, message: tile::Message },
    SpinnerTick,
    Resized(Size),
}

#[derive(Debug)]
pub struct ImageStrip {
    owner: OwnerId,
    tiles: Vec<ImageTile>,
    selected: Option<usize>,
}

impl ImageStrip {
    /// Creates one tile per URI and starts loading all of them.
    pub fn new(
        owner: OwnerId,
        uris: &[String],
        config: &TileConfig,
        size: Size,
    ) -> (Self, Task<Message>) {
        let (horizontal_margin, vertical_margin) = config.margins();
        let center = uris.len() / 2;
        let maximized = uris.len() == 1;

        let mut tiles = Vec::with_capacity(uris.len());
        let mut tasks = Vec::with_capacity(uris.len());
        for (index, uri) in uris.iter().enumerate() {
            let mut tile = ImageTile::with_capabilities(config.capabilities());
            tile.set_owner(owner);
            tile.set_index(index);
            tile.set_horizontal_margin(horizontal_margin);
            tile.set_vertical_margin(vertical_margin);
            tile.set_mouse_over_effects(config.mouse_over_effects);
            tile.set_center(index == center);
            tile.set_maximized(maximized);

            let task = tile
                .set_image_source(Some(uri))
                .map(move |message| Message::Tile { index, message });
            tasks.push(task);
            tiles.push(tile);
        }

        let mut strip = Self {
            owner,
            tiles,
            selected: None,
        };
        strip.resize(size);

        (strip, Task::batch(tasks))
    }

    /// Splits `size` evenly between the tiles and refits their images.
    #[allow(clippy::cast_possible_truncation)] // window sizes fit in i32
    pub fn resize(&mut self, size: Size) {
        let width = size.width.max(0.0) as i32;
        let height = size.height.max(0.0) as i32;

        let count = i32::try_from(self.tiles.len()).unwrap_or(i32::MAX).max(1);
        let tile_width = width / count;
        for (slot, tile) in (0..).zip(self.tiles.iter_mut()) {
            tile.set_current_x(slot * tile_width);
            tile.set_current_width(tile_width);
            tile.set_current_height(height);
            tile.fix_image_size_and_position();
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tile { index, message } => {
                let Some(tile) = self.tiles.get_mut(index) else {
                    return Task::none();
                };
                let (effect, task) = tile.update(message);
                if let Effect::ImageClicked { owner, index } = effect {
                    if owner == self.owner {
                        info!("Image {} selected", index);
                        self.selected = Some(index);
                    }
                }
                task.map(move |message| Message::Tile { index, message })
            }
            Message::SpinnerTick => {
                for tile in &mut self.tiles {
                    let _ = tile.update(tile::Message::SpinnerTick);
                }
                Task::none()
            }
            Message::Resized(size) => {
                self.resize(size);
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.tiles.iter().any(ImageTile::is_loading) {
            iced::time::every(std::time::Duration::from_millis(16)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.tiles
            .iter()
            .enumerate()
            .fold(
                Stack::new().width(Length::Fill).height(Length::Fill),
                |stack, (index, tile)| {
                    stack.push(
                        tile.view()
                            .map(move |message| Message::Tile { index, message }),
                    )
                },
            )
            .into()
    }

    #[must_use]
    pub fn tiles(&self) -> &[ImageTile] {
        &self.tiles
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Combined width of all images and their margins.
    #[must_use]
    pub fn content_width(&self) -> i64 {
        self.tiles.iter().map(ImageTile::image_and_margin_width).sum()
    }
}
