// SPDX-License-Identifier: MPL-2.0
//! A single tile of the image strip.
//!
//! An [`ImageTile`] owns one [`FitImage`] and a loading overlay drawn behind
//! it. The parent positions the tile through [`ImageTile::set_current_x`],
//! [`ImageTile::set_current_width`] and [`ImageTile::set_current_height`],
//! and may record animation endpoints with [`ImageTile::init_animation`] for
//! an external animator to interpolate between.
//!
//! Clicks are reported to the owner as [`Effect::ImageClicked`].

pub mod loading;
pub mod style;

use crate::ui::design_tokens::opacity;
use crate::ui::fit_image::{self, FitImage, HoverOpacity, ImageId};
use iced::alignment::Vertical;
use iced::widget::{Container, Stack};
use iced::{Element, Length, Padding, Subscription, Task};
use loading::LoadingIndicator;
use log::{debug, trace, warn};
use style::{BoxStyle, Opacity, Visibility};

/// Non-owning handle of the controller a tile reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(u64);

impl OwnerId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Optional rendering tweaks for older rendering engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderCapabilities {
    /// Write the `alpha(opacity = N)` filter together with opacity.
    pub legacy_opacity_syntax: bool,
    /// Request smooth interpolation when scaling the image.
    pub legacy_interpolation_hint: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    Image(fit_image::Message),
    SpinnerTick,
}

/// Effects reported to the owner of the tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    ImageClicked { owner: OwnerId, index: usize },
}

/// Start and end of the width/position interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationSpan {
    pub start_width: i32,
    pub end_width: i32,
    pub start_position: i32,
    pub end_position: i32,
}

#[derive(Debug, Clone)]
pub struct ImageTile {
    owner: Option<OwnerId>,
    horizontal_margin: u32,
    vertical_margin: u32,
    index: usize,
    mouse_over_effects: bool,
    center: bool,
    maximized: bool,

    current_width: i32,
    current_height: i32,
    current_x: i32,
    animation: AnimationSpan,

    root: BoxStyle,
    loading: LoadingIndicator,
    image: Option<FitImage>,
    next_image_id: ImageId,
    capabilities: RenderCapabilities,
}

impl Default for ImageTile {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageTile {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capabilities(RenderCapabilities::default())
    }

    #[must_use]
    pub fn with_capabilities(capabilities: RenderCapabilities) -> Self {
        Self {
            owner: None,
            horizontal_margin: 0,
            vertical_margin: 0,
            index: 0,
            mouse_over_effects: false,
            center: false,
            maximized: false,
            current_width: 0,
            current_height: 0,
            current_x: 0,
            animation: AnimationSpan::default(),
            root: BoxStyle::default(),
            loading: LoadingIndicator::default(),
            image: None,
            next_image_id: ImageId::new(0),
            capabilities,
        }
    }

    /// Replaces the image with a new one loaded from `uri`.
    ///
    /// `None` leaves the tile untouched. Hover behavior is wired from the
    /// flags as they are now; changing them later does not affect the image
    /// created here.
    pub fn set_image_source(&mut self, uri: Option<&str>) -> Task<Message> {
        let Some(uri) = uri else {
            return Task::none();
        };

        let id = self.next_image_id;
        self.next_image_id = id.next();

        let mut image = FitImage::new(id, uri, self.capabilities);
        if self.hover_effects_apply() {
            image.bind_hover(self.hover_opacity());
        }

        debug!(
            "Tile {} loads {} (hover effects: {})",
            self.index,
            uri,
            image.hover().is_some()
        );

        let task = image.load().map(Message::Image);
        self.image = Some(image);
        self.loading.show();
        task
    }

    fn hover_effects_apply(&self) -> bool {
        self.mouse_over_effects && !self.maximized
    }

    fn hover_opacity(&self) -> HoverOpacity {
        let resting = if self.center {
            opacity::TILE_CENTER_RESTING
        } else {
            opacity::TILE_RESTING
        };
        HoverOpacity {
            resting: Opacity::new(resting),
            hover: Opacity::new(opacity::TILE_HOVER),
        }
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::SpinnerTick => {
                self.loading.tick();
                (Effect::None, Task::none())
            }
            Message::Image(message) => (self.handle_image_message(message), Task::none()),
        }
    }

    fn handle_image_message(&mut self, message: fit_image::Message) -> Effect {
        let id = message.image_id();
        if self.image_id() != Some(id) {
            trace!("Tile {} ignores {:?} from a replaced image", self.index, id);
            return Effect::None;
        }

        match message {
            fit_image::Message::ContentDecoded { result, .. } => {
                match result {
                    Ok(data) => {
                        if let Some(image) = self.image.as_mut() {
                            image.set_content(data);
                            image.style_mut().visibility = Visibility::Visible;
                        }
                    }
                    Err(err) => {
                        if let Some(image) = self.image.as_mut() {
                            warn!("Failed to load image {}: {}", image.uri(), err);
                            image.mark_failed();
                        }
                    }
                }
                self.loading.hide();
                Effect::None
            }
            fit_image::Message::ElementLoaded { width, height, .. } => {
                if let Some(image) = self.image.as_mut() {
                    image.set_natural_size(width, height);
                }
                self.fix_image_size_and_position();
                Effect::None
            }
            fit_image::Message::Clicked(_) => match self.owner {
                Some(owner) => Effect::ImageClicked {
                    owner,
                    index: self.index,
                },
                None => {
                    debug!("Tile {} clicked without an owner", self.index);
                    Effect::None
                }
            },
            fit_image::Message::MouseEntered(_) => {
                if let Some(image) = self.image.as_mut() {
                    image.apply_hover_opacity();
                }
                Effect::None
            }
            fit_image::Message::MouseLeft(_) => {
                if let Some(image) = self.image.as_mut() {
                    image.apply_resting_opacity();
                }
                Effect::None
            }
        }
    }

    /// Fits the image inside the margins, anchors it to the bottom margin
    /// and centers it horizontally when it is narrower than the room left.
    pub fn fix_image_size_and_position(&mut self) {
        let horizontal_margin = i64::from(self.horizontal_margin);
        let vertical_margin = i64::from(self.vertical_margin);
        let current_width = i64::from(self.current_width);
        let current_height = i64::from(self.current_height);

        let Some(image) = self.image.as_mut() else {
            return;
        };

        let available_height = current_height - 2 * vertical_margin;
        let available_width = current_width - 2 * horizontal_margin;
        image.set_max_height(clamp_to_u32(available_height));
        image.set_max_width(clamp_to_u32(available_width));
        image.style_mut().bottom = Some(self.vertical_margin);

        let image_width = i64::from(image.width());
        if image_width > 0 {
            let left = if image_width < available_width {
                (current_width - image_width).div_euclid(2)
            } else {
                horizontal_margin
            };
            let left = i32::try_from(left).unwrap_or(i32::MAX);
            if image.style().left != Some(left) {
                image.style_mut().left = Some(left);
            }
        }
    }

    pub fn set_current_x(&mut self, current_x: i32) {
        self.current_x = current_x;
        self.root.left = Some(current_x);
    }

    pub fn set_current_width(&mut self, current_width: i32) {
        self.current_width = current_width;
        self.root.width = Some(current_width);
    }

    pub fn set_current_height(&mut self, current_height: i32) {
        self.current_height = current_height;
        self.root.height = Some(current_height);
    }

    /// Records interpolation endpoints, starting from the current box.
    pub fn init_animation(&mut self, end_width: i32, end_position: i32) {
        self.animation = AnimationSpan {
            start_width: self.current_width,
            end_width,
            start_position: self.current_x,
            end_position,
        };
    }

    #[must_use]
    pub fn animation(&self) -> AnimationSpan {
        self.animation
    }

    #[must_use]
    pub fn start_width(&self) -> i32 {
        self.animation.start_width
    }

    #[must_use]
    pub fn end_width(&self) -> i32 {
        self.animation.end_width
    }

    #[must_use]
    pub fn start_position(&self) -> i32 {
        self.animation.start_position
    }

    #[must_use]
    pub fn end_position(&self) -> i32 {
        self.animation.end_position
    }

    pub fn set_horizontal_margin(&mut self, horizontal_margin: u32) {
        self.horizontal_margin = horizontal_margin;
    }

    pub fn set_vertical_margin(&mut self, vertical_margin: u32) {
        self.vertical_margin = vertical_margin;
    }

    #[must_use]
    pub fn horizontal_margin(&self) -> u32 {
        self.horizontal_margin
    }

    #[must_use]
    pub fn vertical_margin(&self) -> u32 {
        self.vertical_margin
    }

    #[must_use]
    pub fn current_width(&self) -> i32 {
        self.current_width
    }

    #[must_use]
    pub fn current_height(&self) -> i32 {
        self.current_height
    }

    #[must_use]
    pub fn current_x(&self) -> i32 {
        self.current_x
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_owner(&mut self, owner: OwnerId) {
        self.owner = Some(owner);
    }

    pub fn set_center(&mut self, center: bool) {
        self.center = center;
    }

    pub fn set_mouse_over_effects(&mut self, mouse_over_effects: bool) {
        self.mouse_over_effects = mouse_over_effects;
    }

    pub fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    /// Rendered image width plus both horizontal margins. An absent image
    /// counts as zero width.
    #[must_use]
    pub fn image_and_margin_width(&self) -> i64 {
        let image_width = self.image.as_ref().map_or(0, FitImage::width);
        i64::from(image_width) + 2 * i64::from(self.horizontal_margin)
    }

    #[must_use]
    pub fn image(&self) -> Option<&FitImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn image_id(&self) -> Option<ImageId> {
        self.image.as_ref().map(FitImage::id)
    }

    #[must_use]
    pub fn root_style(&self) -> BoxStyle {
        self.root
    }

    #[must_use]
    pub fn loading(&self) -> &LoadingIndicator {
        &self.loading
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_visible()
    }

    /// Spinner ticks at 60 FPS while the loading overlay is shown.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_loading() {
            iced::time::every(std::time::Duration::from_millis(16)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    #[allow(clippy::cast_precision_loss)] // pixel geometry is far below 2^24
    pub fn view(&self) -> Element<'_, Message> {
        let width = self.root.width.unwrap_or(0).max(0) as f32;
        let height = self.root.height.unwrap_or(0).max(0) as f32;
        let left = self.root.left.unwrap_or(0).max(0) as f32;

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(self.loading.view());

        if let Some(image) = &self.image {
            let style = image.style();
            let placed = Container::new(image.view().map(Message::Image))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_y(Vertical::Bottom)
                .padding(Padding {
                    top: 0.0,
                    right: 0.0,
                    bottom: style.bottom.unwrap_or(0) as f32,
                    left: style.left.unwrap_or(0).max(0) as f32,
                });
            layers = layers.push(placed);
        }

        let tile = Container::new(layers)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height));

        Container::new(tile)
            .padding(Padding {
                top: 0.0,
                right: 0.0,
                bottom: 0.0,
                left,
            })
            .into()
    }
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use crate::test_utils::assert_abs_diff_eq;

    fn decoded(tile: &ImageTile, width: u32, height: u32) -> Message {
        Message::Image(fit_image::Message::ContentDecoded {
            image: tile.image_id().expect("image set"),
            result: Ok(ImageData::from_rgba(
                width,
                height,
                vec![0; (width * height * 4) as usize],
            )),
        })
    }

    fn element_loaded(tile: &ImageTile, width: u32, height: u32) -> Message {
        Message::Image(fit_image::Message::ElementLoaded {
            image: tile.image_id().expect("image set"),
            width,
            height,
        })
    }

    fn loaded_tile(
        current_width: i32,
        horizontal_margin: u32,
        natural_width: u32,
        natural_height: u32,
    ) -> ImageTile {
        let mut tile = ImageTile::new();
        tile.set_current_width(current_width);
        tile.set_current_height(400);
        tile.set_horizontal_margin(horizontal_margin);
        tile.set_vertical_margin(5);
        let _ = tile.set_image_source(Some("a.png"));
        let message = element_loaded(&tile, natural_width, natural_height);
        let _ = tile.update(message);
        tile
    }

    fn resting_opacity(tile: &ImageTile) -> Option<f32> {
        tile.image()
            .and_then(|image| image.style().opacity)
            .map(Opacity::value)
    }

    #[test]
    fn new_tile_shows_loading_indicator_without_image() {
        let tile = ImageTile::new();
        assert!(tile.is_loading());
        assert!(tile.image().is_none());
    }

    #[test]
    fn absent_uri_is_ignored() {
        let mut tile = ImageTile::new();
        let _ = tile.set_image_source(None);
        assert!(tile.image().is_none());
    }

    #[test]
    fn setters_write_root_box_immediately() {
        let mut tile = ImageTile::new();
        tile.set_current_x(-15);
        tile.set_current_width(120);
        tile.set_current_height(80);

        assert_eq!(
            tile.root_style(),
            BoxStyle {
                left: Some(-15),
                width: Some(120),
                height: Some(80),
            }
        );
        assert_eq!(tile.current_x(), -15);
        assert_eq!(tile.current_width(), 120);
        assert_eq!(tile.current_height(), 80);
    }

    #[test]
    fn narrow_image_is_centered() {
        let tile = loaded_tile(200, 10, 100, 50);
        let style = tile.image().expect("image").style();
        assert_eq!(style.left, Some(50));
        assert_eq!(style.bottom, Some(5));
    }

    #[test]
    fn wide_image_is_pinned_to_margin() {
        let tile = loaded_tile(200, 10, 190, 50);
        let image = tile.image().expect("image");
        assert_eq!(image.width(), 180);
        assert_eq!(image.style().left, Some(10));
    }

    #[test]
    fn centering_floors_odd_remainders() {
        let tile = loaded_tile(201, 10, 100, 50);
        assert_eq!(tile.image().expect("image").style().left, Some(50));
    }

    #[test]
    fn max_sizes_are_clamped_at_zero() {
        let mut tile = ImageTile::new();
        tile.set_current_width(10);
        tile.set_current_height(4);
        tile.set_horizontal_margin(20);
        tile.set_vertical_margin(30);
        let _ = tile.set_image_source(Some("a.png"));
        tile.fix_image_size_and_position();

        let image = tile.image().expect("image");
        assert_eq!(image.max_width(), Some(0));
        assert_eq!(image.max_height(), Some(0));
        assert_eq!(image.style().left, None);
    }

    #[test]
    fn fix_without_image_is_noop() {
        let mut tile = ImageTile::new();
        tile.set_current_width(100);
        tile.fix_image_size_and_position();
        assert!(tile.image().is_none());
    }

    #[test]
    fn init_animation_snapshots_current_box() {
        let mut tile = ImageTile::new();
        tile.set_current_width(100);
        tile.set_current_x(20);
        tile.init_animation(50, 0);

        assert_eq!(tile.start_width(), 100);
        assert_eq!(tile.start_position(), 20);
        assert_eq!(tile.end_width(), 50);
        assert_eq!(tile.end_position(), 0);

        tile.set_current_width(75);
        assert_eq!(tile.start_width(), 100);
    }

    #[test]
    fn image_and_margin_width_adds_both_margins() {
        let mut tile = ImageTile::new();
        tile.set_horizontal_margin(5);
        let _ = tile.set_image_source(Some("a.png"));
        let message = element_loaded(&tile, 40, 20);
        let _ = tile.update(message);

        assert_eq!(tile.image_and_margin_width(), 50);
    }

    #[test]
    fn image_and_margin_width_without_image_counts_margins_only() {
        let mut tile = ImageTile::new();
        tile.set_horizontal_margin(5);
        assert_eq!(tile.image_and_margin_width(), 10);
    }

    #[test]
    fn content_decoded_shows_image_and_hides_indicator() {
        let mut tile = ImageTile::new();
        let _ = tile.set_image_source(Some("a.png"));
        assert!(!tile.image().expect("image").style().is_visible());

        let message = decoded(&tile, 4, 4);
        let _ = tile.update(message);

        assert!(tile.image().expect("image").style().is_visible());
        assert!(!tile.is_loading());
    }

    #[test]
    fn notifications_are_accepted_in_either_order() {
        let mut tile = ImageTile::new();
        tile.set_current_width(200);
        tile.set_current_height(200);
        let _ = tile.set_image_source(Some("a.png"));

        let first = decoded(&tile, 100, 50);
        let second = element_loaded(&tile, 100, 50);
        let _ = tile.update(first);
        let _ = tile.update(second);

        let image = tile.image().expect("image");
        assert!(image.style().is_visible());
        assert_eq!(image.style().left, Some(50));
    }

    #[test]
    fn stale_load_from_replaced_image_is_ignored() {
        let mut tile = ImageTile::new();
        let _ = tile.set_image_source(Some("first.png"));
        let stale = decoded(&tile, 4, 4);
        let stale_size = element_loaded(&tile, 4, 4);

        let _ = tile.set_image_source(Some("second.png"));
        let _ = tile.update(stale);
        let _ = tile.update(stale_size);

        let image = tile.image().expect("image");
        assert_eq!(image.uri(), "second.png");
        assert!(!image.style().is_visible());
        assert_eq!(image.width(), 0);
        assert!(tile.is_loading());
    }

    #[test]
    fn failed_load_hides_indicator_and_keeps_image_hidden() {
        let mut tile = ImageTile::new();
        let _ = tile.set_image_source(Some("missing.png"));
        let id = tile.image_id().expect("image");
        let _ = tile.update(Message::Image(fit_image::Message::ContentDecoded {
            image: id,
            result: Err(crate::error::Error::Io("not found".into())),
        }));

        let image = tile.image().expect("image");
        assert_eq!(image.status(), fit_image::LoadStatus::Failed);
        assert!(!image.style().is_visible());
        assert!(!tile.is_loading());
    }

    #[test]
    fn click_reports_current_index_to_owner() {
        let mut tile = ImageTile::new();
        tile.set_owner(OwnerId::new(3));
        tile.set_index(1);
        let _ = tile.set_image_source(Some("a.png"));
        tile.set_index(4);

        let id = tile.image_id().expect("image");
        let (effect, _) = tile.update(Message::Image(fit_image::Message::Clicked(id)));
        assert_eq!(
            effect,
            Effect::ImageClicked {
                owner: OwnerId::new(3),
                index: 4,
            }
        );
    }

    #[test]
    fn click_without_owner_is_dropped() {
        let mut tile = ImageTile::new();
        let _ = tile.set_image_source(Some("a.png"));
        let id = tile.image_id().expect("image");
        let (effect, _) = tile.update(Message::Image(fit_image::Message::Clicked(id)));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn side_tile_rests_at_seventy_percent() {
        let mut tile = ImageTile::new();
        tile.set_mouse_over_effects(true);
        let _ = tile.set_image_source(Some("a.png"));
        let id = tile.image_id().expect("image");

        assert_abs_diff_eq!(resting_opacity(&tile).expect("preset"), 0.7, epsilon = 1e-6);

        let _ = tile.update(Message::Image(fit_image::Message::MouseEntered(id)));
        assert_abs_diff_eq!(resting_opacity(&tile).expect("hover"), 1.0, epsilon = 1e-6);

        let _ = tile.update(Message::Image(fit_image::Message::MouseLeft(id)));
        assert_abs_diff_eq!(resting_opacity(&tile).expect("rest"), 0.7, epsilon = 1e-6);
    }

    #[test]
    fn center_tile_rests_at_ninety_percent() {
        let mut tile = ImageTile::new();
        tile.set_mouse_over_effects(true);
        tile.set_center(true);
        let _ = tile.set_image_source(Some("a.png"));
        assert_abs_diff_eq!(resting_opacity(&tile).expect("preset"), 0.9, epsilon = 1e-6);
    }

    #[test]
    fn maximized_tile_gets_no_hover_binding() {
        let mut tile = ImageTile::new();
        tile.set_mouse_over_effects(true);
        tile.set_maximized(true);
        let _ = tile.set_image_source(Some("a.png"));
        let id = tile.image_id().expect("image");

        assert!(tile.image().expect("image").hover().is_none());
        let _ = tile.update(Message::Image(fit_image::Message::MouseEntered(id)));
        assert!(resting_opacity(&tile).is_none());
    }

    #[test]
    fn flag_changes_do_not_rewire_existing_image() {
        let mut tile = ImageTile::new();
        let _ = tile.set_image_source(Some("a.png"));
        tile.set_mouse_over_effects(true);
        assert!(tile.image().expect("image").hover().is_none());

        let _ = tile.set_image_source(Some("b.png"));
        assert!(tile.image().expect("image").hover().is_some());
    }

    #[test]
    fn legacy_opacity_syntax_writes_filter() {
        let mut tile = ImageTile::with_capabilities(RenderCapabilities {
            legacy_opacity_syntax: true,
            legacy_interpolation_hint: false,
        });
        tile.set_mouse_over_effects(true);
        let _ = tile.set_image_source(Some("a.png"));

        let style = tile.image().expect("image").style();
        assert_eq!(style.legacy_filter.as_deref(), Some("alpha(opacity = 70)"));
    }

    #[test]
    fn replacing_image_shows_indicator_again() {
        let mut tile = ImageTile::new();
        let _ = tile.set_image_source(Some("a.png"));
        let message = decoded(&tile, 2, 2);
        let _ = tile.update(message);
        assert!(!tile.is_loading());

        let _ = tile.set_image_source(Some("b.png"));
        assert!(tile.is_loading());
    }
}
