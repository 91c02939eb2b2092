// SPDX-License-Identifier: MPL-2.0
//! Image element that scales down to fit max-width/max-height constraints.
//!
//! A `FitImage` is bound to one URI for its whole life. Loading reports two
//! distinct notifications: [`Message::ElementLoaded`] once the natural size
//! of the element is known, and [`Message::ContentDecoded`] once the pixels
//! are ready to draw. Their relative order is unspecified.
//!
//! Every message carries the [`ImageId`] of the element that produced it,
//! so the owner can drop notifications from elements it has replaced.

use crate::error::Error;
use crate::media::{self, ImageData};
use crate::ui::tile::style::{ImageStyle, Opacity, Scaling};
use crate::ui::tile::RenderCapabilities;
use iced::widget::image::{self, FilterMethod, Image};
use iced::widget::{mouse_area, Space};
use iced::{Element, Length, Task};

/// Identity of one image element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(u64);

impl ImageId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Pixels decoded; the image can be shown.
    ContentDecoded {
        image: ImageId,
        result: Result<ImageData, Error>,
    },
    /// Element has its natural size.
    ElementLoaded {
        image: ImageId,
        width: u32,
        height: u32,
    },
    Clicked(ImageId),
    MouseEntered(ImageId),
    MouseLeft(ImageId),
}

impl Message {
    /// Element the message originates from.
    #[must_use]
    pub fn image_id(&self) -> ImageId {
        match self {
            Message::ContentDecoded { image, .. } | Message::ElementLoaded { image, .. } => *image,
            Message::Clicked(image) | Message::MouseEntered(image) | Message::MouseLeft(image) => {
                *image
            }
        }
    }
}

/// Opacities applied on pointer enter and leave.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverOpacity {
    pub resting: Opacity,
    pub hover: Opacity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Decoded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct FitImage {
    id: ImageId,
    uri: String,
    handle: Option<image::Handle>,
    natural_size: Option<(u32, u32)>,
    max_width: Option<u32>,
    max_height: Option<u32>,
    style: ImageStyle,
    hover: Option<HoverOpacity>,
    status: LoadStatus,
    legacy_opacity_syntax: bool,
}

impl FitImage {
    /// Creates a hidden image element bound to `uri`.
    #[must_use]
    pub fn new(id: ImageId, uri: impl Into<String>, capabilities: RenderCapabilities) -> Self {
        let mut style = ImageStyle::hidden();
        if capabilities.legacy_interpolation_hint {
            style.scaling = Scaling::Smooth;
        }

        Self {
            id,
            uri: uri.into(),
            handle: None,
            natural_size: None,
            max_width: None,
            max_height: None,
            style,
            hover: None,
            status: LoadStatus::Pending,
            legacy_opacity_syntax: capabilities.legacy_opacity_syntax,
        }
    }

    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    #[must_use]
    pub fn style(&self) -> &ImageStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ImageStyle {
        &mut self.style
    }

    /// Natural width of the image, 0 until known.
    #[must_use]
    pub fn natural_width(&self) -> u32 {
        self.natural_size.map_or(0, |(width, _)| width)
    }

    pub fn set_natural_size(&mut self, width: u32, height: u32) {
        self.natural_size = Some((width, height));
    }

    #[must_use]
    pub fn max_width(&self) -> Option<u32> {
        self.max_width
    }

    #[must_use]
    pub fn max_height(&self) -> Option<u32> {
        self.max_height
    }

    pub fn set_max_width(&mut self, max_width: u32) {
        self.max_width = Some(max_width);
    }

    pub fn set_max_height(&mut self, max_height: u32) {
        self.max_height = Some(max_height);
    }

    /// Rendered size: the natural size scaled down (never up) to fit the
    /// constraints, keeping the aspect ratio. The binding constraint is hit
    /// exactly; the other side is floored.
    #[must_use]
    pub fn rendered_size(&self) -> (u32, u32) {
        let Some((width, height)) = self.natural_size else {
            return (0, 0);
        };
        if width == 0 || height == 0 {
            return (0, 0);
        }

        let max_width = self.max_width.unwrap_or(width).min(width);
        let max_height = self.max_height.unwrap_or(height).min(height);
        if max_width == width && max_height == height {
            return (width, height);
        }

        let (w, h) = (u64::from(width), u64::from(height));
        let (mw, mh) = (u64::from(max_width), u64::from(max_height));
        // mw / w <= mh / h
        if mw * h <= mh * w {
            (max_width, narrow(h * mw / w))
        } else {
            (narrow(w * mh / h), max_height)
        }
    }

    /// Rendered width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.rendered_size().0
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoverOpacity> {
        self.hover
    }

    /// Attaches pointer enter/leave opacities and pre-sets the resting one.
    pub fn bind_hover(&mut self, hover: HoverOpacity) {
        self.hover = Some(hover);
        self.style.set_opacity(hover.resting, self.legacy_opacity_syntax);
    }

    pub fn apply_hover_opacity(&mut self) {
        if let Some(hover) = self.hover {
            self.style.set_opacity(hover.hover, self.legacy_opacity_syntax);
        }
    }

    pub fn apply_resting_opacity(&mut self) {
        if let Some(hover) = self.hover {
            self.style.set_opacity(hover.resting, self.legacy_opacity_syntax);
        }
    }

    /// Stores decoded pixels. Visibility is left to the owner.
    pub fn set_content(&mut self, data: ImageData) {
        self.natural_size = Some((data.width, data.height));
        self.handle = Some(data.handle);
        self.status = LoadStatus::Decoded;
    }

    pub fn mark_failed(&mut self) {
        self.status = LoadStatus::Failed;
    }

    /// Starts decoding and emits both load notifications on success.
    pub fn load(&self) -> Task<Message> {
        let id = self.id;
        Task::perform(media::load_uri(self.uri.clone()), std::convert::identity).then(
            move |result| match result {
                Ok(data) => Task::batch([
                    Task::done(Message::ElementLoaded {
                        image: id,
                        width: data.width,
                        height: data.height,
                    }),
                    Task::done(Message::ContentDecoded {
                        image: id,
                        result: Ok(data),
                    }),
                ]),
                Err(err) => Task::done(Message::ContentDecoded {
                    image: id,
                    result: Err(err),
                }),
            },
        )
    }

    #[allow(clippy::cast_precision_loss)] // rendered sizes are far below 2^24
    pub fn view(&self) -> Element<'_, Message> {
        let (width, height) = self.rendered_size();
        let width = Length::Fixed(width as f32);
        let height = Length::Fixed(height as f32);

        let content: Element<'_, Message> = match &self.handle {
            Some(handle) if self.style.is_visible() => {
                let picture = Image::new(handle.clone())
                    .width(width)
                    .height(height)
                    .opacity(self.style.effective_opacity());
                match self.style.scaling {
                    Scaling::Smooth => picture.filter_method(FilterMethod::Linear).into(),
                    Scaling::Default => picture.into(),
                }
            }
            _ => Space::new().width(width).height(height).into(),
        };

        let area = mouse_area(content).on_press(Message::Clicked(self.id));
        if self.hover.is_some() {
            area.on_enter(Message::MouseEntered(self.id))
                .on_exit(Message::MouseLeft(self.id))
                .into()
        } else {
            area.into()
        }
    }
}

/// Result of scaling a u32 side by a ratio <= 1 always fits back in u32.
fn narrow(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
