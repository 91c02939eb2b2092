// SPDX-License-Identifier: MPL-2.0
//! Loading indicator overlay with animated spinner.

use super::style::Visibility;
use crate::ui::design_tokens::palette;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Container, Space};
use iced::{Element, Length};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Full-size overlay drawn behind the image until it has loaded.
#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    visibility: Visibility,
    spinner_rotation: f32,
}

impl LoadingIndicator {
    pub fn show(&mut self) {
        self.visibility = Visibility::Visible;
    }

    pub fn hide(&mut self) {
        self.visibility = Visibility::Hidden;
        self.spinner_rotation = 0.0;
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Advances the spinner while the overlay is shown.
    pub fn tick(&mut self) {
        if self.is_visible() {
            self.spinner_rotation += SPINNER_SPEED;
            if self.spinner_rotation > std::f32::consts::TAU {
                self.spinner_rotation -= std::f32::consts::TAU;
            }
        }
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    pub fn view<'a, Message: 'static>(&self) -> Element<'a, Message> {
        if !self.is_visible() {
            return Space::new().width(Length::Fill).height(Length::Fill).into();
        }

        Container::new(AnimatedSpinner::new(palette::GRAY_400, self.spinner_rotation).into_element())
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into()
    }
}
