// SPDX-License-Identifier: MPL-2.0
//! Status line rendering for the active notification.

use crate::notifications::Notification;
use crate::ui::design_tokens::{border, opacity, radius, spacing, typography};
use iced::widget::{container, text, Container, Text};
use iced::{Color, Element, Length, Theme};

/// Renders the status line. Empty and unstyled while nothing is active.
pub fn view<'a, Message: 'a>(active: Option<&'a Notification>) -> Element<'a, Message> {
    let Some(notification) = active else {
        return Container::new(text(""))
            .width(Length::Fill)
            .height(Length::Shrink)
            .into();
    };

    let accent = notification.severity().color();
    Container::new(Text::new(notification.message()).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XS)
        .style(move |theme: &Theme| status_style(theme, accent))
        .into()
}

/// Style for a visible status line, tinted with the severity color.
fn status_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::STATUS_TINT,
            ..accent
        })),
        border: iced::Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
