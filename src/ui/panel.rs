// SPDX-License-Identifier: MPL-2.0
//! The floating test panel.
//!
//! While closed, only the toggle button is shown. While open, the toggle
//! button is hidden and the panel offers the upload button, the two pattern
//! generators, the tearing parameter inputs, and the status line.

use crate::bridge::TestPattern;
use crate::notifications::Notification;
use crate::ui::design_tokens::{border, opacity, palette, radius, sizing, spacing, typography};
use crate::ui::status;
use iced::{
    alignment::Vertical,
    widget::{button, container, text_input, Column, Container, Row, Text},
    Color, Element, Length, Theme,
};

/// Panel visibility and the raw text of its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    open: bool,
    threshold: String,
    tear_count: String,
}

impl State {
    #[must_use]
    pub fn new(threshold: f64, tear_count: i64) -> Self {
        Self {
            open: false,
            threshold: threshold.to_string(),
            tear_count: tear_count.to_string(),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn threshold(&self) -> &str {
        &self.threshold
    }

    #[must_use]
    pub fn tear_count(&self) -> &str {
        &self.tear_count
    }
}

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub status: Option<&'a Notification>,
}

/// Messages emitted by the panel widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Open,
    Close,
    Upload,
    GeneratePattern(TestPattern),
    ThresholdInput(String),
    TearCountInput(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    UploadRequested,
    PatternRequested(TestPattern),
    ThresholdChanged(String),
    TearCountChanged(String),
}

/// Process a panel message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Open => {
            state.open = true;
            Event::None
        }
        Message::Close => {
            state.open = false;
            Event::None
        }
        Message::Upload => Event::UploadRequested,
        Message::GeneratePattern(pattern) => Event::PatternRequested(pattern),
        Message::ThresholdInput(value) => {
            state.threshold.clone_from(&value);
            Event::ThresholdChanged(value)
        }
        Message::TearCountInput(value) => {
            state.tear_count.clone_from(&value);
            Event::TearCountChanged(value)
        }
    }
}

/// Render the toggle button or the open panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !ctx.state.open {
        return button(Text::new("🧪 Test UI").size(typography::BODY))
            .on_press(Message::Open)
            .padding(spacing::XS)
            .into();
    }

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new("🧪 Tests")
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("✕").size(typography::BODY))
                .on_press(Message::Close)
                .padding(spacing::XXS),
        );

    let actions = Column::new()
        .spacing(spacing::XS)
        .push(action_button("📤 Upload Image", Message::Upload))
        .push(action_button(
            "🎨 UV Debug (2x2)",
            Message::GeneratePattern(TestPattern::Uv),
        ))
        .push(action_button(
            "⬛ Checkerboard",
            Message::GeneratePattern(TestPattern::Checker),
        ));

    let config = Column::new()
        .spacing(spacing::XS)
        .push(labelled_input(
            "Unwrap Threshold (0-1):",
            "0.8",
            &ctx.state.threshold,
            Message::ThresholdInput,
        ))
        .push(labelled_input(
            "Max Tear Count:",
            "5",
            &ctx.state.tear_count,
            Message::TearCountInput,
        ));

    let content = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(actions)
        .push(config)
        .push(status::view(ctx.status));

    Container::new(content)
        .width(Length::Fixed(sizing::PANEL_WIDTH))
        .padding(spacing::MD)
        .style(panel_style)
        .into()
}

fn action_button(label: &str, message: Message) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .width(Length::Fill)
        .padding(spacing::XS)
        .into()
}

fn labelled_input<'a>(
    label: &'a str,
    placeholder: &'a str,
    value: &'a str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY).width(Length::Fill))
        .push(
            text_input(placeholder, value)
                .on_input(on_input)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::INPUT_WIDTH)),
        )
        .into()
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::GRAY_900
        })),
        border: iced::Border {
            color: palette::GRAY_700,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
