// SPDX-License-Identifier: MPL-2.0
//! View rendering for the overlay.

use super::Message;
use crate::notifications::Notification;
use crate::ui::design_tokens::spacing;
use crate::ui::panel::{self, ViewContext as PanelViewContext};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::Container,
    Element, Length,
};

/// Context required to render the overlay.
pub struct ViewContext<'a> {
    pub panel: &'a panel::State,
    pub status: Option<&'a Notification>,
}

/// Pins the panel (or its toggle button) to the top-right corner.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel_view = panel::view(PanelViewContext {
        state: ctx.panel,
        status: ctx.status,
    })
    .map(Message::Panel);

    Container::new(panel_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .padding(spacing::MD)
        .into()
}
