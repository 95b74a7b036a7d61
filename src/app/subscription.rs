// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the overlay.

use super::Message;
use crate::host;
use iced::{event, Subscription};

/// Routes window close requests so the overlay can tear down first.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = event {
            Some(Message::WindowCloseRequested(window_id))
        } else {
            None
        }
    })
}

/// Creates the tearing signal subscription, unless running detached.
pub fn create_signal_subscription(detached: bool) -> Subscription<Message> {
    if detached {
        Subscription::none()
    } else {
        Subscription::run(host::stdin_signals).map(Message::Signal)
    }
}
