// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the overlay.

use super::{Destinations, Message};
use crate::bridge::{image, DataUrl, ImageBridge, ParameterRelay, Receiver};
use crate::error::Error;
use crate::notifications::{Notification, NotificationId, NotificationQueue, Shown};
use crate::signals::TearingSignal;
use crate::ui::panel::{self, Event as PanelEvent};
use iced::{window, Task};
use std::path::PathBuf;

/// Extensions offered by the upload file picker.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "bmp", "webp", "tga"];

/// Mutable view of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub receiver: &'a dyn Receiver,
    pub destinations: &'a Destinations,
    pub notifications: &'a mut NotificationQueue,
    pub panel: &'a mut panel::State,
}

impl UpdateContext<'_> {
    fn image_bridge(&self) -> ImageBridge<'_> {
        ImageBridge::new(self.receiver, &self.destinations.image)
    }

    fn parameter_relay(&self) -> ParameterRelay<'_> {
        ParameterRelay::new(
            self.receiver,
            &self.destinations.threshold,
            &self.destinations.tear_count,
        )
    }
}

/// Enqueues a notification and arms its timer if it became active.
pub fn notify(notifications: &mut NotificationQueue, notification: Notification) -> Task<Message> {
    schedule(notifications.push(notification))
}

fn notify_failure(
    notifications: &mut NotificationQueue,
    failure: Option<Notification>,
) -> Task<Message> {
    failure.map_or_else(Task::none, |notification| notify(notifications, notification))
}

/// Turns a display ticket into a timer that reports its own completion.
fn schedule(shown: Option<Shown>) -> Task<Message> {
    match shown {
        Some(Shown { id, duration }) => Task::perform(
            async move { tokio::time::sleep(duration).await },
            move |()| Message::NotificationElapsed(id),
        ),
        None => Task::none(),
    }
}

pub fn handle_panel_message(ctx: &mut UpdateContext<'_>, message: panel::Message) -> Task<Message> {
    match panel::update(message, ctx.panel) {
        PanelEvent::None => Task::none(),
        PanelEvent::UploadRequested => Task::perform(pick_image(), Message::FilePicked),
        PanelEvent::PatternRequested(pattern) => {
            let outcome = ctx.image_bridge().send_pattern(pattern);
            notify(ctx.notifications, outcome)
        }
        PanelEvent::ThresholdChanged(value) => {
            let failure = ctx.parameter_relay().set_unwrap_threshold(&value);
            notify_failure(ctx.notifications, failure)
        }
        PanelEvent::TearCountChanged(value) => {
            let failure = ctx.parameter_relay().set_max_tear_count(&value);
            notify_failure(ctx.notifications, failure)
        }
    }
}

/// Starts reading the picked file. Cancelling the picker does nothing.
pub fn handle_file_picked(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    let loading = notify(ctx.notifications, image::loading_notice(&path));
    let read = Task::perform(image::read_file(path), Message::FileRead);
    Task::batch([loading, read])
}

pub fn handle_file_read(
    ctx: &mut UpdateContext<'_>,
    result: Result<DataUrl, Error>,
) -> Task<Message> {
    let outcome = ctx.image_bridge().finish_upload(result);
    notify(ctx.notifications, outcome)
}

pub fn handle_notification_elapsed(
    ctx: &mut UpdateContext<'_>,
    id: NotificationId,
) -> Task<Message> {
    schedule(ctx.notifications.complete(id))
}

pub fn handle_signal(ctx: &mut UpdateContext<'_>, signal: &TearingSignal) -> Task<Message> {
    notify(ctx.notifications, signal.to_notification())
}

/// Drops pending notifications before the window goes away.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    tracing::info!(pending = ctx.notifications.pending_count(), "overlay closing");
    ctx.notifications.clear();
    window::close(id)
}

async fn pick_image() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Upload Image")
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
        .await
        .map(|handle| handle.path().to_path_buf())
}
