// SPDX-License-Identifier: MPL-2.0
//! Application root state for the overlay.
//!
//! The `App` owns everything the overlay needs for its lifetime: the
//! receiver, the notification queue, and the panel state. Handlers borrow
//! them through an `UpdateContext`; nothing is reached through globals.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::bridge::{Destination, Receiver, UnavailableReceiver};
use crate::config::{self, Config};
use crate::host::StdioReceiver;
use crate::notifications::NotificationQueue;
use crate::ui::panel;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 360;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;

/// Resolved object/method pairs for every outbound call.
#[derive(Debug, Clone, PartialEq)]
pub struct Destinations {
    pub image: Destination,
    pub threshold: Destination,
    pub tear_count: Destination,
}

impl From<&config::ReceiverConfig> for Destinations {
    fn from(receiver: &config::ReceiverConfig) -> Self {
        Self {
            image: receiver.image_destination(),
            threshold: receiver.threshold_destination(),
            tear_count: receiver.tear_count_destination(),
        }
    }
}

/// Root Iced application state.
pub struct App {
    receiver: Box<dyn Receiver>,
    destinations: Destinations,
    notifications: NotificationQueue,
    panel: panel::State,
    /// Whether the overlay runs without a host attached.
    detached: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("destinations", &self.destinations)
            .field("panel", &self.panel)
            .field("detached", &self.detached)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced calls boot through `Fn`; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the overlay around an explicit receiver.
    pub fn with_receiver(config: &Config, receiver: Box<dyn Receiver>, detached: bool) -> Self {
        Self {
            receiver,
            destinations: Destinations::from(&config.receiver),
            notifications: NotificationQueue::new(config.notifications.display_duration()),
            panel: panel::State::new(
                config.tearing.initial_threshold(),
                config.tearing.initial_tear_count(),
            ),
            detached,
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load(config_dir.as_deref());
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let receiver: Box<dyn Receiver> = if flags.detached {
            tracing::info!("running detached; receiver calls will fail");
            Box::new(UnavailableReceiver)
        } else {
            Box::new(StdioReceiver::stdout())
        };

        let app = Self::with_receiver(&config, receiver, flags.detached);
        tracing::info!(
            image = %app.destinations.image,
            threshold = %app.destinations.threshold,
            tear_count = %app.destinations.tear_count,
            "test overlay initialized"
        );
        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.detached {
            "Tearing Test Overlay (detached)".to_string()
        } else {
            "Tearing Test Overlay".to_string()
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_signal_subscription(self.detached),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            receiver: self.receiver.as_ref(),
            destinations: &self.destinations,
            notifications: &mut self.notifications,
            panel: &mut self.panel,
        };

        match message {
            Message::Panel(panel_message) => update::handle_panel_message(&mut ctx, panel_message),
            Message::FilePicked(path) => update::handle_file_picked(&mut ctx, path),
            Message::FileRead(result) => update::handle_file_read(&mut ctx, result),
            Message::NotificationElapsed(id) => update::handle_notification_elapsed(&mut ctx, id),
            Message::Signal(signal) => update::handle_signal(&mut ctx, &signal),
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            panel: &self.panel,
            status: self.notifications.active(),
        })
    }
}
