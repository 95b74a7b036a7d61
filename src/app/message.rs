// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the overlay.

use crate::bridge::DataUrl;
use crate::error::Error;
use crate::notifications::NotificationId;
use crate::signals::TearingSignal;
use crate::ui::panel;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Panel(panel::Message),
    /// Result of the upload file picker; `None` when the user cancelled.
    FilePicked(Option<PathBuf>),
    /// Result of reading the picked file.
    FileRead(Result<DataUrl, Error>),
    /// The display window of a notification has elapsed.
    NotificationElapsed(NotificationId),
    /// A tearing signal arrived from the host.
    Signal(TearingSignal),
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TEARING_OVERLAY_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Run without a host: receiver calls fail and no signals are read.
    pub detached: bool,
}
