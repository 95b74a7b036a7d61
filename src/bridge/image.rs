// SPDX-License-Identifier: MPL-2.0
//! Delivery of images to the receiver.
//!
//! `ImageBridge` sends a complete data URL to the image destination and
//! reports the outcome as exactly one notification. Receiver failures are
//! absorbed here; nothing propagates to the caller.

use super::data_url::DataUrl;
use super::pattern::TestPattern;
use super::receiver::{Destination, Payload, Receiver};
use crate::error::{Error, Result};
use crate::notifications::Notification;
use std::path::{Path, PathBuf};

/// Stateless bridge between image sources and the receiver.
pub struct ImageBridge<'a> {
    receiver: &'a dyn Receiver,
    destination: &'a Destination,
}

impl<'a> ImageBridge<'a> {
    pub fn new(receiver: &'a dyn Receiver, destination: &'a Destination) -> Self {
        Self {
            receiver,
            destination,
        }
    }

    /// Sends `data_url` to the image destination.
    pub fn send_image(&self, data_url: &DataUrl) -> Notification {
        match self
            .receiver
            .send_message(self.destination, Payload::from(data_url.as_str()))
        {
            Ok(()) => {
                tracing::debug!(
                    destination = %self.destination,
                    bytes = data_url.as_str().len(),
                    "image sent"
                );
                Notification::success("✓ Image sent to Unity")
            }
            Err(err) => {
                tracing::error!(destination = %self.destination, "error sending image: {err}");
                Notification::error(format!("✗ Failed to send: {err}"))
            }
        }
    }

    /// Synthesizes `pattern` and sends it.
    pub fn send_pattern(&self, pattern: TestPattern) -> Notification {
        match pattern.to_data_url() {
            Ok(url) => self.send_image(&url),
            Err(err) => {
                tracing::error!(pattern = pattern.label(), "error encoding pattern: {err}");
                Notification::error(format!("✗ Failed to generate {} pattern: {err}", pattern.label()))
            }
        }
    }

    /// Finishes a file upload started with [`loading_notice`] and [`read_file`].
    ///
    /// A failed read is reported without touching the receiver.
    pub fn finish_upload(&self, read: Result<DataUrl>) -> Notification {
        match read {
            Ok(url) => self.send_image(&url),
            Err(err) => {
                tracing::warn!("error reading upload: {err}");
                Notification::error("✗ Failed to read file")
            }
        }
    }
}

/// Notification shown as soon as an upload starts.
pub fn loading_notice(path: &Path) -> Notification {
    Notification::info(format!("⏳ Loading {}...", display_name(path)))
}

/// Reads a user-selected file and encodes it as a data URL.
pub async fn read_file(path: PathBuf) -> Result<DataUrl> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| Error::FileRead(format!("{}: {err}", path.display())))?;
    Ok(DataUrl::from_file_contents(&path, &bytes))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::receiver::{MockReceiver, ReceiverError};
    use crate::notifications::Severity;
    use mockall::predicate::{always, eq};
    use tempfile::tempdir;

    fn image_destination() -> Destination {
        Destination::new("WrappingPaper", "ReceiveImageDataURL")
    }

    #[test]
    fn successful_send_reports_success() {
        let destination = image_destination();
        let url = DataUrl::png(b"png");
        let mut receiver = MockReceiver::new();
        receiver
            .expect_send_message()
            .with(eq(destination.clone()), eq(Payload::Text(url.to_string())))
            .times(1)
            .returning(|_, _| Ok(()));

        let notification = ImageBridge::new(&receiver, &destination).send_image(&url);

        assert_eq!(notification.severity(), Severity::Success);
        assert_eq!(notification.message(), "✓ Image sent to Unity");
    }

    #[test]
    fn receiver_failure_becomes_one_error_notification() {
        let destination = image_destination();
        let mut receiver = MockReceiver::new();
        receiver
            .expect_send_message()
            .times(1)
            .returning(|_, _| Err(ReceiverError::new("SendMessage: object WrappingPaper not found")));

        let notification =
            ImageBridge::new(&receiver, &destination).send_image(&DataUrl::png(b"png"));

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(
            notification.message(),
            "✗ Failed to send: SendMessage: object WrappingPaper not found"
        );
    }

    #[test]
    fn send_pattern_sends_png_data_url() {
        let destination = image_destination();
        let expected = TestPattern::Checker.to_data_url().unwrap();
        let mut receiver = MockReceiver::new();
        receiver
            .expect_send_message()
            .with(always(), eq(Payload::Text(expected.into_string())))
            .times(1)
            .returning(|_, _| Ok(()));

        let notification =
            ImageBridge::new(&receiver, &destination).send_pattern(TestPattern::Checker);
        assert_eq!(notification.severity(), Severity::Success);
    }

    #[test]
    fn failed_read_never_reaches_receiver() {
        let destination = image_destination();
        let mut receiver = MockReceiver::new();
        receiver.expect_send_message().never();

        let notification = ImageBridge::new(&receiver, &destination)
            .finish_upload(Err(Error::FileRead("gone".into())));

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message(), "✗ Failed to read file");
    }

    #[test]
    fn loading_notice_names_the_file() {
        let notice = loading_notice(Path::new("/tmp/uploads/cloth.png"));
        assert_eq!(notice.severity(), Severity::Info);
        assert_eq!(notice.message(), "⏳ Loading cloth.png...");
    }

    #[tokio::test]
    async fn read_file_encodes_contents() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("uv.png");
        let png = TestPattern::Uv.to_png().unwrap();
        std::fs::write(&path, &png).unwrap();

        let url = read_file(path).await.expect("read should succeed");
        assert_eq!(url.mime(), "image/png");
        assert_eq!(url.decode(), Some(png));
    }

    #[tokio::test]
    async fn read_file_reports_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = read_file(dir.path().join("missing.png")).await.unwrap_err();
        assert!(matches!(err, Error::FileRead(message) if message.contains("missing.png")));
    }
}
