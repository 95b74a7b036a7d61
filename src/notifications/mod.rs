// SPDX-License-Identifier: MPL-2.0
//! Status-line notifications for the overlay.
//!
//! Notifications are shown one at a time on a single status line, each for
//! a fixed duration, in the order they were reported. Nothing is dropped or
//! merged, however fast messages arrive.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct and `Severity` levels
//! - [`queue`] - `NotificationQueue`, the serialized presenter
//!
//! # Usage
//!
//! ```
//! use tearing_overlay::notifications::{NotificationQueue, Severity};
//!
//! let mut queue = NotificationQueue::default();
//! let shown = queue.enqueue("Image sent", Severity::Success).unwrap();
//!
//! // Later, once `shown.duration` has elapsed:
//! assert!(queue.complete(shown.id).is_none());
//! assert!(queue.is_idle());
//! ```

mod notification;
mod queue;

pub use notification::{Notification, NotificationId, Severity};
pub use queue::{NotificationQueue, Shown};
