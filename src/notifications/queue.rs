// SPDX-License-Identifier: MPL-2.0
//! Serialized presentation of notifications.
//!
//! The `NotificationQueue` shows one notification at a time, each for the
//! same fixed duration, in the order they were enqueued. It does not own a
//! clock: whenever a notification becomes active the queue hands back a
//! [`Shown`] ticket, and the owner is responsible for calling
//! [`NotificationQueue::complete`] with the ticket's id once the duration has
//! elapsed.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::DEFAULT_DISPLAY_DURATION_MS;
use std::collections::VecDeque;
use std::time::Duration;

/// Ticket for a notification that just became active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shown {
    /// Id to pass back to [`NotificationQueue::complete`].
    pub id: NotificationId,
    /// How long the notification stays on the status line.
    pub duration: Duration,
}

/// Strict FIFO of status messages with at most one visible at a time.
#[derive(Debug)]
pub struct NotificationQueue {
    /// Notifications waiting for the status line (oldest first).
    pending: VecDeque<Notification>,
    /// Notification currently on the status line.
    active: Option<Notification>,
    display_duration: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DISPLAY_DURATION_MS))
    }
}

impl NotificationQueue {
    /// Creates an empty queue that shows each notification for `display_duration`.
    #[must_use]
    pub fn new(display_duration: Duration) -> Self {
        Self {
            pending: VecDeque::new(),
            active: None,
            display_duration,
        }
    }

    /// Appends a message to the tail of the queue.
    ///
    /// Returns a ticket when the message went straight to the status line.
    pub fn enqueue(&mut self, message: impl Into<String>, severity: Severity) -> Option<Shown> {
        self.push(Notification::new(severity, message))
    }

    /// Appends an already built notification to the tail of the queue.
    pub fn push(&mut self, notification: Notification) -> Option<Shown> {
        self.pending.push_back(notification);
        self.display_next()
    }

    /// Ends the display window of `id` and moves on to the next message.
    ///
    /// Completions for anything but the active notification are ignored,
    /// which covers timers that outlive a [`clear`](Self::clear).
    pub fn complete(&mut self, id: NotificationId) -> Option<Shown> {
        match &self.active {
            Some(active) if active.id() == id => {
                self.active = None;
                self.display_next()
            }
            _ => None,
        }
    }

    /// Drops the active and pending notifications.
    pub fn clear(&mut self) {
        self.active = None;
        self.pending.clear();
    }

    /// Returns the notification currently on the status line.
    #[must_use]
    pub fn active(&self) -> Option<&Notification> {
        self.active.as_ref()
    }

    /// Returns the number of notifications waiting behind the active one.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether nothing is shown and nothing is waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.pending.is_empty()
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.display_duration
    }

    fn display_next(&mut self) -> Option<Shown> {
        if self.active.is_some() {
            return None;
        }
        let next = self.pending.pop_front()?;
        let shown = Shown {
            id: next.id(),
            duration: self.display_duration,
        };
        self.active = Some(next);
        Some(shown)
    }
}
