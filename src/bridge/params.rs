// SPDX-License-Identifier: MPL-2.0
//! Relay of the tearing simulation parameters.
//!
//! Each input event forwards exactly one value. Range and step limits live
//! on the input widgets only; nothing here validates them. A failed relay
//! yields an error notification, a successful one is only logged.

use super::receiver::{Destination, Payload, Receiver};
use crate::notifications::Notification;

/// Forwards the unwrap threshold and the maximum tear count.
pub struct ParameterRelay<'a> {
    receiver: &'a dyn Receiver,
    threshold: &'a Destination,
    tear_count: &'a Destination,
}

impl<'a> ParameterRelay<'a> {
    pub fn new(
        receiver: &'a dyn Receiver,
        threshold: &'a Destination,
        tear_count: &'a Destination,
    ) -> Self {
        Self {
            receiver,
            threshold,
            tear_count,
        }
    }

    /// Sends the threshold input text as-is.
    pub fn set_unwrap_threshold(&self, raw: &str) -> Option<Notification> {
        match self.receiver.send_message(self.threshold, Payload::from(raw)) {
            Ok(()) => {
                tracing::debug!(value = raw, "set unwrap threshold");
                None
            }
            Err(err) => {
                tracing::error!("error setting threshold: {err}");
                Some(Notification::error(format!(
                    "✗ Failed to set unwrap threshold: {err}"
                )))
            }
        }
    }

    /// Sends the leading integer of the tear count input text.
    pub fn set_max_tear_count(&self, raw: &str) -> Option<Notification> {
        let Some(count) = parse_leading_int(raw) else {
            tracing::warn!(value = raw, "max tear count is not an integer");
            return Some(Notification::error(format!(
                "✗ Max tear count is not a number: {raw:?}"
            )));
        };
        match self.receiver.send_message(self.tear_count, Payload::Int(count)) {
            Ok(()) => {
                tracing::debug!(value = count, "set max tear count");
                None
            }
            Err(err) => {
                tracing::error!("error setting max tear count: {err}");
                Some(Notification::error(format!(
                    "✗ Failed to set max tear count: {err}"
                )))
            }
        }
    }
}

/// Parses an optional sign followed by decimal digits at the start of
/// `raw`, ignoring surrounding whitespace and any trailing characters.
///
/// Digit runs beyond the `i64` range saturate at `i64::MIN` or `i64::MAX`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    let negative = trimmed.starts_with('-');
    let value = trimmed[..digits_start + digits_len]
        .parse()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    Some(value)
}
