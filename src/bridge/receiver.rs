// SPDX-License-Identifier: MPL-2.0
//! The outbound side of the message bridge.
//!
//! Every call into the hosted simulation is addressed to a named object and
//! one of its methods, and carries a single [`Payload`]. Implementations may
//! fail; callers are expected to turn a [`ReceiverError`] into a notification
//! instead of propagating it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Object-name / method-name pair addressed by a receiver call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub object: String,
    pub method: String,
}

impl Destination {
    pub fn new(object: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.object, self.method)
    }
}

/// Value carried by a single receiver call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Text(String),
    Int(i64),
}

impl From<&str> for Payload {
    fn from(value: &str) -> Self {
        Payload::Text(value.to_string())
    }
}

/// A receiver call that did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiverError {
    message: String,
}

impl ReceiverError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ReceiverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ReceiverError {}

/// Collaborator that consumes object/method calls.
#[cfg_attr(test, mockall::automock)]
pub trait Receiver {
    fn send_message(&self, destination: &Destination, payload: Payload)
        -> Result<(), ReceiverError>;
}

/// Receiver used when the overlay runs without a host attached.
///
/// Every call fails, which keeps the error path of each control reachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableReceiver;

impl Receiver for UnavailableReceiver {
    fn send_message(
        &self,
        destination: &Destination,
        _payload: Payload,
    ) -> Result<(), ReceiverError> {
        Err(ReceiverError::new(format!(
            "receiver unavailable for {destination}"
        )))
    }
}
