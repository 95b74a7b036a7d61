// SPDX-License-Identifier: MPL-2.0
//! Receiver calls written as JSON lines.

use crate::bridge::{Destination, Payload, Receiver, ReceiverError};
use serde::Serialize;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

#[derive(Serialize)]
struct Call<'a> {
    object: &'a str,
    method: &'a str,
    value: &'a Payload,
}

/// Receiver that writes one `{"object","method","value"}` line per call.
#[derive(Debug)]
pub struct StdioReceiver<W> {
    sink: Mutex<W>,
}

impl StdioReceiver<io::Stdout> {
    /// Writes calls to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StdioReceiver<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write> Receiver for StdioReceiver<W> {
    fn send_message(
        &self,
        destination: &Destination,
        payload: Payload,
    ) -> Result<(), ReceiverError> {
        let call = Call {
            object: &destination.object,
            method: &destination.method,
            value: &payload,
        };
        let mut line =
            serde_json::to_string(&call).map_err(|err| ReceiverError::new(err.to_string()))?;
        line.push('\n');

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_all(line.as_bytes())
            .and_then(|()| sink.flush())
            .map_err(|err| ReceiverError::new(format!("{destination}: {err}")))
    }
}
