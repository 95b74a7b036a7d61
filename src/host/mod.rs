// SPDX-License-Identifier: MPL-2.0
//! Link to the embedding host over standard I/O.
//!
//! The host launches the overlay as a child process. Receiver calls go out
//! on stdout, tearing signals come in on stdin, one JSON document per line.
//! Logs go to stderr so they never mix with the outbound calls.

pub mod inbound;
pub mod outbound;

pub use inbound::{next_signal, stdin_signals};
pub use outbound::StdioReceiver;
