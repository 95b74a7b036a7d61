// SPDX-License-Identifier: MPL-2.0
//! `tearing_overlay` is a developer-facing debug panel for a hosted Unity
//! tearing simulation.
//!
//! It pushes uploaded or procedurally generated test images into the
//! simulation, relays the unwrap threshold and maximum tear count, and shows
//! the simulation's progress signals on a serialized status line.

pub mod app;
pub mod bridge;
pub mod config;
pub mod error;
pub mod host;
pub mod notifications;
pub mod signals;
pub mod ui;
