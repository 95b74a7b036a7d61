// SPDX-License-Identifier: MPL-2.0
//! Outbound calls into the hosted simulation.
//!
//! - [`receiver`] - the `Receiver` trait and its call types
//! - [`data_url`] - data URL encoding of image bytes
//! - [`pattern`] - deterministic test images
//! - [`image`] - `ImageBridge`, images in and notifications out
//! - [`params`] - `ParameterRelay` for the tearing parameters

pub mod data_url;
pub mod image;
pub mod params;
pub mod pattern;
pub mod receiver;

pub use data_url::DataUrl;
pub use image::ImageBridge;
pub use params::ParameterRelay;
pub use pattern::TestPattern;
pub use receiver::{Destination, Payload, Receiver, ReceiverError, UnavailableReceiver};
