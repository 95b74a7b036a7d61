// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! - [`panel`] - The floating test panel and its toggle button
//! - [`status`] - Severity-styled status line
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod panel;
pub mod status;
