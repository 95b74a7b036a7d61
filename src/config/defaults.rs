// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Status line display timing
//! - **Receiver**: Object and method names addressed on the host
//! - **Tearing**: Initial values of the two relayed parameters

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long each notification stays on the status line (in milliseconds).
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 1200;

/// Minimum accepted display duration (in milliseconds).
pub const MIN_DISPLAY_DURATION_MS: u64 = 100;

/// Maximum accepted display duration (in milliseconds).
pub const MAX_DISPLAY_DURATION_MS: u64 = 60_000;

// ==========================================================================
// Receiver Defaults
// ==========================================================================

/// Object that receives test images.
pub const DEFAULT_IMAGE_OBJECT: &str = "WrappingPaper";

/// Method that receives a test image as a data URL.
pub const DEFAULT_IMAGE_METHOD: &str = "ReceiveImageDataURL";

/// Object that owns the tearing simulation parameters.
pub const DEFAULT_TEARING_OBJECT: &str = "TearingEvents";

/// Method that sets the unwrap threshold.
pub const DEFAULT_THRESHOLD_METHOD: &str = "SetUnwrapThreshold";

/// Method that sets the maximum tear count.
pub const DEFAULT_TEAR_COUNT_METHOD: &str = "SetMaxTearCount";

// ==========================================================================
// Tearing Defaults
// ==========================================================================

/// Initial unwrap threshold shown in the panel.
pub const DEFAULT_UNWRAP_THRESHOLD: f64 = 0.8;

/// Lower bound of the threshold input.
pub const MIN_UNWRAP_THRESHOLD: f64 = 0.0;

/// Upper bound of the threshold input.
pub const MAX_UNWRAP_THRESHOLD: f64 = 1.0;

/// Initial maximum tear count shown in the panel.
pub const DEFAULT_MAX_TEAR_COUNT: i64 = 5;

/// Lower bound of the tear count input.
pub const MIN_MAX_TEAR_COUNT: i64 = 1;

/// Upper bound of the tear count input.
pub const MAX_MAX_TEAR_COUNT: i64 = 20;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_DISPLAY_DURATION_MS > 0);
    assert!(DEFAULT_DISPLAY_DURATION_MS >= MIN_DISPLAY_DURATION_MS);
    assert!(DEFAULT_DISPLAY_DURATION_MS <= MAX_DISPLAY_DURATION_MS);

    assert!(DEFAULT_UNWRAP_THRESHOLD >= MIN_UNWRAP_THRESHOLD);
    assert!(DEFAULT_UNWRAP_THRESHOLD <= MAX_UNWRAP_THRESHOLD);

    assert!(MIN_MAX_TEAR_COUNT > 0);
    assert!(DEFAULT_MAX_TEAR_COUNT >= MIN_MAX_TEAR_COUNT);
    assert!(DEFAULT_MAX_TEAR_COUNT <= MAX_MAX_TEAR_COUNT);
};
