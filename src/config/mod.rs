// SPDX-License-Identifier: MPL-2.0
//! Overlay configuration, read from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Status line timing
//! - `[receiver]` - Object and method names addressed on the host
//! - `[tearing]` - Initial values of the relayed parameters
//!
//! # Path Resolution
//!
//! 1. Explicit directory passed to [`load`] (the `--config-dir` flag)
//! 2. `TEARING_OVERLAY_CONFIG_DIR` environment variable
//! 3. Platform config directory via the `dirs` crate
//!
//! The overlay never writes this file.
//!
//! # Examples
//!
//! ```no_run
//! use tearing_overlay::config;
//!
//! let (config, warning) = config::load(None);
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! assert!(config.notifications.display_duration().as_millis() > 0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::bridge::Destination;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TearingOverlay";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TEARING_OVERLAY_CONFIG_DIR";

/// Status line settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationsConfig {
    #[serde(default = "default_display_duration_ms")]
    pub display_duration_ms: u64,
}

impl NotificationsConfig {
    /// Returns the display duration, clamped to the supported range.
    #[must_use]
    pub fn display_duration(&self) -> Duration {
        Duration::from_millis(
            self.display_duration_ms
                .clamp(MIN_DISPLAY_DURATION_MS, MAX_DISPLAY_DURATION_MS),
        )
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            display_duration_ms: DEFAULT_DISPLAY_DURATION_MS,
        }
    }
}

/// Names addressed on the host side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReceiverConfig {
    pub image_object: String,
    pub image_method: String,
    pub tearing_object: String,
    pub threshold_method: String,
    pub tear_count_method: String,
}

impl ReceiverConfig {
    #[must_use]
    pub fn image_destination(&self) -> Destination {
        Destination::new(&self.image_object, &self.image_method)
    }

    #[must_use]
    pub fn threshold_destination(&self) -> Destination {
        Destination::new(&self.tearing_object, &self.threshold_method)
    }

    #[must_use]
    pub fn tear_count_destination(&self) -> Destination {
        Destination::new(&self.tearing_object, &self.tear_count_method)
    }
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            image_object: DEFAULT_IMAGE_OBJECT.to_string(),
            image_method: DEFAULT_IMAGE_METHOD.to_string(),
            tearing_object: DEFAULT_TEARING_OBJECT.to_string(),
            threshold_method: DEFAULT_THRESHOLD_METHOD.to_string(),
            tear_count_method: DEFAULT_TEAR_COUNT_METHOD.to_string(),
        }
    }
}

/// Initial values for the tearing parameter inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TearingConfig {
    #[serde(default = "default_unwrap_threshold")]
    pub unwrap_threshold: f64,
    #[serde(default = "default_max_tear_count")]
    pub max_tear_count: i64,
}

impl TearingConfig {
    /// Initial threshold, clamped to the input's range.
    #[must_use]
    pub fn initial_threshold(&self) -> f64 {
        if self.unwrap_threshold.is_nan() {
            return DEFAULT_UNWRAP_THRESHOLD;
        }
        self.unwrap_threshold
            .clamp(MIN_UNWRAP_THRESHOLD, MAX_UNWRAP_THRESHOLD)
    }

    /// Initial tear count, clamped to the input's range.
    #[must_use]
    pub fn initial_tear_count(&self) -> i64 {
        self.max_tear_count
            .clamp(MIN_MAX_TEAR_COUNT, MAX_MAX_TEAR_COUNT)
    }
}

impl Default for TearingConfig {
    fn default() -> Self {
        Self {
            unwrap_threshold: DEFAULT_UNWRAP_THRESHOLD,
            max_tear_count: DEFAULT_MAX_TEAR_COUNT,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub receiver: ReceiverConfig,
    #[serde(default)]
    pub tearing: TearingConfig,
}

fn default_display_duration_ms() -> u64 {
    DEFAULT_DISPLAY_DURATION_MS
}

fn default_unwrap_threshold() -> f64 {
    DEFAULT_UNWRAP_THRESHOLD
}

fn default_max_tear_count() -> i64 {
    DEFAULT_MAX_TEAR_COUNT
}

/// Resolves the config file path from an explicit directory, the
/// environment, or the platform default, in that order.
#[must_use]
pub fn config_path(explicit_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit_dir {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Some(dir) = std::env::var_os(ENV_CONFIG_DIR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration, falling back to defaults.
///
/// A missing file silently yields defaults. An unreadable or invalid file
/// also yields defaults, together with a warning describing the problem.
pub fn load(explicit_dir: Option<&Path>) -> (Config, Option<String>) {
    let Some(path) = config_path(explicit_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("Ignoring {}: {}", path.display(), err)),
        ),
    }
}

/// Loads the configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load(Some(temp_dir.path()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[tearing]\nmax_tear_count = 9\n\n[receiver]\nimage_object = \"Canvas\"\n",
        )
        .expect("failed to write config");

        let (config, warning) = load(Some(temp_dir.path()));
        assert!(warning.is_none());
        assert_eq!(config.tearing.max_tear_count, 9);
        assert_eq!(config.tearing.unwrap_threshold, DEFAULT_UNWRAP_THRESHOLD);
        assert_eq!(config.receiver.image_object, "Canvas");
        assert_eq!(config.receiver.image_method, DEFAULT_IMAGE_METHOD);
        assert_eq!(
            config.notifications.display_duration_ms,
            DEFAULT_DISPLAY_DURATION_MS
        );
    }

    #[test]
    fn invalid_toml_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load(Some(temp_dir.path()));
        assert_eq!(config, Config::default());
        assert!(warning.expect("warning expected").contains("settings.toml"));
    }

    #[test]
    fn load_from_path_reports_config_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[notifications]\ndisplay_duration_ms = \"slow\"\n").unwrap();

        assert!(matches!(load_from_path(&path), Err(Error::Config(_))));
    }

    #[test]
    fn display_duration_is_clamped() {
        let fast = NotificationsConfig {
            display_duration_ms: 1,
        };
        assert_eq!(
            fast.display_duration(),
            Duration::from_millis(MIN_DISPLAY_DURATION_MS)
        );
        assert_eq!(
            NotificationsConfig::default().display_duration(),
            Duration::from_millis(1200)
        );
    }

    #[test]
    fn initial_tearing_values_are_clamped() {
        let wild = TearingConfig {
            unwrap_threshold: 3.5,
            max_tear_count: 0,
        };
        assert_eq!(wild.initial_threshold(), MAX_UNWRAP_THRESHOLD);
        assert_eq!(wild.initial_tear_count(), MIN_MAX_TEAR_COUNT);

        let defaults = TearingConfig::default();
        assert_eq!(defaults.initial_threshold(), 0.8);
        assert_eq!(defaults.initial_tear_count(), 5);

        let too_many = TearingConfig {
            max_tear_count: 500,
            ..TearingConfig::default()
        };
        assert_eq!(too_many.initial_tear_count(), MAX_MAX_TEAR_COUNT);
    }

    #[test]
    fn default_destinations_match_host_names() {
        let receiver = ReceiverConfig::default();
        assert_eq!(
            receiver.image_destination(),
            Destination::new("WrappingPaper", "ReceiveImageDataURL")
        );
        assert_eq!(
            receiver.threshold_destination(),
            Destination::new("TearingEvents", "SetUnwrapThreshold")
        );
        assert_eq!(
            receiver.tear_count_destination(),
            Destination::new("TearingEvents", "SetMaxTearCount")
        );
    }
}
