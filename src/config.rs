//! Loader configuration.
//!
//! Every field has a default, so a config file only needs to name the values
//! it overrides:
//!
//! ```
//! use rloader::LoaderConfig;
//!
//! let config = LoaderConfig::from_json_str(r#"{ "duration_ms": 1500 }"#).unwrap();
//! assert_eq!(config.duration_ms, 1500);
//! assert_eq!(config.blink_period_frames, 15);
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default length of the simulated load
pub const DEFAULT_DURATION_MS: u64 = 5000;
/// Default sleep between progress updates
pub const DEFAULT_UPDATE_INTERVAL_MS: u64 = 10;
/// Default frames per blink half-period
pub const DEFAULT_BLINK_PERIOD_FRAMES: u32 = 15;
/// Default name of the loading thread
pub const DEFAULT_THREAD_NAME: &str = "rloader-load";

/// Tunables for the coordinator and its default job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Length of the simulated load in milliseconds
    pub duration_ms: u64,
    /// Sleep between two progress updates in milliseconds
    pub update_interval_ms: u64,
    /// Number of frames the "loading" text stays on (and off)
    pub blink_period_frames: u32,
    /// Name given to the spawned loading thread
    pub thread_name: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            blink_period_frames: DEFAULT_BLINK_PERIOD_FRAMES,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl LoaderConfig {
    /// Returns a copy with a different load duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Parses a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid loader config")
    }

    /// Reads and parses a JSON config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Update interval, never shorter than one millisecond.
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms.max(1))
    }

    /// Blink period, never zero.
    pub fn blink_period(&self) -> u32 {
        self.blink_period_frames.max(1)
    }
}
