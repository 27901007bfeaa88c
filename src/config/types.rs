//! Configuration type definitions

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::policies::DEFAULT_KEYWORD;

/// How to reach adb and how long to wait for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdbConfig {
    /// Program used for both listing and execution
    #[serde(default = "default_adb_path")]
    pub path: String,

    /// Per-command timeout; 0 disables it
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Optional leading word stripped from the requested command
    #[serde(default = "default_keyword")]
    pub keyword: String,
}

impl Default for AdbConfig {
    fn default() -> Self {
        Self {
            path: default_adb_path(),
            timeout_secs: default_timeout_secs(),
            keyword: default_keyword(),
        }
    }
}

impl AdbConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

fn default_adb_path() -> String {
    "adb".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_keyword() -> String {
    DEFAULT_KEYWORD.to_string()
}

/// Continuous mode settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Pause between the end of one tick and the start of the next
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Stop watching after a failed device query
    #[serde(default = "default_true")]
    pub stop_on_error: bool,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            stop_on_error: true,
        }
    }
}

impl WatchConfig {
    /// Never zero; a zero interval would spin the worker thread.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }
}

/// Lower bound applied to `watch.interval_ms`
pub const MIN_INTERVAL_MS: u64 = 50;

fn default_interval_ms() -> u64 {
    1000
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

fn default_true() -> bool {
    true
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub adb: AdbConfig,

    #[serde(default)]
    pub watch: WatchConfig,

    #[serde(default)]
    pub output: OutputConfig,
}
