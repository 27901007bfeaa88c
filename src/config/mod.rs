//! Configuration module for adbmux
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (ADBMUX_*)
//! 3. User config (~/.config/adbmux/config.toml, or $ADBMUX_CONFIG)
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{load_layered, load_with_warnings, ConfigWarning, LoadedConfig};
pub use types::{AdbConfig, ColorMode, Config, OutputConfig, WatchConfig};
