//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{AdbmuxError, AdbmuxResult};

use super::types::{ColorMode, Config};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration after all layers were applied
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the config came from, if one existed
    pub path: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AdbmuxResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AdbmuxError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// User config location: `$ADBMUX_CONFIG`, else under `XDG_CONFIG_HOME`
fn config_path_from(get_env: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(explicit) = get_env("ADBMUX_CONFIG") {
        return Some(PathBuf::from(explicit));
    }
    get_env("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("adbmux").join("config.toml"))
}

/// Defaults, then the user config file (if present), then ADBMUX_* variables.
///
/// A config file that exists but does not parse is an error; a missing
/// file is not.
pub fn load_layered() -> AdbmuxResult<LoadedConfig> {
    load_layered_from(|key| std::env::var(key).ok())
}

pub(crate) fn load_layered_from(
    get_env: impl Fn(&str) -> Option<String>,
) -> AdbmuxResult<LoadedConfig> {
    let mut loaded = LoadedConfig::default();

    if let Some(path) = config_path_from(&get_env) {
        if path.is_file() {
            debug!(path = %path.display(), "loading config");
            let (config, warnings) = load_with_warnings(&path)?;
            loaded.config = config;
            loaded.warnings = warnings;
            loaded.path = Some(path);
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
        }
    }

    loaded.config = apply_env_overrides(loaded.config, &get_env);
    Ok(loaded)
}

/// Apply environment variable overrides (ADBMUX_* prefix)
pub(super) fn apply_env_overrides(
    mut config: Config,
    get_env: &impl Fn(&str) -> Option<String>,
) -> Config {
    // ADBMUX_ADB
    if let Some(path) = get_env("ADBMUX_ADB").filter(|p| !p.trim().is_empty()) {
        config.adb.path = path;
    }

    // ADBMUX_TIMEOUT (seconds)
    if let Some(raw) = get_env("ADBMUX_TIMEOUT") {
        match raw.trim().parse::<u64>() {
            Ok(secs) => config.adb.timeout_secs = secs,
            Err(_) => warn!(value = %raw, "ignoring invalid ADBMUX_TIMEOUT"),
        }
    }

    // ADBMUX_INTERVAL_MS
    if let Some(raw) = get_env("ADBMUX_INTERVAL_MS") {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.watch.interval_ms = ms,
            Err(_) => warn!(value = %raw, "ignoring invalid ADBMUX_INTERVAL_MS"),
        }
    }

    // ADBMUX_COLOR
    if let Some(raw) = get_env("ADBMUX_COLOR") {
        config.output.color = match raw.trim().to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            "auto" => ColorMode::Auto,
            _ => {
                warn!(value = %raw, "ignoring invalid ADBMUX_COLOR");
                config.output.color
            }
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "adb",
        "path",
        "timeout_secs",
        "keyword",
        "watch",
        "interval_ms",
        "stop_on_error",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
