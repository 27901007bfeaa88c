//! Command normalization
//!
//! Users may type the command with or without the tool prefix:
//! `adbmux "adb shell ls"` and `adbmux "shell ls"` run the same thing.

/// Prefix stripped from commands unless configured otherwise
pub const DEFAULT_KEYWORD: &str = "adb";

/// Strip a leading `keyword` (whole word only) and surrounding whitespace.
///
/// Everything after the keyword is returned untouched.
pub fn normalize_command(command: &str, keyword: &str) -> String {
    let trimmed = command.trim();
    if keyword.is_empty() {
        return trimmed.to_string();
    }

    match trimmed.strip_prefix(keyword) {
        Some("") => String::new(),
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start().to_string(),
        _ => trimmed.to_string(),
    }
}
