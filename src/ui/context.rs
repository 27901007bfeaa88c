use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use adbmux::config::{ColorMode, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_no_color: bool, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(cli_no_color, config, caps)
    }

    pub(crate) fn from_caps(
        cli_no_color: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = if cli_no_color {
            false
        } else {
            match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            }
        };

        Self { color, unicode }
    }
}
