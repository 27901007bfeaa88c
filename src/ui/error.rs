use adbmux::{AdbmuxError, DetectionError};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("Error: {err}")).render(supports_color)
    );

    for cause in err.chain().skip(1) {
        out.push_str(&format!("  caused by: {cause}\n"));
    }

    if let Some(hint) = err.downcast_ref::<AdbmuxError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {} {}\n",
            ColoredText::info("Hint:").render(supports_color),
            hint
        ));
    }
    out
}

pub fn print_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) {
    eprint!("{}", format_error(err, supports_color, supports_unicode));
}

fn hint_for(err: &AdbmuxError) -> Option<&'static str> {
    match err {
        AdbmuxError::Detection(DetectionError::Spawn { .. }) => {
            Some("Is adb installed? Put it on PATH or pass --adb <PATH> (or set ADBMUX_ADB).")
        }
        AdbmuxError::Detection(DetectionError::Failed { .. }) => {
            Some("Try 'adb kill-server' and run again.")
        }
        AdbmuxError::InvalidConfig { .. } => Some("Fix the config file or remove it to use defaults."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_adb_gets_install_hint() {
        let err = anyhow::Error::new(AdbmuxError::Detection(DetectionError::Spawn {
            program: "adb".to_string(),
            message: "No such file or directory".to_string(),
        }));
        let rendered = format_error(&err, false, false);
        assert!(rendered.starts_with("[FAIL] Error: failed to run 'adb'"));
        assert!(rendered.contains("--adb <PATH>"));
    }

    #[test]
    fn plain_errors_have_no_hint() {
        let err = anyhow::anyhow!("command must not be empty");
        assert_eq!(
            format_error(&err, false, false),
            "[FAIL] Error: command must not be empty\n"
        );
    }

    #[test]
    fn context_chain_is_listed() {
        let err = anyhow::anyhow!("inner").context("outer");
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("Error: outer"));
        assert!(rendered.contains("caused by: inner"));
    }
}
