//! Property tests for command normalization.

use proptest::prelude::*;

use adbmux::normalize_command;

proptest! {
    /// PROPERTY: normalizing twice only strips a second keyword if one was
    /// actually there ("adb adb devices"); otherwise it is stable.
    #[test]
    fn property_normalize_is_stable_without_repeated_keyword(rest in "[a-z][a-z0-9 ._-]{0,30}") {
        prop_assume!(!rest.starts_with("adb"));
        let once = normalize_command(&format!("adb {rest}"), "adb");
        prop_assert_eq!(&once, rest.trim());
        prop_assert_eq!(normalize_command(&once, "adb"), once.clone());
    }

    /// PROPERTY: output never has surrounding whitespace.
    #[test]
    fn property_normalize_trims(command in "\\PC{0,40}") {
        let normalized = normalize_command(&command, "adb");
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    /// PROPERTY: words that merely start with the keyword are kept.
    #[test]
    fn property_keyword_prefix_words_are_kept(suffix in "[a-z]{1,10}") {
        let command = format!("adb{suffix} shell");
        prop_assert_eq!(normalize_command(&command, "adb"), command);
    }
}
