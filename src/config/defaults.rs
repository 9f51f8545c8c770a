// SPDX-License-Identifier: MPL-2.0
//! Documented fallback values for settings the store has never seen.

/// Theme value used when the store holds nothing; the client ships dark.
pub const THEME: &str = "dark";

/// Display language before the user picks one.
pub const LANGUAGE: &str = "en";

/// `true` when the given theme value means dark mode. Anything other than
/// the explicit light theme falls back to dark.
pub fn theme_is_dark(theme: &str) -> bool {
    theme != "light"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_values_count_as_dark() {
        assert!(theme_is_dark("dark"));
        assert!(theme_is_dark("midnight"));
        assert!(!theme_is_dark("light"));
    }
}
