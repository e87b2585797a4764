//! ANSI escape code handling utilities
//!
//! Some frameworks colorize their own console output (Spring Boot with
//! `spring.output.ansi.enabled=always`, Gradle's rich console). Those escape
//! sequences get in the way of structural matching, so the line driver
//! removes them before handing a line to the beautifier. Tests use the same
//! helpers to compare the visible text of styled output.

use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern for ANSI escape sequences.
///
/// Covers:
/// - CSI sequences: ESC [ ... letter (colors, cursor, etc.)
/// - OSC sequences: ESC ] ... BEL or ST (hyperlinks, titles)
/// - Simple escapes: ESC letter
static ANSI_ESCAPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        \x1b\[[0-9;?]*[A-Za-z]               # CSI sequences
        | \x1b\][^\x07\x1b]*(?:\x07|\x1b\\)  # OSC sequences
        | \x1b[A-Za-z]                       # Simple escapes
        ",
    )
    .expect("ANSI regex pattern is valid")
});

/// Strip all ANSI escape sequences from a string.
///
/// Preserves all visible text, including box-drawing characters such as the
/// `━` and `┫` used by the idle separator.
///
/// # Examples
///
/// ```
/// use logtint_core::strip_ansi_codes;
///
/// let input = "\x1b[31mred text\x1b[0m";
/// assert_eq!(strip_ansi_codes(input), "red text");
///
/// let input = "━━━┫ After 6.0s";
/// assert_eq!(strip_ansi_codes(input), input);
/// ```
pub fn strip_ansi_codes(input: &str) -> String {
    ANSI_ESCAPE_PATTERN.replace_all(input, "").into_owned()
}

/// Check if a string contains ANSI escape sequences.
///
/// # Examples
///
/// ```
/// use logtint_core::contains_ansi_codes;
///
/// assert!(contains_ansi_codes("\x1b[31mred\x1b[0m"));
/// assert!(!contains_ansi_codes("plain text"));
/// ```
pub fn contains_ansi_codes(input: &str) -> bool {
    ANSI_ESCAPE_PATTERN.is_match(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_simple_color_codes() {
        let input = "\x1b[31mred text\x1b[0m";
        assert_eq!(strip_ansi_codes(input), "red text");
    }

    #[test]
    fn test_strip_256_color_codes() {
        let input = "\x1b[38;5;244mcom.example.App\x1b[0m";
        assert_eq!(strip_ansi_codes(input), "com.example.App");
    }

    #[test]
    fn test_strip_rgb_color_codes() {
        let input = "\x1b[38;2;71;207;235mcom.example.\x1b[1mApp\x1b[0m";
        assert_eq!(strip_ansi_codes(input), "com.example.App");
    }

    #[test]
    fn test_strip_background_block() {
        let input = "\x1b[42m\x1b[30m\x1b[1m INFO\x1b[0m";
        assert_eq!(strip_ansi_codes(input), " INFO");
    }

    #[test]
    fn test_strip_osc_hyperlink() {
        let input = "\x1b]8;;https://example.com\x07link\x1b]8;;\x07";
        assert_eq!(strip_ansi_codes(input), "link");
    }

    #[test]
    fn test_spring_boot_colored_output() {
        // spring.output.ansi.enabled=always
        let input = "2024-01-01T10:00:00.000+00:00 \x1b[32m INFO\x1b[0;39m \x1b[35m12345\x1b[0;39m";
        assert_eq!(
            strip_ansi_codes(input),
            "2024-01-01T10:00:00.000+00:00  INFO 12345"
        );
    }

    #[test]
    fn test_preserve_separator_glyphs() {
        let input = "━━━━┫ After 7.5s";
        assert_eq!(strip_ansi_codes(input), input);
    }

    #[test]
    fn test_no_codes() {
        let input = "plain text without codes";
        assert_eq!(strip_ansi_codes(input), input);
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(strip_ansi_codes(""), "");
    }

    #[test]
    fn test_contains_ansi_codes_true() {
        assert!(contains_ansi_codes("\x1b[31mred\x1b[0m"));
        assert!(contains_ansi_codes("\x1b[1mbold"));
    }

    #[test]
    fn test_contains_ansi_codes_false() {
        assert!(!contains_ansi_codes("plain text"));
        assert!(!contains_ansi_codes("\tat com.example.Foo.bar(Foo.java:42)"));
    }
}
