//! URL highlighting for free-form message text

use crossterm::style::{ContentStyle, Stylize};
use regex::Regex;
use std::sync::LazyLock;

/// Permissive http(s) URL matcher: scheme, optional `www.`, a host with at
/// least one dot, then an optional port/path/query tail.
pub static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&/=]*)",
    )
    .expect("Invalid URL_REGEX")
});

/// Underline every URL in `text`, leaving everything else untouched.
///
/// Text without URLs is returned unchanged.
pub fn highlight_urls(text: &str) -> String {
    let style = ContentStyle::new().underlined();

    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in URL_REGEX.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        out.push_str(&style.apply(m.as_str()).to_string());
        last = m.end();
    }

    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use logtint_core::strip_ansi_codes;

    const UNDERLINE: &str = "\x1b[4m";

    #[test]
    fn test_no_urls_is_identity() {
        for text in [
            "",
            "starting up",
            "Tomcat initialized with port 8080 (http)",
            "connect to localhost:5432 failed",
            "ftp://example.com is not highlighted",
        ] {
            assert_eq!(highlight_urls(text), text);
        }
    }

    #[test]
    fn test_single_url() {
        let text = "Docs at https://docs.spring.io/spring-boot/index.html for details";
        let out = highlight_urls(text);

        assert_eq!(strip_ansi_codes(&out), text);
        assert!(out.contains(&format!(
            "{}https://docs.spring.io/spring-boot/index.html",
            UNDERLINE
        )));
        assert!(out.starts_with("Docs at "));
        assert!(out.ends_with(" for details"));
    }

    #[test]
    fn test_multiple_urls() {
        let text = "mirror http://www.example.com:8080/repo then https://repo.maven.apache.org/maven2";
        let out = highlight_urls(text);

        assert_eq!(strip_ansi_codes(&out), text);
        assert_eq!(out.matches(UNDERLINE).count(), 2);
    }

    #[test]
    fn test_url_keeps_query_string() {
        let text = "a http://a.io/x?y=1&z=2 b";
        let out = highlight_urls(text);
        assert!(out.contains(&format!("{}http://a.io/x?y=1&z=2", UNDERLINE)));
        assert!(out.ends_with(" b"));
    }

    #[test]
    fn test_url_requires_dotted_host() {
        assert_eq!(highlight_urls("http://localhost/health"), "http://localhost/health");
        assert!(highlight_urls("http://localhost.dev/health").starts_with(UNDERLINE));
    }

    #[test]
    fn test_url_at_text_edges() {
        let text = "https://example.com";
        let out = highlight_urls(text);
        assert!(out.starts_with(UNDERLINE));
        assert_eq!(strip_ansi_codes(&out), text);
    }
}
