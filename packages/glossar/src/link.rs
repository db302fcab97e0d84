//! Link extraction from `onclick` handlers and URL normalization.
//!
//! Navigation on the glossary pages is done through script calls such as
//! `onclick="foo('/de/glossar/a')"`, so the target has to be pulled out of the
//! call expression and made absolute before it can be fetched.

use std::sync::LazyLock;

use regex::Regex;

/// Call wrapper around a quoted argument: `name('…')` or `name("…")`, optional `;`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CALL_WRAPPER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*[\w.$]*\(\s*(?:'([^']*)'|"([^"]*)")\s*\)\s*;?\s*$"#).expect("valid regex")
});

/// Extract the bare path or URL from an `onclick` handler.
///
/// Input without a recognizable call wrapper is returned trimmed.
///
/// # Examples
/// ```
/// use kofam_glossar::link::extract_link;
///
/// assert_eq!(extract_link("foo('/de/glossar/a')"), "/de/glossar/a");
/// assert_eq!(extract_link("/de/glossar/a"), "/de/glossar/a");
/// ```
pub fn extract_link(onclick: &str) -> &str {
    match CALL_WRAPPER.captures(onclick) {
        Some(caps) => caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str().trim()),
        None => onclick.trim(),
    }
}

/// Make a link absolute against the base origin.
///
/// Links that already contain the base or start with a scheme are returned
/// unchanged. Otherwise exactly one `/` separates base and path.
///
/// # Examples
/// ```
/// use kofam_glossar::link::prefix_with_base;
///
/// assert_eq!(prefix_with_base("http://example.com", "glossar/a"), "http://example.com/glossar/a");
/// assert_eq!(prefix_with_base("http://example.com", "https://other.org/x"), "https://other.org/x");
/// ```
pub fn prefix_with_base(base: &str, link: &str) -> String {
    if link.contains(base) || link.starts_with("http") {
        return link.to_string();
    }

    match (base.ends_with('/'), link.starts_with('/')) {
        (false, false) => format!("{base}/{link}"),
        (true, true) => format!("{base}{}", &link[1..]),
        _ => format!("{base}{link}"),
    }
}

/// Turn an `onclick` handler into an absolute URL.
pub fn normalize_link(base: &str, onclick: &str) -> String {
    prefix_with_base(base, extract_link(onclick))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_link_single_quotes() {
        assert_eq!(extract_link("foo('/de/glossar/a')"), "/de/glossar/a");
        assert_eq!(extract_link("handler('glossar/a')"), "glossar/a");
    }

    #[test]
    fn test_extract_link_double_quotes_and_semicolon() {
        assert_eq!(extract_link(r#"window.open("/de/glossar/b");"#), "/de/glossar/b");
        assert_eq!(extract_link("  foo( '/x' ) ;  "), "/x");
    }

    #[test]
    fn test_extract_link_without_wrapper() {
        assert_eq!(extract_link(" /de/glossar/c "), "/de/glossar/c");
        assert_eq!(extract_link(""), "");
    }

    #[test]
    fn test_prefix_absolute_slash_path() {
        assert_eq!(
            normalize_link("http://example.com", "handler('/glossar/a')"),
            "http://example.com/glossar/a"
        );
    }

    #[test]
    fn test_prefix_base_with_trailing_slash() {
        assert_eq!(
            normalize_link("http://example.com/", "handler('glossar/a')"),
            "http://example.com/glossar/a"
        );
    }

    #[test]
    fn test_prefix_never_doubles_slash() {
        assert_eq!(
            normalize_link("http://example.com/", "handler('/glossar/a')"),
            "http://example.com/glossar/a"
        );
    }

    #[test]
    fn test_prefix_inserts_slash() {
        assert_eq!(
            prefix_with_base("http://example.com", "glossar/a"),
            "http://example.com/glossar/a"
        );
    }

    #[test]
    fn test_prefix_keeps_url_containing_base() {
        assert_eq!(
            prefix_with_base("http://example.com", "http://example.com/glossar/a"),
            "http://example.com/glossar/a"
        );
    }

    #[test]
    fn test_prefix_keeps_scheme_qualified_url() {
        assert_eq!(
            prefix_with_base("http://example.com", "https://cdn.example.org/glossar/a"),
            "https://cdn.example.org/glossar/a"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let base = "http://example.com";
        for onclick in ["foo('/de/glossar/a')", "foo('de/glossar/b')", "/c"] {
            let once = normalize_link(base, onclick);
            assert_eq!(normalize_link(base, &once), once);
        }
    }
}
