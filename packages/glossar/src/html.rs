//! HTML utility functions on top of `scraper`.

use scraper::{ElementRef, Html, Selector};

/// Compile a static selector.
///
/// Only used for the literal selectors of this crate, which are known to parse.
#[allow(clippy::expect_used)]
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

/// Concatenated text of all descendant text nodes, untrimmed.
pub fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Visible text of an element with surrounding whitespace removed.
pub fn get_text(element: ElementRef<'_>) -> String {
    raw_text(element).trim().to_string()
}

/// Trimmed text of the first element matching `selector`, or empty.
pub fn first_text(doc: &Html, selector: &Selector) -> String {
    doc.select(selector).next().map(get_text).unwrap_or_default()
}

/// The next sibling that is an element, skipping text and comment nodes.
pub fn next_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_text_nested() {
        let doc = Html::parse_fragment("<p> Hello <em>world</em>! </p>");
        let p = doc.select(&selector("p")).next().unwrap();
        assert_eq!(raw_text(p), " Hello world! ");
        assert_eq!(get_text(p), "Hello world!");
    }

    #[test]
    fn test_first_text_missing() {
        let doc = Html::parse_document("<html><body><p>x</p></body></html>");
        assert_eq!(first_text(&doc, &selector("h5")), "");
    }

    #[test]
    fn test_next_element_sibling_skips_text() {
        let doc = Html::parse_document("<body><h4>Titel</h4>\n  <p>Title</p></body>");
        let h4 = doc.select(&selector("h4")).next().unwrap();
        let next = next_element_sibling(h4).unwrap();
        assert_eq!(next.value().name(), "p");
        assert_eq!(get_text(next), "Title");
    }

    #[test]
    fn test_next_element_sibling_none() {
        let doc = Html::parse_document("<body><div><h4>Titel</h4></div></body>");
        let h4 = doc.select(&selector("h4")).next().unwrap();
        assert!(next_element_sibling(h4).is_none());
    }
}
