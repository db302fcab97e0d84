//! Link collection from the glossary index and letter pages.
//!
//! The same `li.glossar_link` elements are used both for the letter
//! navigation and for the individual terms. Letters that have entries carry
//! the extra `buchstaben_navi_has_entry` class; terms do not.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::html::{get_text, selector};
use crate::link::normalize_link;
use crate::types::{GlossaryItem, GlossaryPage};

/// Letter navigation entries that have glossary terms.
pub const LETTER_PAGE_SELECTOR: &str = "li.glossar_link.buchstaben_navi_has_entry";

/// Term links, excluding the letter navigation.
pub const ITEM_SELECTOR: &str = "li.glossar_link:not(.buchstaben_navi_has_entry)";

static LETTER_PAGES: LazyLock<Selector> = LazyLock::new(|| selector(LETTER_PAGE_SELECTOR));
static ITEMS: LazyLock<Selector> = LazyLock::new(|| selector(ITEM_SELECTOR));

/// Matching elements that carry an `onclick` handler, as (text, absolute url).
fn onclick_links<'a>(
    doc: &'a Html,
    selector: &'a Selector,
    base: &'a str,
) -> impl Iterator<Item = (String, String)> + 'a {
    doc.select(selector).filter_map(move |el: ElementRef<'a>| {
        let onclick = el.value().attr("onclick")?;
        Some((get_text(el), normalize_link(base, onclick)))
    })
}

/// Collect the letter pages from the glossary index, in document order.
///
/// Letters without an `onclick` handler are skipped.
pub fn collect_letter_pages(doc: &Html, base: &str) -> Vec<GlossaryPage> {
    onclick_links(doc, &LETTER_PAGES, base)
        .map(|(letter, url)| GlossaryPage { letter, url })
        .collect()
}

/// Collect the term links from one letter page, in document order.
pub fn collect_items(doc: &Html, base: &str) -> Vec<GlossaryItem> {
    onclick_links(doc, &ITEMS, base)
        .map(|(name, url)| GlossaryItem::new(name, url))
        .collect()
}
