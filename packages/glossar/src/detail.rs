//! Term detail page extraction.

use std::sync::LazyLock;

use reqwest::blocking::Client;
use scraper::{Html, Selector};

use crate::error::Result;
use crate::html::{first_text, get_text, next_element_sibling, raw_text, selector};
use crate::http::fetch_html;
use crate::types::{GlossaryItem, ItemDetails};

static SUBTITLE: LazyLock<Selector> = LazyLock::new(|| selector("h5"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| selector("p.no_margin"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h4"));
static SOURCE: LazyLock<Selector> = LazyLock::new(|| selector("p.quellenangabe"));

/// Every element from the third child position on, anywhere in the body.
static CONTENT: LazyLock<Selector> = LazyLock::new(|| selector("body :nth-child(n+3)"));

/// Extract the detail fields from a term page.
pub fn parse_details(doc: &Html) -> ItemDetails {
    let english = doc
        .select(&TITLE)
        .next()
        .and_then(next_element_sibling)
        .map(get_text)
        .unwrap_or_default();

    ItemDetails {
        subtitle: first_text(doc, &SUBTITLE),
        description: first_text(doc, &DESCRIPTION),
        english,
        source: first_text(doc, &SOURCE),
        content_full: full_content(doc),
    }
}

/// Text of all content elements, one per line, trimmed of spaces and newlines.
///
/// Nested matches repeat their text inside the parent's text.
pub fn full_content(doc: &Html) -> String {
    let joined = doc
        .select(&CONTENT)
        .map(raw_text)
        .fold(String::new(), |mut acc, text| {
            acc.push('\n');
            acc.push_str(&text);
            acc
        });

    joined.trim_matches(|c| c == ' ' || c == '\n').to_string()
}

/// Fetch the detail page for an item and fill in its fields.
///
/// Items without a URL are returned unchanged without a request.
pub fn fetch_details(client: &Client, item: &GlossaryItem) -> Result<GlossaryItem> {
    let mut item = item.clone();
    if !item.has_url() {
        return Ok(item);
    }

    let doc = fetch_html(client, &item.url)?;
    item.apply_details(parse_details(&doc));
    Ok(item)
}

/// Fetch details, keeping the collected item as-is when the page can't be loaded.
pub fn enrich_item(client: &Client, item: GlossaryItem) -> GlossaryItem {
    match fetch_details(client, &item) {
        Ok(enriched) => enriched,
        Err(e) => {
            tracing::warn!(name = %item.name, url = %item.url, error = %e, "Keeping item without details");
            item
        }
    }
}
