//! Main harvester service that ties all components together.

use reqwest::blocking::Client;

use crate::collect::{collect_items, collect_letter_pages};
use crate::config::{base_url, Settings};
use crate::detail::enrich_item;
use crate::error::Result;
use crate::http::{create_client, fetch_html};
use crate::types::GlossaryItem;

/// Progress events emitted while walking the glossary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress<'a> {
    /// The index was read and this many letter pages will be visited.
    Letters(usize),

    /// A letter page is being expanded.
    Letter { letter: &'a str, index: usize, total: usize },

    /// Details for an item are being fetched.
    Item { name: &'a str, index: usize, total: usize },
}

/// Scrape the complete glossary starting at its index page.
///
/// Index and letter page failures abort the run. Detail pages that can't be
/// loaded leave the item with only its name and URL.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `glossary_url` - URL of the glossary index page
/// * `progress` - Callback receiving [`Progress`] events
///
/// # Returns
/// All items in letter order, then document order within each letter
pub fn fetch_glossary_items(
    client: &Client,
    glossary_url: &str,
    mut progress: impl FnMut(Progress<'_>),
) -> Result<Vec<GlossaryItem>> {
    let base = base_url(glossary_url)?;

    tracing::info!(url = glossary_url, "Checking glossary index");
    let index_doc = fetch_html(client, glossary_url)?;
    let pages = collect_letter_pages(&index_doc, &base);
    progress(Progress::Letters(pages.len()));

    let mut collected: Vec<GlossaryItem> = Vec::new();
    for (index, page) in pages.iter().enumerate() {
        progress(Progress::Letter {
            letter: &page.letter,
            index,
            total: pages.len(),
        });
        let doc = fetch_html(client, &page.url)?;
        let items = collect_items(&doc, &base);
        tracing::debug!(letter = %page.letter, items = items.len(), "Collected letter page");
        collected.extend(items);
    }

    let total = collected.len();
    let items = collected
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            progress(Progress::Item {
                name: &item.name,
                index,
                total,
            });
            enrich_item(client, item)
        })
        .collect();

    Ok(items)
}

/// Scrape the glossary configured in `settings`.
pub fn harvest_glossary(
    settings: &Settings,
    progress: impl FnMut(Progress<'_>),
) -> Result<Vec<GlossaryItem>> {
    base_url(&settings.glossary_url)?;
    let client = create_client()?;
    fetch_glossary_items(&client, &settings.glossary_url, progress)
}
