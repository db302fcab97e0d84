//! Core data types for the glossary scraper.

/// One letter of the glossary navigation that has entries.
///
/// Only used to drive item collection, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryPage {
    /// Visible letter text (e.g. "A").
    pub letter: String,

    /// Absolute URL of the letter page.
    pub url: String,
}

/// One glossary term.
///
/// Created by the item collector with `name` and `url`; the remaining fields
/// are filled in from the detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossaryItem {
    /// Absolute URL of the detail page. Empty means no detail fetch is attempted.
    pub url: String,

    /// Term title.
    pub name: String,

    /// English translation.
    pub english: String,

    /// Definition, prefixed with the subtitle when there is one.
    pub description: String,

    /// Source citation.
    pub source: String,

    /// All text content of the detail page.
    pub content_full: String,
}

impl GlossaryItem {
    /// Create an item as collected from a letter page.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Whether the item links to a detail page.
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    /// Whether every detail field is still empty.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.english.is_empty()
            && self.description.is_empty()
            && self.source.is_empty()
            && self.content_full.is_empty()
    }

    /// Fill the detail fields from an extracted detail page.
    pub fn apply_details(&mut self, details: ItemDetails) {
        self.description = details.full_description();
        self.english = details.english;
        self.source = details.source;
        self.content_full = details.content_full;
    }

    /// Fields in export column order: title, English, definition, source,
    /// full content, url.
    #[must_use]
    pub fn to_record(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.english.as_str(),
            self.description.as_str(),
            self.source.as_str(),
            self.content_full.as_str(),
            self.url.as_str(),
        ]
    }
}

/// Fields extracted from a term's detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDetails {
    pub subtitle: String,
    pub description: String,
    pub english: String,
    pub source: String,
    pub content_full: String,
}

impl ItemDetails {
    /// Description with the subtitle in front, separated by a space.
    ///
    /// # Examples
    /// ```
    /// use kofam_glossar::types::ItemDetails;
    ///
    /// let details = ItemDetails {
    ///     subtitle: "Abk.".into(),
    ///     description: "Abkürzung für...".into(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(details.full_description(), "Abk. Abkürzung für...");
    /// ```
    #[must_use]
    pub fn full_description(&self) -> String {
        if self.subtitle.is_empty() {
            self.description.clone()
        } else {
            format!("{} {}", self.subtitle, self.description)
        }
    }
}
