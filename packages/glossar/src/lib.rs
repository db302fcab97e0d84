//! KOFAM Glossar - Scrape the KOFAM glossary into a spreadsheet-ready CSV file.
//!
//! The glossary is organized by letter: the index page links to one page per
//! letter, each letter page links to the individual terms, and every term has
//! a detail page with its translation, definition and source.
//!
//! # Example
//!
//! ```
//! use kofam_glossar::link::normalize_link;
//!
//! assert_eq!(
//!     normalize_link("http://example.com", "foo('/glossar/a')"),
//!     "http://example.com/glossar/a"
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Settings, defaults and output file naming
//! - [`types`]: Core data types (GlossaryPage, GlossaryItem, ItemDetails)
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for fetching and parsing pages
//! - [`html`]: HTML utilities
//! - [`link`]: `onclick` link extraction and URL normalization
//! - [`collect`]: Letter page and term link collection
//! - [`detail`]: Term detail page extraction
//! - [`export`]: CSV output
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Main scraping pipeline

pub mod cli;
pub mod collect;
pub mod config;
pub mod detail;
pub mod error;
pub mod export;
pub mod harvester;
pub mod html;
pub mod http;
pub mod link;
pub mod types;

// Re-export main functions
pub use harvester::{fetch_glossary_items, harvest_glossary, Progress};

// Re-export commonly used items
pub use config::Settings;
pub use error::{GlossarError, Result};
pub use export::{save_csv, write_csv};
pub use types::{GlossaryItem, GlossaryPage, ItemDetails};
