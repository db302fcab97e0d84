//! Error types for the glossary scraper.
//!
//! Uses the dual-error pattern: variants carrying the URL or path that failed
//! for the fatal stages, and plain `#[from]` conversions for everything else.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the glossary scraper.
#[derive(Debug, Error)]
pub enum GlossarError {
    /// The configured glossary URL is not an absolute HTTP(S) URL.
    #[error("Invalid glossary URL: '{url}'. Expected an absolute http(s) URL: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// HTTP client construction or request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to fetch a glossary page.
    #[error("Failed to fetch {url}: {source}")]
    PageFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file exists but could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for the settings schema.
    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] serde_yaml_ng::Error),

    /// The output file could not be created or written.
    #[error("Could not create the output file {}: {source}", .path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization error.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for glossary operations.
pub type Result<T> = std::result::Result<T, GlossarError>;
