//! Configuration constants, settings loading and validation functions.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use url::Url;

use crate::error::{GlossarError, Result};

/// Glossary index page scraped when no URL is configured.
pub const DEFAULT_GLOSSARY_URL: &str = "http://kofam.de/de/glossar";

/// Output file template used when no template is configured.
pub const DEFAULT_OUTPUT_TEMPLATE: &str = "./kofam-glossar-[TIMESTAMP].csv";

/// Placeholder in the output template replaced by the current local time.
pub const TIMESTAMP_PLACEHOLDER: &str = "[TIMESTAMP]";

/// `chrono` format for the timestamp placeholder (e.g. `20250101-093000`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Config files looked up in the working directory, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["config.yaml", "config.yml"];

/// Runtime settings, built once at startup and passed down explicitly.
///
/// The YAML keys are `kofam` and `output`:
///
/// ```yaml
/// kofam: http://kofam.de/de/glossar
/// output: ./kofam-glossar-[TIMESTAMP].csv
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Glossary index page URL.
    #[serde(rename = "kofam")]
    pub glossary_url: String,

    /// Output filename template, may contain `[TIMESTAMP]`.
    pub output: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            glossary_url: DEFAULT_GLOSSARY_URL.to_string(),
            output: DEFAULT_OUTPUT_TEMPLATE.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a config file.
    ///
    /// With an explicit `path` the file must exist. Without one, the first of
    /// [`CONFIG_FILE_NAMES`] found in the working directory is used, and the
    /// defaults apply when none exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) if p.is_file() => p.to_path_buf(),
            Some(p) => return Err(GlossarError::ConfigNotFound(p.to_path_buf())),
            None => match CONFIG_FILE_NAMES
                .iter()
                .map(PathBuf::from)
                .find(|p| p.is_file())
            {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| GlossarError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text. Missing keys keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Apply command-line overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, glossary_url: Option<String>, output: Option<String>) -> Self {
        if let Some(url) = glossary_url {
            self.glossary_url = url;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}

/// Validate that the glossary URL is an absolute HTTP(S) URL.
///
/// # Examples
/// ```
/// use kofam_glossar::config::validate_glossary_url;
///
/// assert!(validate_glossary_url("http://kofam.de/de/glossar").is_ok());
/// assert!(validate_glossary_url("kofam.de/de/glossar").is_err());
/// assert!(validate_glossary_url("ftp://kofam.de/glossar").is_err());
/// ```
pub fn validate_glossary_url(glossary_url: &str) -> Result<Url> {
    let invalid = |reason: String| GlossarError::InvalidUrl {
        url: glossary_url.to_string(),
        reason,
    };

    let parsed = Url::parse(glossary_url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(parsed)
}

/// Scheme and host (with any non-default port) of the glossary URL.
///
/// # Examples
/// ```
/// use kofam_glossar::config::base_url;
///
/// assert_eq!(base_url("http://kofam.de/de/glossar").unwrap(), "http://kofam.de");
/// ```
pub fn base_url(glossary_url: &str) -> Result<String> {
    let parsed = validate_glossary_url(glossary_url)?;
    Ok(parsed.origin().ascii_serialization())
}

/// Replace every `[TIMESTAMP]` in the output template with `now`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use kofam_glossar::config::resolve_output_path;
///
/// let now = NaiveDate::from_ymd_opt(2025, 3, 7)
///     .unwrap()
///     .and_hms_opt(9, 5, 0)
///     .unwrap();
/// assert_eq!(
///     resolve_output_path("./kofam-glossar-[TIMESTAMP].csv", now),
///     std::path::PathBuf::from("./kofam-glossar-20250307-090500.csv")
/// );
/// ```
pub fn resolve_output_path(template: &str, now: NaiveDateTime) -> PathBuf {
    let stamp = now.format(TIMESTAMP_FORMAT).to_string();
    PathBuf::from(template.replace(TIMESTAMP_PLACEHOLDER, &stamp))
}

/// Check that the output template's directory exists.
///
/// Directories that contain `[TIMESTAMP]` are only known at write time and
/// are not checked.
pub fn validate_output_dir(template: &str) -> Result<()> {
    let Some(parent) = Path::new(template).parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty()
        || parent.to_string_lossy().contains(TIMESTAMP_PLACEHOLDER)
        || parent.is_dir()
    {
        return Ok(());
    }

    let source = if parent.exists() {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("output directory is not a directory: {}", parent.display()),
        )
    } else {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("output directory does not exist: {}", parent.display()),
        )
    };
    Err(GlossarError::OutputFile {
        path: PathBuf::from(template),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 58)
            .unwrap()
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.glossary_url, "http://kofam.de/de/glossar");
        assert_eq!(settings.output, "./kofam-glossar-[TIMESTAMP].csv");
    }

    #[test]
    fn test_settings_from_yaml_partial() {
        let settings = Settings::from_yaml("output: out/[TIMESTAMP].csv\n").unwrap();
        assert_eq!(settings.glossary_url, DEFAULT_GLOSSARY_URL);
        assert_eq!(settings.output, "out/[TIMESTAMP].csv");
    }

    #[test]
    fn test_settings_from_yaml_full() {
        let yaml = "kofam: https://example.org/glossar\noutput: glossar.csv\n";
        let settings = Settings::from_yaml(yaml).unwrap();
        assert_eq!(settings.glossary_url, "https://example.org/glossar");
        assert_eq!(settings.output, "glossar.csv");
    }

    #[test]
    fn test_settings_from_yaml_empty() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_settings_from_yaml_invalid() {
        let err = Settings::from_yaml("kofam: [unclosed").unwrap_err();
        assert!(matches!(err, GlossarError::ConfigParse(_)));
    }

    #[test]
    fn test_settings_load_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("glossar.yaml");
        fs::write(&path, "kofam: http://localhost:8080/glossar\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.glossary_url, "http://localhost:8080/glossar");
        assert_eq!(settings.output, DEFAULT_OUTPUT_TEMPLATE);
    }

    #[test]
    fn test_settings_load_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(matches!(err, GlossarError::ConfigNotFound(_)));
    }

    #[test]
    fn test_with_overrides() {
        let settings = Settings::default().with_overrides(Some("http://a.test/g".into()), None);
        assert_eq!(settings.glossary_url, "http://a.test/g");
        assert_eq!(settings.output, DEFAULT_OUTPUT_TEMPLATE);

        let settings = Settings::default().with_overrides(None, Some("x.csv".into()));
        assert_eq!(settings.glossary_url, DEFAULT_GLOSSARY_URL);
        assert_eq!(settings.output, "x.csv");
    }

    #[test]
    fn test_validate_glossary_url() {
        assert!(validate_glossary_url("http://kofam.de/de/glossar").is_ok());
        assert!(validate_glossary_url("https://kofam.de").is_ok());
        assert!(validate_glossary_url("").is_err());
        assert!(validate_glossary_url("/de/glossar").is_err());
        assert!(validate_glossary_url("mailto:info@kofam.de").is_err());
    }

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("http://kofam.de/de/glossar").unwrap(), "http://kofam.de");
        assert_eq!(
            base_url("https://kofam.de/de/glossar?x=1#top").unwrap(),
            "https://kofam.de"
        );
        assert_eq!(
            base_url("http://127.0.0.1:8080/glossar").unwrap(),
            "http://127.0.0.1:8080"
        );
        // Default port is not repeated
        assert_eq!(base_url("http://kofam.de:80/glossar").unwrap(), "http://kofam.de");
    }

    #[test]
    fn test_validate_output_dir() {
        let dir = tempdir().unwrap();
        let existing = dir.path().join("glossar-[TIMESTAMP].csv");
        assert!(validate_output_dir(&existing.to_string_lossy()).is_ok());
        assert!(validate_output_dir("glossar.csv").is_ok());
        assert!(validate_output_dir(DEFAULT_OUTPUT_TEMPLATE).is_ok());
    }

    #[test]
    fn test_validate_output_dir_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("tippfehler").join("glossar.csv");
        let err = validate_output_dir(&missing.to_string_lossy()).unwrap_err();
        assert!(matches!(err, GlossarError::OutputFile { .. }));
        assert!(err.to_string().contains("tippfehler"));
    }

    #[test]
    fn test_validate_output_dir_file_as_parent() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("datei");
        fs::write(&file, "x").unwrap();
        let template = file.join("glossar.csv");
        assert!(validate_output_dir(&template.to_string_lossy()).is_err());
    }

    #[test]
    fn test_validate_output_dir_skips_timestamped_dir() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("[TIMESTAMP]").join("glossar.csv");
        assert!(validate_output_dir(&template.to_string_lossy()).is_ok());
    }

    #[test]
    fn test_resolve_output_path() {
        assert_eq!(
            resolve_output_path(DEFAULT_OUTPUT_TEMPLATE, fixed_time()),
            PathBuf::from("./kofam-glossar-20241231-235958.csv")
        );
    }

    #[test]
    fn test_resolve_output_path_without_placeholder() {
        assert_eq!(
            resolve_output_path("glossar.csv", fixed_time()),
            PathBuf::from("glossar.csv")
        );
    }

    #[test]
    fn test_resolve_output_path_multiple_placeholders() {
        assert_eq!(
            resolve_output_path("[TIMESTAMP]/glossar-[TIMESTAMP].csv", fixed_time()),
            PathBuf::from("20241231-235958/glossar-20241231-235958.csv")
        );
    }
}
