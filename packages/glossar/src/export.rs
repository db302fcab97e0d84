//! CSV export for spreadsheet import.
//!
//! The file is semicolon-delimited with CRLF line endings and encoded as
//! Windows-1252, which is what a German-locale Excel expects when opening a
//! `.csv` file directly.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use encoding_rs::WINDOWS_1252;

use crate::error::{GlossarError, Result};
use crate::types::GlossaryItem;

/// Column header row, in [`GlossaryItem::to_record`] order.
pub const HEADER: [&str; 6] = [
    "Titel",
    "Englisch",
    "Definition",
    "Quelle",
    "Gesamter Inhalt",
    "Url",
];

/// Field delimiter.
pub const DELIMITER: u8 = b';';

/// Write the header and one row per item.
pub fn write_csv<W: Write>(writer: W, items: &[GlossaryItem]) -> Result<()> {
    let mut csv = WriterBuilder::new()
        .delimiter(DELIMITER)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv.write_record(HEADER)?;
    for item in items {
        let record = item.to_record().map(crlf_line_breaks);
        csv.write_record(record.iter().map(|field| field.as_bytes()))?;
    }
    csv.flush()?;
    Ok(())
}

/// Line breaks inside a field as CRLF, matching the record terminator.
///
/// A lone `\r` is dropped, every `\n` becomes `\r\n`.
///
/// # Examples
/// ```
/// use kofam_glossar::export::crlf_line_breaks;
///
/// assert_eq!(crlf_line_breaks("a\nb\r\nc"), "a\r\nb\r\nc");
/// ```
pub fn crlf_line_breaks(field: &str) -> Cow<'_, str> {
    if field.contains(['\r', '\n']) {
        Cow::Owned(field.replace('\r', "").replace('\n', "\r\n"))
    } else {
        Cow::Borrowed(field)
    }
}

/// Render the CSV as a UTF-8 string.
pub fn render_csv(items: &[GlossaryItem]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_csv(&mut buf, items)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Encode text as Windows-1252.
///
/// Characters the code page can't represent are written as `?`.
///
/// # Examples
/// ```
/// use kofam_glossar::export::encode_windows_1252;
///
/// assert_eq!(encode_windows_1252("Prüfer"), b"Pr\xfcfer");
/// assert_eq!(encode_windows_1252("α"), b"?");
/// ```
pub fn encode_windows_1252(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        if ch.is_ascii() {
            out.push(ch as u8);
            continue;
        }
        let (bytes, _, unmappable) = WINDOWS_1252.encode(ch.encode_utf8(&mut buf));
        if unmappable {
            out.push(b'?');
        } else {
            out.extend_from_slice(&bytes);
        }
    }
    out
}

/// Save the items as a Windows-1252 CSV file at `path`.
///
/// The content is written to a temporary file next to the target first and
/// renamed into place, so a failed run never leaves a truncated file.
///
/// # Returns
/// The path of the written file
pub fn save_csv(items: &[GlossaryItem], path: &Path) -> Result<PathBuf> {
    let output_error = |source| GlossarError::OutputFile {
        path: path.to_path_buf(),
        source,
    };

    let file_name = path.file_name().ok_or_else(|| {
        output_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "output path has no file name",
        ))
    })?;
    let temp_file = path.with_file_name(format!(".{}.tmp", file_name.to_string_lossy()));

    let content = encode_windows_1252(&render_csv(items)?);

    // Write to temp file first, then sync and rename for atomicity
    let written = write_and_rename(&temp_file, path, &content);
    if let Err(source) = written {
        if temp_file.exists() {
            if let Err(e) = fs::remove_file(&temp_file) {
                tracing::warn!(path = %temp_file.display(), error = %e, "Failed to remove temp file");
            }
        }
        return Err(output_error(source));
    }

    tracing::info!(path = %path.display(), rows = items.len(), "Saved glossary CSV");
    Ok(path.to_path_buf())
}

fn write_and_rename(temp_file: &Path, path: &Path, content: &[u8]) -> io::Result<()> {
    {
        let mut file = File::create(temp_file)?;
        file.write_all(content)?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.is_file() {
        fs::remove_file(path)?;
    }

    fs::rename(temp_file, path)
}
