//! Document exporters: PDF, plain text and DOCX.
//!
//! All writers take the displayed text as-is plus the current preferences,
//! and write synchronously to a path the user already chose.

mod docx;
mod pdf;
mod txt;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::preferences::Preferences;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Txt,
    Docx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Txt => "txt",
            ExportFormat::Docx => "docx",
        }
    }

    /// `chosen` with this format's extension added when the user typed none.
    pub fn with_default_extension(self, chosen: &Path) -> PathBuf {
        if chosen.extension().is_some() {
            chosen.to_path_buf()
        } else {
            chosen.with_extension(self.extension())
        }
    }

    /// Label for the save dialog's file-type filter.
    pub fn filter_name(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF files",
            ExportFormat::Txt => "Text files",
            ExportFormat::Docx => "Word Document",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Txt => "TXT",
            ExportFormat::Docx => "DOCX",
        })
    }
}

/// Errors while writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF encoding failed for {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("DOCX packaging failed for {path}: {message}")]
    Docx { path: PathBuf, message: String },
}

impl ExportError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Write `text` to `path` in the given format.
pub fn export(
    format: ExportFormat,
    text: &str,
    prefs: &Preferences,
    path: &Path,
) -> Result<(), ExportError> {
    tracing::info!("Exporting {} ({} bytes) to {:?}", format, text.len(), path);

    match format {
        ExportFormat::Pdf => pdf::write(text, prefs, path),
        ExportFormat::Txt => txt::write(text, path),
        ExportFormat::Docx => docx::write(text, prefs, path),
    }
}
