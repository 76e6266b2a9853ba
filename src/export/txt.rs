//! Plain-text export

use std::path::Path;

use super::ExportError;

/// Write the text byte-for-byte as UTF-8.
pub(super) fn write(text: &str, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, text.as_bytes()).map_err(|e| ExportError::io(path, e))
}
