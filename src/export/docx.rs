//! DOCX export: one paragraph per line, selected font as document default.

use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run, RunFonts};

use super::ExportError;
use crate::preferences::Preferences;

pub(super) fn write(text: &str, prefs: &Preferences, path: &Path) -> Result<(), ExportError> {
    let family = prefs.font_family.name();
    let fonts = RunFonts::new()
        .ascii(family)
        .hi_ansi(family)
        .east_asia(family)
        .cs(family);

    let docx = text.split('\n').fold(Docx::new().default_fonts(fonts), |doc, line| {
        doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)))
    });

    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    docx.build().pack(file).map_err(|e| ExportError::Docx {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(())
}
