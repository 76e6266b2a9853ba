//! PDF export
//!
//! Single page, single text object. Long lines are hard-wrapped by character
//! count; text that runs past the bottom of the page is not paginated.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};

use super::ExportError;
use crate::preferences::{FontFamily, Preferences};

/// Maximum characters per PDF line before hard wrapping.
pub const PDF_WRAP_COLUMNS: usize = 90;

// US Letter, text origin 40pt from the left and 750pt from the bottom.
const PAGE_WIDTH: Mm = Mm(215.9);
const PAGE_HEIGHT: Mm = Mm(279.4);
const ORIGIN_X_PT: f32 = 40.0;
const ORIGIN_Y_PT: f32 = 750.0;
const LEADING: f32 = 1.2;

fn pt_to_mm(points: f32) -> Mm {
    Mm(points * 25.4 / 72.0)
}

/// Split on newlines, then cut every line into chunks of at most `width`
/// characters. No word-boundary handling.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            out.push(String::new());
            continue;
        }
        out.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }

    out
}

/// Whether the built-in fonts' WinAnsi encoding has a code for `c`.
fn is_win_ansi(c: char) -> bool {
    matches!(c,
        ' '..='~'
        | '\u{a0}'..='\u{ff}'
        | '€' | '‚' | 'ƒ' | '„' | '…' | '†' | '‡' | 'ˆ' | '‰' | 'Š' | '‹' | 'Œ' | 'Ž'
        | '‘' | '’' | '“' | '”' | '•' | '–' | '—' | '˜' | '™' | 'š' | '›' | 'œ' | 'ž' | 'Ÿ')
}

/// Prepare one output line for a base-14 font.
///
/// Tabs become spaces and carriage returns are dropped; any other character
/// outside WinAnsi is an error, since the encoder would silently drop it.
fn encodable_line(line: &str) -> Result<String, char> {
    line.chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\t' { ' ' } else { c })
        .map(|c| if is_win_ansi(c) { Ok(c) } else { Err(c) })
        .collect()
}

/// PDF base-14 font closest to the selected family.
fn builtin_font(family: FontFamily) -> BuiltinFont {
    match family {
        FontFamily::TimesNewRoman => BuiltinFont::TimesRoman,
        FontFamily::CourierNew => BuiltinFont::Courier,
        FontFamily::Arial | FontFamily::Verdana | FontFamily::ComicSans => BuiltinFont::Helvetica,
    }
}

pub(super) fn write(text: &str, prefs: &Preferences, path: &Path) -> Result<(), ExportError> {
    let pdf_error = |e: printpdf::Error| ExportError::Pdf {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let lines = wrap_lines(text, PDF_WRAP_COLUMNS)
        .iter()
        .map(|line| encodable_line(line))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|c| ExportError::Pdf {
            path: path.to_path_buf(),
            message: format!(
                "character '{}' (U+{:04X}) cannot be encoded with the built-in PDF fonts",
                c, c as u32
            ),
        })?;

    let title = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("Article"));

    let (doc, page, layer) = PdfDocument::new(title.as_str(), PAGE_WIDTH, PAGE_HEIGHT, "Article");
    let font = doc
        .add_builtin_font(builtin_font(prefs.font_family))
        .map_err(pdf_error)?;
    let layer = doc.get_page(page).get_layer(layer);

    let size = f32::from(prefs.font_size.points());
    layer.begin_text_section();
    layer.set_font(&font, size);
    layer.set_line_height(size * LEADING);
    layer.set_text_cursor(pt_to_mm(ORIGIN_X_PT), pt_to_mm(ORIGIN_Y_PT));
    for line in lines {
        layer.write_text(line, &font);
        layer.add_line_break();
    }
    layer.end_text_section();

    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer).map_err(pdf_error)?;
    writer.flush().map_err(|e| ExportError::io(path, e))
}
