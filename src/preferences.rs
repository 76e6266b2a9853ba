//! User-selectable display and query preferences.
//!
//! Passed explicitly into rendering and export; nothing here is global.

use std::fmt;

use crate::ui::theme::ThemeName;

/// Article font size in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontSize {
    Pt10,
    #[default]
    Pt12,
    Pt14,
    Pt16,
    Pt18,
}

impl FontSize {
    pub const ALL: [FontSize; 5] = [
        FontSize::Pt10,
        FontSize::Pt12,
        FontSize::Pt14,
        FontSize::Pt16,
        FontSize::Pt18,
    ];

    pub fn points(self) -> u16 {
        match self {
            FontSize::Pt10 => 10,
            FontSize::Pt12 => 12,
            FontSize::Pt14 => 14,
            FontSize::Pt16 => 16,
            FontSize::Pt18 => 18,
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.points())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    Arial,
    TimesNewRoman,
    CourierNew,
    Verdana,
    ComicSans,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Arial,
        FontFamily::TimesNewRoman,
        FontFamily::CourierNew,
        FontFamily::Verdana,
        FontFamily::ComicSans,
    ];

    /// Family name as the OS font database and DOCX readers know it.
    pub fn name(self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Verdana => "Verdana",
            FontFamily::ComicSans => "Comic Sans MS",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wikipedia language edition. The code goes into the API host verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
    De,
    Es,
    It,
    Pt,
    Ro,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::En,
        Language::Fr,
        Language::De,
        Language::Es,
        Language::It,
        Language::Pt,
        Language::Ro,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ro => "ro",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Current UI preferences. Lives for the lifetime of the window only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub theme: ThemeName,
    pub language: Language,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.font_size.points(), 12);
        assert_eq!(prefs.font_family.name(), "Arial");
        assert_eq!(prefs.theme, ThemeName::Dark);
        assert_eq!(prefs.language.code(), "en");
    }

    #[test]
    fn test_font_size_catalog() {
        let sizes: Vec<u16> = FontSize::ALL.iter().map(|s| s.points()).collect();
        assert_eq!(sizes, [10, 12, 14, 16, 18]);
        assert_eq!(FontSize::Pt16.to_string(), "16");
    }

    #[test]
    fn test_language_codes_display_verbatim() {
        let codes: Vec<String> = Language::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(codes, ["en", "fr", "de", "es", "it", "pt", "ro"]);
    }
}
