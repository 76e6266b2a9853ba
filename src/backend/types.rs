//! Wire types for the MediaWiki API and the domain values built from them.

use std::collections::BTreeMap;

use image::imageops::FilterType;
use serde::Deserialize;

/// Opening tag the search API wraps around matched terms.
pub const HIGHLIGHT_OPEN: &str = r#"<span class="searchmatch">"#;
/// Closing tag for [`HIGHLIGHT_OPEN`].
pub const HIGHLIGHT_CLOSE: &str = "</span>";

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticleResponse {
    #[serde(default)]
    pub query: Option<ArticleQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArticleQuery {
    /// Keyed by page id, which we never look at.
    #[serde(default)]
    pub pages: BTreeMap<String, Page>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<PageThumbnail>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageThumbnail {
    pub source: String,
}

// ============================================================================
// Domain types
// ============================================================================

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub title: String,
    /// Raw snippet, highlight markup included.
    pub snippet: String,
}

impl From<SearchHit> for SearchResult {
    fn from(hit: SearchHit) -> Self {
        Self {
            title: hit.title,
            snippet: hit.snippet,
        }
    }
}

/// The current result set, stored as parallel title/snippet sequences.
///
/// Only ever built whole from a search response or cleared, so the two
/// sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    titles: Vec<String>,
    snippets: Vec<String>,
}

impl SearchResults {
    pub fn new(results: Vec<SearchResult>) -> Self {
        let (titles, snippets) = results
            .into_iter()
            .map(|result| (result.title, result.snippet))
            .unzip();
        Self { titles, snippets }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    #[cfg(test)]
    pub fn snippets(&self) -> &[String] {
        &self.snippets
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.titles.get(index).map(String::as_str)
    }

    /// Preview text for the entry at `index`, markup stripped.
    pub fn preview(&self, index: usize) -> Option<String> {
        self.snippets.get(index).map(|snippet| {
            let cleaned = clean_snippet(snippet);
            if cleaned.trim().is_empty() {
                String::from("No preview available.")
            } else {
                cleaned
            }
        })
    }

    pub fn clear(&mut self) {
        self.titles.clear();
        self.snippets.clear();
    }
}

/// Strip search highlight markup from a snippet, then decode entities.
///
/// Escaped text such as `&lt;/span&gt;` is part of the article and shows up
/// literally.
pub fn clean_snippet(snippet: &str) -> String {
    snippet
        .replace(HIGHLIGHT_OPEN, "")
        .replace(HIGHLIGHT_CLOSE, "")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Thumbnail normalized for display: fixed size, 8-bit RGB.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    width: u32,
    height: u32,
    rgb: Vec<u8>,
}

impl Thumbnail {
    pub const SIZE: u32 = 200;

    /// Decode raw image bytes and resize them to `SIZE`×`SIZE`.
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let decoded = image::load_from_memory(bytes)?;
        let rgb = decoded
            .resize_exact(Self::SIZE, Self::SIZE, FilterType::Triangle)
            .to_rgb8();

        Ok(Self {
            width: rgb.width(),
            height: rgb.height(),
            rgb: rgb.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixels expanded to opaque RGBA, which is what the renderer takes.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.rgb
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], u8::MAX])
            .collect()
    }
}

/// The article currently on screen. Replaced whole on every fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub title: String,
    pub body_text: String,
    pub thumbnail: Option<Thumbnail>,
}

impl ArticleView {
    /// Body text used when the API returns no extract.
    pub const NOT_FOUND: &'static str = "No article found.";
}
