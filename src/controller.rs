//! UI state machine
//!
//! Owns everything the window shows (results, article, status line, busy
//! indicator, visible panel) and the transitions between states. It knows
//! nothing about iced: the app turns the returned requests into background
//! tasks and feeds their outcomes back in.

use std::fmt::Display;
use std::path::Path;

use crate::backend::{ArticleView, SearchResult, SearchResults};
use crate::export::{self, ExportFormat};
use crate::preferences::{FontFamily, FontSize, Language, Preferences};
use crate::ui::theme::ThemeName;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    ListShown,
    FetchingArticle,
    ArticleShown,
}

/// The two mutually exclusive content panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    ResultList,
    Article,
}

/// A search the app should run in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub keyword: String,
    pub language: Language,
}

/// An article fetch the app should run in the background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub title: String,
    pub language: Language,
}

#[derive(Debug)]
pub struct Controller {
    prefs: Preferences,
    results: SearchResults,
    selected: Option<usize>,
    preview: Option<String>,
    article: Option<ArticleView>,
    phase: Phase,
    panel: Option<Panel>,
    status: String,
    in_flight: usize,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            prefs: Preferences::default(),
            results: SearchResults::default(),
            selected: None,
            preview: None,
            article: None,
            phase: Phase::Idle,
            panel: None,
            status: String::from("Ready"),
            in_flight: 0,
        }
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }

    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn article(&self) -> Option<&ArticleView> {
        self.article.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn panel(&self) -> Option<Panel> {
        self.panel
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// True while at least one search or fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Start a search, or reject an empty keyword without touching the
    /// current results.
    pub fn submit_search(&mut self, keyword: &str) -> Option<SearchRequest> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            self.status = String::from("Please enter a keyword.");
            return None;
        }

        tracing::info!("Searching {:?} in {}", keyword, self.prefs.language);
        self.phase = Phase::Searching;
        self.in_flight += 1;
        self.status = String::from("Searching for articles...");

        Some(SearchRequest {
            keyword: keyword.to_string(),
            language: self.prefs.language,
        })
    }

    pub fn search_finished<E: Display>(&mut self, outcome: Result<Vec<SearchResult>, E>) {
        self.finish_request();

        match outcome {
            Ok(hits) if hits.is_empty() => {
                self.results.clear();
                self.selected = None;
                self.preview = None;
                self.phase = Phase::Idle;
                self.panel = None;
                self.status = String::from("No articles found.");
            }
            Ok(hits) => {
                self.results = SearchResults::new(hits);
                self.selected = None;
                self.preview = None;
                self.phase = Phase::ListShown;
                self.panel = Some(Panel::ResultList);
                self.status = format!("Found {} articles.", self.results.len());
            }
            Err(e) => {
                tracing::warn!("Search failed: {}", e);
                self.phase = Phase::Idle;
                self.panel = None;
                self.status = String::from("Network error.");
            }
        }
    }

    // ========================================================================
    // Selection and preview
    // ========================================================================

    /// Select an entry and show its snippet preview.
    pub fn select_result(&mut self, index: usize) {
        if let Some(preview) = self.results.preview(index) {
            self.selected = Some(index);
            self.preview = Some(preview);
        }
    }

    pub fn dismiss_preview(&mut self) {
        self.preview = None;
    }

    // ========================================================================
    // Article
    // ========================================================================

    pub fn load_selected(&mut self) -> Option<FetchRequest> {
        let Some(title) = self.selected.and_then(|i| self.results.title(i)) else {
            self.status = String::from("Select an article from the list.");
            return None;
        };
        let title = title.to_string();

        tracing::info!("Loading article {:?} ({})", title, self.prefs.language);
        self.phase = Phase::FetchingArticle;
        self.in_flight += 1;
        self.preview = None;
        self.status = format!("Loading article '{}'...", title);

        Some(FetchRequest {
            title,
            language: self.prefs.language,
        })
    }

    pub fn article_finished<E: Display>(&mut self, title: &str, outcome: Result<ArticleView, E>) {
        self.finish_request();

        match outcome {
            Ok(article) => {
                self.article = Some(article);
                self.phase = Phase::ArticleShown;
                self.panel = Some(Panel::Article);
                self.status = format!("Article '{}' loaded.", title);
            }
            Err(e) => {
                tracing::warn!("Fetching {:?} failed: {}", title, e);
                self.phase = Phase::ListShown;
                self.panel = Some(Panel::ResultList);
                self.status = String::from("Network error.");
            }
        }
    }

    pub fn back_to_list(&mut self) {
        self.phase = Phase::ListShown;
        self.panel = Some(Panel::ResultList);
    }

    // ========================================================================
    // Preferences
    // ========================================================================

    pub fn set_font_size(&mut self, size: FontSize) {
        self.prefs.font_size = size;
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.prefs.font_family = family;
    }

    pub fn set_theme(&mut self, theme: ThemeName) {
        self.prefs.theme = theme;
    }

    /// Applies to the next search or fetch; the open article stays as is.
    pub fn set_language(&mut self, language: Language) {
        self.prefs.language = language;
    }

    // ========================================================================
    // Export
    // ========================================================================

    /// Text currently shown in the article panel, if any.
    pub fn displayed_text(&self) -> Option<&str> {
        self.article
            .as_ref()
            .map(|article| article.body_text.as_str())
            .filter(|text| !text.trim().is_empty())
    }

    /// Check there is something to export before asking for a path.
    pub fn begin_export(&mut self, format: ExportFormat) -> bool {
        if self.displayed_text().is_none() {
            tracing::info!("{} export skipped: nothing displayed", format);
            self.status = String::from("Nothing to save.");
            return false;
        }
        true
    }

    /// File name offered in the save dialog.
    pub fn suggested_file_name(&self, format: ExportFormat) -> String {
        let stem: String = self
            .article
            .as_ref()
            .map(|article| article.title.as_str())
            .unwrap_or("article")
            .chars()
            .map(|c| if matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') { '_' } else { c })
            .collect();
        format!("{}.{}", stem, format.extension())
    }

    pub fn export_cancelled(&mut self) {
        self.status = String::from("Save cancelled.");
    }

    /// Write the displayed text to `path`.
    ///
    /// On failure the returned text is what the error dialog should show.
    pub fn save_export(&mut self, format: ExportFormat, path: &Path) -> Option<String> {
        let Some(text) = self.displayed_text() else {
            self.status = String::from("Nothing to save.");
            return None;
        };

        let path = format.with_default_extension(path);
        match export::export(format, text, &self.prefs, &path) {
            Ok(()) => {
                self.status = format!("Saved as {}.", format);
                None
            }
            Err(e) => {
                tracing::error!("{} export failed: {}", format, e);
                self.status = format!("Failed to save {}.", format);
                Some(e.to_string())
            }
        }
    }

    fn finish_request(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ApiError;

    fn hit(title: &str, snippet: &str) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            snippet: snippet.to_string(),
        }
    }

    fn article(title: &str, body: &str) -> ArticleView {
        ArticleView {
            title: title.to_string(),
            body_text: body.to_string(),
            thumbnail: None,
        }
    }

    fn network_error() -> ApiError {
        ApiError::HttpStatus {
            url: String::from("https://en.wikipedia.org/w/api.php"),
            status: 502,
        }
    }

    /// Controller with a two-entry list showing.
    fn with_list() -> Controller {
        let mut c = Controller::new();
        c.submit_search("python").unwrap();
        c.search_finished::<ApiError>(Ok(vec![
            hit("Python (programming language)", r#"<span class="searchmatch">Python</span> is"#),
            hit("Monty Python", "comedy"),
        ]));
        c
    }

    /// Controller with an article showing.
    fn with_article(body: &str) -> Controller {
        let mut c = with_list();
        c.select_result(0);
        let req = c.load_selected().unwrap();
        c.article_finished::<ApiError>(&req.title, Ok(article(&req.title, body)));
        c
    }

    #[test]
    fn test_initial_state() {
        let c = Controller::new();
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.panel(), None);
        assert_eq!(c.status(), "Ready");
        assert!(!c.is_busy());
    }

    #[test]
    fn test_blank_keyword_is_rejected_without_request() {
        for keyword in ["", "   ", "\t\n"] {
            let mut c = with_list();
            let before = c.results().clone();

            assert!(c.submit_search(keyword).is_none());
            assert_eq!(c.status(), "Please enter a keyword.");
            assert_eq!(c.results(), &before);
            assert_eq!(c.phase(), Phase::ListShown);
            assert!(!c.is_busy());
        }
    }

    #[test]
    fn test_search_request_carries_trimmed_keyword_and_language() {
        let mut c = Controller::new();
        c.set_language(Language::Ro);
        let req = c.submit_search("  Bucharest ").unwrap();
        assert_eq!(req.keyword, "Bucharest");
        assert_eq!(req.language, Language::Ro);
        assert_eq!(c.phase(), Phase::Searching);
        assert_eq!(c.status(), "Searching for articles...");
        assert!(c.is_busy());
    }

    #[test]
    fn test_search_hits_show_list_in_api_order() {
        let c = with_list();
        assert_eq!(c.phase(), Phase::ListShown);
        assert_eq!(c.panel(), Some(Panel::ResultList));
        assert_eq!(c.results().len(), 2);
        assert_eq!(c.results().snippets().len(), 2);
        assert_eq!(c.results().title(0), Some("Python (programming language)"));
        assert_eq!(c.status(), "Found 2 articles.");
        assert!(!c.is_busy());
    }

    #[test]
    fn test_zero_hits_clears_list_and_hides_panel() {
        let mut c = with_list();
        c.submit_search("qwxzv").unwrap();
        c.search_finished::<ApiError>(Ok(Vec::new()));

        assert!(c.results().is_empty());
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.panel(), None);
        assert_eq!(c.status(), "No articles found.");
        assert!(!c.is_busy());
    }

    #[test]
    fn test_search_failure_reports_network_error() {
        let mut c = with_list();
        c.submit_search("python").unwrap();
        c.search_finished(Err(network_error()));

        assert_eq!(c.status(), "Network error.");
        assert_eq!(c.phase(), Phase::Idle);
        assert!(!c.is_busy());
    }

    #[test]
    fn test_select_shows_clean_preview() {
        let mut c = with_list();
        c.select_result(0);
        assert_eq!(c.selected(), Some(0));
        assert_eq!(c.preview(), Some("Python is"));

        c.dismiss_preview();
        assert_eq!(c.preview(), None);
        assert_eq!(c.selected(), Some(0));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut c = with_list();
        c.select_result(9);
        assert_eq!(c.selected(), None);
        assert_eq!(c.preview(), None);
    }

    #[test]
    fn test_load_without_selection() {
        let mut c = with_list();
        assert!(c.load_selected().is_none());
        assert_eq!(c.status(), "Select an article from the list.");
        assert!(!c.is_busy());
    }

    #[test]
    fn test_article_loaded() {
        let c = with_article("Python is a high-level language.");
        assert_eq!(c.phase(), Phase::ArticleShown);
        assert_eq!(c.panel(), Some(Panel::Article));
        assert_eq!(c.status(), "Article 'Python (programming language)' loaded.");
        assert_eq!(c.displayed_text(), Some("Python is a high-level language."));
        assert!(!c.is_busy());
    }

    #[test]
    fn test_article_failure_returns_to_list() {
        let mut c = with_list();
        c.select_result(1);
        let req = c.load_selected().unwrap();
        assert_eq!(c.phase(), Phase::FetchingArticle);
        assert_eq!(c.status(), "Loading article 'Monty Python'...");

        c.article_finished::<ApiError>(&req.title, Err(network_error()));
        assert_eq!(c.phase(), Phase::ListShown);
        assert_eq!(c.panel(), Some(Panel::ResultList));
        assert_eq!(c.status(), "Network error.");
        assert!(c.article().is_none());
    }

    #[test]
    fn test_back_to_list_keeps_results() {
        let mut c = with_article("body");
        c.back_to_list();
        assert_eq!(c.phase(), Phase::ListShown);
        assert_eq!(c.panel(), Some(Panel::ResultList));
        assert_eq!(c.results().len(), 2);
    }

    #[test]
    fn test_busy_until_every_request_finishes() {
        let mut c = Controller::new();
        c.submit_search("a").unwrap();
        c.submit_search("b").unwrap();
        c.search_finished::<ApiError>(Ok(vec![hit("A", "")]));
        assert!(c.is_busy());
        c.search_finished::<ApiError>(Ok(vec![hit("B", ""), hit("B2", "")]));
        assert!(!c.is_busy());
        assert_eq!(c.results().titles(), ["B", "B2"]);
    }

    #[test]
    fn test_language_change_does_not_touch_open_article() {
        let mut c = with_article("English body");
        c.set_language(Language::De);
        assert_eq!(c.displayed_text(), Some("English body"));
        assert_eq!(c.prefs().language, Language::De);
    }

    #[test]
    fn test_export_with_nothing_displayed() {
        for format in [ExportFormat::Pdf, ExportFormat::Txt, ExportFormat::Docx] {
            let mut c = with_list();
            assert!(!c.begin_export(format));
            assert_eq!(c.status(), "Nothing to save.");
        }

        let mut blank = with_article("  \n ");
        assert!(!blank.begin_export(ExportFormat::Txt));
        assert_eq!(blank.status(), "Nothing to save.");
    }

    #[test]
    fn test_export_cancelled() {
        let mut c = with_article("body");
        assert!(c.begin_export(ExportFormat::Pdf));
        c.export_cancelled();
        assert_eq!(c.status(), "Save cancelled.");
    }

    #[test]
    fn test_txt_export_round_trip() {
        let body = "Python is a language.\n\nIt was created by Guido van Rossum. — ✓";
        let mut c = with_article(body);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(c.suggested_file_name(ExportFormat::Txt));

        assert!(c.begin_export(ExportFormat::Txt));
        assert_eq!(c.save_export(ExportFormat::Txt, &path), None);
        assert_eq!(c.status(), "Saved as TXT.");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), body);
    }

    #[test]
    fn test_export_adds_missing_extension() {
        let mut c = with_article("body");
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(c.save_export(ExportFormat::Txt, &dir.path().join("notes")), None);
        assert_eq!(std::fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "body");
        assert!(!dir.path().join("notes").exists());
    }

    #[test]
    fn test_export_failure_reports_dialog_text() {
        let mut c = with_article("body");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.docx");

        let dialog = c.save_export(ExportFormat::Docx, &path);
        assert!(dialog.is_some_and(|msg| msg.contains("out.docx")));
        assert_eq!(c.status(), "Failed to save DOCX.");
    }

    #[test]
    fn test_suggested_file_name_is_filesystem_safe() {
        let mut c = with_list();
        c.select_result(0);
        let req = c.load_selected().unwrap();
        c.article_finished::<ApiError>(&req.title, Ok(article("AC/DC: Live?", "x")));
        assert_eq!(c.suggested_file_name(ExportFormat::Pdf), "AC_DC_ Live_.pdf");
    }
}
