//! Core application state and Iced Application implementation
//!
//! `update` is the only place state changes. Network work runs as a `Task`
//! per action and comes back here as a message, so results are applied one
//! at a time in arrival order.

use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::{column, container, image, text, Space};
use iced::{Element, Length, Subscription, Task, Theme};

use crate::backend::{ApiError, ArticleView, SearchResult, WikiClient};
use crate::controller::{Controller, Panel};
use crate::dialogs;
use crate::export::ExportFormat;
use crate::preferences::{FontFamily, FontSize, Language};
use crate::ui::theme::{ThemeName, Themable};
use crate::ui::{article_view, result_list, search_bar, status_bar};

// ============================================================================
// Application State
// ============================================================================

pub struct WikiDesk {
    controller: Controller,
    client: WikiClient,
    keyword: String,
    /// Thumbnail of the open article, converted once for the renderer.
    thumbnail: Option<image::Handle>,
    busy_position: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    KeywordChanged(String),
    SearchSubmitted,
    SearchFinished(Result<Vec<SearchResult>, Arc<ApiError>>),
    ResultSelected(usize),
    PreviewDismissed,
    LoadSelected,
    ArticleFetched {
        title: String,
        result: Result<ArticleView, Arc<ApiError>>,
    },
    BackToList,
    Export(ExportFormat),
    ExportPathChosen(ExportFormat, Option<PathBuf>),
    ErrorDialogClosed,
    FontSizeSelected(FontSize),
    FontFamilySelected(FontFamily),
    ThemeSelected(ThemeName),
    LanguageSelected(Language),
    BusyTick,
}

impl Default for WikiDesk {
    fn default() -> Self {
        Self::new(WikiClient::default())
    }
}

impl WikiDesk {
    pub fn new(client: WikiClient) -> Self {
        Self {
            controller: Controller::new(),
            client,
            keyword: String::new(),
            thumbnail: None,
            busy_position: 0.0,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeywordChanged(keyword) => {
                self.keyword = keyword;
                Task::none()
            }

            Message::SearchSubmitted => {
                let Some(request) = self.controller.submit_search(&self.keyword) else {
                    return Task::none();
                };
                let client = self.client.clone();
                Task::perform(
                    async move {
                        client
                            .search(&request.keyword, request.language.code())
                            .await
                            .map_err(Arc::new)
                    },
                    Message::SearchFinished,
                )
            }

            Message::SearchFinished(result) => {
                self.controller.search_finished(result);
                Task::none()
            }

            Message::ResultSelected(index) => {
                self.controller.select_result(index);
                Task::none()
            }

            Message::PreviewDismissed => {
                self.controller.dismiss_preview();
                Task::none()
            }

            Message::LoadSelected => {
                let Some(request) = self.controller.load_selected() else {
                    return Task::none();
                };
                let client = self.client.clone();
                Task::perform(
                    async move {
                        let result = client
                            .fetch_article(&request.title, request.language.code())
                            .await
                            .map_err(Arc::new);
                        (request.title, result)
                    },
                    |(title, result)| Message::ArticleFetched { title, result },
                )
            }

            Message::ArticleFetched { title, result } => {
                if let Ok(article) = &result {
                    self.thumbnail = article.thumbnail.as_ref().map(|thumb| {
                        image::Handle::from_rgba(thumb.width(), thumb.height(), thumb.to_rgba())
                    });
                }
                self.controller.article_finished(&title, result);
                Task::none()
            }

            Message::BackToList => {
                self.controller.back_to_list();
                Task::none()
            }

            Message::Export(format) => {
                if !self.controller.begin_export(format) {
                    return Task::none();
                }
                let suggested = self.controller.suggested_file_name(format);
                Task::perform(dialogs::choose_save_path(format, suggested), move |path| {
                    Message::ExportPathChosen(format, path)
                })
            }

            Message::ExportPathChosen(format, None) => {
                tracing::info!("{} export cancelled", format);
                self.controller.export_cancelled();
                Task::none()
            }

            Message::ExportPathChosen(format, Some(path)) => {
                match self.controller.save_export(format, &path) {
                    Some(error) => Task::perform(dialogs::show_error(error), |_| Message::ErrorDialogClosed),
                    None => Task::none(),
                }
            }

            Message::ErrorDialogClosed => Task::none(),

            Message::FontSizeSelected(size) => {
                self.controller.set_font_size(size);
                Task::none()
            }

            Message::FontFamilySelected(family) => {
                self.controller.set_font_family(family);
                Task::none()
            }

            Message::ThemeSelected(theme) => {
                tracing::info!("Theme changed to {}", theme);
                self.controller.set_theme(theme);
                Task::none()
            }

            Message::LanguageSelected(language) => {
                tracing::info!("Language changed to {}", language);
                self.controller.set_language(language);
                Task::none()
            }

            Message::BusyTick => {
                self.busy_position = status_bar::advance(self.busy_position);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let prefs = self.controller.prefs();
        let colors = prefs.theme.colors();

        let panel: Element<'_, Message> = match (self.controller.panel(), self.controller.article()) {
            (Some(Panel::Article), Some(article)) => {
                article_view::view(article, self.thumbnail.as_ref(), prefs)
            }
            (Some(Panel::ResultList), _) => result_list::view(&self.controller),
            _ => container(text("Search Wikipedia to get started.").size(14))
                .center_x(Length::Fill)
                .into(),
        };

        let busy: Element<'_, Message> = if self.controller.is_busy() {
            status_bar::busy_indicator(self.busy_position)
        } else {
            Space::with_height(6).into()
        };

        let content = column![
            search_bar::view(&self.keyword, prefs),
            busy,
            container(panel)
                .padding([0.0, 10.0])
                .width(Length::Fill)
                .height(Length::Fill),
            status_bar::view(self.controller.status(), colors),
        ]
        .spacing(8);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| Themable::Window.style(colors))
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.controller.is_busy() {
            status_bar::busy_tick_subscription().map(|_| Message::BusyTick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Theme {
        self.controller.prefs().theme.iced_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::api::ClientConfig;
    use crate::controller::Phase;

    fn offline_app() -> WikiDesk {
        WikiDesk::new(WikiClient::new(ClientConfig {
            endpoint: String::from("http://127.0.0.1:1/{lang}/w/api.php"),
            ..ClientConfig::default()
        }))
    }

    #[test]
    fn test_empty_keyword_does_not_search() {
        let mut app = offline_app();
        let _ = app.update(Message::KeywordChanged(String::from("   ")));
        let _ = app.update(Message::SearchSubmitted);

        assert_eq!(app.controller.status(), "Please enter a keyword.");
        assert!(!app.controller.is_busy());
        assert_eq!(app.controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_search_results_flow_into_list() {
        let mut app = offline_app();
        let _ = app.update(Message::KeywordChanged(String::from("python")));
        let _ = app.update(Message::SearchSubmitted);
        assert!(app.controller.is_busy());

        let _ = app.update(Message::SearchFinished(Ok(vec![SearchResult {
            title: String::from("Python"),
            snippet: String::from("snake"),
        }])));
        assert_eq!(app.controller.panel(), Some(Panel::ResultList));
        assert!(!app.controller.is_busy());
    }

    #[test]
    fn test_article_without_thumbnail_clears_previous_image() {
        let mut app = offline_app();
        app.thumbnail = Some(image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]));

        let _ = app.update(Message::ArticleFetched {
            title: String::from("Python"),
            result: Ok(ArticleView {
                title: String::from("Python"),
                body_text: String::from("Body"),
                thumbnail: None,
            }),
        });

        assert!(app.thumbnail.is_none());
        assert_eq!(app.controller.status(), "Article 'Python' loaded.");
    }

    #[test]
    fn test_export_with_nothing_displayed_opens_no_dialog() {
        let mut app = offline_app();
        let _ = app.update(Message::Export(ExportFormat::Pdf));
        assert_eq!(app.controller.status(), "Nothing to save.");
    }

    #[test]
    fn test_cancelled_save_dialog() {
        let mut app = offline_app();
        let _ = app.update(Message::ExportPathChosen(ExportFormat::Docx, None));
        assert_eq!(app.controller.status(), "Save cancelled.");
    }

    #[test]
    fn test_preferences_apply_immediately() {
        let mut app = offline_app();
        let _ = app.update(Message::ThemeSelected(ThemeName::Dracula));
        let _ = app.update(Message::FontSizeSelected(FontSize::Pt18));
        let _ = app.update(Message::FontFamilySelected(FontFamily::CourierNew));

        let prefs = app.controller.prefs();
        assert_eq!(prefs.theme, ThemeName::Dracula);
        assert_eq!(prefs.font_size, FontSize::Pt18);
        assert_eq!(prefs.font_family, FontFamily::CourierNew);
    }
}
