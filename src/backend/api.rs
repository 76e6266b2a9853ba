//! HTTP client for the MediaWiki action API

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::{ApiError, ThumbnailError};
use super::types::{ArticleResponse, ArticleView, SearchResponse, SearchResult, Thumbnail};

/// Connection settings for [`WikiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint template; `{lang}` is replaced by the language code.
    pub endpoint: String,
    /// Requested thumbnail width in pixels.
    pub thumbnail_size: u32,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("https://{lang}.wikipedia.org/w/api.php"),
            thumbnail_size: 400,
            user_agent: format!(
                "{}/{} (desktop reader)",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

impl ClientConfig {
    pub fn api_url(&self, language: &str) -> String {
        self.endpoint.replace("{lang}", language)
    }
}

/// Client for Wikipedia search, article extracts and thumbnails.
///
/// Cheap to clone; every background task gets its own copy.
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: Client,
    config: ClientConfig,
}

impl Default for WikiClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl WikiClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });
        Self { client, config }
    }

    /// Full-text search. An empty vector means zero hits.
    pub async fn search(&self, keyword: &str, language: &str) -> Result<Vec<SearchResult>, ApiError> {
        let url = self.config.api_url(language);
        let params = [
            ("action", "query"),
            ("list", "search"),
            ("srsearch", keyword),
            ("format", "json"),
        ];

        let response: SearchResponse = self.get_json(&url, &params).await?;
        let results: Vec<SearchResult> = response
            .query
            .map(|query| query.search)
            .unwrap_or_default()
            .into_iter()
            .map(SearchResult::from)
            .collect();

        tracing::info!("Search {:?} ({}) returned {} hits", keyword, language, results.len());
        Ok(results)
    }

    /// Fetch the plain-text extract and, if there is one, the thumbnail.
    ///
    /// Thumbnail problems are logged and leave `thumbnail` empty.
    pub async fn fetch_article(&self, title: &str, language: &str) -> Result<ArticleView, ApiError> {
        let url = self.config.api_url(language);
        let thumb_size = self.config.thumbnail_size.to_string();
        let params = [
            ("action", "query"),
            ("format", "json"),
            ("prop", "extracts|pageimages"),
            ("titles", title),
            ("explaintext", "1"),
            ("redirects", "1"),
            ("pithumbsize", thumb_size.as_str()),
        ];

        let response: ArticleResponse = self.get_json(&url, &params).await?;
        let page = response
            .query
            .and_then(|query| query.pages.into_values().next());

        let Some(page) = page else {
            tracing::warn!("No page entry for {:?}", title);
            return Ok(ArticleView {
                title: title.to_string(),
                body_text: ArticleView::NOT_FOUND.to_string(),
                thumbnail: None,
            });
        };

        let thumbnail = match page.thumbnail {
            Some(thumb) => match self.fetch_thumbnail(&thumb.source).await {
                Ok(image) => Some(image),
                Err(ThumbnailError::Download(e)) => {
                    tracing::warn!("Thumbnail for {:?} not downloaded: {}", title, e);
                    None
                }
                Err(ThumbnailError::Decode(e)) => {
                    tracing::warn!("Thumbnail for {:?} not decodable: {}", title, e);
                    None
                }
            },
            None => None,
        };

        Ok(ArticleView {
            title: page.title.unwrap_or_else(|| title.to_string()),
            body_text: page
                .extract
                .unwrap_or_else(|| ArticleView::NOT_FOUND.to_string()),
            thumbnail,
        })
    }

    /// Download and normalize a thumbnail image.
    pub async fn fetch_thumbnail(&self, url: &str) -> Result<Thumbnail, ThumbnailError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let bytes = response.bytes().await.map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;

        Ok(Thumbnail::decode(&bytes)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        tracing::debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| ApiError::Malformed {
            url: url.to_string(),
            source,
        })
    }
}
