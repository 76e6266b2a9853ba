//! Wikipedia API access

pub mod api;
pub mod error;
pub mod types;

pub use api::WikiClient;
pub use error::ApiError;
pub use types::{ArticleView, SearchResult, SearchResults};
