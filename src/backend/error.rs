//! Error types for Wikipedia API calls.

use thiserror::Error;

/// Failure of a call to the encyclopedia API.
///
/// All variants surface to the user as the same "Network error." status;
/// the detail only goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (DNS, connection refused, TLS, timeout).
    #[error("network error requesting {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// The body was not the JSON shape we expect.
    #[error("malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a thumbnail could not be shown. Never fails the article fetch.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("thumbnail download failed: {0}")]
    Download(#[from] ApiError),

    #[error("thumbnail is not a decodable image: {0}")]
    Decode(#[from] image::ImageError),
}
