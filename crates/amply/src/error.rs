//! Error types for API operations.

use crate::response::Response;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// API client error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Request data failed validation. Nothing was sent.
    #[error("Invalid email data: {0}")]
    Validation(#[from] amply_payload::Error),

    /// HTTP transport error (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// 401 response.
    #[error("Unauthorized")]
    Unauthorized(Response),

    /// 403 response.
    #[error("Forbidden")]
    Forbidden(Response),

    /// 404 response.
    #[error("The resource was not found while making an API request")]
    NotFound(Response),

    /// 422 response.
    #[error("A validation error occurred while making an API request")]
    Unprocessable(Response),

    /// Any other unsuccessful response.
    #[error("An error occurred while making an API request (status {})", .0.status)]
    Api(Response),
}

impl Error {
    /// Returns the API response attached to a status error.
    #[must_use]
    pub const fn response(&self) -> Option<&Response> {
        match self {
            Self::Unauthorized(response)
            | Self::Forbidden(response)
            | Self::NotFound(response)
            | Self::Unprocessable(response)
            | Self::Api(response) => Some(response),
            _ => None,
        }
    }

    /// Returns the HTTP status code for status errors.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.response().map(|response| response.status)
    }

    /// Returns true if the request was rejected before being sent.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
