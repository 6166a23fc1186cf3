//! Error types for the remote sources.

use thiserror::Error;

/// Errors that can occur while talking to a remote source.
#[derive(Debug, Error)]
pub enum ApiError {
    /// An HTTP request to an external source failed.
    #[error("HTTP error from {source_name}: {message}")]
    Http {
        source_name: String,
        message: String,
    },

    /// A response from an external source could not be parsed.
    #[error("parse error from {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// An error propagated from `reqwest`.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Poster bytes could not be decoded as an image.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl ApiError {
    /// Returns `true` when the request never produced a usable response.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Request(_))
    }
}

/// Convenience alias for API results.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_network() {
        let http = ApiError::Http {
            source_name: "OMDb".to_string(),
            message: "connection refused".to_string(),
        };
        let parse = ApiError::Parse {
            source_name: "OMDb".to_string(),
            message: "expected value".to_string(),
        };
        assert!(http.is_network());
        assert!(!parse.is_network());
    }

    #[test]
    fn test_display_names_source() {
        let err = ApiError::Parse {
            source_name: "ZenQuotes".to_string(),
            message: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "parse error from ZenQuotes: bad");
    }
}
