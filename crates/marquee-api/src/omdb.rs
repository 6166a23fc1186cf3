//! OMDb movie API client.
//!
//! One GET per lookup, keyed by title. The API answers `200` with a JSON
//! object either way; success is signalled by `"Response": "True"`, failure
//! by `"Response": "False"` and a human-readable `Error` message.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use marquee_core::MovieRecord;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::poster::Poster;

/// Default base URL of the movie API.
pub const OMDB_API_URL: &str = "http://www.omdbapi.com/";

/// Default API key.
pub const OMDB_API_KEY: &str = "e60dd778";

const SOURCE_NAME: &str = "OMDb";

/// Outcome of a title lookup that reached the API.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(MovieRecord),
    /// The API answered but had no such title; carries its `Error` message.
    NotFound(String),
}

/// OMDb API client.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("marquee/0.1.0 (https://github.com/oxur/marquee)")
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(config.omdb_url.clone(), config.omdb_api_key.clone())
    }

    /// Look up a movie by title.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn fetch(&self, title: &str) -> ApiResult<Lookup> {
        log::info!("Looking up '{}' on {}", title, SOURCE_NAME);

        let response = self
            .http
            .get(&self.base_url)
            .query(&[("t", title), ("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let body: Value = response.json().await.map_err(|e| ApiError::Parse {
            source_name: SOURCE_NAME.to_string(),
            message: e.to_string(),
        })?;

        parse_lookup(body)
    }

    /// Download and decode a poster.
    ///
    /// # Errors
    /// Returns an error if the download fails or the bytes are not an image.
    pub async fn fetch_poster(&self, url: &str) -> ApiResult<Poster> {
        let bytes = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ApiError::Http {
                source_name: "poster".to_string(),
                message: e.to_string(),
            })?
            .bytes()
            .await?;

        Poster::decode(&bytes)
    }

    /// The poster of `record`, if it has one that downloads and decodes.
    ///
    /// Failures are logged and reported as no poster.
    pub async fn poster_for(&self, record: &MovieRecord) -> Option<Poster> {
        let url = record.poster_url()?;
        match self.fetch_poster(url).await {
            Ok(poster) => Some(poster),
            Err(e) => {
                log::debug!("No poster for {}: {}", url, e);
                None
            }
        }
    }
}

/// Interpret an OMDb response body.
///
/// # Errors
/// Returns a parse error if a successful response does not fit
/// [`MovieRecord`].
pub fn parse_lookup(body: Value) -> ApiResult<Lookup> {
    let found = body.get("Response").and_then(Value::as_str) == Some("True");
    if !found {
        let message = body
            .get("Error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        return Ok(Lookup::NotFound(message));
    }

    serde_json::from_value(body)
        .map(Lookup::Found)
        .map_err(|e| ApiError::Parse {
            source_name: SOURCE_NAME.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_omdb_client_creation() {
        let client = OmdbClient::new(OMDB_API_URL, "test-key").unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("OmdbClient"));
    }

    #[test]
    fn test_parse_found() {
        let body = json!({
            "Title": "Inception",
            "Year": "2010",
            "imdbID": "tt1375666",
            "Genre": "Action, Adventure, Sci-Fi",
            "Poster": "https://m.media-amazon.com/images/M/inception.jpg",
            "Response": "True"
        });
        let Lookup::Found(record) = parse_lookup(body).unwrap() else {
            panic!("expected a found lookup");
        };
        assert_eq!(record.title.as_deref(), Some("Inception"));
        assert_eq!(record.extra["Response"], "True");
    }

    #[test]
    fn test_parse_not_found_message() {
        let body = json!({"Response": "False", "Error": "Movie not found!"});
        assert_eq!(
            parse_lookup(body).unwrap(),
            Lookup::NotFound("Movie not found!".to_string())
        );
    }

    #[test]
    fn test_parse_invalid_key_is_not_found() {
        let body = json!({"Response": "False", "Error": "Invalid API key!"});
        assert!(matches!(parse_lookup(body).unwrap(), Lookup::NotFound(m) if m == "Invalid API key!"));
    }

    #[test]
    fn test_parse_missing_response_flag() {
        assert_eq!(
            parse_lookup(json!({})).unwrap(),
            Lookup::NotFound("unknown error".to_string())
        );
    }

    #[test]
    fn test_parse_found_with_wrong_shape_is_parse_error() {
        let body = json!({"Response": "True", "Title": 42});
        let err = parse_lookup(body).unwrap_err();
        assert!(matches!(err, ApiError::Parse { .. }));
        assert!(!err.is_network());
    }

    #[tokio::test]
    async fn test_poster_for_record_without_poster() {
        let client = OmdbClient::new(OMDB_API_URL, "test-key").unwrap();
        let record = MovieRecord::new("Alien", "tt0078748").with_poster("N/A");
        assert!(client.poster_for(&record).await.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = OmdbClient::new("http://127.0.0.1:9/", "test-key").unwrap();
        let err = client.fetch("Alien").await.unwrap_err();
        assert!(err.is_network());
    }
}
