//! ZenQuotes API client.

use std::time::Duration;

use reqwest::Client;

use marquee_core::Quote;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// Default URL returning a batch of quotes.
pub const QUOTES_API_URL: &str = "https://zenquotes.io/api/quotes/";

const SOURCE_NAME: &str = "ZenQuotes";

/// Quotes API client.
#[derive(Debug, Clone)]
pub struct QuotesClient {
    http: Client,
    url: String,
}

impl QuotesClient {
    /// Create a new quotes client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(url: impl Into<String>) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("marquee/0.1.0 (https://github.com/oxur/marquee)")
            .build()?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(config.quotes_url.clone())
    }

    /// Fetch one batch of quotes.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body is not a JSON
    /// array of quotes.
    pub async fn fetch_quotes(&self) -> ApiResult<Vec<Quote>> {
        log::info!("Fetching quotes from {}", SOURCE_NAME);

        let response = self
            .http
            .get(&self.url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ApiError::Http {
                source_name: SOURCE_NAME.to_string(),
                message: e.to_string(),
            })?;

        let body = response.text().await?;
        parse_quotes(&body)
    }
}

/// Parse a quotes API body.
///
/// # Errors
/// Returns a parse error unless `body` is a JSON array of objects with
/// `q` and `a` string fields.
pub fn parse_quotes(body: &str) -> ApiResult<Vec<Quote>> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse {
        source_name: SOURCE_NAME.to_string(),
        message: e.to_string(),
    })
}
