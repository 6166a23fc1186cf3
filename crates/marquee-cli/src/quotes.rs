//! Quote generation shared by the CLI and the TUI.

use anyhow::{Context, Result};
use marquee_api::{Config, QuotesClient};
use marquee_core::quote::{self, ClipboardSink, QuoteSession};
use marquee_core::{Mood, QuoteFavorites};

/// Fetches quotes for a mood and remembers the last one generated.
#[derive(Debug, Clone)]
pub struct QuoteController {
    client: QuotesClient,
    favorites: QuoteFavorites,
    session: QuoteSession,
}

impl QuoteController {
    pub fn new(client: QuotesClient, favorites: QuoteFavorites) -> Self {
        Self {
            client,
            favorites,
            session: QuoteSession::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            QuotesClient::from_config(config)?,
            QuoteFavorites::in_dir(&config.data_dir),
        ))
    }

    /// Fetch a batch, pick one for `mood` and make it the current quote.
    pub async fn generate(&mut self, mood: Mood) -> Result<String> {
        let quotes = self.client.fetch_quotes().await?;
        let picked = quote::select(&quotes, mood).context("the quotes API returned no quotes")?;
        log::debug!("Picked quote by {} for mood {}", picked.author, mood);
        Ok(self.session.set_quote(picked).to_string())
    }

    pub fn current(&self) -> Option<&str> {
        self.session.current()
    }

    /// Copy the current quote. Returns `false` if none has been generated.
    pub fn copy(&self, sink: &mut dyn ClipboardSink) -> Result<bool> {
        Ok(self.session.copy_to(sink)?)
    }

    /// Save the current quote. Returns `false` if none has been generated.
    pub fn save(&self) -> Result<bool> {
        Ok(self.session.save_to(&self.favorites)?)
    }

    pub fn favorites_path(&self) -> &std::path::Path {
        self.favorites.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Default)]
    struct MemoryClipboard(Option<String>);

    impl ClipboardSink for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> marquee_core::Result<()> {
            self.0 = Some(text.to_string());
            Ok(())
        }
    }

    fn controller(dir: &TempDir) -> QuoteController {
        QuoteController::new(
            QuotesClient::new("http://127.0.0.1:9/quotes").unwrap(),
            QuoteFavorites::in_dir(dir.path()),
        )
    }

    #[test]
    fn test_copy_and_save_before_generate_are_noops() {
        let dir = TempDir::new().unwrap();
        let controller = controller(&dir);
        let mut clipboard = MemoryClipboard::default();

        assert!(controller.current().is_none());
        assert!(!controller.copy(&mut clipboard).unwrap());
        assert!(!controller.save().unwrap());
        assert!(clipboard.0.is_none());
        assert!(!controller.favorites_path().exists());
    }

    #[tokio::test]
    async fn test_generate_fails_when_api_unreachable() {
        let dir = TempDir::new().unwrap();
        let mut controller = controller(&dir);
        assert!(controller.generate(Mood::Happy).await.is_err());
        assert!(controller.current().is_none());
    }
}
