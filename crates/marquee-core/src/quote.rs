//! Mood-based quote selection and the current-quote session.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::Result;
use crate::model::{Mood, Quote};
use crate::store::QuoteFavorites;

/// Quotes mentioning `keyword` in their text or author.
pub fn matching<'a>(quotes: &'a [Quote], keyword: &str) -> Vec<&'a Quote> {
    quotes.iter().filter(|q| q.mentions(keyword)).collect()
}

/// Pick a random quote mentioning `keyword`, or any quote if none does.
///
/// Returns `None` only when `quotes` is empty.
pub fn select_with_keyword<'a, R>(quotes: &'a [Quote], keyword: &str, rng: &mut R) -> Option<&'a Quote>
where
    R: Rng + ?Sized,
{
    let matched = matching(quotes, keyword);
    if matched.is_empty() {
        log::debug!("No quote mentions '{}', choosing from all {}", keyword, quotes.len());
        quotes.choose(rng)
    } else {
        matched.choose(rng).copied()
    }
}

/// Pick a random quote for `mood` using `rng`.
pub fn select_with<'a, R>(quotes: &'a [Quote], mood: Mood, rng: &mut R) -> Option<&'a Quote>
where
    R: Rng + ?Sized,
{
    select_with_keyword(quotes, mood.keyword(), rng)
}

/// Pick a random quote for `mood`.
pub fn select(quotes: &[Quote], mood: Mood) -> Option<&Quote> {
    select_with(quotes, mood, &mut rand::thread_rng())
}

/// Somewhere a formatted quote can be copied to.
pub trait ClipboardSink: fmt::Debug {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The most recently generated quote, formatted for display.
#[derive(Debug, Clone, Default)]
pub struct QuoteSession {
    current: Option<String>,
}

impl QuoteSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `quote` as the current one and return its formatted text.
    pub fn set_quote(&mut self, quote: &Quote) -> &str {
        self.current.insert(quote.to_string())
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Copy the current quote. Returns `false` if there is none yet.
    pub fn copy_to(&self, sink: &mut dyn ClipboardSink) -> Result<bool> {
        let Some(text) = self.current.as_deref() else {
            return Ok(false);
        };
        sink.set_text(text)?;
        Ok(true)
    }

    /// Append the current quote to `favorites`. Returns `false` if there is
    /// none yet.
    pub fn save_to(&self, favorites: &QuoteFavorites) -> Result<bool> {
        let Some(text) = self.current.as_deref() else {
            return Ok(false);
        };
        favorites.append(text)?;
        Ok(true)
    }
}
