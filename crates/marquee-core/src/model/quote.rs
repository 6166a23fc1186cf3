use std::fmt;

use serde::{Deserialize, Serialize};

/// A quote as returned by the quotes API.
///
/// Only the quote text (`q`) and author (`a`) are read; any other fields
/// in the response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "q")]
    pub text: String,

    #[serde(rename = "a")]
    pub author: String,
}

impl Quote {
    #[must_use]
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Case-insensitive substring match against the text or the author.
    pub fn mentions(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.text.to_lowercase().contains(&keyword) || self.author.to_lowercase().contains(&keyword)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" \u{2014} {}", self.text, self.author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let quote = Quote::new("Stay hungry, stay foolish.", "Steve Jobs");
        assert_eq!(
            quote.to_string(),
            "\"Stay hungry, stay foolish.\" \u{2014} Steve Jobs"
        );
    }

    #[test]
    fn test_mentions_is_case_insensitive() {
        let quote = Quote::new("Keep CALM and carry on", "Anon");
        assert!(quote.mentions("calm"));
        assert!(quote.mentions("anon"));
        assert!(!quote.mentions("storm"));
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{"q": "Be yourself.", "a": "Oscar Wilde", "c": "12", "h": "<blockquote/>"}"#;
        let quote: Quote = serde_json::from_str(json).unwrap();
        assert_eq!(quote, Quote::new("Be yourself.", "Oscar Wilde"));
    }
}
