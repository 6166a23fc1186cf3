use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sentinel the movie API uses for a missing poster.
pub const NO_POSTER: &str = "N/A";

/// One movie as returned by the movie API.
///
/// Only the fields marquee reads are typed. Everything else the API sent
/// (actors, ratings, the `Response` flag, ...) is carried in `extra` so a
/// record is written back to disk exactly as it was received.
///
/// Reading is lenient: a known field holding something other than a string
/// (say `"Year": 1995` in a hand-edited store) is left in `extra` untouched
/// instead of failing the whole file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct MovieRecord {
    #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "Year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    /// IMDb identifier, the dedup key of every store.
    #[serde(rename = "imdbID", default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,

    /// Comma-separated genre list, e.g. "Action, Sci-Fi".
    #[serde(rename = "Genre", default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    #[serde(rename = "Director", default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,

    #[serde(rename = "Plot", default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,

    /// Poster URL, or [`NO_POSTER`].
    #[serde(rename = "Poster", default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    #[serde(rename = "imdbRating", default, skip_serializing_if = "Option::is_none")]
    pub imdb_rating: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(s) => Some(s),
        other => {
            fields.insert(key.to_string(), other);
            None
        }
    }
}

impl From<Map<String, Value>> for MovieRecord {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            title: take_string(&mut fields, "Title"),
            year: take_string(&mut fields, "Year"),
            imdb_id: take_string(&mut fields, "imdbID"),
            genre: take_string(&mut fields, "Genre"),
            director: take_string(&mut fields, "Director"),
            plot: take_string(&mut fields, "Plot"),
            poster: take_string(&mut fields, "Poster"),
            imdb_rating: take_string(&mut fields, "imdbRating"),
            extra: fields,
        }
    }
}

impl MovieRecord {
    #[must_use]
    pub fn new(title: impl Into<String>, imdb_id: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            imdb_id: Some(imdb_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    #[must_use]
    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    /// A record without a non-empty title is never persisted.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The title with surrounding whitespace removed, lowercased.
    pub fn title_key(&self) -> String {
        self.title.as_deref().unwrap_or("").trim().to_lowercase()
    }

    /// The poster URL, unless absent or the [`NO_POSTER`] sentinel.
    pub fn poster_url(&self) -> Option<&str> {
        self.poster
            .as_deref()
            .filter(|url| !url.is_empty() && *url != NO_POSTER)
    }

    pub fn genre_field(&self) -> &str {
        self.genre.as_deref().unwrap_or("")
    }
}
