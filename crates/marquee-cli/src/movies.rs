//! Movie lookup operations shared by the CLI and the TUI.

use marquee_api::{ApiError, Config, Lookup, OmdbClient, Poster};
use marquee_core::genre;
use marquee_core::{AppendOutcome, MovieRecord, RecordStore};
use thiserror::Error;

/// Question asked before the search history is cleared.
pub const CONFIRM_DELETE_HISTORY: &str =
    "Are you sure you want to delete the entire search history?";

/// Why a movie operation did not produce a result.
#[derive(Debug, Error)]
pub enum MovieError {
    /// The user left a required field blank. No request was made.
    #[error("{message}")]
    Input {
        title: &'static str,
        message: &'static str,
    },

    #[error("Failed to fetch data: {0}")]
    Network(ApiError),

    #[error("Movie not found: {0}")]
    NotFound(String),

    #[error("No movies found with genre: {0}")]
    NoMatch(String),

    #[error(transparent)]
    Api(ApiError),

    #[error(transparent)]
    Store(#[from] marquee_core::Error),
}

impl From<ApiError> for MovieError {
    fn from(e: ApiError) -> Self {
        if e.is_network() {
            Self::Network(e)
        } else {
            Self::Api(e)
        }
    }
}

impl MovieError {
    /// Heading for the alert that reports this error.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Input { title, .. } => *title,
            Self::Network(_) => "Network Error",
            Self::NoMatch(_) => "No Match",
            Self::NotFound(_) | Self::Api(_) | Self::Store(_) => "Error",
        }
    }

    /// Whether this is an expected, informational outcome rather than a
    /// failure.
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::NoMatch(_) | Self::Input { title: "No Genre", .. })
    }
}

/// The movie stores plus the client that fills them.
#[derive(Debug, Clone)]
pub struct MovieController {
    history: RecordStore,
    favorites: RecordStore,
    omdb: OmdbClient,
}

impl MovieController {
    pub fn new(history: RecordStore, favorites: RecordStore, omdb: OmdbClient) -> Self {
        Self {
            history,
            favorites,
            omdb,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, MovieError> {
        Ok(Self::new(
            RecordStore::history(&config.data_dir),
            RecordStore::favorites(&config.data_dir),
            OmdbClient::from_config(config)?,
        ))
    }

    /// Look a title up and record a hit in the history.
    pub async fn search(&self, title: &str) -> Result<MovieRecord, MovieError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(MovieError::Input {
                title: "Input Error",
                message: "Please enter a movie title.",
            });
        }

        let record = self.lookup(title).await?;
        let outcome = self.history.append(record.clone())?;
        log::debug!("History append for '{}': {:?}", title, outcome);
        Ok(record)
    }

    async fn lookup(&self, title: &str) -> Result<MovieRecord, MovieError> {
        match self.omdb.fetch(title).await? {
            Lookup::Found(record) => Ok(record),
            Lookup::NotFound(message) => Err(MovieError::NotFound(message)),
        }
    }

    /// The poster of `record`, or `None` if it has none or it cannot be loaded.
    pub async fn poster(&self, record: &MovieRecord) -> Option<Poster> {
        self.omdb.poster_for(record).await
    }

    pub fn history(&self) -> Vec<MovieRecord> {
        self.history.load()
    }

    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }

    /// Genre index of the current history.
    pub fn genres(&self) -> Vec<String> {
        genre::unique_genres(&self.history.load()).into_iter().collect()
    }

    /// A random history record of `genre`.
    pub fn recommend(&self, genre: &str) -> Result<MovieRecord, MovieError> {
        let wanted = genre.trim().to_lowercase();
        if wanted.is_empty() {
            return Err(MovieError::Input {
                title: "No Genre",
                message: "Please select a genre from the dropdown.",
            });
        }

        let history = self.history.load();
        genre::recommend(&history, &wanted)
            .cloned()
            .ok_or(MovieError::NoMatch(wanted))
    }

    /// Empty the history. Returns `false` if there was nothing to delete.
    pub fn delete_history(&self) -> Result<bool, MovieError> {
        if !self.has_history() {
            return Ok(false);
        }
        self.history.clear()?;
        log::info!("Cleared search history at {}", self.history.path().display());
        Ok(true)
    }

    /// Look a title up and add it to the favorites.
    pub async fn add_favorite(
        &self,
        title: &str,
    ) -> Result<(MovieRecord, AppendOutcome), MovieError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(MovieError::Input {
                title: "Input Error",
                message: "Enter a movie title to add to your favorites.",
            });
        }

        let record = self.lookup(title).await?;
        let outcome = self.favorites.append(record.clone())?;
        Ok((record, outcome))
    }

    pub fn favorites(&self) -> Vec<MovieRecord> {
        self.favorites.load()
    }

    /// Remove a favorite by title. Returns `false` if no favorite matched.
    pub fn remove_favorite(&self, title: &str) -> Result<bool, MovieError> {
        if title.trim().is_empty() {
            return Err(MovieError::Input {
                title: "Input Error",
                message: "Enter a movie title to remove.",
            });
        }
        Ok(self.favorites.remove_by_title(title)?)
    }
}
