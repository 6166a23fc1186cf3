//! Flat-file persistence.
//!
//! Every store is one file that is read and rewritten whole. There is no
//! locking: if something else edits the file while marquee runs, the last
//! writer wins.

pub mod quote_favorites;
pub mod records;

pub use quote_favorites::QuoteFavorites;
pub use records::{AppendOutcome, RecordStore, StoreContents};

/// File name of the movie search history.
pub const HISTORY_FILE: &str = "search_history.json";

/// File name of the favorite movies.
pub const FAVORITES_FILE: &str = "favorites.json";

/// File name of the saved quotes.
pub const QUOTE_FAVORITES_FILE: &str = "favorites.txt";
