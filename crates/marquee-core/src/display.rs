//! Text blocks shown in the result pane and printed by the CLI.

use crate::model::MovieRecord;

const MISSING: &str = "N/A";

fn field(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

/// The multi-line info block for one movie.
pub fn movie_info(record: &MovieRecord) -> String {
    format!(
        "\u{1f3ac} Title: {}\n\
         \u{1f4c5} Year: {}\n\
         \u{2b50} Rating: {}\n\
         \u{1f3ad} Genre: {}\n\
         \u{1f3ac} Director: {}\n\
         \u{1f4dd} Plot: {}\n",
        field(record.title.as_deref()),
        field(record.year.as_deref()),
        field(record.imdb_rating.as_deref()),
        field(record.genre.as_deref()),
        field(record.director.as_deref()),
        field(record.plot.as_deref()),
    )
}

fn summary_line(marker: &str, record: &MovieRecord) -> String {
    format!(
        "{} {} ({}) - {}",
        marker,
        field(record.title.as_deref()),
        field(record.year.as_deref()),
        field(record.genre.as_deref()),
    )
}

fn listing(header: &str, marker: &str, records: &[MovieRecord]) -> String {
    let body = records
        .iter()
        .map(|r| summary_line(marker, r))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{header}\n\n{body}")
}

/// The search history, one summary line per record.
pub fn history_listing(records: &[MovieRecord]) -> String {
    listing("\u{1f4dc} Search History:", "\u{1f3ac}", records)
}

/// The favorites list, one summary line per record.
pub fn favorites_listing(records: &[MovieRecord]) -> String {
    listing("\u{2b50} Favorites List:", "\u{2764}\u{fe0f}", records)
}
