//! End-to-end checks of the movie stores and the genre index built on top
//! of them, using real files in a temporary directory.

use std::fs;

use marquee_core::genre::{recommend, unique_genres};
use marquee_core::quote::select;
use marquee_core::{AppendOutcome, Mood, MovieRecord, Quote, RecordStore};
use tempfile::TempDir;

fn inception() -> MovieRecord {
    serde_json::from_str(
        r#"{
            "Title": "Inception",
            "Year": "2010",
            "Rated": "PG-13",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Plot": "A thief who steals corporate secrets...",
            "Poster": "N/A",
            "Ratings": [{"Source": "Internet Movie Database", "Value": "8.8/10"}],
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Response": "True"
        }"#,
    )
    .unwrap()
}

#[test]
fn test_append_round_trip_by_value() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::history(dir.path());
    let record = inception();

    assert!(store.load().is_empty());
    store.append(record.clone()).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.iter().filter(|r| **r == record).count(), 1);
    assert_eq!(loaded[0].extra["Ratings"][0]["Value"], "8.8/10");
}

#[test]
fn test_append_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::favorites(dir.path());

    assert_eq!(store.append(inception()).unwrap(), AppendOutcome::Added);
    assert_eq!(store.append(inception()).unwrap(), AppendOutcome::Duplicate);
    assert_eq!(store.load().len(), 1);
}

#[test]
fn test_not_json_recovers_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::history(dir.path());
    fs::write(store.path(), "not json").unwrap();
    assert!(store.load().is_empty());
}

#[test]
fn test_genres_and_recommendation_from_stored_history() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::history(dir.path());
    fs::write(
        store.path(),
        r#"[
            {"Title": "Rush Hour", "imdbID": "tt0120812", "Genre": "Action, Comedy"},
            {"Title": "Little Miss Sunshine", "imdbID": "tt0449059", "Genre": "comedy,  Drama"}
        ]"#,
    )
    .unwrap();

    let history = store.load();
    let genres: Vec<_> = unique_genres(&history).into_iter().collect();
    assert_eq!(genres, vec!["action", "comedy", "drama"]);

    let pick = recommend(&history, "comedy").unwrap();
    assert!(history.contains(pick));
    assert!(recommend(&history, "horror").is_none());
}

#[test]
fn test_remove_then_remove_again() {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::favorites(dir.path());
    store.append(inception()).unwrap();

    assert!(store.remove_by_title("  inception").unwrap());
    assert!(!store.remove_by_title("Inception").unwrap());
    assert!(store.load().is_empty());
}

#[test]
fn test_quote_selection_for_anxious() {
    let quotes: Vec<Quote> =
        serde_json::from_str(r#"[{"q":"stay calm","a":"A"},{"q":"go fast","a":"B"}]"#).unwrap();
    for _ in 0..20 {
        assert_eq!(select(&quotes, Mood::Anxious), Some(&quotes[0]));
    }
}
