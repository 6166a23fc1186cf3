use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use marquee_api::Config;
use marquee_core::{display, AppendOutcome};

use crate::movies::{MovieController, CONFIRM_DELETE_HISTORY};

fn controller(config: &Config) -> Result<MovieController> {
    MovieController::from_config(config).context("Failed to create movie API client")
}

/// Look up a title, print it and record it in the history.
pub async fn search(config: &Config, title: &str) -> Result<()> {
    let record = controller(config)?.search(title).await?;

    println!("{}", display::movie_info(&record));
    if let Some(url) = record.poster_url() {
        println!("\u{1f5bc}\u{fe0f} Poster: {}", url);
    }

    Ok(())
}

/// Print the search history.
pub fn history(config: &Config) -> Result<()> {
    let history = controller(config)?.history();
    if history.is_empty() {
        println!("No search history found.");
    } else {
        println!("{}", display::history_listing(&history));
    }
    Ok(())
}

/// Delete the history, asking first unless `yes` is set.
pub fn clear_history(config: &Config, yes: bool) -> Result<()> {
    let controller = controller(config)?;

    if !controller.has_history() {
        println!("There is no history to delete.");
        return Ok(());
    }

    if !yes && !confirm(CONFIRM_DELETE_HISTORY)? {
        println!("Kept the search history.");
        return Ok(());
    }

    controller.delete_history()?;
    println!("\u{2713} Search history deleted successfully.");
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Print the genre index.
pub fn genres(config: &Config) -> Result<()> {
    let genres = controller(config)?.genres();
    if genres.is_empty() {
        println!("No genres yet. Search for a few movies first.");
    } else {
        for genre in genres {
            println!("{}", genre);
        }
    }
    Ok(())
}

/// Print a random history record of `genre`.
pub fn recommend(config: &Config, genre: &str) -> Result<()> {
    let record = controller(config)?.recommend(genre)?;
    println!("{}", display::movie_info(&record));
    Ok(())
}

/// Look a title up and add it to the favorites.
pub async fn add_favorite(config: &Config, title: &str) -> Result<()> {
    let (record, outcome) = controller(config)?.add_favorite(title).await?;
    let name = record.title.as_deref().unwrap_or(title);

    match outcome {
        AppendOutcome::Added => println!("\u{2764}\u{fe0f} {} was added to your favorites.", name),
        AppendOutcome::Duplicate => println!("{} is already in your favorites.", name),
        AppendOutcome::Untitled => println!("Nothing to add for '{}'.", title),
    }
    Ok(())
}

/// Print the favorites.
pub fn favorites(config: &Config) -> Result<()> {
    let favorites = controller(config)?.favorites();
    if favorites.is_empty() {
        println!("No favorite movies yet.");
    } else {
        println!("{}", display::favorites_listing(&favorites));
    }
    Ok(())
}

/// Remove a favorite by title.
pub fn remove_favorite(config: &Config, title: &str) -> Result<()> {
    if controller(config)?.remove_favorite(title)? {
        println!("'{}' was removed from your favorites.", title.trim());
    } else {
        anyhow::bail!("'{}' was not found in your favorites.", title.trim());
    }
    Ok(())
}
