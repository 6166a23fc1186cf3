use anyhow::Result;
use clap::Parser;
use marquee_api::Config;
use marquee_core::Mood;
use std::path::PathBuf;

mod clipboard;
mod commands;
mod movies;
mod quotes;
mod tui;

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding search_history.json, favorites.json and favorites.txt
    /// (default: the current directory)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Look up movies, keep a history and favorites, get recommendations
    Movie {
        #[command(subcommand)]
        command: MovieCommand,
    },
    /// Get a quote that fits your mood
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Debug, clap::Subcommand)]
enum MovieCommand {
    /// Look up a movie by title and add it to the search history
    Search {
        /// Movie title
        title: String,
    },
    /// Show the search history
    History,
    /// Delete the entire search history
    ClearHistory {
        /// Do not ask for confirmation
        #[arg(long, short)]
        yes: bool,
    },
    /// List the genres found in the search history
    Genres,
    /// Recommend a random movie of a genre from the search history
    Recommend {
        /// Genre, e.g. "comedy"
        genre: String,
    },
    /// Look up a movie by title and add it to the favorites
    Favorite {
        /// Movie title
        title: String,
    },
    /// Show the favorites
    Favorites,
    /// Remove a movie from the favorites by title
    Unfavorite {
        /// Movie title (case-insensitive)
        title: String,
    },
    /// Open the interactive movie app
    ///
    /// Tab moves between the title field, the genre selector and the
    /// buttons. F1-F8 trigger the buttons directly. Esc quits.
    Tui,
}

#[derive(Debug, clap::Subcommand)]
enum QuoteCommand {
    /// Fetch a quote for a mood and print it
    Get {
        /// Mood (Happy, Sad, Angry, Anxious, Motivated, Tired, Lonely, Love)
        #[arg(long, short, default_value_t = Mood::default(), value_parser = parse_mood)]
        mood: Mood,

        /// Also copy the quote to the clipboard
        #[arg(long)]
        copy: bool,

        /// Also append the quote to favorites.txt
        #[arg(long)]
        save: bool,
    },
    /// List the moods and the keyword each one searches for
    Moods,
    /// Open the interactive quote app
    Tui,
}

#[derive(Debug, clap::Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file if it does not exist
    Init,
    /// Print one value, or the whole config file
    Get {
        key: Option<String>,
    },
    /// Set a value in the config file
    Set {
        key: String,
        value: String,
    },
}

fn parse_mood(s: &str) -> Result<Mood, String> {
    s.parse::<Mood>().map_err(|e| e.to_string())
}

fn init_logging(level: &str) -> Result<()> {
    let level = match level.to_ascii_lowercase().as_str() {
        "trace" => twyg::LogLevel::Trace,
        "debug" => twyg::LogLevel::Debug,
        "info" => twyg::LogLevel::Info,
        "error" => twyg::LogLevel::Error,
        _ => twyg::LogLevel::Warn,
    };

    let opts = twyg::OptsBuilder::new()
        .coloured(true)
        .level(level)
        .build()
        .map_err(|e| anyhow::anyhow!("invalid logging options: {e}"))?;
    twyg::setup(opts).map_err(|e| anyhow::anyhow!("failed to set up logging: {e}"))?;

    Ok(())
}

fn is_interactive(command: &Commands) -> bool {
    matches!(
        command,
        Commands::Movie {
            command: MovieCommand::Tui
        } | Commands::Quote {
            command: QuoteCommand::Tui
        }
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_with_data_dir(cli.data_dir)?;

    // Log lines would tear the alternate screen, so the TUIs run silent.
    if !is_interactive(&cli.command) {
        init_logging(&config.log_level)?;
    }

    match cli.command {
        Commands::Movie { command } => match command {
            MovieCommand::Search { title } => commands::movie::search(&config, &title).await?,
            MovieCommand::History => commands::movie::history(&config)?,
            MovieCommand::ClearHistory { yes } => commands::movie::clear_history(&config, yes)?,
            MovieCommand::Genres => commands::movie::genres(&config)?,
            MovieCommand::Recommend { genre } => commands::movie::recommend(&config, &genre)?,
            MovieCommand::Favorite { title } => {
                commands::movie::add_favorite(&config, &title).await?;
            }
            MovieCommand::Favorites => commands::movie::favorites(&config)?,
            MovieCommand::Unfavorite { title } => {
                commands::movie::remove_favorite(&config, &title)?;
            }
            MovieCommand::Tui => tui::movie::run(&config).await?,
        },
        Commands::Quote { command } => match command {
            QuoteCommand::Get { mood, copy, save } => {
                commands::quote::get(&config, mood, copy, save).await?;
            }
            QuoteCommand::Moods => commands::quote::moods(),
            QuoteCommand::Tui => tui::quote::run(&config).await?,
        },
        Commands::Config { command } => match command {
            ConfigCommand::Show => commands::config::show_config(&config),
            ConfigCommand::Path => commands::config::show_path(),
            ConfigCommand::Example => commands::config::show_example(),
            ConfigCommand::Init => commands::config::init_config()?,
            ConfigCommand::Get { key } => commands::config::get_config(&config, key)?,
            ConfigCommand::Set { key, value } => commands::config::set_config(&key, &value)?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote_mood() {
        let cli = Cli::parse_from(["marquee", "quote", "get", "--mood", "anxious", "--save"]);
        let Commands::Quote {
            command: QuoteCommand::Get { mood, copy, save },
        } = cli.command
        else {
            panic!("expected quote get");
        };
        assert_eq!(mood, Mood::Anxious);
        assert!(!copy);
        assert!(save);
    }

    #[test]
    fn test_parse_rejects_unknown_mood() {
        assert!(Cli::try_parse_from(["marquee", "quote", "get", "--mood", "bored"]).is_err());
    }

    #[test]
    fn test_global_data_dir() {
        let cli = Cli::parse_from(["marquee", "movie", "history", "--data-dir", "/tmp/m"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/m")));
        assert!(!is_interactive(&cli.command));
    }

    #[test]
    fn test_tui_commands_are_interactive() {
        let cli = Cli::parse_from(["marquee", "movie", "tui"]);
        assert!(is_interactive(&cli.command));
    }
}
