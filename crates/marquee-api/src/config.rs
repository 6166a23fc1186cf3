use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;

use crate::omdb::{OMDB_API_KEY, OMDB_API_URL};
use crate::quotes::QUOTES_API_URL;

/// Keys accepted by `config get` and `config set`.
pub const KEYS: [&str; 5] = ["omdb_api_key", "omdb_url", "quotes_url", "data_dir", "log_level"];

/// Configuration for marquee.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (MARQUEE_* prefix)
/// 3. Config file (~/.config/marquee/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OMDb API key.
    ///
    /// Can be set via:
    /// - ENV: MARQUEE_OMDB_API_KEY
    /// - Config: omdb_api_key = "..."
    #[serde(default = "default_omdb_api_key")]
    pub omdb_api_key: String,

    /// Base URL of the movie API.
    #[serde(default = "default_omdb_url")]
    pub omdb_url: String,

    /// URL returning a JSON array of quotes.
    #[serde(default = "default_quotes_url")]
    pub quotes_url: String,

    /// Directory holding the history, favorites and saved quotes.
    ///
    /// Can be set via:
    /// - CLI: --data-dir /path
    /// - ENV: MARQUEE_DATA_DIR
    /// - Config: data_dir = "/path"
    /// - Default: the current working directory
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level: error, warn, info, debug or trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omdb_api_key: default_omdb_api_key(),
            omdb_url: default_omdb_url(),
            quotes_url: default_quotes_url(),
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific file plus the environment.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("marquee");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, letting `--data-dir` override the data directory.
    pub fn load_with_data_dir(data_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load()?;
        if let Some(dir) = data_dir {
            config.data_dir = dir;
        }
        Ok(config)
    }

    /// The value of one of [`KEYS`] as text.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "omdb_api_key" => Some(self.omdb_api_key.clone()),
            "omdb_url" => Some(self.omdb_url.clone()),
            "quotes_url" => Some(self.quotes_url.clone()),
            "data_dir" => Some(self.data_dir.display().to_string()),
            "log_level" => Some(self.log_level.clone()),
            _ => None,
        }
    }
}

fn default_omdb_api_key() -> String {
    OMDB_API_KEY.to_string()
}

fn default_omdb_url() -> String {
    OMDB_API_URL.to_string()
}

fn default_quotes_url() -> String {
    QUOTES_API_URL.to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/marquee/config.toml
/// - macOS: ~/Library/Application Support/marquee/config.toml
/// - Windows: %APPDATA%\marquee\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marquee")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Marquee Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (MARQUEE_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# OMDb API key
#
# Request your own key at: https://www.omdbapi.com/apikey.aspx
#
# Can also be set via:
# - Environment: MARQUEE_OMDB_API_KEY=your-key-here
#omdb_api_key = "your-omdb-api-key-here"

# Where search_history.json, favorites.json and favorites.txt live
#
# Can also be set via:
# - CLI: marquee --data-dir /custom/dir movie history
# - Environment: MARQUEE_DATA_DIR=/custom/dir
#
# Default: the current working directory
#data_dir = "."

# Log level: error, warn, info, debug or trace
log_level = "warn"
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

fn ensure_config_file_at(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

/// Set `key = "value"` in the config file at `config_path`, creating the
/// file from the example if needed. Comments and other keys are kept.
pub fn set_value(config_path: &Path, key: &str, value: &str) -> Result<()> {
    if !KEYS.contains(&key) {
        anyhow::bail!(
            "Unknown config key: {}\n\nValid keys: {}",
            key,
            KEYS.join(", ")
        );
    }

    ensure_config_file_at(config_path)?;

    let contents = std::fs::read_to_string(config_path).context("Failed to read config file")?;
    let mut doc = contents
        .parse::<DocumentMut>()
        .context("Failed to parse config file")?;
    doc[key] = toml_edit::value(value);

    std::fs::write(config_path, doc.to_string()).context("Failed to write config file")?;

    Ok(())
}
