use anyhow::{Context, Result};
use marquee_api::config::{self, Config, KEYS};

/// Show the current effective configuration.
pub fn show_config(config: &Config) {
    println!("Current Configuration");
    println!("=====================\n");

    let path = config::config_file_path();
    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    for key in KEYS {
        println!("  {}: {}", key, config.get(key).unwrap_or_default());
    }

    println!("\nPriority: CLI args > ENV vars (MARQUEE_*) > Config file > Defaults");
}

/// Get a specific config value, or print the whole config file.
pub fn get_config(config: &Config, key: Option<String>) -> Result<()> {
    if let Some(key) = key {
        match config.get(&key) {
            Some(value) => println!("{}", value),
            None => anyhow::bail!(
                "Unknown config key: {}\n\nValid keys: {}",
                key,
                KEYS.join(", ")
            ),
        }
        return Ok(());
    }

    let config_path = config::config_file_path();
    if config_path.exists() {
        let contents =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;
        print!("{}", contents);
    } else {
        println!("Config file does not exist: {}", config_path.display());
        println!("\nRun 'marquee config init' to create it.");
    }

    Ok(())
}

/// Set a config value.
pub fn set_config(key: &str, value: &str) -> Result<()> {
    let config_path = config::config_file_path();
    config::set_value(&config_path, key, value)?;

    println!("\u{2713} Updated {} = {}", key, value);
    println!("  in {}", config_path.display());

    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("\u{2713} Created config file: {}", config_path.display());
        println!("\nEdit this file to configure marquee.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
