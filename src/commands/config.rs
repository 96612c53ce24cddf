//! Configuration commands for managing lectern settings.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;

use crate::config::Config;
use crate::error::{LecternError, Result};

const KEYS: &[&str] = &["api_url", "request_timeout_secs", "debounce_ms", "page_size"];

fn unknown_key(key: &str) -> LecternError {
    LecternError::Config(format!(
        "unknown config key '{}'. Valid keys: {}",
        key,
        KEYS.join(", ")
    ))
}

/// Show current configuration
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".cyan().bold());
    println!("  {}: {}", "api_url".cyan(), config.api_url());
    println!(
        "  {}: {}",
        "request_timeout_secs".cyan(),
        config.request_timeout_secs
    );
    println!("  {}: {}", "debounce_ms".cyan(), config.debounce_ms);
    println!("  {}: {}", "page_size".cyan(), config.page_size);
    println!();
    println!(
        "{} {}",
        "config file:".dimmed(),
        Config::config_path().display()
    );

    Ok(())
}

/// Print a single configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    let value = match key {
        "api_url" => config.api_url(),
        "request_timeout_secs" => config.request_timeout_secs.to_string(),
        "debounce_ms" => config.debounce_ms.to_string(),
        "page_size" => config.page_size.to_string(),
        other => return Err(unknown_key(other)),
    };
    println!("{value}");
    Ok(())
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| LecternError::Config(format!("'{key}' expects a number, got '{value}'")))
}

/// Set a configuration value and persist it
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "api_url" => config.api_url = value.to_string(),
        "request_timeout_secs" => config.request_timeout_secs = parse_number(key, value)?,
        "debounce_ms" => config.debounce_ms = parse_number(key, value)?,
        "page_size" => {
            let n = parse_number(key, value)?;
            if n == 0 {
                return Err(LecternError::Config(
                    "'page_size' must be at least 1".to_string(),
                ));
            }
            config.page_size = n as u32;
        }
        other => return Err(unknown_key(other)),
    }

    config.save()?;
    println!("{} {} = {}", "Set".green(), key.cyan(), value);
    Ok(())
}
