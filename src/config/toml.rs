//! TOML configuration file parsing
//!
//! ```toml
//! [service]
//! base_url = "http://localhost:8080/rest/"
//! timeout_ms = 10000
//!
//! [output]
//! format = "json"
//! ```

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert::{convert_format, parse_timeout_ms};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if let Some(ref base_url) = cli.base_url {
        config.service.base_url = base_url.clone();
    }

    if let Some(ref timeout) = cli.timeout {
        config.service.timeout_ms = parse_timeout_ms(timeout)
            .context("Invalid timeout")?;
    }

    if let Some(format) = cli.format {
        config.output.format = convert_format(format);
    }

    Ok(config)
}

/// Build the effective configuration: defaults, then `--config`, then flags
pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };

    merge_cli_with_config(cli, config)
}
