//! Configuration management for Mentora
//!
//! This module handles loading, parsing, validating, and managing
//! configuration from files, environment variables, and CLI overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MentoraError, Result};
use crate::responder::DEFAULT_REPLY_DELAY_MS;
use crate::session::{DEFAULT_PREVIEW_LENGTH, DEFAULT_PREVIEW_PLACEHOLDER};

/// Main configuration structure for Mentora
///
/// Holds the session presentation settings and the reply generation
/// settings. Every field defaults, so a missing or partial file works.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Session presentation settings
    #[serde(default)]
    pub session: SessionConfig,

    /// Reply generation settings
    #[serde(default)]
    pub responder: ResponderConfig,
}

/// Session presentation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Characters of the first message kept in an archive preview
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,

    /// Preview used when the first message has no content
    #[serde(default = "default_preview_placeholder")]
    pub preview_placeholder: String,
}

fn default_preview_length() -> usize {
    DEFAULT_PREVIEW_LENGTH
}

fn default_preview_placeholder() -> String {
    DEFAULT_PREVIEW_PLACEHOLDER.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preview_length: default_preview_length(),
            preview_placeholder: default_preview_placeholder(),
        }
    }
}

/// Reply generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Type of responder to use
    #[serde(rename = "type", default = "default_responder_type")]
    pub responder_type: String,

    /// Simulated latency applied before each reply (milliseconds)
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
}

fn default_responder_type() -> String {
    "canned".to_string()
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            responder_type: default_responder_type(),
            reply_delay_ms: default_reply_delay_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            responder: ResponderConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file with environment and CLI overrides
    ///
    /// Falls back to defaults when the file does not exist, then applies
    /// environment variables and CLI overrides, in that order.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    /// * `cli` - Parsed command line arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use mentora::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::load("config/config.yaml", &Default::default())?;
    /// config.validate()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MentoraError::Config(format!("Failed to read config file: {}", e)))?;
        serde_yaml::from_str(&contents)
            .map_err(|e| MentoraError::Config(format!("Failed to parse config: {}", e)).into())
    }

    fn apply_env_vars(&mut self) {
        if let Ok(responder_type) = std::env::var("MENTORA_RESPONDER") {
            self.responder.responder_type = responder_type;
        }

        if let Ok(delay) = std::env::var("MENTORA_REPLY_DELAY_MS") {
            if let Ok(value) = delay.parse() {
                self.responder.reply_delay_ms = value;
            } else {
                tracing::warn!("Invalid MENTORA_REPLY_DELAY_MS: {}", delay);
            }
        }

        if let Ok(length) = std::env::var("MENTORA_PREVIEW_LENGTH") {
            if let Ok(value) = length.parse() {
                self.session.preview_length = value;
            } else {
                tracing::warn!("Invalid MENTORA_PREVIEW_LENGTH: {}", length);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if cli.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        if let crate::cli::Commands::Chat {
            delay_ms: Some(delay),
        } = &cli.command
        {
            self.responder.reply_delay_ms = *delay;
        }
    }

    /// Validate the configuration
    ///
    /// Ensures all configuration values are within acceptable ranges
    /// and that the responder type is recognized.
    ///
    /// # Returns
    ///
    /// Returns Ok if configuration is valid
    ///
    /// # Errors
    ///
    /// Returns error if any validation check fails
    pub fn validate(&self) -> Result<()> {
        if self.responder.responder_type.is_empty() {
            return Err(MentoraError::Config("Responder type cannot be empty".to_string()).into());
        }

        let valid_responders = ["canned"];
        if !valid_responders.contains(&self.responder.responder_type.as_str()) {
            return Err(MentoraError::Config(format!(
                "Invalid responder type: {}. Must be one of: {}",
                self.responder.responder_type,
                valid_responders.join(", ")
            ))
            .into());
        }

        if self.responder.reply_delay_ms > 60_000 {
            return Err(MentoraError::Config(
                "reply_delay_ms must not exceed 60000".to_string(),
            )
            .into());
        }

        if self.session.preview_length == 0 {
            return Err(
                MentoraError::Config("preview_length must be greater than 0".to_string()).into(),
            );
        }

        if self.session.preview_placeholder.is_empty() {
            return Err(MentoraError::Config(
                "preview_placeholder cannot be empty".to_string(),
            )
            .into());
        }

        Ok(())
    }
}
