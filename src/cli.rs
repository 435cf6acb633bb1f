//! Command-line interface definition for Mentora
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat and reply inspection.

use clap::{Parser, Subcommand};

/// Mentora - Academic AI assistant CLI
///
/// Chat about research and project topics with an assistant that keeps
/// per-session chat history in memory.
#[derive(Parser, Debug, Clone)]
#[command(name = "mentora")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/config.yaml")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Mentora
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Override the reply delay from config (milliseconds)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// List the canned replies the assistant draws from
    Replies {
        /// Output as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: Some("config/config.yaml".to_string()),
            verbose: false,
            command: Commands::Chat { delay_ms: None },
        }
    }
}
