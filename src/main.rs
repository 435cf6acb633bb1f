//! Mentora - Academic AI assistant CLI
//!
//! Main entry point for the Mentora assistant application.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mentora::cli::{Cli, Commands};
use mentora::commands;
use mentora::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat { delay_ms } => {
            tracing::info!("Starting interactive chat session");
            if let Some(delay) = delay_ms {
                tracing::debug!("Using reply delay override: {}ms", delay);
            }

            // Delegate to the chat command handler
            // Moves `config` into the handler (match arms are exclusive)
            commands::chat::run_chat(config).await?;
            Ok(())
        }
        Commands::Replies { json } => {
            tracing::info!("Listing canned replies");
            commands::replies::list_replies(json)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
///
/// Logs go to stderr so stdout stays clean for piped command output such
/// as `mentora replies --json`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "mentora=debug"
    } else {
        "mentora=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
