//! Mentora - Academic AI assistant CLI library
//!
//! This library provides the core functionality for the Mentora academic
//! assistant, including session state management, responder abstractions,
//! the chat handler, and configuration.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: Chat messages, archived chats, and the session store
//! - `responder`: Reply generation abstraction and the canned responder
//! - `assistant`: Handler tying the session store to a responder
//! - `commands`: CLI command handlers (chat session, reply listing)
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use mentora::{Assistant, CannedResponder, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.yaml", &Default::default())?;
//!     config.validate()?;
//!
//!     let mut assistant = Assistant::new(CannedResponder::default(), &config.session);
//!     let reply = assistant.submit("What is third normal form?").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

pub mod assistant;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod responder;
pub mod session;

// Re-export commonly used types
pub use assistant::Assistant;
pub use config::Config;
pub use error::{MentoraError, Result};
pub use responder::{create_responder, CannedResponder, Responder, CANNED_REPLIES};
pub use session::{ArchivedChat, Message, Role, SessionState};
