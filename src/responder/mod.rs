//! Reply generation for the assistant
//!
//! The responder is the seam between the session model and whatever
//! produces assistant replies. The shipping implementation returns canned
//! academic advice after a simulated delay; a real backend slots in by
//! implementing [`Responder`] and registering with [`create_responder`].

pub mod canned;

pub use canned::{CannedResponder, CANNED_REPLIES, DEFAULT_REPLY_DELAY_MS};

use async_trait::async_trait;

use crate::config::ResponderConfig;
use crate::error::{MentoraError, Result};

/// Capability that turns the last user message into an assistant reply
///
/// Implementations may suspend (network calls, artificial latency) but are
/// expected to produce a non-empty reply or fail with a responder error.
/// The session store never sees this trait; the handler composes the two.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Produces a reply to the given user content
    async fn reply(&self, user_content: &str) -> Result<String>;

    /// Short name identifying the implementation
    fn name(&self) -> &str;
}

/// Create a responder instance based on configuration
///
/// # Arguments
///
/// * `responder_type` - Type of responder ("canned")
/// * `config` - Responder configuration
///
/// # Returns
///
/// Returns a boxed responder instance
///
/// # Errors
///
/// Returns an error if the responder type is not recognized
pub fn create_responder(
    responder_type: &str,
    config: &ResponderConfig,
) -> Result<Box<dyn Responder>> {
    match responder_type {
        "canned" => Ok(Box::new(CannedResponder::new(config.reply_delay_ms))),
        _ => Err(MentoraError::Responder(format!(
            "Unknown responder type: {}",
            responder_type
        ))
        .into()),
    }
}
