//! Session handler coupling the store with a responder
//!
//! This module implements the assistant handler that owns the session
//! state and the reply-generation capability. Each user action maps to
//! exactly one store mutation; rendering is always a separate read of the
//! resulting state, so no display side effects live inside the store.

use tracing::info;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::responder::Responder;
use crate::session::{Role, SessionState};

/// The assistant session handler
///
/// Owns one [`SessionState`] and one boxed [`Responder`]. The handler's
/// lifecycle is the session's lifecycle: state is created with the handler
/// and dropped with it, never shared or made ambient.
///
/// # Examples
///
/// ```
/// use mentora::config::SessionConfig;
/// use mentora::responder::CannedResponder;
/// use mentora::Assistant;
///
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let mut assistant = Assistant::new(CannedResponder::new(0), &SessionConfig::default());
/// let reply = assistant.submit("How do I normalize my schema?").await?;
/// assert!(!reply.is_empty());
/// assert_eq!(assistant.session().active_chat().len(), 2);
/// # Ok(())
/// # }
/// ```
pub struct Assistant {
    session: SessionState,
    responder: Box<dyn Responder>,
}

impl Assistant {
    /// Creates a handler with a fresh session
    ///
    /// # Arguments
    ///
    /// * `responder` - The reply-generation capability
    /// * `config` - Session presentation settings (preview length, placeholder)
    pub fn new(responder: impl Responder + 'static, config: &SessionConfig) -> Self {
        Self::new_boxed(Box::new(responder), config)
    }

    /// Creates a handler from a boxed responder
    ///
    /// Useful when the responder type is only known at runtime, such as
    /// when it comes from the configuration-driven factory.
    pub fn new_boxed(responder: Box<dyn Responder>, config: &SessionConfig) -> Self {
        let session = SessionState::new(config.preview_length, config.preview_placeholder.clone());
        Self { session, responder }
    }

    /// Handles one user submission
    ///
    /// Appends the user turn, waits for the responder, appends the reply
    /// as the assistant turn, and returns the reply text.
    ///
    /// # Errors
    ///
    /// Propagates responder failures. The user turn stays appended in that
    /// case, so the transcript still shows what was asked.
    pub async fn submit(&mut self, content: impl Into<String>) -> Result<String> {
        let content = content.into();
        info!("Handling a {}-char submission", content.chars().count());

        self.session.append_message(Role::User, content.clone());
        let reply = self.responder.reply(&content).await?;
        self.session.append_message(Role::Assistant, reply.clone());

        Ok(reply)
    }

    /// Archives the active chat and starts a fresh one
    pub fn start_new_chat(&mut self) {
        self.session.start_new_chat();
    }

    /// Makes an archived chat the active one; unknown ids change nothing
    pub fn select_chat(&mut self, id: u64) {
        self.session.select_chat(id);
    }

    /// Read access to the session state for rendering
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Name of the responder implementation in use
    pub fn responder_name(&self) -> &str {
        self.responder.name()
    }
}
