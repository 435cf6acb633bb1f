//! Chat message types
//!
//! Messages record who spoke, what was said, and a local wall-clock stamp
//! in the shape the chat log renders. They are immutable once created:
//! the constructors stamp the time and the fields are only read afterwards.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format string for message timestamps (hour and minute, local clock)
pub const MESSAGE_TIME_FORMAT: &str = "%H:%M";

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person driving the session
    User,
    /// The reply side of the conversation
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single chat message
///
/// Ordering within a chat is insertion order; the timestamp is display
/// metadata, not an ordering key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who authored the message
    pub role: Role,
    /// Message body; empty content is accepted
    pub content: String,
    /// Local wall-clock time at creation, formatted HH:MM
    pub timestamp: String,
}

impl Message {
    /// Creates a message stamped with the current local time
    ///
    /// # Arguments
    ///
    /// * `role` - Who is speaking
    /// * `content` - The message body
    ///
    /// # Examples
    ///
    /// ```
    /// use mentora::session::{Message, Role};
    ///
    /// let message = Message::new(Role::User, "How do I pick a thesis topic?");
    /// assert_eq!(message.role, Role::User);
    /// assert_eq!(message.timestamp.len(), 5);
    /// ```
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Local::now().format(MESSAGE_TIME_FORMAT).to_string(),
        }
    }

    /// Creates a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
