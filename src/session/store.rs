//! Session state for the chat assistant
//!
//! This module implements the in-memory session store: one active
//! conversation plus the archive of finished chats. The store exposes the
//! three mutations the interface layer drives (archive-and-reset, select,
//! append) and read accessors for rendering. All three mutations are total
//! functions: inputs that cannot be honored are ignored rather than
//! surfaced as errors.

use chrono::Local;
use tracing::debug;

use super::{ArchivedChat, Message, Role};

/// Format string for archive timestamps (date plus hour and minute)
pub const ARCHIVE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Default number of characters kept in an archived chat's preview
pub const DEFAULT_PREVIEW_LENGTH: usize = 50;

/// Default preview for chats whose first message has no content
pub const DEFAULT_PREVIEW_PLACEHOLDER: &str = "New chat";

/// In-memory chat session state
///
/// Holds the archived chats in archive order, the active conversation, and
/// the counter that numbers archived chats. The counter increases by exactly
/// one per archived chat, so archive ids are unique and reflect archive
/// order. State lives for the session only; nothing is persisted.
///
/// # Examples
///
/// ```
/// use mentora::session::{Role, SessionState};
///
/// let mut session = SessionState::default();
/// session.append_message(Role::User, "Hi");
/// session.append_message(Role::Assistant, "Hello");
/// session.start_new_chat();
///
/// assert_eq!(session.archived_chats()[0].preview, "Hi...");
/// assert!(session.active_chat().is_empty());
/// assert_eq!(session.chat_counter(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct SessionState {
    archived: Vec<ArchivedChat>,
    active: Vec<Message>,
    counter: u64,
    preview_length: usize,
    preview_placeholder: String,
}

impl SessionState {
    /// Creates an empty session with the given preview settings
    ///
    /// # Arguments
    ///
    /// * `preview_length` - Characters of the first message kept in a preview
    /// * `preview_placeholder` - Preview used when the first message is empty
    pub fn new(preview_length: usize, preview_placeholder: impl Into<String>) -> Self {
        Self {
            archived: Vec::new(),
            active: Vec::new(),
            counter: 0,
            preview_length,
            preview_placeholder: preview_placeholder.into(),
        }
    }

    /// Archives the active chat and starts a fresh one
    ///
    /// A non-empty active chat becomes an `ArchivedChat`: the id is the
    /// current counter value, the title numbers chats from 1, and the
    /// preview comes from the first message. The active chat is empty after
    /// the call either way; with nothing to archive the call changes
    /// nothing else.
    pub fn start_new_chat(&mut self) {
        if self.active.is_empty() {
            debug!("No active messages, nothing to archive");
            return;
        }

        let messages = std::mem::take(&mut self.active);
        let chat = ArchivedChat {
            id: self.counter,
            title: format!("Chat {}", self.counter + 1),
            preview: self.preview_of(&messages),
            timestamp: Local::now().format(ARCHIVE_TIME_FORMAT).to_string(),
            messages,
        };
        debug!("Archived chat {} with {} messages", chat.id, chat.len());

        self.archived.push(chat);
        self.counter += 1;
    }

    /// Makes an archived chat the active conversation
    ///
    /// The entry stays in the archive; the active chat becomes a copy of
    /// its snapshot, so edits to the revived conversation never touch the
    /// stored entry. An id with no matching entry leaves all state
    /// unchanged.
    pub fn select_chat(&mut self, id: u64) {
        match self.archived.iter().find(|chat| chat.id == id) {
            Some(chat) => {
                self.active = chat.messages.clone();
                debug!("Selected chat {} with {} messages", id, self.active.len());
            }
            None => {
                debug!("Ignoring selection of unknown chat id {}", id);
            }
        }
    }

    /// Appends a message to the active chat
    ///
    /// The message is stamped with the current local time. Content is not
    /// validated; an empty string is appended as-is. Appending never
    /// triggers archiving.
    ///
    /// # Arguments
    ///
    /// * `role` - Who is speaking
    /// * `content` - The message body
    pub fn append_message(&mut self, role: Role, content: impl Into<String>) {
        self.active.push(Message::new(role, content));
    }

    /// Messages of the conversation currently being composed
    pub fn active_chat(&self) -> &[Message] {
        &self.active
    }

    /// Archived chats in archive order (oldest first)
    pub fn archived_chats(&self) -> &[ArchivedChat] {
        &self.archived
    }

    /// Number of chats archived so far
    pub fn chat_counter(&self) -> u64 {
        self.counter
    }

    /// Derives the archive preview from the first message
    ///
    /// Takes the first `preview_length` characters and marks the cut with
    /// an ellipsis, whether or not content was actually dropped. Counting
    /// characters rather than bytes keeps multibyte content intact. A first
    /// message with empty content falls back to the placeholder, unmarked.
    fn preview_of(&self, messages: &[Message]) -> String {
        match messages.first() {
            Some(first) if !first.content.is_empty() => {
                let head: String = first.content.chars().take(self.preview_length).collect();
                format!("{}...", head)
            }
            _ => self.preview_placeholder.clone(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_LENGTH, DEFAULT_PREVIEW_PLACEHOLDER)
    }
}
