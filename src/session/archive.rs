//! Archived chat snapshots

use serde::{Deserialize, Serialize};

use super::Message;

/// A finalized snapshot of a past conversation
///
/// Created when a non-empty active chat is archived. The `messages`
/// snapshot is independent of the session's active chat from that point
/// on: later activity never changes an entry that is already archived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedChat {
    /// Unique id assigned at archive time; ids reflect archive order
    pub id: u64,
    /// Display title ("Chat 1", "Chat 2", ...)
    pub title: String,
    /// Short preview derived from the first message
    pub preview: String,
    /// Local wall-clock time of archiving, formatted YYYY-MM-DD HH:MM
    pub timestamp: String,
    /// The archived message sequence
    pub messages: Vec<Message>,
}

impl ArchivedChat {
    /// Number of messages in the snapshot
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the snapshot holds no messages
    ///
    /// Archiving skips empty chats, so this is false for every entry the
    /// session store produces; it exists for callers building entries by
    /// hand.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
