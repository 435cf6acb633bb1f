//! Chat session state model
//!
//! This module contains the in-memory session model: message types, the
//! archived chat snapshot, and the session store that owns both the active
//! conversation and the archive.

pub mod archive;
pub mod message;
pub mod store;

pub use archive::ArchivedChat;
pub use message::{Message, Role, MESSAGE_TIME_FORMAT};
pub use store::{
    SessionState, ARCHIVE_TIME_FORMAT, DEFAULT_PREVIEW_LENGTH, DEFAULT_PREVIEW_PLACEHOLDER,
};
