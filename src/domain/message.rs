//! Chat message model.

use serde::{Deserialize, Serialize};

/// One line of chat, in the hub log or in a private log.
///
/// `previous_sender_same` is decided once, when the message is appended, by
/// comparing `from` with the sender of the last message already in the
/// destination log. It is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub from: String,
    pub text: String,
    /// Display time, formatted by whoever produced the event.
    pub time: String,
    pub previous_sender_same: bool,
}

impl ChatMessage {
    /// Builds the message that would be appended to `log`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparrow_state::ChatMessage;
    ///
    /// let first = ChatMessage::following(&[], "alice", "hi", "8:30 PM");
    /// assert!(!first.previous_sender_same);
    ///
    /// let second = ChatMessage::following(&[first], "alice", "again", "8:31 PM");
    /// assert!(second.previous_sender_same);
    /// ```
    #[must_use]
    pub fn following(log: &[Self], from: &str, text: &str, time: &str) -> Self {
        Self {
            from: from.to_string(),
            text: text.to_string(),
            time: time.to_string(),
            previous_sender_same: log.last().is_some_and(|last| last.from == from),
        }
    }
}
