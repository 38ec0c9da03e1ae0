//! Message store: the hub chat log and one private log per peer.
//!
//! Logs are append-only. Each appended message carries the same-sender run
//! flag computed against the log it lands in.

use crate::app::event::Event;
use crate::domain::{ChatMessage, PeerId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Snapshot of every chat log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesState {
    hub_messages: Arc<Vec<ChatMessage>>,
    private_messages: BTreeMap<PeerId, Arc<Vec<ChatMessage>>>,
}

impl MessagesState {
    /// The shared hub log, oldest first.
    #[must_use]
    pub fn hub(&self) -> &[ChatMessage] {
        &self.hub_messages
    }

    /// The private log with `peer`, if any message was ever received from it.
    #[must_use]
    pub fn private(&self, peer: &str) -> Option<&[ChatMessage]> {
        self.private_messages.get(peer).map(|log| log.as_slice())
    }

    /// Peers that have a private log, in identity order.
    pub fn private_peers(&self) -> impl Iterator<Item = &PeerId> {
        self.private_messages.keys()
    }

    fn push_hub(&mut self, from: &str, text: &str, time: &str) {
        let log = Arc::make_mut(&mut self.hub_messages);
        let message = ChatMessage::following(log, from, text, time);
        log.push(message);
    }

    fn push_private(&mut self, from: &str, text: &str, time: &str) {
        let log = Arc::make_mut(self.private_messages.entry(from.to_string()).or_default());
        let message = ChatMessage::following(log, from, text, time);
        log.push(message);
    }
}

/// Applies `event` to the message slice.
///
/// Returns the same `Arc` for events that do not carry a chat message.
#[must_use]
pub fn reduce(state: &Arc<MessagesState>, event: &Event) -> Arc<MessagesState> {
    match event {
        Event::ReceiveMessage { from, text, time } => {
            let mut next = Arc::clone(state);
            Arc::make_mut(&mut next).push_hub(from, text, time);
            next
        }
        Event::ReceivePrivateMessage { from, text, time } => {
            let mut next = Arc::clone(state);
            Arc::make_mut(&mut next).push_private(from, text, time);
            tracing::trace!(peer = %from, "private message stored");
            next
        }
        _ => Arc::clone(state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hub(from: &str) -> Event {
        Event::ReceiveMessage {
            from: from.to_string(),
            text: format!("from {from}"),
            time: "8:30 PM".to_string(),
        }
    }

    fn private(from: &str) -> Event {
        Event::ReceivePrivateMessage {
            from: from.to_string(),
            text: "psst".to_string(),
            time: "8:31 PM".to_string(),
        }
    }

    fn apply(events: &[Event]) -> Arc<MessagesState> {
        events
            .iter()
            .fold(Arc::new(MessagesState::default()), |state, event| reduce(&state, event))
    }

    #[test]
    fn hub_run_detection() {
        let state = apply(&[hub("A"), hub("A"), hub("B"), hub("A")]);
        let flags: Vec<bool> = state.hub().iter().map(|m| m.previous_sender_same).collect();
        assert_eq!(flags, vec![false, true, false, false]);
    }

    #[test]
    fn private_logs_are_created_lazily_and_tracked_per_peer() {
        let state = Arc::new(MessagesState::default());
        assert!(state.private("bob").is_none());

        let state = apply(&[private("bob"), private("carol"), private("bob")]);
        let bob = state.private("bob").unwrap();
        assert_eq!(bob.len(), 2);
        assert!(!bob[0].previous_sender_same);
        assert!(bob[1].previous_sender_same);
        assert_eq!(state.private("carol").unwrap().len(), 1);
        assert_eq!(state.private_peers().count(), 2);
        assert!(state.hub().is_empty());
    }

    #[test]
    fn appending_leaves_earlier_snapshot_intact() {
        let before = apply(&[hub("A")]);
        let after = reduce(&before, &hub("B"));
        assert_eq!(before.hub().len(), 1);
        assert_eq!(after.hub().len(), 2);
        assert_eq!(after.hub()[1].text, "from B");
    }

    #[test]
    fn unrelated_events_return_the_same_snapshot() {
        let state = apply(&[hub("A")]);
        let next = reduce(&state, &Event::SelectTab { index: 0 });
        assert!(Arc::ptr_eq(&state, &next));
    }
}
