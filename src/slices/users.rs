//! Peer directory: latest slot statistics per peer.

use crate::app::event::{Event, SearchHit};
use crate::domain::{PeerId, PeerStats};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Snapshot of the peer directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UsersState {
    peers: BTreeMap<PeerId, PeerStats>,
}

impl UsersState {
    /// Latest known statistics for `peer`.
    #[must_use]
    pub fn get(&self, peer: &str) -> Option<PeerStats> {
        self.peers.get(peer).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.peers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PeerId, &PeerStats)> {
        self.peers.iter()
    }
}

/// Collapses a batch to one record per peer; the last hit for a peer wins.
fn batch_stats(batch: &[SearchHit]) -> BTreeMap<PeerId, PeerStats> {
    batch
        .iter()
        .map(|hit| {
            (
                hit.username.clone(),
                PeerStats {
                    free_slots: hit.free_slots,
                    total_slots: hit.total_slots,
                },
            )
        })
        .collect()
}

/// Applies `event` to the peer directory.
#[must_use]
pub fn reduce(state: &Arc<UsersState>, event: &Event) -> Arc<UsersState> {
    let Event::ReceiveSearchResult { batch } = event else {
        return Arc::clone(state);
    };
    if batch.is_empty() {
        return Arc::clone(state);
    }

    let _span = tracing::debug_span!("users", batch_len = batch.len()).entered();

    let stats = batch_stats(batch);
    if state.is_empty() {
        return Arc::new(UsersState { peers: stats });
    }

    let mut next = Arc::clone(state);
    Arc::make_mut(&mut next).peers.extend(stats);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(username: &str, free_slots: u32, total_slots: u32) -> SearchHit {
        SearchHit {
            tth: "H".to_string(),
            name: "f".to_string(),
            size: 1,
            username: username.to_string(),
            free_slots,
            total_slots,
        }
    }

    fn batch(hits: Vec<SearchHit>) -> Event {
        Event::ReceiveSearchResult { batch: hits }
    }

    #[test]
    fn last_entry_in_batch_wins() {
        let state = reduce(
            &Arc::new(UsersState::default()),
            &batch(vec![hit("u1", 1, 5), hit("u2", 0, 2), hit("u1", 3, 5)]),
        );
        assert_eq!(state.get("u1"), Some(PeerStats { free_slots: 3, total_slots: 5 }));
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn later_batch_replaces_whole_record() {
        let state = reduce(&Arc::new(UsersState::default()), &batch(vec![hit("u1", 1, 5)]));
        let state = reduce(&state, &batch(vec![hit("u1", 0, 8), hit("u3", 2, 2)]));
        assert_eq!(state.get("u1"), Some(PeerStats { free_slots: 0, total_slots: 8 }));
        assert_eq!(state.get("u3"), Some(PeerStats { free_slots: 2, total_slots: 2 }));
        assert_eq!(state.get("nobody"), None);
    }

    #[test]
    fn non_batch_events_pass_through() {
        let state = reduce(&Arc::new(UsersState::default()), &batch(vec![hit("u1", 1, 5)]));
        let next = reduce(
            &state,
            &Event::NewSearch {
                query_text: "x".to_string(),
            },
        );
        assert!(Arc::ptr_eq(&state, &next));
    }
}
