//! Peer capacity statistics.

use serde::{Deserialize, Serialize};

/// Upload slot availability advertised by a peer in its search results.
///
/// A newer record for the same peer replaces the older one wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerStats {
    pub free_slots: u32,
    pub total_slots: u32,
}
