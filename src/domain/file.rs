//! Content-addressed file record.
//!
//! Search hits for the same content hash ("TTH") are folded into a single
//! [`FileEntry`], regardless of which peers returned them or what they called
//! the file.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Content hash identifying a file independently of its name.
pub type Tth = String;

/// Peer identity (the peer's nick on the hub).
pub type PeerId = String;

/// Everything known about one piece of content.
///
/// `size` is taken from the first hit ever seen for the hash and is never
/// updated. `owners` only grows: filenames are added to a peer's set and
/// never removed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FileEntry {
    pub size: u64,
    pub owners: BTreeMap<PeerId, BTreeSet<String>>,
}

impl FileEntry {
    /// Empty record for content of the given size.
    #[must_use]
    pub fn new(size: u64) -> Self {
        Self {
            size,
            owners: BTreeMap::new(),
        }
    }

    /// Records that `peer` shares this content under `filename`.
    pub fn add_name(&mut self, peer: &str, filename: &str) {
        self.owners
            .entry(peer.to_string())
            .or_default()
            .insert(filename.to_string());
    }

    /// Unions every owner and filename of `other` into this record.
    ///
    /// `other.size` is ignored; the size of an existing record is fixed.
    pub fn absorb(&mut self, other: Self) {
        for (peer, names) in other.owners {
            self.owners.entry(peer).or_default().extend(names);
        }
    }

    /// Filenames `peer` uses for this content, if the peer owns it.
    #[must_use]
    pub fn names_for(&self, peer: &str) -> Option<&BTreeSet<String>> {
        self.owners.get(peer)
    }
}
