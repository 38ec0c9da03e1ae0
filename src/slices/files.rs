//! File index: search hits aggregated by content hash.
//!
//! Files are indexed by TTH and then by peer, since the same content is often
//! shared by several peers under different names. Each batch is first folded
//! into a transient index of its own and then merged into the persistent one
//! in a single pass, so one event is one atomic update.

use crate::app::event::{Event, SearchHit};
use crate::domain::{FileEntry, Tth};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Snapshot of the file index.
///
/// Entries are individually reference counted, so a merge only copies the
/// records the batch actually touches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilesState {
    entries: BTreeMap<Tth, Arc<FileEntry>>,
}

impl FilesState {
    #[must_use]
    pub fn get(&self, tth: &str) -> Option<&FileEntry> {
        self.entries.get(tth).map(Arc::as_ref)
    }

    #[must_use]
    pub fn contains(&self, tth: &str) -> bool {
        self.entries.contains_key(tth)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Tth, &FileEntry)> {
        self.entries.iter().map(|(tth, entry)| (tth, entry.as_ref()))
    }

    /// Merges a batch index into this one.
    ///
    /// Missing hashes are seeded with the batch's size; existing records keep
    /// theirs. Filenames are unioned per peer.
    fn merge(&mut self, batch: BTreeMap<Tth, FileEntry>) {
        for (tth, incoming) in batch {
            match self.entries.get_mut(&tth) {
                Some(existing) => {
                    let owners_before = existing.owners.len();
                    Arc::make_mut(existing).absorb(incoming);
                    tracing::trace!(
                        tth = %tth,
                        owners_before,
                        owners_after = existing.owners.len(),
                        "merged into existing file"
                    );
                }
                None => {
                    self.entries.insert(tth, Arc::new(incoming));
                }
            }
        }
    }
}

/// Folds a batch into a standalone index.
///
/// Within the batch the first hit for a hash decides its size.
fn index_batch(batch: &[SearchHit]) -> BTreeMap<Tth, FileEntry> {
    let mut index: BTreeMap<Tth, FileEntry> = BTreeMap::new();
    for hit in batch {
        index
            .entry(hit.tth.clone())
            .or_insert_with(|| FileEntry::new(hit.size))
            .add_name(&hit.username, &hit.name);
    }
    index
}

/// Applies `event` to the file index.
#[must_use]
pub fn reduce(state: &Arc<FilesState>, event: &Event) -> Arc<FilesState> {
    let Event::ReceiveSearchResult { batch } = event else {
        return Arc::clone(state);
    };
    if batch.is_empty() {
        return Arc::clone(state);
    }

    let _span =
        tracing::debug_span!("files", batch_len = batch.len(), indexed = state.len()).entered();

    let index = index_batch(batch);

    if state.is_empty() {
        tracing::debug!(files = index.len(), "adopting batch as file index");
        return Arc::new(FilesState {
            entries: index
                .into_iter()
                .map(|(tth, entry)| (tth, Arc::new(entry)))
                .collect(),
        });
    }

    let mut next = Arc::clone(state);
    Arc::make_mut(&mut next).merge(index);
    tracing::debug!(files = next.len(), "file index merged");
    next
}
