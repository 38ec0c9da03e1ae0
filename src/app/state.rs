//! Root snapshot composing the five slices.
//!
//! [`StoreState`] holds one `Arc` per slice. Cloning it is five reference
//! count bumps, and a snapshot handed out earlier stays valid forever: the
//! fields are private and no method hands out mutable access.
//!
//! # Example
//!
//! ```rust
//! use sparrow_state::{reduce, Event, StoreState};
//!
//! let before = StoreState::default();
//! let after = reduce(&before, &Event::NewSearch { query_text: "iso".into() })?;
//! assert!(before.searches().is_empty());
//! assert!(after.searches().contains("iso"));
//! # Ok::<(), sparrow_state::StoreError>(())
//! ```

use crate::slices::{FilesState, MessagesState, SearchesState, TabsState, UsersState};
use serde::Serialize;
use std::sync::Arc;

/// One immutable version of the whole state tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreState {
    pub(crate) messages: Arc<MessagesState>,
    pub(crate) searches: Arc<SearchesState>,
    pub(crate) files: Arc<FilesState>,
    pub(crate) users: Arc<UsersState>,
    pub(crate) tabs: Arc<TabsState>,
}

impl StoreState {
    #[must_use]
    pub fn messages(&self) -> &MessagesState {
        &self.messages
    }

    #[must_use]
    pub fn searches(&self) -> &SearchesState {
        &self.searches
    }

    #[must_use]
    pub fn files(&self) -> &FilesState {
        &self.files
    }

    #[must_use]
    pub fn users(&self) -> &UsersState {
        &self.users
    }

    #[must_use]
    pub fn tabs(&self) -> &TabsState {
        &self.tabs
    }

    /// Whether every slice of `self` is the same allocation as in `other`.
    ///
    /// True after an event that no slice handled.
    #[must_use]
    pub fn shares_all_slices(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.messages, &other.messages)
            && Arc::ptr_eq(&self.searches, &other.searches)
            && Arc::ptr_eq(&self.files, &other.files)
            && Arc::ptr_eq(&self.users, &other.users)
            && Arc::ptr_eq(&self.tabs, &other.tabs)
    }
}
