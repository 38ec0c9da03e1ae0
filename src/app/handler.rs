//! Root reducer and the dispatching store.
//!
//! [`reduce`] routes one event to every slice reducer and assembles the next
//! snapshot. [`Store`] wraps it for hosts that want a single current
//! snapshot with a version counter.
//!
//! # Architecture
//!
//! ```text
//! Event → reduce ─┬─ messages::reduce ─┐
//!                 ├─ searches::reduce ─┤
//!                 ├─ files::reduce ────┼─→ new StoreState
//!                 ├─ users::reduce ────┤
//!                 └─ tabs::reduce ─────┘
//! ```
//!
//! If any slice fails, no snapshot is assembled and the caller keeps the
//! previous one.
//!
//! # Example
//!
//! ```rust
//! use sparrow_state::{Event, Store, TabType};
//!
//! let mut store = Store::new();
//! store.dispatch(&Event::NewTabIfAbsent {
//!     name: "Hub".into(),
//!     tab_type: TabType::HubMessages,
//!     key: "hub".into(),
//! })?;
//! assert_eq!(store.state().tabs().focused().unwrap().key, "hub");
//! assert_eq!(store.version(), 1);
//! # Ok::<(), sparrow_state::StoreError>(())
//! ```

use crate::app::event::Event;
use crate::app::state::StoreState;
use crate::domain::error::Result;
use crate::slices::{files, messages, searches, tabs, users};

/// Applies `event` to `state` and returns the next snapshot.
///
/// `state` is never modified. Slices that ignore the event are shared with
/// the returned snapshot.
///
/// # Errors
///
/// Returns [`StoreError::FocusMissingTab`](crate::StoreError::FocusMissingTab)
/// when the event asks to focus a tab that does not exist. No partial update
/// is produced.
pub fn reduce(state: &StoreState, event: &Event) -> Result<StoreState> {
    let _span = tracing::debug_span!("reduce", event_type = event.kind()).entered();

    let tabs = tabs::reduce(&state.tabs, event)?;

    Ok(StoreState {
        messages: messages::reduce(&state.messages, event),
        searches: searches::reduce(&state.searches, event),
        files: files::reduce(&state.files, event),
        users: users::reduce(&state.users, event),
        tabs,
    })
}

/// Holder of the current snapshot.
///
/// Dispatch is synchronous: each event is fully applied before the next one
/// is accepted. Snapshots obtained from [`Store::snapshot`] remain valid
/// after later dispatches.
#[derive(Debug, Clone, Default)]
pub struct Store {
    current: StoreState,
    version: u64,
}

impl Store {
    /// Creates a store with every slice empty and nothing focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store starting from an existing snapshot.
    #[must_use]
    pub fn from_state(state: StoreState) -> Self {
        Self {
            current: state,
            version: 0,
        }
    }

    /// Borrows the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &StoreState {
        &self.current
    }

    /// Clones the current snapshot for a reader that outlives the borrow.
    #[must_use]
    pub fn snapshot(&self) -> StoreState {
        self.current.clone()
    }

    /// Number of events successfully applied.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Applies `event` and makes the result the current snapshot.
    ///
    /// # Errors
    ///
    /// Propagates reducer errors. The current snapshot and version are left
    /// unchanged on error.
    pub fn dispatch(&mut self, event: &Event) -> Result<&StoreState> {
        self.apply(event)?;
        Ok(&self.current)
    }

    /// Applies events in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first reducer error. Events before it stay applied.
    pub fn dispatch_all<'a, I>(&mut self, events: I) -> Result<&StoreState>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        for event in events {
            self.apply(event)?;
        }
        Ok(&self.current)
    }

    fn apply(&mut self, event: &Event) -> Result<()> {
        self.current = reduce(&self.current, event)?;
        self.version += 1;
        tracing::trace!(version = self.version, "snapshot published");
        Ok(())
    }
}
