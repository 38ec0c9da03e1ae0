//! Application layer: events in, snapshots out.
//!
//! This layer sits between the producers of events (transport and UI) and
//! the slices. It owns the event type, the root snapshot and the dispatcher.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! Transport / UI → Event → reduce → StoreState → Renderer
//!                             ↑          │
//!                             └──────────┘  (next event starts from the new snapshot)
//! ```
//!
//! # Modules
//!
//! - [`event`]: The closed set of inbound events and their payloads
//! - [`handler`]: Root reducer and the [`Store`] dispatcher
//! - [`state`]: The root snapshot composing all slices

pub mod event;
pub mod handler;
pub mod state;

pub use event::{Event, SearchHit};
pub use handler::{reduce, Store};
pub use state::StoreState;
