//! Domain layer: the value types every slice is built from.
//!
//! Nothing here knows about events or reducers. The types are plain data,
//! cheap to clone and serializable so a host can publish snapshots.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`message`]: Chat messages with same-sender run detection
//! - [`peer`]: Peer slot statistics
//! - [`file`]: Content-addressed file records
//! - [`tab`]: Tabs, tab categories and focus references

pub mod error;
pub mod file;
pub mod message;
pub mod peer;
pub mod tab;

pub use error::{Result, StoreError};
pub use file::{FileEntry, PeerId, Tth};
pub use message::ChatMessage;
pub use peer::PeerStats;
pub use tab::{Tab, TabRef, TabType};
