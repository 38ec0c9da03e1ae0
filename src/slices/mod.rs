//! The five state slices and their reducers.
//!
//! Each slice owns one partition of the store and exposes a `reduce`
//! function of the shape `(&Arc<State>, &Event) -> Arc<State>`. A reducer
//! never mutates the snapshot it is given: it clones the `Arc`, and
//! `Arc::make_mut` copies the data only because the previous snapshot still
//! holds a reference to it. Events a slice does not handle come back as the
//! very same `Arc`.
//!
//! Slices never look at each other. They are linked only by shared key
//! values: content hashes, peer identities, query texts and tab keys.
//!
//! - [`messages`]: hub and private chat logs
//! - [`users`]: peer slot statistics
//! - [`files`]: content-addressed file index
//! - [`searches`]: per-query result sets
//! - [`tabs`]: tab lists and the focus pointer

pub mod files;
pub mod messages;
pub mod searches;
pub mod tabs;
pub mod users;

pub use files::FilesState;
pub use messages::MessagesState;
pub use searches::SearchesState;
pub use tabs::TabsState;
pub use users::UsersState;
