//! Read-only views over a snapshot.
//!
//! Rendering itself belongs to the host. This module only computes what a
//! renderer needs from a [`StoreState`](crate::StoreState): the tab bar and
//! its selection, the window title, chat lines with sender headers, and
//! search results joined with file and peer data.
//!
//! ```text
//! StoreState → selectors → view models → host renderer
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready view model types
//! - [`selectors`]: Pure functions computing them

pub mod selectors;
pub mod viewmodel;

pub use selectors::{channel_log, chat_lines, search_results, tab_bar, title};
pub use viewmodel::{ChatLine, OwnerRow, SearchResultRow, SearchView, TabBarItem, TabBarView};
