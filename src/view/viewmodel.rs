//! View model types for a renderer.
//!
//! These are display-ready projections of a [`StoreState`](crate::StoreState)
//! snapshot. They own their data, so a renderer can keep them after the
//! snapshot is gone.

use crate::domain::{PeerStats, TabType, Tth};
use serde::Serialize;

/// The position-selectable tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabBarView {
    /// Tabs in display order.
    pub items: Vec<TabBarItem>,

    /// Index of the focused tab within `items`.
    ///
    /// `0` when nothing is focused or the focused tab is not in the bar.
    pub selected_index: usize,
}

/// One entry of the tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabBarItem {
    pub name: String,
    pub tab_type: TabType,
    pub key: String,
    pub is_selected: bool,
}

/// One rendered chat line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatLine {
    pub from: String,
    pub text: String,
    pub time: String,

    /// Whether the sender header (name and time) is shown above the text.
    ///
    /// Only the first message of a same-sender run shows it.
    pub display_from: bool,
}

/// Results of one search, resolved through the file index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchView {
    pub query: String,

    /// Heading text, e.g. `Search results: "ubuntu iso"`.
    pub heading: String,

    pub rows: Vec<SearchResultRow>,
}

/// One distinct piece of content in a search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultRow {
    pub tth: Tth,
    pub size: u64,
    pub owners: Vec<OwnerRow>,
}

/// One peer sharing a search result, with its names for the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerRow {
    pub peer: String,
    pub filenames: Vec<String>,

    /// Latest slot statistics for the peer, if it has reported any.
    pub stats: Option<PeerStats>,
}
