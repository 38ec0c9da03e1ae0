//! Pure selectors from a snapshot to view models.
//!
//! Selectors read across slices, joining them by key: a tab's key names a
//! peer log or a query, a query's hashes name file index entries, and a file
//! owner names a peer directory record. Nothing here changes the snapshot.

use super::viewmodel::{ChatLine, OwnerRow, SearchResultRow, SearchView, TabBarItem, TabBarView};
use crate::app::StoreState;
use crate::domain::{ChatMessage, Tab, TabType};

/// Builds the tab bar from the fixed tab list.
///
/// # Example
///
/// ```rust
/// use sparrow_state::{view, Event, Store, TabType};
///
/// let mut store = Store::new();
/// for key in ["files", "settings"] {
///     store.dispatch(&Event::NewTab {
///         name: key.into(),
///         tab_type: TabType::fixed(key),
///         key: key.into(),
///     })?;
/// }
/// store.dispatch(&Event::SelectTab { index: 1 })?;
///
/// let bar = view::tab_bar(store.state());
/// assert_eq!(bar.items.len(), 2);
/// assert_eq!(bar.selected_index, 1);
/// # Ok::<(), sparrow_state::StoreError>(())
/// ```
#[must_use]
pub fn tab_bar(state: &StoreState) -> TabBarView {
    let tabs = state.tabs();
    let focused = tabs.focused();

    let items: Vec<TabBarItem> = tabs
        .fixed()
        .iter()
        .map(|tab| TabBarItem {
            name: tab.name.clone(),
            tab_type: tab.tab_type.clone(),
            key: tab.key.clone(),
            is_selected: focused.is_some_and(|f| tab.matches(&f.tab_type, &f.key)),
        })
        .collect();

    let selected_index = items.iter().position(|item| item.is_selected).unwrap_or(0);

    TabBarView {
        items,
        selected_index,
    }
}

/// Title shown above the focused tab's content.
///
/// Empty when nothing is focused.
#[must_use]
pub fn title(state: &StoreState) -> String {
    match state.tabs().focused_tab() {
        None => String::new(),
        Some(tab) if tab.tab_type == TabType::Search => format!("Results for \"{}\"", tab.name),
        Some(tab) => tab.name.clone(),
    }
}

/// The chat log a message tab displays.
///
/// Private tabs for peers that never wrote resolve to an empty log, as do
/// tabs that are not message tabs.
#[must_use]
pub fn channel_log<'a>(state: &'a StoreState, tab: &Tab) -> &'a [ChatMessage] {
    match tab.tab_type {
        TabType::HubMessages => state.messages().hub(),
        TabType::PrivateMessages => state.messages().private(&tab.key).unwrap_or_default(),
        TabType::Search | TabType::Fixed(_) => &[],
    }
}

/// Converts a chat log to display lines.
#[must_use]
pub fn chat_lines(log: &[ChatMessage]) -> Vec<ChatLine> {
    log.iter()
        .map(|message| ChatLine {
            from: message.from.clone(),
            text: message.text.clone(),
            time: message.time.clone(),
            display_from: !message.previous_sender_same,
        })
        .collect()
}

/// Resolves a query's result hashes through the file index and peer
/// directory.
///
/// Returns `None` for a query that was never registered. Hashes the file
/// index does not know are skipped.
#[must_use]
pub fn search_results(state: &StoreState, query: &str) -> Option<SearchView> {
    let hashes = state.searches().results(query)?;

    let rows = hashes
        .iter()
        .filter_map(|tth| {
            let entry = state.files().get(tth)?;
            let owners = entry
                .owners
                .iter()
                .map(|(peer, names)| OwnerRow {
                    peer: peer.clone(),
                    filenames: names.iter().cloned().collect(),
                    stats: state.users().get(peer),
                })
                .collect();
            Some(SearchResultRow {
                tth: tth.clone(),
                size: entry.size,
                owners,
            })
        })
        .collect();

    Some(SearchView {
        query: query.to_string(),
        heading: format!("Search results: \"{query}\""),
        rows,
    })
}
