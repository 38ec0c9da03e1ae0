//! Tab controller: three ordered tab lists and a single focus pointer.
//!
//! # Lists
//!
//! - `fixed`: system tabs, and any tab whose type is not a message or search
//!   type. Position-based selection (`SelectTab`) indexes this list only.
//! - `messages`: the hub tab (always prepended) followed by private tabs.
//! - `search`: one tab per search, in creation order.
//!
//! # Transitions
//!
//! Creating a tab while nothing is focused is a compound transition: insert
//! the tab, then focus it. The focus step only runs when the precondition
//! "nothing was focused before the insert" holds.
//!
//! Focusing a tab that does not exist is fatal for the event: the reducer
//! logs the state and the event and returns [`StoreError::FocusMissingTab`].

use crate::app::event::Event;
use crate::domain::error::{Result, StoreError};
use crate::domain::{Tab, TabRef, TabType};
use serde::Serialize;
use std::sync::Arc;

/// Snapshot of the tab bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsState {
    #[serde(rename = "tabList")]
    fixed: Vec<Tab>,
    #[serde(rename = "messageTabs")]
    messages: Vec<Tab>,
    search: Vec<Tab>,
    #[serde(skip_serializing_if = "Option::is_none")]
    focused: Option<TabRef>,
}

impl TabsState {
    #[must_use]
    pub fn fixed(&self) -> &[Tab] {
        &self.fixed
    }

    #[must_use]
    pub fn messages(&self) -> &[Tab] {
        &self.messages
    }

    #[must_use]
    pub fn search(&self) -> &[Tab] {
        &self.search
    }

    /// Reference of the focused tab, if any.
    #[must_use]
    pub fn focused(&self) -> Option<&TabRef> {
        self.focused.as_ref()
    }

    /// The focused tab itself, resolved by lookup.
    #[must_use]
    pub fn focused_tab(&self) -> Option<&Tab> {
        self.focused
            .as_ref()
            .and_then(|focus| self.find(&focus.tab_type, &focus.key))
    }

    /// First tab matching `(tab_type, key)`, searching fixed, then message,
    /// then search tabs.
    #[must_use]
    pub fn find(&self, tab_type: &TabType, key: &str) -> Option<&Tab> {
        self.fixed
            .iter()
            .chain(&self.messages)
            .chain(&self.search)
            .find(|tab| tab.matches(tab_type, key))
    }

    /// Fixed tab at `index`.
    #[must_use]
    pub fn fixed_at(&self, index: usize) -> Option<&Tab> {
        self.fixed.get(index)
    }

    /// Every tab, in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.fixed.iter().chain(&self.messages).chain(&self.search)
    }

    fn insert(&mut self, tab: Tab) {
        match tab.tab_type {
            TabType::HubMessages => self.messages.insert(0, tab),
            TabType::PrivateMessages => self.messages.push(tab),
            TabType::Search => self.search.push(tab),
            TabType::Fixed(_) => self.fixed.push(tab),
        }
    }

    fn focus(&mut self, tab_type: &TabType, key: &str) -> Result<()> {
        let reference = self
            .find(tab_type, key)
            .map(Tab::reference)
            .ok_or_else(|| StoreError::FocusMissingTab {
                tab_type: tab_type.clone(),
                key: key.to_string(),
            })?;
        self.focused = Some(reference);
        Ok(())
    }
}

/// Inserts `tab` and, if nothing was focused beforehand, focuses it.
fn create_then_focus(state: &Arc<TabsState>, tab: Tab) -> Result<Arc<TabsState>> {
    let focus_new_tab = state.focused.is_none();
    let reference = tab.reference();

    let mut next = Arc::clone(state);
    let tabs = Arc::make_mut(&mut next);
    tabs.insert(tab);
    if focus_new_tab {
        tabs.focus(&reference.tab_type, &reference.key)?;
        tracing::debug!(tab_type = %reference.tab_type, key = %reference.key, "focused first tab");
    }
    Ok(next)
}

/// Applies `event` to the tab controller.
///
/// # Errors
///
/// Returns [`StoreError::FocusMissingTab`] when a `FocusTab` event names a tab
/// that does not exist.
pub fn reduce(state: &Arc<TabsState>, event: &Event) -> Result<Arc<TabsState>> {
    match event {
        Event::NewTabIfAbsent { name, tab_type, key } => {
            if state.find(tab_type, key).is_some() {
                return Ok(Arc::clone(state));
            }
            create_then_focus(state, Tab::new(name.clone(), tab_type.clone(), key.clone()))
        }
        Event::NewTab { name, tab_type, key } => {
            create_then_focus(state, Tab::new(name.clone(), tab_type.clone(), key.clone()))
        }
        Event::FocusTab { tab_type, key } => {
            let mut next = Arc::clone(state);
            if let Err(err) = Arc::make_mut(&mut next).focus(tab_type, key) {
                tracing::error!(
                    state = ?state,
                    event = ?event,
                    "attempted to focus tab that doesn't exist"
                );
                return Err(err);
            }
            Ok(next)
        }
        Event::SelectTab { index } => {
            let Some(tab) = state.fixed_at(*index) else {
                tracing::warn!(
                    index = *index,
                    fixed_tabs = state.fixed.len(),
                    "tab index out of range, ignoring selection"
                );
                return Ok(Arc::clone(state));
            };
            let reference = tab.reference();
            let mut next = Arc::clone(state);
            Arc::make_mut(&mut next).focused = Some(reference);
            Ok(next)
        }
        _ => Ok(Arc::clone(state)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn new_tab_maybe(name: &str, tab_type: TabType, key: &str) -> Event {
        Event::NewTabIfAbsent {
            name: name.to_string(),
            tab_type,
            key: key.to_string(),
        }
    }

    fn new_tab(name: &str, tab_type: TabType, key: &str) -> Event {
        Event::NewTab {
            name: name.to_string(),
            tab_type,
            key: key.to_string(),
        }
    }

    fn focus(tab_type: TabType, key: &str) -> Event {
        Event::FocusTab {
            tab_type,
            key: key.to_string(),
        }
    }

    fn apply(events: &[Event]) -> Arc<TabsState> {
        events.iter().fold(Arc::new(TabsState::default()), |state, event| {
            reduce(&state, event).expect("transition")
        })
    }

    fn keys(tabs: &[Tab]) -> Vec<&str> {
        tabs.iter().map(|tab| tab.key.as_str()).collect()
    }

    #[test]
    fn first_created_tab_is_focused_and_later_ones_are_not() {
        let state = apply(&[new_tab_maybe("Files", TabType::fixed("files"), "files")]);
        assert_eq!(state.focused().unwrap().key, "files");

        let state =
            reduce(&state, &new_tab_maybe("alice", TabType::PrivateMessages, "alice")).unwrap();
        assert_eq!(state.focused().unwrap().key, "files");
        assert_eq!(state.focused_tab().unwrap().name, "Files");
    }

    #[test]
    fn new_tab_also_focuses_only_when_unfocused() {
        let state = apply(&[new_tab("Hub", TabType::HubMessages, "hub")]);
        assert_eq!(state.focused().unwrap().tab_type, TabType::HubMessages);

        let state = reduce(&state, &new_tab("q", TabType::Search, "q")).unwrap();
        assert_eq!(state.focused().unwrap().key, "hub");
    }

    #[test]
    fn create_if_absent_is_idempotent() {
        let once = apply(&[
            new_tab_maybe("Hub", TabType::HubMessages, "hub"),
            new_tab_maybe("x", TabType::Search, "x"),
        ]);
        let twice = reduce(&once, &new_tab_maybe("x again", TabType::Search, "x")).unwrap();
        assert!(Arc::ptr_eq(&once, &twice));
        assert_eq!(keys(twice.search()), vec!["x"]);
        assert_eq!(twice.search()[0].name, "x");
    }

    #[test]
    fn unconditional_create_allows_duplicates() {
        let state = apply(&[
            new_tab("x", TabType::Search, "x"),
            new_tab("x", TabType::Search, "x"),
        ]);
        assert_eq!(keys(state.search()), vec!["x", "x"]);
    }

    #[test]
    fn insertion_follows_category_rules() {
        let state = apply(&[
            new_tab("alice", TabType::PrivateMessages, "alice"),
            new_tab("Hub", TabType::HubMessages, "hub"),
            new_tab("bob", TabType::PrivateMessages, "bob"),
            new_tab("q1", TabType::Search, "q1"),
            new_tab("q2", TabType::Search, "q2"),
            new_tab("Settings", TabType::fixed("settings"), "settings"),
        ]);
        assert_eq!(keys(state.messages()), vec!["hub", "alice", "bob"]);
        assert_eq!(keys(state.search()), vec!["q1", "q2"]);
        assert_eq!(keys(state.fixed()), vec!["settings"]);
        assert_eq!(state.focused().unwrap().key, "alice");
    }

    #[test]
    fn explicit_focus_moves_pointer() {
        let state = apply(&[
            new_tab("Hub", TabType::HubMessages, "hub"),
            new_tab("q", TabType::Search, "q"),
            focus(TabType::Search, "q"),
        ]);
        assert_eq!(
            state.focused(),
            Some(&TabRef {
                tab_type: TabType::Search,
                key: "q".to_string()
            })
        );
    }

    #[test]
    fn focus_requires_matching_type_and_key() {
        let state = apply(&[new_tab("alice", TabType::PrivateMessages, "alice")]);
        let err = reduce(&state, &focus(TabType::Search, "alice")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::FocusMissingTab { tab_type: TabType::Search, ref key } if key == "alice"
        ));
        assert_eq!(state.focused().unwrap().tab_type, TabType::PrivateMessages);
    }

    #[test]
    fn focus_on_empty_store_is_fatal() {
        let empty = Arc::new(TabsState::default());
        let err = reduce(&empty, &focus(TabType::fixed("settings"), "nope"));
        assert!(err.is_err());
    }

    #[test]
    fn select_tab_indexes_the_fixed_list() {
        let state = apply(&[
            new_tab("Hub", TabType::HubMessages, "hub"),
            new_tab("Files", TabType::fixed("files"), "files"),
            new_tab("Settings", TabType::fixed("settings"), "settings"),
            Event::SelectTab { index: 1 },
        ]);
        assert_eq!(state.focused().unwrap().key, "settings");
    }

    #[test]
    fn select_tab_out_of_range_is_a_no_op() {
        let state = apply(&[
            new_tab("Hub", TabType::HubMessages, "hub"),
            new_tab("Files", TabType::fixed("files"), "files"),
        ]);
        let next = reduce(&state, &Event::SelectTab { index: 1 }).unwrap();
        assert!(Arc::ptr_eq(&state, &next));
        assert_eq!(next.focused().unwrap().key, "hub");

        let empty = Arc::new(TabsState::default());
        let next = reduce(&empty, &Event::SelectTab { index: 0 }).unwrap();
        assert!(next.focused().is_none());
    }

    #[test]
    fn focus_survives_reordering() {
        let state = apply(&[
            new_tab("alice", TabType::PrivateMessages, "alice"),
            new_tab("Hub", TabType::HubMessages, "hub"),
        ]);
        assert_eq!(keys(state.messages()), vec!["hub", "alice"]);
        assert_eq!(state.focused_tab().unwrap().key, "alice");
    }

    #[test]
    fn fixed_types_sharing_a_key_are_distinct_tabs() {
        let state = apply(&[
            new_tab_maybe("Settings", TabType::fixed("settings"), "main"),
            new_tab_maybe("Downloads", TabType::fixed("downloads"), "main"),
            focus(TabType::fixed("downloads"), "main"),
        ]);
        let names: Vec<&str> = state.fixed().iter().map(|tab| tab.name.as_str()).collect();
        assert_eq!(names, vec!["Settings", "Downloads"]);
        assert_eq!(state.focused_tab().unwrap().name, "Downloads");

        let json = serde_json::to_value(state.as_ref()).unwrap();
        assert_eq!(json["tabList"][1]["type"], "downloads");
        assert_eq!(json["focused"]["type"], "downloads");
    }

    fn tab_type_strategy() -> impl Strategy<Value = TabType> {
        prop_oneof![
            Just(TabType::fixed("settings")),
            Just(TabType::fixed("downloads")),
            Just(TabType::HubMessages),
            Just(TabType::PrivateMessages),
            Just(TabType::Search),
        ]
    }

    proptest! {
        #[test]
        fn repeated_create_if_absent_matches_single_application(
            tabs in proptest::collection::vec((tab_type_strategy(), "[a-c]"), 1..8)
        ) {
            let once: Vec<Event> = tabs
                .iter()
                .map(|(tab_type, key)| new_tab_maybe(key, tab_type.clone(), key))
                .collect();
            let doubled: Vec<Event> = once.iter().flat_map(|e| [e.clone(), e.clone()]).collect();

            let a = apply(&once);
            let b = apply(&doubled);
            prop_assert_eq!(a.as_ref(), b.as_ref());
            prop_assert!(a.focused_tab().is_some());
        }
    }
}
