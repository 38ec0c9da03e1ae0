//! Tab model shared by the tab controller and the view selectors.
//!
//! A tab never owns the content it shows. It points at other slices through
//! its `key` (a peer identity for private messages, the query text for a
//! search), and the focus pointer points at a tab through [`TabRef`], the
//! `(type, key)` pair, so that reordering the lists never invalidates it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a tab, which decides the list it lives in.
///
/// On the wire the categories use the client's camelCase names:
/// `hubMessages`, `privateMessages`, `search`. Any other string names a
/// fixed tab and is kept verbatim, so `settings` and `downloads` are
/// distinct types even though both live in the fixed list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TabType {
    /// System tab kept in the fixed list, with its wire type name.
    Fixed(String),
    /// The shared hub chat.
    HubMessages,
    /// A private conversation with one peer.
    PrivateMessages,
    /// Results of one search query.
    Search,
}

impl TabType {
    /// Fixed tab type with the given wire name.
    #[must_use]
    pub fn fixed(name: impl Into<String>) -> Self {
        Self::Fixed(name.into())
    }

    /// Wire name of the type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Fixed(name) => name,
            Self::HubMessages => "hubMessages",
            Self::PrivateMessages => "privateMessages",
            Self::Search => "search",
        }
    }

    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

impl From<String> for TabType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "hubMessages" => Self::HubMessages,
            "privateMessages" => Self::PrivateMessages,
            "search" => Self::Search,
            _ => Self::Fixed(value),
        }
    }
}

impl From<TabType> for String {
    fn from(value: TabType) -> Self {
        match value {
            TabType::Fixed(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for TabType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tab in the tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Display name.
    pub name: String,
    /// Category; decides which list the tab is stored in.
    #[serde(rename = "type")]
    pub tab_type: TabType,
    /// Cross-slice key (peer identity, query text, or a free-form id).
    pub key: String,
}

impl Tab {
    #[must_use]
    pub fn new(name: impl Into<String>, tab_type: TabType, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tab_type,
            key: key.into(),
        }
    }

    /// Whether this tab is the one identified by `(tab_type, key)`.
    #[must_use]
    pub fn matches(&self, tab_type: &TabType, key: &str) -> bool {
        self.tab_type == *tab_type && self.key == key
    }

    /// Logical reference to this tab.
    #[must_use]
    pub fn reference(&self) -> TabRef {
        TabRef {
            tab_type: self.tab_type.clone(),
            key: self.key.clone(),
        }
    }
}

/// Logical `(type, key)` reference to a tab, resolved by lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabRef {
    #[serde(rename = "type")]
    pub tab_type: TabType,
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_wire_names_are_fixed_tabs() {
        assert_eq!(TabType::from("settings".to_string()), TabType::fixed("settings"));
        assert_eq!(TabType::from("search".to_string()), TabType::Search);
        assert_eq!(TabType::from("hubMessages".to_string()), TabType::HubMessages);
        assert!(TabType::fixed("downloads").is_fixed());
    }

    #[test]
    fn fixed_types_keep_their_wire_name() {
        let tab: Tab =
            serde_json::from_str(r#"{"name":"Downloads","type":"downloads","key":"main"}"#)
                .unwrap();
        assert_eq!(tab.tab_type, TabType::fixed("downloads"));
        assert!(tab.matches(&TabType::fixed("downloads"), "main"));
        assert!(!tab.matches(&TabType::fixed("settings"), "main"));
        assert_eq!(
            serde_json::to_value(&tab).unwrap(),
            serde_json::json!({"name": "Downloads", "type": "downloads", "key": "main"})
        );
    }

    #[test]
    fn tab_serializes_with_wire_names() {
        let tab = Tab::new("alice", TabType::PrivateMessages, "alice");
        let json = serde_json::to_value(&tab).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "alice", "type": "privateMessages", "key": "alice"})
        );
    }
}
