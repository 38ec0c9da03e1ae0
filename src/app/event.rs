//! Inbound events consumed by the store.
//!
//! [`Event`] is the closed set of things the transport and UI layers can tell
//! the store. Every reducer pattern-matches on it and ignores the variants it
//! has no interest in, so adding a variant is a compile-time checked change.
//!
//! On the wire an event is adjacently tagged with the client's action names:
//!
//! ```json
//! {"type": "NEW_SEARCH", "payload": {"queryText": "ubuntu iso"}}
//! ```
//!
//! # Example
//!
//! ```rust
//! use sparrow_state::{Config, Event};
//!
//! let config = Config::default();
//! let event = Event::hub_message("alice", "hello", &config);
//! assert_eq!(event.kind(), "RECEIVE_MESSAGE");
//! ```

use crate::domain::{PeerId, TabType, Tth};
use crate::Config;
use serde::{Deserialize, Serialize};

/// One entry of a search-result batch, as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Content hash of the file.
    pub tth: Tth,
    /// Filename as shared by the peer.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
    /// Peer that returned the hit.
    pub username: PeerId,
    /// Peer's currently free upload slots.
    pub free_slots: u32,
    /// Peer's total upload slots.
    pub total_slots: u32,
}

/// Events produced by the transport (messages, search results) and by the
/// UI (searches, tab navigation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "payload",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Event {
    /// A message on the shared hub chat.
    ReceiveMessage {
        from: PeerId,
        text: String,
        /// Display time stamped by the producer. Empty when the wire
        /// payload carried none; see [`Event::stamp_missing_time`].
        #[serde(default, skip_serializing_if = "String::is_empty")]
        time: String,
    },

    /// A private message from one peer.
    ReceivePrivateMessage {
        from: PeerId,
        text: String,
        /// Display time stamped by the producer. Empty when the wire
        /// payload carried none; see [`Event::stamp_missing_time`].
        #[serde(default, skip_serializing_if = "String::is_empty")]
        time: String,
    },

    /// One batch of search hits.
    ///
    /// Feeds three slices at once: the file index, the query result sets and
    /// the peer directory.
    ReceiveSearchResult { batch: Vec<SearchHit> },

    /// The user started a search.
    NewSearch { query_text: String },

    /// Create a tab unconditionally.
    NewTab {
        name: String,
        tab_type: TabType,
        key: String,
    },

    /// Create a tab unless one with the same `(type, key)` exists.
    #[serde(rename = "NEW_TAB_MAYBE")]
    NewTabIfAbsent {
        name: String,
        tab_type: TabType,
        key: String,
    },

    /// Focus the tab identified by `(type, key)`. It must exist.
    FocusTab { tab_type: TabType, key: String },

    /// Focus the fixed tab at a position in the tab bar.
    SelectTab { index: usize },
}

impl Event {
    /// Wire tag of the event, used as the span field when reducing.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ReceiveMessage { .. } => "RECEIVE_MESSAGE",
            Self::ReceivePrivateMessage { .. } => "RECEIVE_PRIVATE_MESSAGE",
            Self::ReceiveSearchResult { .. } => "RECEIVE_SEARCH_RESULT",
            Self::NewSearch { .. } => "NEW_SEARCH",
            Self::NewTab { .. } => "NEW_TAB",
            Self::NewTabIfAbsent { .. } => "NEW_TAB_MAYBE",
            Self::FocusTab { .. } => "FOCUS_TAB",
            Self::SelectTab { .. } => "SELECT_TAB",
        }
    }

    /// Fills an empty message `time` with the current local time.
    ///
    /// Transports may send chat messages without a time; the boundary that
    /// decodes them stamps them here, before dispatch, so reducers stay pure.
    /// Events that are not messages, or already carry a time, are unchanged.
    pub fn stamp_missing_time(&mut self, config: &Config) {
        if let Self::ReceiveMessage { time, .. } | Self::ReceivePrivateMessage { time, .. } = self {
            if time.is_empty() {
                *time = time_label(&config.time_format);
            }
        }
    }

    /// Opens a search: registers the query, then creates its tab if needed
    /// and focuses it.
    ///
    /// This is the sequence the search bar dispatches on submit.
    #[must_use]
    pub fn open_search(query_text: &str) -> [Self; 3] {
        [
            Self::NewSearch {
                query_text: query_text.to_string(),
            },
            Self::NewTabIfAbsent {
                name: query_text.to_string(),
                tab_type: TabType::Search,
                key: query_text.to_string(),
            },
            Self::FocusTab {
                tab_type: TabType::Search,
                key: query_text.to_string(),
            },
        ]
    }
}

/// Formats the current local time with `format`.
///
/// Falls back to the default format if `format` is not a valid `strftime`
/// string.
fn time_label(format: &str) -> String {
    use std::fmt::Write;

    let now = chrono::Local::now();
    let mut label = String::new();
    if write!(label, "{}", now.format(format)).is_err() {
        tracing::debug!(format = %format, "invalid time format, using default");
        label.clear();
        let _ = write!(label, "{}", now.format(crate::DEFAULT_TIME_FORMAT));
    }
    label
}

/// Generates constructors for message events that stamp the display time.
///
/// Reducers stay pure: the clock is read here, by the producer, and the
/// formatted time travels inside the event.
macro_rules! stamped_message_builders {
    (
        $(
            $builder_name:ident($variant:ident)
        ),* $(,)?
    ) => {
        impl Event {
            $(
                #[doc = concat!(
                    "Create a ",
                    stringify!($variant),
                    " event stamped with the current local time"
                )]
                #[must_use]
                pub fn $builder_name(
                    from: impl Into<String>,
                    text: impl Into<String>,
                    config: &Config,
                ) -> Self {
                    Self::$variant {
                        from: from.into(),
                        text: text.into(),
                        time: time_label(&config.time_format),
                    }
                }
            )*
        }
    };
}

stamped_message_builders! {
    hub_message(ReceiveMessage),
    private_message(ReceivePrivateMessage),
}
