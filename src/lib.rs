//! Sparrow state: the action-driven state core of a peer-to-peer file-sharing
//! chat and search client.
//!
//! The store consumes inbound events (hub and private chat messages, search
//! result batches, search and tab commands) and maintains the in-memory model
//! a renderer draws from:
//! - Append-only chat logs with same-sender run detection
//! - A content-addressed index folding search hits by TTH, peer and filename
//! - Per-query result sets matched with multi-term substring search
//! - A peer directory of upload slot statistics
//! - Tab lists with a focus pointer and create-then-focus semantics

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (transport, UI, sparrow-replay binary)        │  ← Produces events
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event types and stamped constructors             │
//! │  - Root reducer and Store dispatcher                │
//! │  - StoreState snapshots                             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌───────────────┬───────────────┬───────────────┬───────────────┬───────────────┐
//! │ messages      │ searches      │ files         │ users         │ tabs          │
//! │ chat logs     │ query results │ TTH index     │ slot stats    │ focus machine │
//! └───────────────┴───────────────┴───────────────┴───────────────┴───────────────┘
//!                        │ StoreState
//! ┌─────────────────────────────────────────────────────┐
//! │  View Layer (view/)                                 │  ← Read-only selectors
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The domain types live in [`domain`]; [`observability`] optionally exports
//! the reducer spans to a trace file.
//!
//! # Guarantees
//!
//! - Reducers are pure: `(snapshot, event) -> snapshot`. They never perform
//!   I/O and never mutate a snapshot that was already handed out.
//! - Slices never read each other; they share key values only.
//! - Focusing a tab that does not exist aborts the event with
//!   [`StoreError::FocusMissingTab`].
//!
//! # Example
//!
//! ```rust
//! use sparrow_state::{Event, SearchHit, Store};
//!
//! let mut store = Store::new();
//! store.dispatch(&Event::NewSearch { query_text: "doc pdf".into() })?;
//! store.dispatch(&Event::ReceiveSearchResult {
//!     batch: vec![SearchHit {
//!         tth: "H1".into(),
//!         name: "my doc.pdf".into(),
//!         size: 100,
//!         username: "u1".into(),
//!         free_slots: 1,
//!         total_slots: 3,
//!     }],
//! })?;
//!
//! let state = store.state();
//! assert!(state.searches().results("doc pdf").unwrap().contains("H1"));
//! assert_eq!(state.files().get("H1").unwrap().size, 100);
//! # Ok::<(), sparrow_state::StoreError>(())
//! ```

pub mod app;
pub mod domain;
pub mod observability;
pub mod slices;
pub mod view;

pub use app::{reduce, Event, SearchHit, Store, StoreState};
pub use domain::{
    ChatMessage, FileEntry, PeerId, PeerStats, Result, StoreError, Tab, TabRef, TabType, Tth,
};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default `chrono` format for chat message times (`8:30 PM`).
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

/// Host configuration for the store and its observability.
///
/// Configuration can come from a TOML file ([`Config::from_file`]) or from a
/// string map handed over by an embedding host ([`Config::from_map`]).
///
/// # Example
///
/// ```toml
/// trace_level = "debug"
/// trace_file = "/tmp/sparrow-otlp.json"
/// time_format = "%H:%M"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `EnvFilter` directive for spans and events.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any filter
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// File receiving OTLP JSON span exports.
    ///
    /// `None` disables trace export entirely.
    pub trace_file: Option<PathBuf>,

    /// `chrono` format string used to stamp chat message times.
    ///
    /// Default: [`DEFAULT_TIME_FORMAT`]
    pub time_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_level: None,
            trace_file: None,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from a host-provided string map.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`: used as is
    /// - `trace_file`: path, ignored when empty
    /// - `time_format`: used as is, falls back to the default when empty
    ///
    /// Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use sparrow_state::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    /// map.insert("time_format".to_string(), "%H:%M".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert_eq!(config.time_format, "%H:%M");
    /// assert!(config.trace_file.is_none());
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let trace_file = config
            .get("trace_file")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        let time_format = config
            .get("time_format")
            .filter(|s| !s.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string());

        Self {
            trace_level: config.get("trace_level").cloned(),
            trace_file,
            time_format,
        }
    }

    /// Loads configuration from a TOML file. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be read,
    /// [`StoreError::TomlParse`] if it is not valid TOML, and
    /// [`StoreError::Config`] if `time_format` is empty.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        if config.time_format.trim().is_empty() {
            return Err(StoreError::Config("time_format must not be empty".to_string()));
        }
        tracing::debug!(path = %path.as_ref().display(), "configuration loaded");
        Ok(config)
    }
}

/// Initializes tracing from `config` and returns an empty store.
///
/// # Side Effects
///
/// - Installs the global tracing subscriber if `trace_file` is set
///   (see [`observability::init_tracing`])
pub fn initialize(config: &Config) -> Store {
    observability::init_tracing(config);
    tracing::debug!(time_format = %config.time_format, "initializing sparrow state store");
    Store::new()
}
