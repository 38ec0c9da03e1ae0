//! Error types for the state store.
//!
//! [`StoreError`] covers the one fatal reducer condition (focusing a tab that
//! does not exist) plus the failures of the thin layers around the reducers:
//! configuration loading and decoding inbound events at the replay boundary.
//! All variants derive their `Display` impl through `thiserror`.

use crate::domain::tab::TabType;
use thiserror::Error;

/// The main error type for store operations.
///
/// Reducers only ever produce [`StoreError::FocusMissingTab`]. The remaining
/// variants come from configuration and event decoding, which happen before an
/// event reaches the reducers.
///
/// # Examples
///
/// ```
/// use sparrow_state::{StoreError, TabType};
///
/// let err = StoreError::FocusMissingTab {
///     tab_type: TabType::Search,
///     key: "ubuntu iso".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "attempted to focus tab that doesn't exist: search \"ubuntu iso\""
/// );
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// A focus request named a `(type, key)` pair that matches no tab.
    ///
    /// The event stream must never ask for this under correct operation, so
    /// the whole event application is aborted instead of leaving a dangling
    /// focus pointer behind.
    #[error("attempted to focus tab that doesn't exist: {tab_type} {key:?}")]
    FocusMissingTab {
        /// Category of the requested tab.
        tab_type: TabType,
        /// Key of the requested tab.
        key: String,
    },

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An inbound event could not be decoded from JSON.
    #[error("Event decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A configuration file is not valid TOML.
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// A specialized `Result` type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
