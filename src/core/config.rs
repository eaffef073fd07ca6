//! Configuration for the port store
//!
//! Controls where the store keeps its snapshot, which language a fresh store
//! starts in, and whether every mutation is written back immediately.

use crate::core::locale::Language;

/// Storage key used by the original browser application
pub const DEFAULT_STORAGE_KEY: &str = "port-status-storage";

/// Configuration for a [`PortStore`](crate::core::store::PortStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Namespaced key the state snapshot is stored under
    pub storage_key: String,
    /// Language used when no snapshot exists yet
    pub default_language: Language,
    /// Save the snapshot after every successful mutation
    pub autosave: bool,
}

impl StoreConfig {
    /// Create a configuration with default values
    ///
    /// Defaults to the `port-status-storage` key, Korean, and autosave on
    pub fn new() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_language: Language::default(),
            autosave: true,
        }
    }

    /// Set the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Set the language for a fresh store
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Enable or disable saving after each mutation
    ///
    /// # Note
    /// With autosave off, callers persist explicitly through `PortStore::save`
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
