//! Display preferences persisted across restarts.

use crate::store::{MemoryStore, SharedStore, StoreError};
use log::*;
use serde_json::Value;
use std::sync::Arc;

/// Store key holding the dark mode flag.
///
pub const DARK_MODE_KEY: &str = "darkMode";

/// Oversees the persisted dark mode preference.
///
pub struct Preferences {
    store: SharedStore,
    dark_mode: bool,
}

impl Preferences {
    /// Read the stored preference once. Missing or malformed data means
    /// light mode.
    ///
    pub fn load(store: SharedStore) -> Preferences {
        let dark_mode = match store.get(DARK_MODE_KEY) {
            Ok(Some(Value::Bool(dark_mode))) => dark_mode,
            Ok(Some(other)) => {
                warn!("Ignoring non-boolean dark mode preference: {}", other);
                false
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Ignoring unreadable dark mode preference: {}", e);
                false
            }
        };
        Preferences { store, dark_mode }
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Persist and set the dark mode preference. The flag is left as is when
    /// the store rejects the write.
    ///
    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), StoreError> {
        self.store.set(DARK_MODE_KEY, &Value::Bool(dark_mode))?;
        self.dark_mode = dark_mode;
        Ok(())
    }

    /// Flip and persist the dark mode preference, returning the new value.
    ///
    pub fn toggle_dark_mode(&mut self) -> Result<bool, StoreError> {
        let dark_mode = !self.dark_mode;
        self.set_dark_mode(dark_mode)?;
        Ok(dark_mode)
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences::load(Arc::new(MemoryStore::default()))
    }
}
