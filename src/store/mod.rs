//! Durable key-value storage.
//!
//! Persisted user state (favorites, dark mode) is stored as JSON values under
//! fixed keys. [`FileStore`] keeps one document per key on disk and
//! [`MemoryStore`] keeps raw documents in memory.

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use serde_json::Value;
use std::sync::Arc;

/// Synchronous get/set storage of JSON values by key.
///
pub trait KvStore: Send + Sync {
    /// Return the value stored under the key, None if nothing is stored, or
    /// an error if the stored document cannot be read or parsed.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Replace the value stored under the key.
    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError>;
}

/// Store handle shared between the repositories that persist through it.
///
pub type SharedStore = Arc<dyn KvStore>;

/// Store whose reads find nothing and whose writes always fail.
///
#[cfg(test)]
pub(crate) struct FailingStore;

#[cfg(test)]
impl KvStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &Value) -> Result<(), StoreError> {
        Err(StoreError::LockPoisoned)
    }
}
