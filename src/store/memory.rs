use super::{KvStore, StoreError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Keeps serialized documents in memory. Documents are stored as raw strings
/// so a malformed document can be seeded with [`MemoryStore::with_raw`].
///
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Return a store seeded with a raw document under the key.
    ///
    pub fn with_raw(key: &str, raw: &str) -> MemoryStore {
        let mut documents = HashMap::new();
        documents.insert(key.to_owned(), raw.to_owned());
        MemoryStore {
            documents: Mutex::new(documents),
        }
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let documents = self.documents.lock().map_err(|_| StoreError::LockPoisoned)?;
        match documents.get(key) {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StoreError::Malformed {
                    key: key.to_owned(),
                    message: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value)?;
        let mut documents = self.documents.lock().map_err(|_| StoreError::LockPoisoned)?;
        documents.insert(key.to_owned(), raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_replaces_value() {
        let store = MemoryStore::default();
        store.set("darkMode", &json!(false)).unwrap();
        store.set("darkMode", &json!(true)).unwrap();
        assert_eq!(store.get("darkMode").unwrap(), Some(json!(true)));
    }

    #[test]
    fn raw_garbage_is_malformed() {
        let store = MemoryStore::with_raw("darkMode", "tru");
        assert!(matches!(
            store.get("darkMode"),
            Err(StoreError::Malformed { .. })
        ));
    }
}
