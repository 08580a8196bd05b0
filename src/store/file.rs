use super::{KvStore, StoreError};
use log::*;
use serde_json::Value;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Stores each key as `<key>.json` inside a directory. Writes go to a
/// temporary file first and are renamed into place.
///
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open the store rooted at the directory, creating it if needed.
    ///
    pub fn open(dir: &Path) -> Result<FileStore, StoreError> {
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| StoreError::Io {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }
        debug!("Opened key-value store at {}", dir.display());
        Ok(FileStore {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(|e| StoreError::Io {
            path: path.clone(),
            source: e,
        })?;
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| StoreError::Malformed {
                key: key.to_owned(),
                message: e.to_string(),
            })
    }

    fn set(&self, key: &str, value: &Value) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let staging = self.dir.join(format!("{}.json.tmp", key));
        let content = serde_json::to_string(value)?;
        let io_error = |source| StoreError::Io {
            path: staging.clone(),
            source,
        };

        let mut file = fs::File::create(&staging).map_err(io_error)?;
        write!(file, "{}", content).map_err(io_error)?;
        file.flush().map_err(io_error)?;
        drop(file);

        fs::rename(&staging, &path).map_err(|e| StoreError::Io {
            path: path.clone(),
            source: e,
        })?;
        trace!("Persisted '{}' to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("meal-explorer-store-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn missing_key_is_absent() {
        let dir = temp_dir();
        let store = FileStore::open(&dir).unwrap();
        assert!(store.get("favorites").unwrap().is_none());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn set_then_get_across_reopen() {
        let dir = temp_dir();
        {
            let store = FileStore::open(&dir).unwrap();
            store.set("darkMode", &json!(true)).unwrap();
        }
        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get("darkMode").unwrap(), Some(json!(true)));
        assert!(!dir.join("darkMode.json.tmp").exists());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn malformed_document_is_an_error() {
        let dir = temp_dir();
        let store = FileStore::open(&dir).unwrap();
        fs::write(dir.join("favorites.json"), "[{not json").unwrap();
        assert!(matches!(
            store.get("favorites"),
            Err(StoreError::Malformed { .. })
        ));
        fs::remove_dir_all(dir).ok();
    }
}
