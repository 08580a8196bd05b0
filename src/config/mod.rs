//! Configuration management module.
//!
//! This module handles loading and initializing the application configuration
//! file, which holds the remote service endpoints, nutrition service
//! credentials and the location of persisted user state.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::{mealdb, nutrition};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/meal-explorer";
const STORE_DIRECTORY_NAME: &str = "store";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub meal_db_url: String,
    pub nutrition_url: String,
    pub nutrition_app_id: String,
    pub nutrition_app_key: String,
    pub store_dir: PathBuf,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_meal_db_url")]
    pub meal_db_url: String,
    #[serde(default = "default_nutrition_url")]
    pub nutrition_url: String,
    #[serde(default = "default_nutrition_credential")]
    pub nutrition_app_id: String,
    #[serde(default = "default_nutrition_credential")]
    pub nutrition_app_key: String,
    #[serde(default)]
    pub store_dir: Option<PathBuf>,
}

fn default_meal_db_url() -> String {
    mealdb::DEFAULT_BASE_URL.to_string()
}

fn default_nutrition_url() -> String {
    nutrition::DEFAULT_BASE_URL.to_string()
}

fn default_nutrition_credential() -> String {
    "demo".to_string()
}

impl Config {
    /// Return a new instance with default endpoints.
    ///
    pub fn new() -> Config {
        Config {
            meal_db_url: default_meal_db_url(),
            nutrition_url: default_nutrition_url(),
            nutrition_app_id: default_nutrition_credential(),
            nutrition_app_key: default_nutrition_credential(),
            store_dir: PathBuf::from(STORE_DIRECTORY_NAME),
        }
    }

    /// Load `config.yml` from the custom directory if provided, otherwise
    /// from the default directory. A missing file is created with the
    /// current values.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        let dir_path = match custom_path {
            Some(path) => PathBuf::from(path),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|source| ConfigError::CreateDirectory {
                path: dir_path.clone(),
                source,
            })?;
        }

        let file_path = dir_path.join(FILE_NAME);
        self.store_dir = dir_path.join(STORE_DIRECTORY_NAME);

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|source| ConfigError::Read {
                path: file_path.clone(),
                source,
            })?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|source| ConfigError::Malformed {
                    path: file_path.clone(),
                    source,
                })?;
            self.apply(data);
        } else {
            self.create_file(&file_path)?;
        }

        Ok(())
    }

    fn apply(&mut self, data: FileSpec) {
        self.meal_db_url = data.meal_db_url;
        self.nutrition_url = data.nutrition_url;
        self.nutrition_app_id = data.nutrition_app_id;
        self.nutrition_app_key = data.nutrition_app_key;
        if let Some(store_dir) = data.store_dir {
            self.store_dir = store_dir;
        }
    }

    /// Write the current endpoints and credentials as a new configuration
    /// file. The store directory is left implicit.
    ///
    fn create_file(&self, file_path: &Path) -> Result<(), ConfigError> {
        let data = FileSpec {
            meal_db_url: self.meal_db_url.clone(),
            nutrition_url: self.nutrition_url.clone(),
            nutrition_app_id: self.nutrition_app_id.clone(),
            nutrition_app_key: self.nutrition_app_key.clone(),
            store_dir: None,
        };
        let content = serde_yaml::to_string(&data)?;
        fs::write(file_path, content).map_err(|source| ConfigError::Write {
            path: file_path.to_path_buf(),
            source,
        })
    }

    /// Returns the default configuration directory, or an error if the home
    /// directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_DIRECTORY_PATH))
            .ok_or(ConfigError::HomeDirectoryNotFound)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("meal-explorer-config-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn load_creates_default_file() {
        let dir = temp_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        assert!(dir.join(FILE_NAME).exists());
        assert_eq!(config.meal_db_url, mealdb::DEFAULT_BASE_URL);
        assert_eq!(config.nutrition_app_key, "demo");
        assert_eq!(config.store_dir, dir.join(STORE_DIRECTORY_NAME));

        // Reloading the generated file yields the same values.
        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.nutrition_url, config.nutrition_url);
        assert_eq!(reloaded.store_dir, config.store_dir);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn load_reads_partial_file() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join(FILE_NAME),
            "meal_db_url: http://localhost:9000\nnutrition_app_key: secret\nstore_dir: /var/lib/meals\n",
        )
        .unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.meal_db_url, "http://localhost:9000");
        assert_eq!(config.nutrition_app_key, "secret");
        assert_eq!(config.nutrition_app_id, "demo");
        assert_eq!(config.store_dir, PathBuf::from("/var/lib/meals"));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = temp_dir();
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "meal_db_url: [unterminated").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::Malformed { .. }))
        ));
        fs::remove_dir_all(dir).ok();
    }
}
