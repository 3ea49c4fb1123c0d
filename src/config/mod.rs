//! Configuration management module.
//!
//! This module handles loading, saving, and managing application
//! configuration, including the service URL, the persisted session token,
//! and theme preferences.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use crate::session::SessionStore;
use log::*;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/notes-tui";

/// Oversees management of configuration file.
///
#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub access_token: Option<String>,
    pub theme_name: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_theme_name() -> String {
    "tokyo-night".to_string()
}

impl Config {
    /// Return a new empty instance.
    ///
    pub fn new() -> Config {
        Config {
            file_path: None,
            api_base_url: default_api_base_url(),
            access_token: None,
            theme_name: default_theme_name(),
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// path if provided. A missing file is not an error; defaults apply and
    /// the file is created on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        // Try to create dir path if it doesn't exist
        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        // Specify config file path
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        // If file exists, try to extract service URL, session token, and theme
        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.api_base_url = data.api_base_url;
            self.access_token = data.access_token;
            self.theme_name = data.theme_name;
        }
        // Otherwise, leave the session token as None - the login view handles it

        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> Result<(), AppError> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            api_base_url: self.api_base_url.clone(),
            access_token: self.access_token.clone(),
            theme_name: self.theme_name.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Persist the session token to the config file.
    ///
    pub fn save_token(&mut self, token: String) -> Result<(), AppError> {
        self.access_token = Some(token);
        if self.file_path.is_none() {
            let dir_path = Config::default_path()?;
            if !dir_path.exists() {
                fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: dir_path.clone(),
                    source: e,
                })?;
            }
            self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        }
        self.save()
    }

    /// Remove the session token from the config file.
    ///
    pub fn clear_token(&mut self) -> Result<(), AppError> {
        self.access_token = None;
        self.save()
    }

    /// Returns the path buffer for the default path to the configuration
    /// file or an error if the home directory could not be found.
    ///
    fn default_path() -> Result<PathBuf, AppError> {
        match dirs::home_dir() {
            Some(home) => {
                let home_path = Path::new(&home);
                let default_config_path = Path::new(DEFAULT_DIRECTORY_PATH);
                Ok(home_path.join(default_config_path))
            }
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

/// Config doubles as the durable session store: tokens written here are
/// read back at the next startup.
///
impl SessionStore for Config {
    fn token(&self) -> Option<String> {
        self.access_token.clone()
    }

    fn set_token(&mut self, token: &str) {
        if let Err(e) = self.save_token(token.to_owned()) {
            error!("Failed to persist session token: {}", e);
        }
    }

    fn clear(&mut self) {
        if let Err(e) = self.clear_token() {
            error!("Failed to clear session token: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::uuid::UUIDv4;
    use fake::Fake;
    use uuid::Uuid;

    fn temp_config_dir() -> PathBuf {
        let suffix: Uuid = UUIDv4.fake();
        std::env::temp_dir().join(format!("notes-tui-test-{}", suffix))
    }

    #[test]
    fn test_load_missing_file_applies_defaults() {
        let dir = temp_config_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();

        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert!(config.access_token.is_none());
        assert_eq!(config.theme_name, "tokyo-night");

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = temp_config_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.api_base_url = "http://notes.example.com".to_string();
        config.save_token("tok123".to_string()).unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.api_base_url, "http://notes.example.com");
        assert_eq!(reloaded.access_token.as_deref(), Some("tok123"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_session_store_clear_removes_token() {
        let dir = temp_config_dir();
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.set_token("tok123");
        assert_eq!(SessionStore::token(&config).as_deref(), Some("tok123"));

        config.clear();
        assert!(SessionStore::token(&config).is_none());

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert!(reloaded.access_token.is_none());

        fs::remove_dir_all(&dir).ok();
    }
}
