//! Runtime configuration for the chatmatch service.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ChatError;

/// Main configuration for the service binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP listener configuration.
    pub server: ServerConfig,

    /// Storage locations.
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address. Default: 127.0.0.1.
    pub host: String,

    /// Bind port. Default: 8000.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Storage locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// RocksDB directory holding registered accounts.
    /// Default: "users_db".
    pub db_path: PathBuf,

    /// JSON document holding the profile population consulted by
    /// friend suggestions. Re-read on every request.
    /// Default: "users.json".
    pub profiles_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("users_db"),
            profiles_path: PathBuf::from("users.json"),
        }
    }
}

impl Config {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChatError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ChatError::ConfigError(format!("{}: {}", path.display(), e)))?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| ChatError::ConfigError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.storage.db_path, PathBuf::from("users_db"));
        assert_eq!(config.storage.profiles_path, PathBuf::from("users.json"));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new("config").expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "server": {"host": "0.0.0.0", "port": 9100},
                "storage": {"db_path": "accounts", "profiles_path": "profiles.json"}
            }"#,
        )
        .expect("Failed to write config");

        let config = Config::from_file(&path).expect("Failed to load config");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.storage.db_path, PathBuf::from("accounts"));
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("no_such_config.json");
        assert!(matches!(result, Err(ChatError::ConfigError(_))));
    }
}
