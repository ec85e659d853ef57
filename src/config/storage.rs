//! Storage configuration.

use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

/// Storage backend type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// `SQLite` database file.
    #[default]
    Sqlite,
    /// `SQLite` in-memory database, discarded on exit.
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite => write!(f, "sqlite"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend type.
    #[serde(default)]
    pub backend: StorageBackend,

    /// `SQLite` settings.
    #[serde(default)]
    pub sqlite: SqliteStorageConfig,

    /// Insert the example records when the table is first created.
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,
}

const fn default_seed_examples() -> bool {
    true
}

impl StorageConfig {
    /// Validate the storage configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration fields are missing for the selected backend.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sqlite.max_connections == 0 {
            return Err(ConfigError::Message(
                "storage.sqlite.max_connections cannot be 0".to_string(),
            ));
        }

        match self.backend {
            StorageBackend::Sqlite => {
                if self.sqlite.path.as_os_str().is_empty() {
                    return Err(ConfigError::Message(
                        "storage.sqlite.path cannot be empty".to_string(),
                    ));
                }
                Ok(())
            }
            StorageBackend::Memory => Ok(()),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Sqlite,
            sqlite: SqliteStorageConfig::default(),
            seed_examples: true,
        }
    }
}

/// `SQLite` storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SqliteStorageConfig {
    /// Database file path (created if missing).
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Connection pool maximum size.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// How long a writer waits on a locked database, in seconds.
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout: u64,
}

fn default_path() -> PathBuf {
    PathBuf::from("./db/feedback.db")
}

const fn default_max_connections() -> u32 {
    8
}

const fn default_busy_timeout() -> u64 {
    5
}

impl Default for SqliteStorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            max_connections: default_max_connections(),
            busy_timeout: default_busy_timeout(),
        }
    }
}
