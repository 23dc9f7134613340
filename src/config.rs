//! Configuration loading and management
//!
//! The config record maps the logical name `database` to the path of the
//! task database:
//!
//! ```toml
//! [general]
//! database = "/home/user/.todo.json"
//! ```
//!
//! Locations are always passed in explicitly through [`ConfigPaths`]; nothing
//! here is process-global.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Application name used for the platform config directory
pub const APP_NAME: &str = "todo";

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// File name of the default database, placed in the home directory
pub const DEFAULT_DB_FILE_NAME: &str = ".todo.json";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// `[general]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Path to the task database
    #[serde(default = "default_db_path")]
    pub database: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database: default_db_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
        }
    }
}

/// Default database location: `~/.todo.json`
pub fn default_db_path() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DB_FILE_NAME)
}

impl Config {
    /// Config pointing at the given database
    pub fn with_database(database: impl Into<PathBuf>) -> Self {
        Self {
            general: GeneralConfig {
                database: database.into(),
            },
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                Error::NotInitialized(path.to_path_buf())
            } else {
                Error::ConfigFile {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        let config: Config =
            toml::from_str(&content).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        fs::write(path, content).map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.general.database.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "general.database cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where the config record lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    dir: PathBuf,
}

impl ConfigPaths {
    /// Use an explicit config directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Use `dir` if given, otherwise the platform config directory
    pub fn resolve(dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = dir {
            return Ok(Self::new(dir));
        }
        let dirs = ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
            Error::InvalidConfig("could not determine a config directory".to_string())
        })?;
        Ok(Self::new(dirs.config_dir()))
    }

    /// Path to the config directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the config file
    pub fn file(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Create the config directory and record `db_path` as the database
    pub fn init_app(&self, db_path: &Path) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::ConfigDir {
            path: self.dir.clone(),
            source,
        })?;

        let file = self.file();
        Config::with_database(db_path).save(&file)?;
        debug!(config = %file.display(), database = %db_path.display(), "wrote config");
        Ok(())
    }

    /// Load the config record
    pub fn load(&self) -> Result<Config> {
        Config::load(&self.file())
    }

    /// Database path recorded in the config file
    pub fn database_path(&self) -> Result<PathBuf> {
        Ok(self.load()?.general.database)
    }
}
