//! Configuration file handling
//!
//! An optional JSON file. Every field has a default, so running without a
//! config file is the same as loading `{}`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::{HttpConfigError, HttpServerConfig};

/// Directory name looked up next to the executable
pub const DEFAULT_ASSETS_DIR_NAME: &str = "assets";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Invalid config: {0}")]
    Http(#[from] HttpConfigError),

    #[error("Cannot locate default asset directory: {0}")]
    NoAssetDir(String),
}

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Asset directory; relative paths resolve against the config file.
    /// Defaults to `assets/` next to the executable.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config: Config =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;

        if let (Some(dir), Some(base)) = (&config.assets_dir, path.parent()) {
            if dir.is_relative() {
                config.assets_dir = Some(base.join(dir));
            }
        }

        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.assets_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("assets_dir must not be empty".into()));
            }
        }

        self.http.validate()?;

        Ok(())
    }

    /// Picks the asset directory: explicit override, then config, then the
    /// directory next to the running executable.
    pub fn resolve_assets_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.assets_dir {
            return Ok(dir.clone());
        }

        let exe = env::current_exe().map_err(|e| ConfigError::NoAssetDir(e.to_string()))?;
        let parent = exe
            .parent()
            .ok_or_else(|| ConfigError::NoAssetDir(format!("{} has no parent", exe.display())))?;
        Ok(parent.join(DEFAULT_ASSETS_DIR_NAME))
    }
}
