//! Storefront configuration.
//!
//! Read from a TOML file (path in `STOREFRONT_CONFIG`, else `storefront.toml` in the
//! working directory). Every key is optional:
//!
//! ```toml
//! collection = "products"
//! channel_capacity = 32
//! access = "authenticated"   # or "public"
//! log_filter = "info"
//! ```
//!
//! `STOREFRONT_COLLECTION` and `STOREFRONT_ACCESS` override the file.

use document_store::AccessRule;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "STOREFRONT_CONFIG";
pub const COLLECTION_VAR: &str = "STOREFRONT_COLLECTION";
pub const ACCESS_VAR: &str = "STOREFRONT_ACCESS";
const DEFAULT_PATH: &str = "storefront.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    /// Name of the product collection.
    pub collection: String,
    /// Bound of the collection's request queue.
    pub channel_capacity: usize,
    pub access: AccessRule,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            collection: "products".to_string(),
            channel_capacity: 32,
            access: AccessRule::Authenticated,
            log_filter: "info".to_string(),
        }
    }
}

impl StorefrontConfig {
    pub fn config_path() -> PathBuf {
        Self::explicit_path(|key| std::env::var_os(key).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH))
    }

    /// Loads the file at [`config_path`](Self::config_path), applies environment
    /// overrides, and validates.
    ///
    /// A missing `storefront.toml` means defaults. A missing file named by
    /// `STOREFRONT_CONFIG` is a [`ConfigError::ReadError`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with the environment read through `lookup`.
    pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match Self::explicit_path(|key| lookup(key).map(PathBuf::from)) {
            Some(path) => Self::read(&path)?,
            None => {
                let path = PathBuf::from(DEFAULT_PATH);
                if path.exists() {
                    Self::read(&path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates one file, without environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::read(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Overrides fields from `lookup` (the process environment in [`load`](Self::load)).
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(collection) = lookup(COLLECTION_VAR) {
            self.collection = collection;
        }
        if let Some(access) = lookup(ACCESS_VAR) {
            self.access = access
                .parse()
                .map_err(|message| ConfigError::ValidationError { message })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collection.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "collection name must not be blank".to_string(),
            });
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "channel_capacity must be > 0".to_string(),
            });
        }
        Ok(())
    }

    fn explicit_path(lookup: impl Fn(&str) -> Option<PathBuf>) -> Option<PathBuf> {
        lookup(CONFIG_PATH_VAR).filter(|path| !path.as_os_str().is_empty())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
