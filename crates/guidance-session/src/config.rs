//! Session configuration
//!
//! Read from TOML:
//!
//! ```toml
//! data_dir = "./guidance-data"
//! classes = ["3/1", "3/2"]
//!
//! [remote]
//! base_url = "https://kv.example.org"
//! bucket = "school-2024"
//! timeout_secs = 5
//! ```

use guidance_catalog::Registry;
use guidance_store::RemoteConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        /// Config path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    /// Directory of the local snapshot
    pub data_dir: PathBuf,
    /// Class labels offered before anyone registered
    pub classes: Vec<String>,
    /// Remote mirror; local-only when absent
    pub remote: Option<RemoteConfig>,
}

impl GuidanceConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// - `ConfigError::Parse` on malformed input
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// - `ConfigError::Read` if the file cannot be read
    /// - `ConfigError::Parse` on malformed input
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// With snapshot directory
    #[inline]
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// With seeded classes
    #[must_use]
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// With remote mirror
    #[inline]
    #[must_use]
    pub fn with_remote(mut self, remote: RemoteConfig) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Registry holding the configured classes
    #[must_use]
    pub fn seed_registry(&self) -> Registry {
        Registry::with_classes(&self.classes)
    }
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./guidance-data"),
            classes: Vec::new(),
            remote: None,
        }
    }
}
