//! Configuration handling for manifest-tags
//!
//! Parses and manages manifest-tags.toml configuration files.

mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use schema::PreloadConfig;
use schema::{default_base_path, default_manifest};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "manifest-tags.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Serve entries from the dev server instead of the manifest
    #[serde(default)]
    pub dev: bool,

    /// Public URL prefix for assets
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Manifest file, relative to the config file
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Preload settings
    #[serde(default)]
    pub preload: PreloadConfig,

    /// Root directory (computed from config file location)
    #[serde(skip)]
    pub root: PathBuf,
}

impl Config {
    /// Load configuration from a file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let canonical_path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };

        let content = fs::read_to_string(&canonical_path)
            .with_context(|| format!("Failed to read config file: {}", canonical_path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", canonical_path.display()))?;

        // Set root directory to the directory containing the config file
        config.root = canonical_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        config.validate()?;

        Ok(config)
    }

    /// Load the given config file, or the default one if it exists
    ///
    /// Falls back to [`Config::default_config`] when no path was given and
    /// no default file is present.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default_config()),
        }
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            dev: false,
            base_path: default_base_path(),
            manifest: default_manifest(),
            preload: PreloadConfig::default(),
            root: PathBuf::from("."),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_path.is_empty() {
            anyhow::bail!("base_path must not be empty, use \"/\" for the site root");
        }

        if self.base_path.chars().any(char::is_whitespace) {
            anyhow::bail!("base_path must not contain whitespace: {:?}", self.base_path);
        }

        Ok(())
    }

    /// Get the absolute manifest path
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.manifest)
    }
}
