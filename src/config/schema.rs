//! Configuration schema definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub(super) fn default_base_path() -> String {
    "/".to_string()
}

pub(super) fn default_manifest() -> PathBuf {
    PathBuf::from("dist/.vite/manifest.json")
}

/// Preload configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadConfig {
    /// Preload images referenced by entry points
    #[serde(default)]
    pub images: bool,

    /// Preload stylesheet entry points
    #[serde(default)]
    pub styles: bool,
}
