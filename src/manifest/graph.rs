//! Chunk graph data structures

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::chunk::Chunk;
use super::error::{ManifestError, Result};

/// The chunk graph described by a bundler manifest
///
/// Keys are source-relative chunk keys; edges are the `imports` and
/// `dynamicImports` lists of each record. The graph is never mutated once
/// built, so a single instance can serve any number of resolutions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ChunkGraph {
    chunks: HashMap<String, Chunk>,
}

impl ChunkGraph {
    /// Parse a manifest from its JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a manifest file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let graph = Self::from_json(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded {} chunks from {}", graph.len(), path.display());

        Ok(graph)
    }

    /// Get a chunk by key
    pub fn get(&self, key: &str) -> Option<&Chunk> {
        self.chunks.get(key)
    }

    /// Check whether a chunk key exists
    pub fn contains(&self, key: &str) -> bool {
        self.chunks.contains_key(key)
    }

    /// Keys of all chunks marked as entry points, sorted
    pub fn entry_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .chunks
            .iter()
            .filter(|(_, chunk)| chunk.is_entry)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Keys of chunks that are only loaded through dynamic imports, sorted
    pub fn dynamic_entry_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .chunks
            .iter()
            .filter(|(_, chunk)| chunk.is_dynamic_entry && !chunk.is_entry)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Total number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if graph is empty
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

impl FromIterator<(String, Chunk)> for ChunkGraph {
    fn from_iter<I: IntoIterator<Item = (String, Chunk)>>(iter: I) -> Self {
        Self {
            chunks: iter.into_iter().collect(),
        }
    }
}
