//! Manifest resolution
//!
//! Turns a bundler manifest into the preload hints, stylesheet links and
//! script tags needed to load a set of entry points. In development mode the
//! manifest is bypassed and entries are served straight from the dev server.

mod chunk;
mod error;
mod format;
mod graph;
mod resolver;

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Config;

pub use chunk::{Chunk, ChunkKind};
pub use error::{ManifestError, Result};
pub use format::{Stream, Tag, TagFormatter};
pub use graph::ChunkGraph;
pub use resolver::{Resolution, ResolveOptions, Resolver};

/// Module path of the dev server client, relative to the base path
pub const DEV_CLIENT: &str = "@vite/client";

/// Rendered tags, one HTML line per tag in each stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tags {
    /// Preload hints
    pub preload: String,

    /// Stylesheet links
    pub css: String,

    /// Script tags
    pub js: String,
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let streams: Vec<&str> = [&self.preload, &self.css, &self.js]
            .into_iter()
            .map(String::as_str)
            .filter(|stream| !stream.is_empty())
            .collect();

        write!(f, "{}", streams.join("\n"))
    }
}

/// Where tags come from
#[derive(Debug, Clone)]
enum Mode {
    /// Entries are served unbundled by the dev server
    Development,
    /// Entries are resolved through the build manifest
    Production(ChunkGraph),
}

/// Entry point for creating tags and asset URLs
#[derive(Debug, Clone)]
pub struct Manifest {
    mode: Mode,

    /// Public base path prepended to every URL
    base_path: String,

    options: ResolveOptions,
}

impl Manifest {
    /// Create a manifest that passes entries through to the dev server
    pub fn development(base_path: impl Into<String>) -> Self {
        Self {
            mode: Mode::Development,
            base_path: base_path.into(),
            options: ResolveOptions::default(),
        }
    }

    /// Create a manifest resolving entries through a chunk graph
    pub fn production(graph: ChunkGraph, base_path: impl Into<String>) -> Self {
        Self {
            mode: Mode::Production(graph),
            base_path: base_path.into(),
            options: ResolveOptions::default(),
        }
    }

    /// Create a manifest, loading the manifest file unless in development mode
    pub fn load<P: AsRef<Path>>(dev: bool, manifest_path: P, base_path: impl Into<String>) -> Result<Self> {
        if dev {
            debug!("Development mode, manifest not loaded");
            return Ok(Self::development(base_path));
        }

        let graph = ChunkGraph::load(manifest_path)?;
        info!("Loaded manifest with {} chunks", graph.len());

        Ok(Self::production(graph, base_path))
    }

    /// Create a manifest from configuration, including preload flags
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut manifest = Self::load(config.dev, config.manifest_path(), config.base_path.clone())?;
        manifest.options = ResolveOptions {
            preload_images: config.preload.images,
            preload_styles: config.preload.styles,
        };
        Ok(manifest)
    }

    /// Enable preloading of images
    pub fn preload_images(&mut self) -> &mut Self {
        self.options.preload_images = true;
        self
    }

    /// Enable preloading of stylesheet entries
    pub fn preload_styles(&mut self) -> &mut Self {
        self.options.preload_styles = true;
        self
    }

    /// Whether this manifest is in development mode
    pub fn is_dev(&self) -> bool {
        matches!(self.mode, Mode::Development)
    }

    /// Current preload flags
    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Create the tags needed to load the given entry points
    pub fn create_tags<S: AsRef<str>>(&self, entries: &[S]) -> Result<Tags> {
        let formatter = TagFormatter::new(&self.base_path);

        match &self.mode {
            Mode::Development => {
                let mut js = vec![Tag::Script(DEV_CLIENT.to_string())];
                js.extend(entries.iter().map(|entry| Tag::Script(entry.as_ref().to_string())));

                Ok(Tags {
                    preload: String::new(),
                    css: String::new(),
                    js: formatter.render_all(&js),
                })
            }
            Mode::Production(graph) => {
                let resolution = Resolver::new(graph, self.options).resolve(entries)?;

                debug!(
                    "Resolved {} preload, {} css and {} js tags",
                    resolution.preload.len(),
                    resolution.css.len(),
                    resolution.js.len()
                );

                Ok(Tags {
                    preload: formatter.render_all(&resolution.preload),
                    css: formatter.render_all(&resolution.css),
                    js: formatter.render_all(&resolution.js),
                })
            }
        }
    }

    /// Public URL of a single chunk; non-entry chunks are allowed
    pub fn get_url(&self, key: &str) -> Result<String> {
        let formatter = TagFormatter::new(&self.base_path);

        match &self.mode {
            Mode::Development => Ok(formatter.url(key)),
            Mode::Production(graph) => {
                let chunk = graph
                    .get(key)
                    .ok_or_else(|| ManifestError::EntryNotFound(key.to_string()))?;
                Ok(formatter.url(chunk.output_path(key)))
            }
        }
    }

    /// Keys of all entry points in the manifest; empty in development mode
    pub fn entry_points(&self) -> Vec<&str> {
        match &self.mode {
            Mode::Development => Vec::new(),
            Mode::Production(graph) => graph.entry_keys(),
        }
    }

    /// Keys of chunks reachable only through dynamic imports; empty in development mode
    pub fn dynamic_entry_points(&self) -> Vec<&str> {
        match &self.mode {
            Mode::Development => Vec::new(),
            Mode::Production(graph) => graph.dynamic_entry_keys(),
        }
    }
}
