//! Dependency resolution over the chunk graph
//!
//! Walks static imports from the requested entry points and collects the
//! tags each touched chunk contributes, deduplicated across all entries of a
//! single call.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::chunk::{Chunk, ChunkKind};
use super::error::{ManifestError, Result};
use super::format::{Stream, Tag};
use super::graph::ChunkGraph;

/// Flags controlling which optional preload hints are emitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Preload images referenced by entry chunks, and image entries
    pub preload_images: bool,

    /// Preload stylesheet entries before linking them
    pub preload_styles: bool,
}

/// Tags collected for one resolution, in emission order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub preload: Vec<Tag>,
    pub css: Vec<Tag>,
    pub js: Vec<Tag>,
}

/// Per-call traversal state
#[derive(Debug, Default)]
struct Accumulator {
    /// Chunk keys already traversed
    visited: HashSet<String>,

    /// Tags already emitted
    seen: HashSet<Tag>,

    resolution: Resolution,
}

impl Accumulator {
    /// Append a tag to its stream unless it was emitted before
    fn emit(&mut self, tag: Tag) {
        if !self.seen.insert(tag.clone()) {
            return;
        }

        let stream = match tag.stream() {
            Stream::Preload => &mut self.resolution.preload,
            Stream::Css => &mut self.resolution.css,
            Stream::Js => &mut self.resolution.js,
        };
        stream.push(tag);
    }

    fn emit_css(&mut self, chunk: &Chunk) {
        for css in &chunk.css {
            self.emit(Tag::Stylesheet(css.clone()));
        }
    }
}

/// Resolves entry points against a chunk graph
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'g> {
    graph: &'g ChunkGraph,
    options: ResolveOptions,
}

impl<'g> Resolver<'g> {
    /// Create a new resolver
    pub fn new(graph: &'g ChunkGraph, options: ResolveOptions) -> Self {
        Self { graph, options }
    }

    /// Resolve the given entry keys, in order
    ///
    /// Fails on the first key that is missing from the graph or is not an
    /// entry point; no partial result is returned.
    pub fn resolve<S: AsRef<str>>(&self, entries: &[S]) -> Result<Resolution> {
        let mut acc = Accumulator::default();

        for entry in entries {
            self.resolve_entry(entry.as_ref(), &mut acc)?;
        }

        Ok(acc.resolution)
    }

    fn resolve_entry(&self, key: &str, acc: &mut Accumulator) -> Result<()> {
        let chunk = self
            .graph
            .get(key)
            .ok_or_else(|| ManifestError::EntryNotFound(key.to_string()))?;

        if !chunk.is_entry {
            return Err(ManifestError::NotAnEntryPoint(key.to_string()));
        }

        let file = chunk.output_path(key).to_string();
        let kind = ChunkKind::from_key(key);

        debug!("Resolving entry {} ({:?}) -> {}", key, kind, file);

        match kind {
            ChunkKind::Script => {
                acc.visited.insert(key.to_string());

                acc.emit(Tag::ModulePreload(file.clone()));
                acc.emit(Tag::Script(file));
                acc.emit_css(chunk);

                if self.options.preload_images {
                    for asset in &chunk.assets {
                        // Fonts and other assets cannot be preloaded as images
                        if ChunkKind::from_key(asset) == ChunkKind::Image {
                            acc.emit(Tag::ImagePreload(asset.clone()));
                        }
                    }
                }

                self.traverse(chunk, acc);
            }
            ChunkKind::Style => {
                if self.options.preload_styles {
                    acc.emit(Tag::StylePreload(file.clone()));
                }
                acc.emit(Tag::Stylesheet(file));
            }
            ChunkKind::Image => {
                if self.options.preload_images {
                    acc.emit(Tag::ImagePreload(file));
                }
            }
        }

        Ok(())
    }

    /// Depth-first walk of static imports in listed order
    fn traverse(&self, chunk: &'g Chunk, acc: &mut Accumulator) {
        let mut stack: Vec<&'g str> = chunk.imports.iter().rev().map(String::as_str).collect();

        while let Some(import) = stack.pop() {
            if !acc.visited.insert(import.to_string()) {
                continue;
            }

            let Some(dep) = self.graph.get(import) else {
                warn!("Skipping import missing from manifest: {}", import);
                continue;
            };

            debug!("Traversing static import {}", import);

            acc.emit(Tag::ModulePreload(dep.output_path(import).to_string()));
            acc.emit_css(dep);

            stack.extend(dep.imports.iter().rev().map(String::as_str));
        }
    }
}
