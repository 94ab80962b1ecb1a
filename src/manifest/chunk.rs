//! Manifest chunk records

use std::path::Path;

use serde::Deserialize;

/// Kind of a chunk, derived from the extension of its key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    /// JavaScript-like chunk - preloaded as a module and loaded with a script tag
    Script,
    /// Stylesheet chunk - linked as a stylesheet
    Style,
    /// Image chunk - only ever preloaded
    Image,
}

impl ChunkKind {
    /// Determine chunk kind from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "css" | "scss" | "sass" | "less" | "styl" | "stylus" | "pcss" | "postcss" | "sss" => {
                ChunkKind::Style
            }
            "png" | "jpg" | "jpeg" | "jfif" | "pjpeg" | "pjp" | "gif" | "svg" | "ico" | "webp"
            | "avif" | "apng" | "bmp" | "tif" | "tiff" | "cur" => ChunkKind::Image,
            _ => ChunkKind::Script,
        }
    }

    /// Determine chunk kind from a chunk key such as `src/main.ts`
    pub fn from_key(key: &str) -> Self {
        Path::new(key)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(ChunkKind::from_extension)
            .unwrap_or(ChunkKind::Script)
    }
}

/// One record of the bundler manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// Hashed output path, relative to the build root
    #[serde(default)]
    pub file: Option<String>,

    /// Source path the chunk was built from
    #[serde(default)]
    pub src: Option<String>,

    /// Whether the chunk may be requested as an entry point
    #[serde(default)]
    pub is_entry: bool,

    /// Whether the chunk is the target of a dynamic import
    #[serde(default)]
    pub is_dynamic_entry: bool,

    /// Chunk keys imported statically
    #[serde(default)]
    pub imports: Vec<String>,

    /// Chunk keys imported lazily; never preloaded
    #[serde(default)]
    pub dynamic_imports: Vec<String>,

    /// Stylesheet output paths
    #[serde(default)]
    pub css: Vec<String>,

    /// Other output paths (images, fonts, icons)
    #[serde(default)]
    pub assets: Vec<String>,
}

impl Chunk {
    /// Output path of this chunk, falling back to `src` and then the key itself
    pub fn output_path<'a>(&'a self, key: &'a str) -> &'a str {
        self.file
            .as_deref()
            .or(self.src.as_deref())
            .unwrap_or(key)
    }
}
