//! Rendering resolved tags as HTML

use crate::utils::{image_mime_type, join_url};

/// Output stream a tag belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Preload,
    Css,
    Js,
}

/// A single resource tag, carrying the output path relative to the base path
///
/// Two tags are the same tag exactly when they would render to the same line,
/// which makes `Tag` the dedup key for emitted output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `<link rel="modulepreload">` for a script chunk
    ModulePreload(String),
    /// `<link rel="preload" as="style">` for a stylesheet
    StylePreload(String),
    /// `<link rel="preload" as="image">` for an image
    ImagePreload(String),
    /// `<link rel="stylesheet">`
    Stylesheet(String),
    /// `<script type="module">`
    Script(String),
}

impl Tag {
    /// Path this tag points at, relative to the base path
    pub fn path(&self) -> &str {
        match self {
            Tag::ModulePreload(path)
            | Tag::StylePreload(path)
            | Tag::ImagePreload(path)
            | Tag::Stylesheet(path)
            | Tag::Script(path) => path,
        }
    }

    /// Stream the tag is written to
    pub fn stream(&self) -> Stream {
        match self {
            Tag::ModulePreload(_) | Tag::StylePreload(_) | Tag::ImagePreload(_) => Stream::Preload,
            Tag::Stylesheet(_) => Stream::Css,
            Tag::Script(_) => Stream::Js,
        }
    }
}

/// Renders tags against a configured base path
#[derive(Debug, Clone)]
pub struct TagFormatter<'a> {
    base_path: &'a str,
}

impl<'a> TagFormatter<'a> {
    /// Create a formatter for the given base path
    pub fn new(base_path: &'a str) -> Self {
        Self { base_path }
    }

    /// Public URL of an output path
    pub fn url(&self, path: &str) -> String {
        join_url(self.base_path, path)
    }

    /// Render one tag as a line of HTML
    pub fn render(&self, tag: &Tag) -> String {
        let url = self.url(tag.path());

        match tag {
            Tag::ModulePreload(_) => format!(r#"<link rel="modulepreload" href="{}" />"#, url),
            Tag::StylePreload(_) => {
                format!(r#"<link rel="preload" as="style" type="text/css" href="{}" />"#, url)
            }
            Tag::ImagePreload(path) => format!(
                r#"<link rel="preload" as="image" type="{}" href="{}" />"#,
                image_mime_type(path),
                url
            ),
            Tag::Stylesheet(_) => format!(r#"<link rel="stylesheet" href="{}" />"#, url),
            Tag::Script(_) => format!(r#"<script type="module" src="{}"></script>"#, url),
        }
    }

    /// Render a stream of tags, one per line
    pub fn render_all(&self, tags: &[Tag]) -> String {
        tags.iter()
            .map(|tag| self.render(tag))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
