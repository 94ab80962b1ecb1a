//! Utility functions and helpers

use std::path::Path;

/// Join a base path and a relative output path into a public URL
///
/// Exactly one `/` separates the two halves. An empty base leaves the path
/// untouched.
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }

    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Get the lowercase extension of a path, if any
pub fn extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Get the MIME type of an image from its extension
pub fn image_mime_type(path: &str) -> String {
    let ext = extension(path).unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" | "pjpeg" | "pjp" => "image/jpeg".to_string(),
        "svg" => "image/svg+xml".to_string(),
        "ico" | "cur" => "image/x-icon".to_string(),
        "tif" | "tiff" => "image/tiff".to_string(),
        "" => "image/*".to_string(),
        other => format!("image/{}", other),
    }
}
