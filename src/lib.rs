//! manifest-tags library
//!
//! Resolves a bundler build manifest into the preload hints, stylesheet
//! links and script tags needed to load a set of entry points.

pub mod cli;
pub mod config;
pub mod manifest;
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use manifest::{Manifest, ManifestError, Tags};
