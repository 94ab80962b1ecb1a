//! Command-line interface for manifest-tags
//!
//! Provides the main CLI structure using clap with subcommands for:
//! - `tags`: Render preload, stylesheet and script tags for entry points
//! - `url`: Print the public URL of a single chunk
//! - `entries`: List the entry points of a manifest

mod entries;
mod tags;
mod url;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use crate::config::Config;
use crate::manifest::Manifest;

pub use entries::EntriesCommand;
pub use tags::TagsCommand;
pub use url::UrlCommand;

/// Resolve a bundler build manifest into HTML tags
#[derive(Parser, Debug)]
#[command(name = "manifest-tags")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to manifest-tags.toml config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render tags for one or more entry points
    Tags(TagsCommand),

    /// Print the public URL of a chunk
    Url(UrlCommand),

    /// List entry points in the manifest
    Entries(EntriesCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        if self.verbose {
            print_banner();
        }

        let config = Config::discover(self.config.as_deref())?;

        match &self.command {
            Commands::Tags(cmd) => cmd.execute(config),
            Commands::Url(cmd) => cmd.execute(config),
            Commands::Entries(cmd) => cmd.execute(config),
        }
    }
}

/// Manifest options shared by all subcommands; each overrides the config file
#[derive(Args, Debug, Clone, Default)]
pub struct ManifestArgs {
    /// Serve entries from the dev server instead of the manifest
    #[arg(long, env = "MANIFEST_TAGS_DEV")]
    pub dev: bool,

    /// Public URL prefix for assets
    #[arg(short, long)]
    pub base_path: Option<String>,

    /// Path to the bundler manifest
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

impl ManifestArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(&self, mut config: Config) -> Result<Config> {
        if self.dev {
            config.dev = true;
        }

        if let Some(base_path) = &self.base_path {
            config.base_path = base_path.clone();
        }

        if let Some(manifest) = &self.manifest {
            // Paths given on the command line are relative to the working directory
            config.manifest = manifest.clone();
            config.root = std::env::current_dir()?;
        }

        config.validate()?;

        Ok(config)
    }

    /// Build a manifest from the configuration with overrides applied
    pub fn open(&self, config: Config) -> Result<Manifest> {
        let config = self.apply(config)?;

        info!(
            "Opening manifest {} (dev: {}, base: {})",
            config.manifest_path().display(),
            config.dev,
            config.base_path
        );

        Manifest::from_config(&config).context("Failed to open manifest")
    }
}

/// Print the manifest-tags banner
fn print_banner() {
    eprintln!(
        "\n{} {} {}\n",
        "⚡".cyan(),
        "manifest-tags".bold().cyan(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}
