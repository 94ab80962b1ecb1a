//! Tags command implementation

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use super::ManifestArgs;
use crate::config::Config;

/// Render tags for one or more entry points
#[derive(Args, Debug)]
pub struct TagsCommand {
    /// Entry point keys, in load order
    #[arg(required = true)]
    pub entries: Vec<String>,

    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Preload images referenced by entry points
    #[arg(long)]
    pub preload_images: bool,

    /// Preload stylesheet entry points
    #[arg(long)]
    pub preload_styles: bool,

    /// Print the three tag streams as a JSON object
    #[arg(long)]
    pub json: bool,
}

impl TagsCommand {
    pub fn execute(&self, config: Config) -> Result<()> {
        let mut manifest = self.manifest.open(config)?;

        if self.preload_images {
            manifest.preload_images();
        }
        if self.preload_styles {
            manifest.preload_styles();
        }

        info!("Creating tags for {} entries", self.entries.len());
        let tags = manifest.create_tags(self.entries.as_slice())?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&tags)?);
        } else {
            println!("{}", tags);
        }

        eprintln!(
            "{} Rendered tags for {}",
            "✓".green().bold(),
            self.entries.join(", ").cyan()
        );

        Ok(())
    }
}
