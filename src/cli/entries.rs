//! Entries command implementation

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::ManifestArgs;
use crate::config::Config;
use crate::manifest::ChunkKind;

/// List entry points in the manifest
#[derive(Args, Debug)]
pub struct EntriesCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Also list chunks only reachable through dynamic imports
    #[arg(long)]
    pub dynamic: bool,
}

impl EntriesCommand {
    pub fn execute(&self, config: Config) -> Result<()> {
        let manifest = self.manifest.open(config)?;

        if manifest.is_dev() {
            eprintln!(
                "{} Development mode has no manifest, entries are served as requested",
                "!".yellow().bold()
            );
            return Ok(());
        }

        let entries = manifest.entry_points();

        for key in &entries {
            println!("{}", key);
        }

        let dynamic = if self.dynamic {
            manifest.dynamic_entry_points()
        } else {
            Vec::new()
        };

        for key in &dynamic {
            println!("{} {}", key, "(dynamic)".dimmed());
        }

        let scripts = entries
            .iter()
            .filter(|key| ChunkKind::from_key(key) == ChunkKind::Script)
            .count();

        eprintln!(
            "\n{} {} entry point(s), {} script(s), {} dynamic",
            "✓".green().bold(),
            entries.len(),
            scripts,
            dynamic.len()
        );

        Ok(())
    }
}
