//! URL command implementation

use anyhow::Result;
use clap::Args;

use super::ManifestArgs;
use crate::config::Config;

/// Print the public URL of a chunk
#[derive(Args, Debug)]
pub struct UrlCommand {
    /// Chunk key, e.g. `src/views/foo.js`
    pub key: String,

    #[command(flatten)]
    pub manifest: ManifestArgs,
}

impl UrlCommand {
    pub fn execute(&self, config: Config) -> Result<()> {
        let manifest = self.manifest.open(config)?;

        println!("{}", manifest.get_url(&self.key)?);

        Ok(())
    }
}
