pub mod node;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;
use trellis_cli::Cli;
use trellis_textstore::{BindingConfig, MemoryTextNodeStore, TrellisConfig};

/// The snapshot a command works on, plus the settings that came with it.
pub struct Session {
    pub store: Arc<MemoryTextNodeStore>,
    pub binding: BindingConfig,
    path: PathBuf,
    pretty: bool,
}

impl Session {
    /// Open the snapshot named by `--store`, else by the config.
    pub fn open(cli: &Cli, config: &TrellisConfig) -> Result<Self> {
        let path = match &cli.store {
            Some(path) => path.clone(),
            None => config.snapshot_path()?,
        };
        let store = MemoryTextNodeStore::open(&path)?;
        debug!(path = %path.display(), nodes = store.len(), "session opened");
        Ok(Self {
            store: Arc::new(store),
            binding: config.binding,
            path,
            pretty: config.store.pretty,
        })
    }

    /// Write the snapshot back.
    pub fn save(&self) -> Result<()> {
        self.store.save_to(&self.path, self.pretty)?;
        Ok(())
    }
}

/// Config from `--config`, else the default location.
pub fn load_config(cli: &Cli) -> Result<TrellisConfig> {
    let config = match &cli.config {
        Some(path) => TrellisConfig::load_from(path)?,
        None => TrellisConfig::load()?,
    };
    Ok(config)
}
