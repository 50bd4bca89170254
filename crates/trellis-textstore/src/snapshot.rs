//! JSON snapshot format for [`crate::MemoryTextNodeStore`].
//!
//! ```json
//! { "version": 1, "nodes": { "page1": { "title": "Hello" } } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Snapshot format version written by this crate.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    /// Node id to its properties.
    #[serde(default)]
    pub nodes: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            nodes: BTreeMap::new(),
        }
    }
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot, rejecting versions other than [`SNAPSHOT_VERSION`].
    pub fn from_json(contents: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(contents)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(Error::UnsupportedSnapshot(snapshot.version));
        }
        Ok(snapshot)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn write(&self, path: &Path, pretty: bool) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json(pretty)?)?;
        Ok(())
    }
}
