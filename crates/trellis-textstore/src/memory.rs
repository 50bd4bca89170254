//! In-memory text nodes and store, with JSON snapshots.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::node::{SharedTextNode, TextNode};
use crate::snapshot::Snapshot;
use crate::store::TextNodeStore;

#[derive(Debug, Default)]
struct NodeState {
    properties: BTreeMap<String, String>,
    created: bool,
    modified: bool,
}

/// A text node held in memory.
#[derive(Debug)]
pub struct MemoryTextNode {
    id: String,
    state: RwLock<NodeState>,
}

impl MemoryTextNode {
    /// A freshly created, unmodified node.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: RwLock::new(NodeState {
                created: true,
                ..NodeState::default()
            }),
        }
    }

    /// A node read back from persisted state.
    pub fn restored(id: impl Into<String>, properties: BTreeMap<String, String>) -> Self {
        Self {
            id: id.into(),
            state: RwLock::new(NodeState {
                properties,
                created: false,
                modified: false,
            }),
        }
    }
}

impl TextNode for MemoryTextNode {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_created(&self) -> bool {
        self.state.read().created
    }

    fn is_modified(&self) -> bool {
        self.state.read().modified
    }

    fn text(&self, key: &str) -> Option<String> {
        self.state.read().properties.get(key).cloned()
    }

    fn set_property(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.write();
        state.properties.insert(key.to_string(), value.to_string());
        state.modified = true;
        tracing::trace!(node = %self.id, key, "property set");
        Ok(())
    }

    fn remove_key(&self, key: &str) -> Result<()> {
        let mut state = self.state.write();
        state.properties.remove(key);
        state.modified = true;
        tracing::trace!(node = %self.id, key, "property removed");
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.state.read().properties.keys().cloned().collect()
    }

    fn properties(&self) -> BTreeMap<String, String> {
        self.state.read().properties.clone()
    }
}

/// Thread-safe store keeping every node in memory.
///
/// `fetch_or_create` is atomic: concurrent callers asking for the same id
/// all receive the one node that was inserted.
#[derive(Debug, Default)]
pub struct MemoryTextNodeStore {
    nodes: DashMap<String, Arc<MemoryTextNode>>,
}

impl MemoryTextNodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every node of `snapshot`; restored nodes report
    /// `is_created() == false`.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let store = Self::new();
        for (id, properties) in snapshot.nodes {
            let node = Arc::new(MemoryTextNode::restored(id.clone(), properties));
            store.nodes.insert(id, node);
        }
        store
    }

    /// Current contents as a snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for entry in self.nodes.iter() {
            snapshot
                .nodes
                .insert(entry.key().clone(), entry.value().properties());
        }
        snapshot
    }

    /// Load a snapshot file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let store = Self::from_snapshot(Snapshot::read(path)?);
        tracing::debug!(path = %path.display(), nodes = store.len(), "text store loaded");
        Ok(store)
    }

    /// Load a snapshot file, or start empty when it does not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            tracing::debug!(path = %path.display(), "no snapshot yet, starting empty");
            Ok(Self::new())
        }
    }

    /// Write all nodes to a snapshot file.
    pub fn save_to(&self, path: &Path, pretty: bool) -> Result<()> {
        self.snapshot().write(path, pretty)?;
        tracing::debug!(path = %path.display(), nodes = self.len(), "text store saved");
        Ok(())
    }

    /// The concrete node for `id`.
    pub fn node(&self, id: &str) -> Option<Arc<MemoryTextNode>> {
        self.nodes.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// All node ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.nodes.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        ids
    }

    pub fn remove(&self, id: &str) -> Option<SharedTextNode> {
        self.nodes.remove(id).map(|(_, node)| {
            tracing::debug!(node = id, "text node removed");
            node as SharedTextNode
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn ensure_node_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::EmptyNodeId);
    }
    Ok(())
}

impl TextNodeStore for MemoryTextNodeStore {
    fn create_with_id(&self, id: &str) -> Result<SharedTextNode> {
        ensure_node_id(id)?;
        match self.nodes.entry(id.to_string()) {
            Entry::Occupied(_) => Err(Error::DuplicateId(id.to_string())),
            Entry::Vacant(vacant) => {
                let node = Arc::new(MemoryTextNode::new(id));
                vacant.insert(Arc::clone(&node));
                tracing::debug!(node = id, "text node created");
                Ok(node)
            }
        }
    }

    fn fetch(&self, id: &str) -> Result<Option<SharedTextNode>> {
        Ok(self.node(id).map(|node| node as SharedTextNode))
    }

    fn fetch_or_create(&self, id: &str) -> Result<SharedTextNode> {
        ensure_node_id(id)?;
        let node = Arc::clone(
            self.nodes
                .entry(id.to_string())
                .or_insert_with(|| {
                    tracing::debug!(node = id, "text node created");
                    Arc::new(MemoryTextNode::new(id))
                })
                .value(),
        );
        Ok(node)
    }
}
