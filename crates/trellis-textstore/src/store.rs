//! The text node store contract.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::node::SharedTextNode;

/// Factory and persistence backend for [`crate::TextNode`]s.
///
/// A store holds at most one node per id. Implementors provide
/// [`TextNodeStore::create_with_id`] and [`TextNodeStore::fetch`]; the rest
/// is derived from those two.
pub trait TextNodeStore: Send + Sync {
    /// Create an empty node. Fails with [`Error::DuplicateId`] if `id` is taken.
    fn create_with_id(&self, id: &str) -> Result<SharedTextNode>;

    fn fetch(&self, id: &str) -> Result<Option<SharedTextNode>>;

    /// Create a node under a fresh random id.
    fn create(&self) -> Result<SharedTextNode> {
        self.create_with_id(&Uuid::new_v4().to_string())
    }

    /// Existing node for `id`, or a new one.
    ///
    /// Stores that can insert atomically should override this. The default
    /// tolerates losing a creation race by fetching the winner's node.
    fn fetch_or_create(&self, id: &str) -> Result<SharedTextNode> {
        if let Some(node) = self.fetch(id)? {
            return Ok(node);
        }
        match self.create_with_id(id) {
            Err(Error::DuplicateId(_)) => {
                tracing::warn!(node = id, "lost creation race, fetching existing node");
                self.fetch(id)?
                    .ok_or_else(|| Error::NodeNotFound(id.to_string()))
            }
            other => other,
        }
    }

    /// Existing node for `id`, failing with [`Error::NodeNotFound`].
    fn require(&self, id: &str) -> Result<SharedTextNode> {
        self.fetch(id)?
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))
    }
}

pub type SharedTextNodeStore = Arc<dyn TextNodeStore>;
