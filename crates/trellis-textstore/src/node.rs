//! Text nodes: identified bags of string properties with dirty tracking.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A keyed bag of string properties.
///
/// An absent key is different from a key holding the empty string: only
/// [`TextNode::set_property`] can store the latter, [`TextNode::set_text`]
/// treats blank values as a removal.
pub trait TextNode: Send + Sync + fmt::Debug {
    fn id(&self) -> &str;

    /// True until the node has been read back from persisted state.
    fn is_created(&self) -> bool;

    /// True after any write or removal.
    fn is_modified(&self) -> bool;

    fn text(&self, key: &str) -> Option<String>;

    /// Store `value` verbatim and mark the node modified.
    fn set_property(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key` and mark the node modified, whether or not it was set.
    fn remove_key(&self, key: &str) -> Result<()>;

    /// Keys currently set, in sorted order.
    fn keys(&self) -> Vec<String>;

    /// Stored value, or `default` when the key is absent.
    fn text_or(&self, key: &str, default: Option<&str>) -> Option<String> {
        self.text(key).or_else(|| default.map(str::to_string))
    }

    fn require_text(&self, key: &str) -> Result<String> {
        self.text(key).ok_or_else(|| Error::KeyNotFound {
            node: self.id().to_string(),
            key: key.to_string(),
        })
    }

    /// Store `value`, or remove the key when `value` is blank.
    fn set_text(&self, key: &str, value: &str) -> Result<()> {
        if is_blank(value) {
            self.remove_key(key)
        } else {
            self.set_property(key, value)
        }
    }

    fn properties(&self) -> BTreeMap<String, String> {
        self.keys()
            .into_iter()
            .filter_map(|key| self.text(&key).map(|value| (key, value)))
            .collect()
    }
}

pub type SharedTextNode = Arc<dyn TextNode>;

/// Empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
