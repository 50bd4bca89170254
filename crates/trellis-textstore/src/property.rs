//! Per-key views of a bound text node.

use std::fmt;

use trellis_core::{Model, SharedModel};

use crate::error::Result;
use crate::model::SharedTextNodeModel;
use crate::node::is_blank;

/// One property of the node behind a [`crate::TextNodeModel`].
///
/// As a [`Model<String>`] it reads an absent key as the empty string, so it
/// can back labels and inputs directly.
#[derive(Clone)]
pub struct TextNodeProperty {
    model: SharedTextNodeModel,
    key: String,
    default: Option<SharedModel<String>>,
}

impl TextNodeProperty {
    pub fn new(model: SharedTextNodeModel, key: impl Into<String>) -> Self {
        Self {
            model,
            key: key.into(),
            default: None,
        }
    }

    pub fn with_default(
        model: SharedTextNodeModel,
        key: impl Into<String>,
        default: SharedModel<String>,
    ) -> Self {
        Self {
            model,
            key: key.into(),
            default: Some(default),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn node_model(&self) -> &SharedTextNodeModel {
        &self.model
    }

    /// Stored value, else the default's current value, else `None`.
    pub fn value(&self) -> Result<Option<String>> {
        let node = self.model.require_node()?;
        let default = match &self.default {
            Some(default) => Some(default.get()?),
            None => None,
        };
        Ok(node.text_or(&self.key, default.as_deref()))
    }

    /// Store `value`; `None` or a blank value removes the key.
    pub fn set_value(&self, value: Option<&str>) -> Result<()> {
        let node = self.model.require_node()?;
        match value {
            Some(value) if !is_blank(value) => node.set_property(&self.key, value),
            _ => node.remove_key(&self.key),
        }
    }
}

impl Model<String> for TextNodeProperty {
    fn get(&self) -> trellis_core::Result<String> {
        Ok(self.value()?.unwrap_or_default())
    }

    fn set(&self, value: String) -> trellis_core::Result<()> {
        Ok(self.set_value(Some(&value))?)
    }

    fn detach(&self) {
        self.model.detach();
    }
}

impl fmt::Debug for TextNodeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNodeProperty")
            .field("node", &self.model.id())
            .field("key", &self.key)
            .field("has_default", &self.default.is_some())
            .finish()
    }
}
