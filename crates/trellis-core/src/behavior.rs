//! Cross-cutting decorations attached to components after construction.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::component::ComponentBase;
use crate::error::Result;
use crate::model::SharedModel;

/// A decoration attached to a component.
pub trait Behavior: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    /// Called once when the behavior is attached.
    fn bind(&self, _component: &ComponentBase) {}
}

pub type SharedBehavior = Arc<dyn Behavior>;

/// Sets a markup attribute from a model.
pub struct AttributeModifier {
    attribute: String,
    value: SharedModel<String>,
}

impl AttributeModifier {
    pub fn new(attribute: impl Into<String>, value: SharedModel<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value,
        }
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Current attribute value.
    pub fn value(&self) -> Result<String> {
        self.value.get()
    }
}

impl fmt::Debug for AttributeModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeModifier")
            .field("attribute", &self.attribute)
            .finish_non_exhaustive()
    }
}

impl Behavior for AttributeModifier {
    fn name(&self) -> &str {
        &self.attribute
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Marks a component as a headline of the given level (h1..h6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlineBehavior {
    level: u8,
}

impl HeadlineBehavior {
    /// Levels outside `1..=6` are clamped.
    pub fn new(level: u8) -> Self {
        Self {
            level: level.clamp(1, 6),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

impl Default for HeadlineBehavior {
    fn default() -> Self {
        Self { level: 2 }
    }
}

impl Behavior for HeadlineBehavior {
    fn name(&self) -> &str {
        "headline"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn bind(&self, component: &ComponentBase) {
        tracing::trace!(component = component.id(), level = self.level, "headline bound");
    }
}
