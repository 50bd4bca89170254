use std::any::Any;
use std::fmt;

use crate::builder::{Constructible, Constructors};
use crate::component::{Component, ComponentBase};
use crate::error::Result;
use crate::model::{self, SharedModel};

/// Displays the string value of its model.
pub struct Label {
    base: ComponentBase,
    model: Option<SharedModel<String>>,
}

impl Label {
    /// A label without a model renders nothing.
    pub fn new(id: &str) -> Self {
        Self {
            base: ComponentBase::new(id),
            model: None,
        }
    }

    pub fn with_model(id: &str, model: SharedModel<String>) -> Self {
        Self {
            base: ComponentBase::new(id),
            model: Some(model),
        }
    }

    pub fn with_text(id: &str, text: impl Into<String>) -> Self {
        Self::with_model(id, model::of(text.into()))
    }

    pub fn model(&self) -> Option<&SharedModel<String>> {
        self.model.as_ref()
    }

    /// Current text; empty when the label has no model.
    pub fn text(&self) -> Result<String> {
        match &self.model {
            Some(model) => model.get(),
            None => Ok(String::new()),
        }
    }
}

impl Component for Label {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn detach_models(&self) {
        if let Some(model) = &self.model {
            model.detach();
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Label")
            .field("base", &self.base)
            .field("has_model", &self.model.is_some())
            .finish()
    }
}

impl Constructible for Label {
    fn constructors() -> Constructors<Self> {
        Constructors::new()
            .with(|id, ()| Label::new(id))
            .with(|id, (model,): (SharedModel<String>,)| Label::with_model(id, model))
            .with(|id, (text,): (String,)| Label::with_text(id, text))
    }
}
