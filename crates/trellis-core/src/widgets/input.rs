use std::any::Any;
use std::fmt;

use crate::builder::{Constructible, Constructors};
use crate::component::{Component, ComponentBase};
use crate::error::Result;
use crate::model::{self, SharedModel};

/// Single-line field or multi-line area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Field,
    Area,
}

/// Text input writing through to its model.
pub struct TextInput {
    base: ComponentBase,
    kind: InputKind,
    model: SharedModel<String>,
}

impl TextInput {
    /// Input over a fresh, empty model.
    pub fn new(id: &str, kind: InputKind) -> Self {
        Self::with_model(id, kind, model::of(String::new()))
    }

    pub fn with_model(id: &str, kind: InputKind, model: SharedModel<String>) -> Self {
        Self {
            base: ComponentBase::new(id),
            kind,
            model,
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn model(&self) -> &SharedModel<String> {
        &self.model
    }

    pub fn value(&self) -> Result<String> {
        self.model.get()
    }

    /// Submit a value. Disabled inputs ignore submissions.
    pub fn set_value(&self, value: impl Into<String>) -> Result<()> {
        if !self.is_enabled() {
            tracing::trace!(input = self.id(), "ignoring value for disabled input");
            return Ok(());
        }
        self.model.set(value.into())
    }
}

impl Component for TextInput {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn detach_models(&self) {
        self.model.detach();
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("base", &self.base)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Constructible for TextInput {
    fn constructors() -> Constructors<Self> {
        Constructors::new()
            .with(|id, ()| TextInput::new(id, InputKind::Field))
            .with(|id, (kind,): (InputKind,)| TextInput::new(id, kind))
            .with(|id, (model,): (SharedModel<String>,)| {
                TextInput::with_model(id, InputKind::Field, model)
            })
            .with(|id, (model, kind): (SharedModel<String>, InputKind)| {
                TextInput::with_model(id, kind, model)
            })
    }
}
