//! Forms editing several properties of one text node.
//!
//! Each field is a label plus a text input whose model is a
//! [`crate::TextNodeProperty`] of the form's node, so submitting a value
//! writes straight to the node (blank values remove the key).

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use trellis_core::{
    model, AttributeModifier, Component, ComponentBase, Container, InputKind, Label, SharedModel,
    Supplier, TextInput,
};

use crate::error::{Error, Result};
use crate::model::SharedTextNodeModel;

#[derive(Clone)]
struct FieldDescriptor {
    key: String,
    kind: InputKind,
    label: SharedModel<String>,
    default: Option<SharedModel<String>>,
}

/// Supplier of [`TextNodeForm`]s over one node model.
#[derive(Clone)]
pub struct TextNodeFormBuilder {
    model: SharedTextNodeModel,
    fields: Vec<FieldDescriptor>,
}

impl TextNodeFormBuilder {
    pub fn new(model: SharedTextNodeModel) -> Self {
        Self {
            model,
            fields: Vec::new(),
        }
    }

    /// Single-line field for `key`; `default` is shown while the key is absent.
    pub fn add_text_field(
        self,
        key: impl Into<String>,
        label: SharedModel<String>,
        default: Option<SharedModel<String>>,
    ) -> Self {
        self.add_field(key.into(), InputKind::Field, label, default)
    }

    /// Multi-line area for `key`.
    pub fn add_text_area(
        self,
        key: impl Into<String>,
        label: SharedModel<String>,
        default: Option<SharedModel<String>>,
    ) -> Self {
        self.add_field(key.into(), InputKind::Area, label, default)
    }

    fn add_field(
        mut self,
        key: String,
        kind: InputKind,
        label: SharedModel<String>,
        default: Option<SharedModel<String>>,
    ) -> Self {
        let field = FieldDescriptor {
            key,
            kind,
            label,
            default,
        };
        match self.fields.iter_mut().find(|f| f.key == field.key) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }
}

impl fmt::Debug for TextNodeFormBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.keys().collect();
        f.debug_struct("TextNodeFormBuilder")
            .field("node", &self.model.id())
            .field("fields", &keys)
            .finish()
    }
}

impl Supplier<TextNodeForm> for TextNodeFormBuilder {
    fn resolve(&self, id: &str) -> trellis_core::Result<TextNodeForm> {
        if id.is_empty() {
            return Err(trellis_core::Error::EmptyId);
        }
        let form = TextNodeForm::build(id, Arc::clone(&self.model), &self.fields);
        tracing::debug!(form = id, node = self.model.id(), fields = self.fields.len(), "text node form built");
        Ok(form)
    }
}

struct FormField {
    key: String,
    label: Arc<Label>,
    input: Arc<TextInput>,
}

/// Labelled inputs bound to the properties of one text node.
pub struct TextNodeForm {
    container: Container,
    model: SharedTextNodeModel,
    fields: Vec<FormField>,
}

impl TextNodeForm {
    pub fn builder(model: SharedTextNodeModel) -> TextNodeFormBuilder {
        TextNodeFormBuilder::new(model)
    }

    fn build(id: &str, model: SharedTextNodeModel, descriptors: &[FieldDescriptor]) -> Self {
        let container = Container::new(id);
        let fields = descriptors
            .iter()
            .map(|descriptor| {
                let key = &descriptor.key;
                // One row per field, so ids only have to be unique within a row.
                let row = Container::new(&container.new_child_id());
                let label = row.insert(Arc::new(Label::with_model(
                    &format!("{key}-label"),
                    Arc::clone(&descriptor.label),
                )));
                label.add_behavior(Arc::new(AttributeModifier::new(
                    "for",
                    model::of(key.clone()),
                )));
                let property = match &descriptor.default {
                    Some(default) => model.property_with_default(key, Arc::clone(default)),
                    None => model.property(key),
                };
                let input = row.insert(Arc::new(TextInput::with_model(
                    key,
                    descriptor.kind,
                    Arc::new(property),
                )));
                container.insert(Arc::new(row));
                FormField {
                    key: key.clone(),
                    label,
                    input,
                }
            })
            .collect();
        Self {
            container,
            model,
            fields,
        }
    }

    pub fn node_model(&self) -> &SharedTextNodeModel {
        &self.model
    }

    /// One row per field, in field order; each row holds the label and the
    /// input.
    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    fn field(&self, key: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn input(&self, key: &str) -> Option<&Arc<TextInput>> {
        self.field(key).map(|f| &f.input)
    }

    pub fn label(&self, key: &str) -> Option<&Arc<Label>> {
        self.field(key).map(|f| &f.label)
    }

    /// Write submitted values through the inputs.
    ///
    /// Every key is checked before anything is written; an unknown key fails
    /// with [`Error::UnknownField`] and leaves the node untouched.
    pub fn submit<I, K, V>(&self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut pending = Vec::new();
        for (key, value) in values {
            let key = key.as_ref();
            let field = self
                .field(key)
                .ok_or_else(|| Error::UnknownField(key.to_string()))?;
            pending.push((field, value.into()));
        }
        for (field, value) in pending {
            field.input.set_value(value)?;
        }
        tracing::debug!(form = self.id(), node = self.model.id(), "form submitted");
        Ok(())
    }
}

impl Component for TextNodeForm {
    fn base(&self) -> &ComponentBase {
        self.container.base()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn detach_models(&self) {
        self.container.detach_models();
        self.model.detach();
    }
}

impl fmt::Debug for TextNodeForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<&str> = self.keys().collect();
        f.debug_struct("TextNodeForm")
            .field("base", self.base())
            .field("node", &self.model.id())
            .field("fields", &keys)
            .finish()
    }
}
