//! A one-column page section: headline plus content, viewable or editable.

use std::fmt;
use std::sync::Arc;

use trellis_core::{
    model, provide, AttributeModifier, Component, Container, HeadlineBehavior, Label,
    PageParameters, SharedModel, Supplier,
};

use crate::editor::{default_value_model, Mode};
use crate::form::TextNodeForm;
use crate::model::{SharedTextNodeModel, TextNodeModel};
use crate::store::SharedTextNodeStore;

/// Node key of the headline text.
pub const HEADLINE_KEY: &str = "headline";

/// Node key of the column content.
pub const CONTENT_KEY: &str = "columnContent";

/// Supplier of a section backed by one text node.
///
/// In view mode the container holds a headline label and a content label;
/// their defaults show only until the node is first edited. In edit mode it
/// holds a single form over the same two keys.
#[derive(Clone)]
pub struct OneColumnHeadline {
    store: SharedTextNodeStore,
    node_id: String,
    mode: Mode,
    headline_level: u8,
    headline_default: SharedModel<String>,
    content_default: SharedModel<String>,
}

impl OneColumnHeadline {
    pub fn new(store: SharedTextNodeStore, node_id: impl Into<String>, mode: Mode) -> Self {
        Self {
            store,
            node_id: node_id.into(),
            mode,
            headline_level: 2,
            headline_default: model::of(String::new()),
            content_default: model::of(String::new()),
        }
    }

    /// Mode taken from the page parameters, see [`Mode::from_parameters`].
    pub fn from_parameters(
        store: SharedTextNodeStore,
        node_id: impl Into<String>,
        parameters: &PageParameters,
    ) -> Self {
        Self::new(store, node_id, Mode::from_parameters(parameters))
    }

    /// Section stored in the node named after page type `P`.
    pub fn for_page<P: ?Sized + 'static>(store: SharedTextNodeStore, mode: Mode) -> Self {
        Self::new(store, std::any::type_name::<P>(), mode)
    }

    pub fn with_headline_default(mut self, default: SharedModel<String>) -> Self {
        self.headline_default = default;
        self
    }

    pub fn with_content_default(mut self, default: SharedModel<String>) -> Self {
        self.content_default = default;
        self
    }

    pub fn with_headline_level(mut self, level: u8) -> Self {
        self.headline_level = level;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    fn view(&self, container: &Container, node_model: &SharedTextNodeModel) -> trellis_core::Result<()> {
        let headline: SharedModel<String> = Arc::new(node_model.property_with_default(
            HEADLINE_KEY,
            default_value_model(Arc::clone(node_model), Arc::clone(&self.headline_default)),
        ));
        container.add(
            &provide::<Label>()
                .with_model(headline)
                .with_behavior(Arc::new(HeadlineBehavior::new(self.headline_level))),
        )?;

        let content: SharedModel<String> = Arc::new(node_model.property_with_default(
            CONTENT_KEY,
            default_value_model(Arc::clone(node_model), Arc::clone(&self.content_default)),
        ));
        container.add(&provide::<Label>().with_model(content))?;
        Ok(())
    }

    fn edit(&self, container: &Container, node_model: &SharedTextNodeModel) -> trellis_core::Result<()> {
        let form = container.add(
            &TextNodeForm::builder(Arc::clone(node_model))
                .add_text_field(
                    HEADLINE_KEY,
                    model::of("Headline".to_string()),
                    Some(Arc::clone(&self.headline_default)),
                )
                .add_text_area(
                    CONTENT_KEY,
                    model::of("Content".to_string()),
                    Some(Arc::clone(&self.content_default)),
                ),
        )?;
        if let Some(content) = form.input(CONTENT_KEY) {
            content.add_behavior(Arc::new(AttributeModifier::new(
                "rows",
                model::of("20".to_string()),
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for OneColumnHeadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneColumnHeadline")
            .field("node_id", &self.node_id)
            .field("mode", &self.mode)
            .field("headline_level", &self.headline_level)
            .finish_non_exhaustive()
    }
}

impl Supplier<Container> for OneColumnHeadline {
    fn resolve(&self, id: &str) -> trellis_core::Result<Container> {
        if id.is_empty() {
            return Err(trellis_core::Error::EmptyId);
        }
        let node_model = Arc::new(TextNodeModel::new(Arc::clone(&self.store), self.node_id.clone()));
        let container = Container::new(id);
        match self.mode {
            Mode::View => self.view(&container, &node_model)?,
            Mode::Edit => self.edit(&container, &node_model)?,
        }
        tracing::debug!(section = id, node = %self.node_id, mode = ?self.mode, "headline section built");
        Ok(container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTextNodeStore;
    use crate::store::TextNodeStore;
    use trellis_core::Panel;

    fn labels(container: &Container) -> Vec<String> {
        container
            .children()
            .iter()
            .map(|child| {
                child
                    .as_any()
                    .downcast_ref::<Label>()
                    .unwrap()
                    .text()
                    .unwrap()
            })
            .collect()
    }

    fn section(store: &Arc<MemoryTextNodeStore>, mode: Mode) -> OneColumnHeadline {
        OneColumnHeadline::new(store.clone(), "home", mode)
            .with_headline_default(model::of("Welcome".to_string()))
            .with_content_default(model::of("Nothing here yet".to_string()))
    }

    #[test]
    fn test_view_shows_defaults_until_edited() {
        let store = Arc::new(MemoryTextNodeStore::new());
        let container = section(&store, Mode::View).resolve("section").unwrap();
        assert_eq!(labels(&container), vec!["Welcome", "Nothing here yet"]);

        store
            .require("home")
            .unwrap()
            .set_text(HEADLINE_KEY, "Hello")
            .unwrap();
        assert_eq!(labels(&container), vec!["Hello", ""]);
    }

    #[test]
    fn test_view_headline_behavior() {
        let store = Arc::new(MemoryTextNodeStore::new());
        let container = section(&store, Mode::View)
            .with_headline_level(1)
            .resolve("section")
            .unwrap();
        let children = container.children();
        let behaviors = children[0].behaviors();
        assert_eq!(behaviors.len(), 1);
        assert_eq!(behaviors[0].name(), "headline");
        assert!(children[1].behaviors().is_empty());
    }

    #[test]
    fn test_edit_mode_holds_form() {
        let store = Arc::new(MemoryTextNodeStore::new());
        let parameters = PageParameters::new().set("edit", "");
        let container = OneColumnHeadline::from_parameters(store.clone(), "home", &parameters)
            .resolve("section")
            .unwrap();
        assert_eq!(container.len(), 1);

        let children = container.children();
        let form = children[0]
            .as_any()
            .downcast_ref::<TextNodeForm>()
            .unwrap();
        assert_eq!(form.keys().collect::<Vec<_>>(), vec![HEADLINE_KEY, CONTENT_KEY]);

        let rows = form.input(CONTENT_KEY).unwrap().behaviors();
        assert_eq!(rows[0].name(), "rows");

        form.submit([(HEADLINE_KEY, "Edited")]).unwrap();
        let node = store.require("home").unwrap();
        assert_eq!(node.text(HEADLINE_KEY).as_deref(), Some("Edited"));
    }

    #[test]
    fn test_for_page_node_id() {
        let store = Arc::new(MemoryTextNodeStore::new());
        let section = OneColumnHeadline::for_page::<Panel>(store, Mode::View);
        assert!(section.node_id().ends_with("Panel"));
        assert_eq!(section.mode(), Mode::View);
    }
}
