//! View/edit switching for text-backed page sections.

use trellis_core::{model, PageParameters, SharedModel};

use crate::model::SharedTextNodeModel;

/// Page parameter whose presence switches a section to edit mode.
pub const MODE_PARAM: &str = "edit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    View,
    Edit,
}

impl Mode {
    /// [`Mode::Edit`] when [`MODE_PARAM`] is present, whatever its value.
    pub fn from_parameters(parameters: &PageParameters) -> Self {
        if parameters.contains(MODE_PARAM) {
            Mode::Edit
        } else {
            Mode::View
        }
    }

    pub fn is_edit(self) -> bool {
        self == Mode::Edit
    }
}

/// Read-only model yielding `default` until the bound node is modified, and
/// the empty string afterwards.
///
/// The node-wide flag is consulted: editing any key of the node retires the
/// defaults of all its keys.
pub fn default_value_model(
    node_model: SharedTextNodeModel,
    default: SharedModel<String>,
) -> SharedModel<String> {
    model::read_only(move || {
        let node = node_model.require_node()?;
        if node.is_modified() {
            Ok(String::new())
        } else {
            default.get()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTextNodeStore;
    use crate::model::TextNodeModel;
    use std::sync::Arc;

    #[test]
    fn test_mode_from_parameters() {
        assert_eq!(Mode::from_parameters(&PageParameters::new()), Mode::View);
        assert_eq!(
            Mode::from_parameters(&PageParameters::new().set(MODE_PARAM, "")),
            Mode::Edit
        );
        assert!(Mode::from_parameters(&PageParameters::new().set("edit", "1")).is_edit());
    }

    #[test]
    fn test_default_until_any_key_modified() {
        let node_model = Arc::new(TextNodeModel::new(
            Arc::new(MemoryTextNodeStore::new()),
            "page",
        ));
        let headline = default_value_model(
            Arc::clone(&node_model),
            model::of("Welcome".to_string()),
        );
        assert_eq!(headline.get().unwrap(), "Welcome");

        // A sibling key is enough to retire the default.
        node_model
            .property("columnContent")
            .set_value(Some("Body"))
            .unwrap();
        assert_eq!(headline.get().unwrap(), "");
    }

    #[test]
    fn test_default_gone_after_removal() {
        let node_model = Arc::new(TextNodeModel::new(
            Arc::new(MemoryTextNodeStore::new()),
            "page",
        ));
        let default = default_value_model(Arc::clone(&node_model), model::of("x".to_string()));
        node_model.property("title").set_value(None).unwrap();
        assert_eq!(default.get().unwrap(), "");
    }
}
