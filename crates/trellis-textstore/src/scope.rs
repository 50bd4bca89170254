//! Request-scoped release of cached node state.

use std::fmt;
use std::sync::Arc;

use trellis_core::Component;

use crate::model::SharedTextNodeModel;

/// Detaches everything registered with it when dropped.
///
/// ```ignore
/// let mut scope = RequestScope::new();
/// let model = scope.track(Arc::new(TextNodeModel::new(store, "page1")));
/// render(&model)?;
/// // `model` is detached here, the next request reloads it.
/// ```
#[derive(Default)]
pub struct RequestScope {
    models: Vec<SharedTextNodeModel>,
    components: Vec<Arc<dyn Component>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `model` and hand it back.
    pub fn track(&mut self, model: SharedTextNodeModel) -> SharedTextNodeModel {
        self.models.push(Arc::clone(&model));
        model
    }

    /// Register a component whose models are detached with the scope.
    pub fn track_component(&mut self, component: Arc<dyn Component>) {
        self.components.push(component);
    }

    /// Detach now instead of at the end of the enclosing block.
    pub fn close(self) {}
}

impl Drop for RequestScope {
    fn drop(&mut self) {
        for model in &self.models {
            model.detach();
        }
        for component in &self.components {
            component.detach_models();
        }
        tracing::debug!(
            models = self.models.len(),
            components = self.components.len(),
            "request scope closed"
        );
    }
}

impl fmt::Debug for RequestScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestScope")
            .field("models", &self.models.len())
            .field("components", &self.components.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTextNodeStore;
    use crate::model::TextNodeModel;
    use trellis_core::Label;

    #[test]
    fn test_drop_detaches_models() {
        let store = Arc::new(MemoryTextNodeStore::new());
        let model = Arc::new(TextNodeModel::new(store, "page"));
        {
            let mut scope = RequestScope::new();
            scope.track(Arc::clone(&model)).require_node().unwrap();
            assert!(model.is_loaded());
        }
        assert!(!model.is_loaded());
    }

    #[test]
    fn test_close_detaches_components() {
        let store = Arc::new(MemoryTextNodeStore::new());
        let model = Arc::new(TextNodeModel::new(store, "page"));
        let label = Arc::new(Label::with_model("title", Arc::new(model.property("title"))));
        label.text().unwrap();
        assert!(model.is_loaded());

        let mut scope = RequestScope::new();
        scope.track_component(label);
        scope.close();
        assert!(!model.is_loaded());
    }
}
