//! Lazily loaded, detachable handle to one text node.
//!
//! A [`TextNodeModel`] is either unloaded or holds the result of its last
//! load (which may be "no node" when the model is not required). The first
//! access loads; [`TextNodeModel::detach`] returns to unloaded, so the next
//! access reads the store again.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use trellis_core::{Component, SharedModel};

use crate::config::BindingConfig;
use crate::error::{Error, Result};
use crate::node::SharedTextNode;
use crate::property::TextNodeProperty;
use crate::store::SharedTextNodeStore;

pub type SharedTextNodeModel = Arc<TextNodeModel>;

pub struct TextNodeModel {
    store: SharedTextNodeStore,
    id: String,
    required: bool,
    create_if_absent: bool,
    // Outer `None`: unloaded. `Some(None)`: loaded, no node.
    cache: Mutex<Option<Option<SharedTextNode>>>,
}

impl TextNodeModel {
    /// Required model that creates its node on first load.
    pub fn new(store: SharedTextNodeStore, id: impl Into<String>) -> Self {
        Self::with_options(store, id, true, true)
    }

    pub fn with_options(
        store: SharedTextNodeStore,
        id: impl Into<String>,
        required: bool,
        create_if_absent: bool,
    ) -> Self {
        Self {
            store,
            id: id.into(),
            required,
            create_if_absent,
            cache: Mutex::new(None),
        }
    }

    /// Model of the node named after type `T`, e.g. one node per page type.
    pub fn for_type<T: ?Sized + 'static>(store: SharedTextNodeStore) -> Self {
        Self::new(store, std::any::type_name::<T>())
    }

    /// Model already loaded with `node`. After a detach it reloads by id.
    pub fn preloaded(store: SharedTextNodeStore, node: SharedTextNode) -> Self {
        Self::preloaded_with_options(store, node, true, true)
    }

    /// Like [`TextNodeModel::preloaded`]; the flags govern reloads after a
    /// detach.
    pub fn preloaded_with_options(
        store: SharedTextNodeStore,
        node: SharedTextNode,
        required: bool,
        create_if_absent: bool,
    ) -> Self {
        let model = Self::with_options(store, node.id(), required, create_if_absent);
        *model.cache.lock() = Some(Some(node));
        model
    }

    pub fn from_config(
        store: SharedTextNodeStore,
        id: impl Into<String>,
        config: &BindingConfig,
    ) -> Self {
        Self::with_options(store, id, config.required, config.create_if_absent)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn creates_if_absent(&self) -> bool {
        self.create_if_absent
    }

    pub fn store(&self) -> &SharedTextNodeStore {
        &self.store
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.lock().is_some()
    }

    /// The bound node, loading it on first access.
    ///
    /// Fails with [`Error::RequiredNodeMissing`] when the model is required
    /// and the store has no node. A failed load leaves the model unloaded.
    pub fn node(&self) -> Result<Option<SharedTextNode>> {
        let mut cache = self.cache.lock();
        if let Some(loaded) = cache.as_ref() {
            return Ok(loaded.clone());
        }
        let loaded = self.load()?;
        *cache = Some(loaded.clone());
        Ok(loaded)
    }

    /// The bound node; a model that loaded nothing is an
    /// [`Error::IllegalState`].
    pub fn require_node(&self) -> Result<SharedTextNode> {
        self.node()?
            .ok_or_else(|| Error::IllegalState(format!("no text node available for {}", self.id)))
    }

    fn load(&self) -> Result<Option<SharedTextNode>> {
        let node = if self.create_if_absent {
            Some(self.store.fetch_or_create(&self.id)?)
        } else {
            self.store.fetch(&self.id)?
        };
        if node.is_none() && self.required {
            return Err(Error::RequiredNodeMissing(self.id.clone()));
        }
        tracing::debug!(node = %self.id, found = node.is_some(), "text node model loaded");
        Ok(node)
    }

    /// Drop the cached node.
    pub fn detach(&self) {
        if self.cache.lock().take().is_some() {
            tracing::debug!(node = %self.id, "text node model detached");
        }
    }

    /// View of one property of the bound node.
    pub fn property(self: &Arc<Self>, key: impl Into<String>) -> TextNodeProperty {
        TextNodeProperty::new(Arc::clone(self), key)
    }

    /// View of one property, read as `default` while the key is absent.
    pub fn property_with_default(
        self: &Arc<Self>,
        key: impl Into<String>,
        default: SharedModel<String>,
    ) -> TextNodeProperty {
        TextNodeProperty::with_default(Arc::clone(self), key, default)
    }

    /// View keyed by `component`'s id, for components that take their text
    /// from a model shared by a whole container.
    pub fn inherit(self: &Arc<Self>, component: &dyn Component) -> TextNodeProperty {
        self.property(component.id())
    }
}

impl fmt::Debug for TextNodeModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextNodeModel")
            .field("id", &self.id)
            .field("required", &self.required)
            .field("create_if_absent", &self.create_if_absent)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTextNodeStore;
    use crate::store::TextNodeStore;
    use trellis_core::Panel;

    fn store() -> Arc<MemoryTextNodeStore> {
        Arc::new(MemoryTextNodeStore::new())
    }

    #[test]
    fn test_lazy_load_and_cache() {
        let store = store();
        let model = TextNodeModel::new(store.clone(), "page1");
        assert!(!model.is_loaded());
        assert!(store.is_empty());

        let first = model.require_node().unwrap();
        assert!(model.is_loaded());
        assert_eq!(store.len(), 1);

        let second = model.require_node().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_detach_reloads_from_store() {
        let store = store();
        let model = TextNodeModel::new(store.clone(), "page1");
        let before = model.require_node().unwrap();

        store.remove("page1");
        assert!(Arc::ptr_eq(&before, &model.require_node().unwrap()));

        model.detach();
        assert!(!model.is_loaded());
        let after = model.require_node().unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_required_missing_node() {
        let model = TextNodeModel::with_options(store(), "absent", true, false);
        assert!(matches!(
            model.node(),
            Err(Error::RequiredNodeMissing(id)) if id == "absent"
        ));
        assert!(!model.is_loaded());
    }

    #[test]
    fn test_optional_missing_node_caches_absence() {
        let store = store();
        let model = TextNodeModel::with_options(store.clone(), "absent", false, false);
        assert!(model.node().unwrap().is_none());
        assert!(model.is_loaded());

        // Absence is cached until detach.
        store.create_with_id("absent").unwrap();
        assert!(model.node().unwrap().is_none());
        assert!(matches!(model.require_node(), Err(Error::IllegalState(_))));

        model.detach();
        assert!(model.node().unwrap().is_some());
    }

    #[test]
    fn test_for_type_uses_type_name() {
        struct HomePage;
        let model = TextNodeModel::for_type::<HomePage>(store());
        assert!(model.id().ends_with("HomePage"));
    }

    #[test]
    fn test_preloaded_skips_first_load() {
        let store = store();
        let node = store.create_with_id("seed").unwrap();
        let model = TextNodeModel::preloaded(store.clone(), Arc::clone(&node));
        assert!(model.is_loaded());
        assert_eq!(model.id(), "seed");
        assert!(Arc::ptr_eq(&node, &model.require_node().unwrap()));
    }

    #[test]
    fn test_preloaded_options_apply_on_reload() {
        let store = store();
        let node = store.create_with_id("seed").unwrap();
        let model = TextNodeModel::preloaded_with_options(store.clone(), node, false, false);
        assert!(!model.is_required());
        assert!(!model.creates_if_absent());

        store.remove("seed");
        model.detach();
        assert!(model.node().unwrap().is_none());
        assert!(store.fetch("seed").unwrap().is_none());

        let strict = TextNodeModel::preloaded_with_options(
            store.clone(),
            store.create_with_id("strict").unwrap(),
            true,
            false,
        );
        store.remove("strict");
        strict.detach();
        assert!(matches!(
            strict.node(),
            Err(Error::RequiredNodeMissing(id)) if id == "strict"
        ));
    }

    #[test]
    fn test_from_config() {
        let config = BindingConfig {
            required: false,
            create_if_absent: false,
        };
        let model = TextNodeModel::from_config(store(), "page", &config);
        assert!(!model.is_required());
        assert!(!model.creates_if_absent());
    }

    #[test]
    fn test_inherit_keys_by_component_id() {
        let model = Arc::new(TextNodeModel::new(store(), "page"));
        let panel = Panel::new("title");
        let property = model.inherit(&panel);
        assert_eq!(property.key(), "title");
    }
}
