use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::builder::{Constructible, Constructors};
use crate::component::{Component, ComponentBase};
use crate::error::Result;
use crate::supplier::{ensure_id, SharedSupplier, Supplier};

/// Order in which children are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Insertion order.
    #[default]
    TopDown,
    /// Most recently added first.
    BottomUp,
}

/// A container filled from suppliers.
///
/// The container hands out child ids itself ([`Container::new_child_id`]), so
/// callers pass suppliers rather than components.
pub struct Container {
    base: ComponentBase,
    layout: Layout,
    children: RwLock<Vec<Arc<dyn Component>>>,
    next_child: AtomicU64,
    single_child_id: Mutex<Option<String>>,
}

impl Container {
    pub fn new(id: &str) -> Self {
        Self::with_layout(id, Layout::TopDown)
    }

    pub fn with_layout(id: &str, layout: Layout) -> Self {
        Self {
            base: ComponentBase::new(id),
            layout,
            children: RwLock::new(Vec::new()),
            next_child: AtomicU64::new(0),
            single_child_id: Mutex::new(None),
        }
    }

    /// Start a [`ContainerBuilder`].
    pub fn create() -> ContainerBuilder {
        ContainerBuilder::default()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// A child id unique within this container.
    ///
    /// The first id ever handed out is also the slot used by
    /// [`Container::set_single`].
    pub fn new_child_id(&self) -> String {
        let mut single = self.single_child_id.lock();
        self.claim_child_id(&mut single)
    }

    // Callers hold the single-slot lock, so the first id drawn is the one
    // recorded.
    fn claim_child_id(&self, single: &mut Option<String>) -> String {
        let id = self.next_child.fetch_add(1, Ordering::Relaxed).to_string();
        if single.is_none() {
            *single = Some(id.clone());
        }
        id
    }

    /// Resolve `supplier` with a fresh child id and append the result.
    pub fn add<C, S>(&self, supplier: &S) -> Result<Arc<C>>
    where
        C: Component,
        S: Supplier<C> + ?Sized,
    {
        let child = Arc::new(supplier.resolve(&self.new_child_id())?);
        let erased: Arc<dyn Component> = child.clone();
        self.children.write().push(erased);
        Ok(child)
    }

    /// Like [`Container::add`], but a child already present under the
    /// produced component's id is replaced in place.
    pub fn add_or_replace<C, S>(&self, supplier: &S) -> Result<Arc<C>>
    where
        C: Component,
        S: Supplier<C> + ?Sized,
    {
        let child = Arc::new(supplier.resolve(&self.new_child_id())?);
        self.put(child.clone());
        Ok(child)
    }

    /// Keep exactly one supplier-produced child in the single-child slot,
    /// replacing whatever was there.
    pub fn set_single<C, S>(&self, supplier: &S) -> Result<Arc<C>>
    where
        C: Component,
        S: Supplier<C> + ?Sized,
    {
        let id = {
            let mut single = self.single_child_id.lock();
            match single.clone() {
                Some(id) => id,
                None => self.claim_child_id(&mut single),
            }
        };
        let child = Arc::new(supplier.resolve(&id)?);
        self.put(child.clone());
        Ok(child)
    }

    /// Add an already built child, replacing any child with the same id.
    pub fn insert<C: Component>(&self, child: Arc<C>) -> Arc<C> {
        self.put(child.clone());
        child
    }

    fn put(&self, child: Arc<dyn Component>) {
        let mut children = self.children.write();
        match children.iter_mut().find(|c| c.id() == child.id()) {
            Some(slot) => *slot = child,
            None => children.push(child),
        }
    }

    /// Children in layout order.
    pub fn children(&self) -> Vec<Arc<dyn Component>> {
        let mut children = self.children.read().clone();
        if self.layout == Layout::BottomUp {
            children.reverse();
        }
        children
    }

    pub fn child(&self, id: &str) -> Option<Arc<dyn Component>> {
        self.children.read().iter().find(|c| c.id() == id).cloned()
    }

    pub fn remove(&self, id: &str) -> Option<Arc<dyn Component>> {
        let mut children = self.children.write();
        let index = children.iter().position(|c| c.id() == id)?;
        Some(children.remove(index))
    }

    pub fn len(&self) -> usize {
        self.children.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.read().is_empty()
    }
}

impl Component for Container {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn detach_models(&self) {
        for child in self.children.read().iter() {
            child.detach_models();
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<String> = self
            .children
            .read()
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        f.debug_struct("Container")
            .field("base", &self.base)
            .field("layout", &self.layout)
            .field("children", &children)
            .finish()
    }
}

impl Constructible for Container {
    fn constructors() -> Constructors<Self> {
        Constructors::new()
            .with(|id, ()| Container::new(id))
            .with(|id, (layout,): (Layout,)| Container::with_layout(id, layout))
    }
}

type AddChild = Arc<dyn Fn(&Container) -> Result<()> + Send + Sync>;

/// Supplier of containers pre-filled from a list of child suppliers.
#[derive(Clone, Default)]
pub struct ContainerBuilder {
    layout: Layout,
    contents: Vec<AddChild>,
}

impl ContainerBuilder {
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Append a child supplier; each produced container resolves it once.
    pub fn add<C: Component>(mut self, supplier: SharedSupplier<C>) -> Self {
        self.contents.push(Arc::new(move |container: &Container| {
            container.add::<C, _>(&supplier).map(|_| ())
        }));
        self
    }

    pub fn len(&self) -> usize {
        self.contents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl fmt::Debug for ContainerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerBuilder")
            .field("layout", &self.layout)
            .field("contents", &self.contents.len())
            .finish()
    }
}

impl Supplier<Container> for ContainerBuilder {
    fn resolve(&self, id: &str) -> Result<Container> {
        ensure_id(id)?;
        let container = Container::with_layout(id, self.layout);
        for add_child in &self.contents {
            add_child(&container)?;
        }
        Ok(container)
    }
}
