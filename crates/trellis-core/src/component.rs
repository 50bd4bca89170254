//! The component model produced by suppliers.
//!
//! Components behave like references: flags and behaviors live behind
//! interior mutability so a component can be shared (`Arc<C>`) between a
//! container and whoever resolved it, and decorated after construction.

use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::behavior::SharedBehavior;

/// State shared by every component: identity, flags and attached behaviors.
pub struct ComponentBase {
    id: String,
    visible: AtomicBool,
    enabled: AtomicBool,
    behaviors: RwLock<Vec<SharedBehavior>>,
}

impl ComponentBase {
    /// Create a visible, enabled component state with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            visible: AtomicBool::new(true),
            enabled: AtomicBool::new(true),
            behaviors: RwLock::new(Vec::new()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Acquire)
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.store(visible, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Attach a behavior. The behavior is bound before it becomes visible
    /// through [`ComponentBase::behaviors`].
    pub fn add_behavior(&self, behavior: SharedBehavior) {
        behavior.bind(self);
        self.behaviors.write().push(behavior);
    }

    /// Snapshot of the attached behaviors in attach order.
    pub fn behaviors(&self) -> Vec<SharedBehavior> {
        self.behaviors.read().clone()
    }
}

impl fmt::Debug for ComponentBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let behaviors: Vec<String> = self
            .behaviors
            .read()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        f.debug_struct("ComponentBase")
            .field("id", &self.id)
            .field("visible", &self.is_visible())
            .field("enabled", &self.is_enabled())
            .field("behaviors", &behaviors)
            .finish()
    }
}

/// A node of the component tree.
///
/// Implementors only provide [`Component::base`] and [`Component::as_any`];
/// everything else is derived from the base.
pub trait Component: Any + Send + Sync + fmt::Debug {
    fn base(&self) -> &ComponentBase;

    /// Used to downcast children held as `Arc<dyn Component>`.
    fn as_any(&self) -> &dyn Any;

    fn id(&self) -> &str {
        self.base().id()
    }

    fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    fn set_visible(&self, visible: bool) {
        self.base().set_visible(visible);
    }

    fn is_enabled(&self) -> bool {
        self.base().is_enabled()
    }

    fn set_enabled(&self, enabled: bool) {
        self.base().set_enabled(enabled);
    }

    fn add_behavior(&self, behavior: SharedBehavior) {
        self.base().add_behavior(behavior);
    }

    fn behaviors(&self) -> Vec<SharedBehavior> {
        self.base().behaviors()
    }

    /// Release cached model state at the end of a request.
    fn detach_models(&self) {}
}

impl<C: Component> Component for Arc<C> {
    fn base(&self) -> &ComponentBase {
        (**self).base()
    }

    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }

    fn detach_models(&self) {
        (**self).detach_models();
    }
}

/// Implements [`Component`] for a struct with a `base: ComponentBase` field
/// and no models to detach.
#[macro_export]
macro_rules! impl_component {
    ($ty:ty) => {
        impl $crate::component::Component for $ty {
            fn base(&self) -> &$crate::component::ComponentBase {
                &self.base
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::HeadlineBehavior;

    #[derive(Debug)]
    struct Probe {
        base: ComponentBase,
    }

    impl_component!(Probe);

    #[test]
    fn test_defaults_visible_and_enabled() {
        let probe = Probe {
            base: ComponentBase::new("probe"),
        };
        assert_eq!(probe.id(), "probe");
        assert!(probe.is_visible());
        assert!(probe.is_enabled());
        assert!(probe.behaviors().is_empty());
    }

    #[test]
    fn test_arc_shares_state() {
        let probe = Arc::new(Probe {
            base: ComponentBase::new("probe"),
        });
        let alias = Arc::clone(&probe);
        alias.set_visible(false);
        alias.set_enabled(false);
        alias.add_behavior(Arc::new(HeadlineBehavior::new(3)));

        assert!(!probe.is_visible());
        assert!(!probe.is_enabled());
        assert_eq!(probe.behaviors().len(), 1);
        assert!(alias.as_any().downcast_ref::<Probe>().is_some());
    }
}
