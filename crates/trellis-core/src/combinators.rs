//! Stateless supplier combinators toggling one flag after construction.

use std::sync::Arc;

use crate::builder::provide;
use crate::component::Component;
use crate::delegating::{CreationHook, DelegatingSupplier};
use crate::error::Result;
use crate::supplier::{Capabilities, SharedSupplier};
use crate::widgets::Panel;

#[derive(Debug, Clone, Copy)]
struct Hide;

impl<C: Component> CreationHook<C> for Hide {
    fn on_creation(&self, component: &C) -> Result<()> {
        component.set_visible(false);
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::HIDES
    }
}

#[derive(Debug, Clone, Copy)]
struct Disable;

impl<C: Component> CreationHook<C> for Disable {
    fn on_creation(&self, component: &C) -> Result<()> {
        component.set_enabled(false);
        Ok(())
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::DISABLES
    }
}

/// Supplier whose components come out hidden.
///
/// A supplier already tagged [`Capabilities::HIDES`] is returned as is.
pub fn invisible<C: Component>(delegate: SharedSupplier<C>) -> SharedSupplier<C> {
    if delegate.capabilities().contains(Capabilities::HIDES) {
        return delegate;
    }
    Arc::new(DelegatingSupplier::with_hook(delegate, Hide))
}

/// Supplier whose components come out disabled.
///
/// A supplier already tagged [`Capabilities::DISABLES`] is returned as is.
pub fn disabled<C: Component>(delegate: SharedSupplier<C>) -> SharedSupplier<C> {
    if delegate.capabilities().contains(Capabilities::DISABLES) {
        return delegate;
    }
    Arc::new(DelegatingSupplier::with_hook(delegate, Disable))
}

/// Placeholder panels that take a slot without showing anything.
pub fn empty_invisible_panel() -> SharedSupplier<Panel> {
    let panels: SharedSupplier<Panel> = Arc::new(provide::<Panel>());
    invisible(panels)
}
