//! The supplier contract: deferred component construction keyed by id.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;

use crate::component::Component;
use crate::error::{Error, Result};

bitflags! {
    /// Effects a supplier applies on top of plain construction.
    ///
    /// Combinators consult these tags to avoid stacking the same wrapper twice.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Produced components are hidden.
        const HIDES = 1 << 0;
        /// Produced components are disabled.
        const DISABLES = 1 << 1;
        /// Every resolution returns the same instance.
        const SINGLETON = 1 << 2;
    }
}

/// A factory producing a configured component for a given id.
///
/// Each call is expected to yield a fresh instance unless the supplier
/// reports [`Capabilities::SINGLETON`].
pub trait Supplier<C>: Send + Sync {
    fn resolve(&self, id: &str) -> Result<C>;

    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }
}

/// Suppliers are shared by reference, never copied.
pub type SharedSupplier<C> = Arc<dyn Supplier<C>>;

impl<C, S> Supplier<C> for Arc<S>
where
    S: Supplier<C> + ?Sized,
{
    fn resolve(&self, id: &str) -> Result<C> {
        (**self).resolve(id)
    }

    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }
}

pub(crate) fn ensure_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::EmptyId);
    }
    Ok(())
}

/// Supplier backed by a closure.
pub struct FnSupplier<F> {
    build: F,
}

/// Turn `build` into a supplier. The closure is the compile-time checked
/// alternative to [`crate::Builder`].
pub fn from_fn<C, F>(build: F) -> FnSupplier<F>
where
    F: Fn(&str) -> C + Send + Sync,
{
    FnSupplier { build }
}

impl<C, F> Supplier<C> for FnSupplier<F>
where
    F: Fn(&str) -> C + Send + Sync,
{
    fn resolve(&self, id: &str) -> Result<C> {
        ensure_id(id)?;
        Ok((self.build)(id))
    }
}

impl<F> fmt::Debug for FnSupplier<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSupplier")
    }
}

/// Supplier returning one pre-built instance, whatever id is asked for.
#[derive(Debug)]
pub struct InstanceSupplier<C> {
    instance: Arc<C>,
}

/// Wrap an existing component. Resolving twice yields the same `Arc`, so the
/// component keeps the id it was built with.
pub fn of_instance<C: Component>(instance: Arc<C>) -> InstanceSupplier<C> {
    InstanceSupplier { instance }
}

impl<C: Component> Supplier<Arc<C>> for InstanceSupplier<C> {
    fn resolve(&self, _id: &str) -> Result<Arc<C>> {
        Ok(Arc::clone(&self.instance))
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SINGLETON
    }
}
