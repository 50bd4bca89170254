//! Post-construction setup layered over another supplier.
//!
//! A [`DelegatingSupplier`] owns one inner supplier and one [`CreationHook`].
//! Each concern gets its own layer; several concerns compose by nesting.

use std::fmt;

use crate::error::Result;
use crate::supplier::{Capabilities, SharedSupplier, Supplier};

/// Runs against each freshly resolved component.
pub trait CreationHook<C>: Send + Sync {
    fn on_creation(&self, component: &C) -> Result<()>;

    /// Tags describing what this hook does to the component.
    fn capabilities(&self) -> Capabilities {
        Capabilities::empty()
    }
}

/// Hook that leaves the component untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl<C> CreationHook<C> for NoopHook {
    fn on_creation(&self, _component: &C) -> Result<()> {
        Ok(())
    }
}

/// Hook backed by a closure.
pub struct FnHook<F>(F);

pub fn hook_fn<C, F>(hook: F) -> FnHook<F>
where
    F: Fn(&C) + Send + Sync,
{
    FnHook(hook)
}

impl<C, F> CreationHook<C> for FnHook<F>
where
    F: Fn(&C) + Send + Sync,
{
    fn on_creation(&self, component: &C) -> Result<()> {
        (self.0)(component);
        Ok(())
    }
}

impl<F> fmt::Debug for FnHook<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnHook")
    }
}

pub struct DelegatingSupplier<C, H = NoopHook> {
    delegate: SharedSupplier<C>,
    hook: H,
}

impl<C> DelegatingSupplier<C, NoopHook> {
    pub fn new(delegate: SharedSupplier<C>) -> Self {
        Self {
            delegate,
            hook: NoopHook,
        }
    }
}

impl<C, H> DelegatingSupplier<C, H>
where
    H: CreationHook<C>,
{
    pub fn with_hook(delegate: SharedSupplier<C>, hook: H) -> Self {
        Self { delegate, hook }
    }

    pub fn delegate(&self) -> &SharedSupplier<C> {
        &self.delegate
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }
}

impl<C, H> Supplier<C> for DelegatingSupplier<C, H>
where
    C: 'static,
    H: CreationHook<C>,
{
    fn resolve(&self, id: &str) -> Result<C> {
        let component = self.delegate.resolve(id)?;
        self.hook.on_creation(&component)?;
        Ok(component)
    }

    /// Only this layer's tags count; tags of the delegate are not inherited.
    fn capabilities(&self) -> Capabilities {
        self.hook.capabilities()
    }
}

impl<C, H: fmt::Debug> fmt::Debug for DelegatingSupplier<C, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatingSupplier")
            .field("hook", &self.hook)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::Component;
    use crate::error::Error;
    use crate::supplier::{from_fn, SharedSupplier};
    use crate::widgets::Panel;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingHook {
        calls: Arc<AtomicUsize>,
    }

    impl CreationHook<Panel> for CountingHook {
        fn on_creation(&self, component: &Panel) -> Result<()> {
            // The delegate has already produced the component.
            assert_eq!(component.id(), "counted");
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn panels() -> SharedSupplier<Panel> {
        Arc::new(from_fn(Panel::new))
    }

    #[test]
    fn test_noop_hook_passes_through() {
        let supplier = DelegatingSupplier::new(panels());
        let panel = supplier.resolve("plain").unwrap();
        assert_eq!(panel.id(), "plain");
        assert!(panel.is_visible());
        assert_eq!(supplier.capabilities(), Capabilities::empty());
    }

    #[test]
    fn test_hook_runs_once_per_resolution() {
        let calls = Arc::new(AtomicUsize::new(0));
        let supplier = DelegatingSupplier::with_hook(
            panels(),
            CountingHook {
                calls: Arc::clone(&calls),
            },
        );

        supplier.resolve("counted").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        supplier.resolve("counted").unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_hook_not_run_when_delegate_fails() {
        let calls = Arc::new(AtomicUsize::new(0));
        let supplier = DelegatingSupplier::with_hook(
            panels(),
            CountingHook {
                calls: Arc::clone(&calls),
            },
        );

        assert!(matches!(supplier.resolve(""), Err(Error::EmptyId)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_nested_layers_apply_in_order() {
        let inner: SharedSupplier<Panel> = Arc::new(DelegatingSupplier::with_hook(
            panels(),
            hook_fn(|panel: &Panel| panel.set_enabled(false)),
        ));
        let outer = DelegatingSupplier::with_hook(
            inner,
            hook_fn(|panel: &Panel| panel.set_visible(!panel.is_enabled())),
        );

        let panel = outer.resolve("nested").unwrap();
        assert!(!panel.is_enabled());
        assert!(panel.is_visible());
    }
}
