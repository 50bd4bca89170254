use crate::builder::{Constructible, Constructors};
use crate::component::ComponentBase;

/// An empty component, useful as a placeholder.
#[derive(Debug)]
pub struct Panel {
    base: ComponentBase,
}

impl Panel {
    pub fn new(id: &str) -> Self {
        Self {
            base: ComponentBase::new(id),
        }
    }
}

crate::impl_component!(Panel);

impl Constructible for Panel {
    fn constructors() -> Constructors<Self> {
        Constructors::new().with(|id, ()| Panel::new(id))
    }
}
