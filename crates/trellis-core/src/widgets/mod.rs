//! Stock components used by the suppliers and the text store helpers.
//!
//! They carry state only (id, flags, models, children); how they would be
//! rendered is left to the host.

mod container;
mod input;
mod label;
mod link;
mod panel;

pub use container::{Container, ContainerBuilder, Layout};
pub use input::{InputKind, TextInput};
pub use label::Label;
pub use link::{link, Link, LinkSupplier, PageParameters, PageRef};
pub use panel::Panel;
