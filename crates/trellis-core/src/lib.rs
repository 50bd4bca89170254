//! # trellis-core
//!
//! Deferred component construction for server-rendered component trees.
//!
//! Nothing in this crate renders anything. It provides the pieces that decide
//! *which* component gets built, *when*, and *how it is decorated* once built.
//!
//! ## Architecture
//!
//! ```text
//! provide::<Label>()            ──► Builder<Label> ──┐
//!     .with_argument(..)                              │   Supplier<Label>
//!     .with_behavior(..)                              │
//!                                                     ▼
//! invisible(..) / disabled(..)  ──► DelegatingSupplier ──► resolve("title") ──► Label
//! ```
//!
//! ## Core Components
//!
//! - [`Supplier`]: factory contract, `resolve(id) -> component`
//! - [`invisible`], [`disabled`], [`of_instance`]: supplier combinators
//! - [`DelegatingSupplier`]: runs one [`CreationHook`] after its delegate
//! - [`Builder`]: ordered typed arguments matched against registered [`Constructors`]
//! - [`Component`] / [`ComponentBase`]: the minimal component model
//! - [`Model`]: readable/writable value holders bound into components
//!
//! ## Usage
//!
//! ```ignore
//! use trellis_core::{provide, invisible, model, Label, SharedSupplier, Supplier};
//!
//! let title: SharedSupplier<Label> =
//!     Arc::new(provide::<Label>().with_argument(model::of("Welcome".to_string())));
//! let hidden = invisible(title);
//!
//! let label = hidden.resolve("title")?;
//! assert!(!label.is_visible());
//! ```

pub mod behavior;
pub mod builder;
pub mod combinators;
pub mod component;
pub mod delegating;
pub mod error;
pub mod model;
pub mod supplier;
pub mod widgets;

// Re-exports for convenience
pub use behavior::{AttributeModifier, Behavior, HeadlineBehavior, SharedBehavior};
pub use builder::{
    provide, provide_with_model, ArgTuple, ArgType, Argument, Builder, Constructible,
    Constructors,
};
pub use combinators::{disabled, empty_invisible_panel, invisible};
pub use component::{Component, ComponentBase};
pub use delegating::{hook_fn, CreationHook, DelegatingSupplier, FnHook, NoopHook};
pub use error::{BoxError, ConstructionCause, Error, Result};
pub use model::{Model, ReadOnlyModel, SharedModel, StaticModel};
pub use supplier::{
    from_fn, of_instance, Capabilities, FnSupplier, InstanceSupplier, SharedSupplier, Supplier,
};
pub use widgets::{
    link, Container, ContainerBuilder, InputKind, Label, Layout, Link, LinkSupplier, PageParameters,
    PageRef, Panel, TextInput,
};
