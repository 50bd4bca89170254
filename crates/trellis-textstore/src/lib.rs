//! # trellis-textstore
//!
//! Key-value text content with live binding models.
//!
//! A [`TextNode`] is an identified bag of string properties that remembers
//! whether it was freshly created and whether it has been edited. A
//! [`TextNodeStore`] creates and fetches nodes. A [`TextNodeModel`] binds a
//! component tree to one node lazily and releases it on
//! [`TextNodeModel::detach`]; [`TextNodeProperty`] exposes one key of that
//! node as a [`trellis_core::Model<String>`].
//!
//! ## Architecture
//!
//! ```text
//! Label / TextInput ──► TextNodeProperty ──► TextNodeModel ──► TextNodeStore ──► TextNode
//!                         (key, default)      (lazy cache)       (memory, json)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use trellis_textstore::{MemoryTextNodeStore, TextNodeModel, TextNodeStore};
//!
//! let store = Arc::new(MemoryTextNodeStore::open(&path)?);
//! let page = Arc::new(TextNodeModel::new(store.clone(), "page1"));
//! let title = page.property("title");
//! title.set_value(Some("Hello"))?;
//! store.save_to(&path, true)?;
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod form;
pub mod headline;
pub mod memory;
pub mod model;
pub mod node;
pub mod property;
pub mod scope;
pub mod snapshot;
pub mod store;

// Re-exports for convenience
pub use config::{BindingConfig, LoggingConfig, StoreConfig, TrellisConfig};
pub use editor::{default_value_model, Mode, MODE_PARAM};
pub use error::{Error, Result};
pub use form::{TextNodeForm, TextNodeFormBuilder};
pub use headline::{OneColumnHeadline, CONTENT_KEY, HEADLINE_KEY};
pub use memory::{MemoryTextNode, MemoryTextNodeStore};
pub use model::{SharedTextNodeModel, TextNodeModel};
pub use node::{is_blank, SharedTextNode, TextNode};
pub use property::TextNodeProperty;
pub use scope::RequestScope;
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};
pub use store::{SharedTextNodeStore, TextNodeStore};
