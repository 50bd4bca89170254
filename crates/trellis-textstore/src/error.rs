//! Error types for text nodes, stores and binding models.

use thiserror::Error;

/// Result type for text store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from text store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A node with this id already exists.
    #[error("text node already exists: {0}")]
    DuplicateId(String),

    /// No node with this id.
    #[error("text node not found: {0}")]
    NodeNotFound(String),

    /// The node has no value under this key.
    #[error("key '{key}' not found in text node {node}")]
    KeyNotFound { node: String, key: String },

    /// A binding model marked required could not load its node.
    #[error("required text node not found: {0}")]
    RequiredNodeMissing(String),

    /// A property was used while its binding model had no node.
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// Node ids must not be empty.
    #[error("text node id must not be empty")]
    EmptyNodeId,

    /// A form submission named a key the form has no field for.
    #[error("form has no field for key: {0}")]
    UnknownField(String),

    /// Snapshot written by an incompatible version.
    #[error("unsupported snapshot version {0}")]
    UnsupportedSnapshot(u32),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Error raised by a component, supplier or plain model.
    #[error(transparent)]
    Component(#[from] trellis_core::Error),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Text store errors reach component code as [`trellis_core::Error::Model`];
/// recover them with [`trellis_core::Error::model_error`].
impl From<Error> for trellis_core::Error {
    fn from(e: Error) -> Self {
        match e {
            Error::Component(inner) => inner,
            other => trellis_core::Error::Model(Box::new(other)),
        }
    }
}
