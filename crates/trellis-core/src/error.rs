//! Error types for component construction and models.

use thiserror::Error;

/// Boxed error carried across crate boundaries (model backends, constructors).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for component operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from suppliers, builders and models.
#[derive(Debug, Error)]
pub enum Error {
    /// A builder could not produce its target kind.
    ///
    /// `arguments` is the attempted signature, including the leading id.
    #[error("unable to construct {kind} with arguments {arguments}")]
    Construction {
        kind: &'static str,
        arguments: String,
        #[source]
        cause: ConstructionCause,
    },

    /// Suppliers require a non-empty component id.
    #[error("component id must not be empty")]
    EmptyId,

    /// `set` was called on a model that only supports reads.
    #[error("model is read-only: {0}")]
    ReadOnly(&'static str),

    /// A model backend failed.
    #[error("model error: {0}")]
    Model(#[source] BoxError),
}

impl Error {
    /// Returns the backend error of a [`Error::Model`], if it is of type `E`.
    pub fn model_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Error::Model(source) => source.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// Why a [`Error::Construction`] happened.
#[derive(Debug, Error)]
pub enum ConstructionCause {
    /// No registered constructor has the attempted signature.
    #[error("no constructor matches; available: {}", .available.join("; "))]
    NoMatchingConstructor { available: Vec<String> },

    /// The matching constructor ran and failed.
    #[error("constructor failed: {0}")]
    Instantiation(#[source] BoxError),
}
