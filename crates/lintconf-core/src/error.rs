//! Error types for lintconf-core

/// Result type for lintconf-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving configuration layers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An input at `position` could not be turned into a configuration document
    #[error("Invalid configuration document at position {position}: {reason}")]
    InvalidDocument { position: usize, reason: String },
}

impl Error {
    pub fn invalid_document(position: usize, reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            position,
            reason: reason.into(),
        }
    }

    /// Position of the offending input in the layer sequence
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidDocument { position, .. } => *position,
        }
    }
}

/// Reasons a structured value cannot be represented as a [`ConfigValue`]
///
/// [`ConfigValue`]: crate::ConfigValue
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// The top level of a document was not a mapping
    #[error("expected a mapping at the top level, found {found}")]
    NotAMapping { found: &'static str },

    /// A null appeared somewhere inside the document
    #[error("null is not a supported value (at `{path}`)")]
    Null { path: crate::KeyPath },
}
