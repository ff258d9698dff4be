//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while mapping a document onto the model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The document root is not a `project` element.
    #[error("expected a <project> root element, found <{0}>")]
    NotAProject(String),

    /// A name cannot be used as an XML element name.
    #[error("invalid element name: {0:?}")]
    InvalidElementName(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
