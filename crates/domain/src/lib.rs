//! pomhelper Domain - Descriptor model types
//!
//! This crate defines the in-memory model of a project descriptor.
//! All types here are pure Rust with no I/O dependencies.

pub mod document;
pub mod error;
pub mod model;
pub mod properties;
pub mod settings;

pub use document::{Element, Node, ProjectDocument, validate_element_name};
pub use error::{DomainError, DomainResult};
pub use model::{
    DEFAULT_PARENT_RELATIVE_PATH, Model, POM_NAMESPACE, PROJECT_ELEMENT_ORDER, Parent,
};
pub use properties::SortedProperties;
pub use settings::WriterSettings;
