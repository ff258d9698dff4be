//! pomhelper Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer, and the [`maven`] facade built on them.

pub mod adapters;
pub mod maven;
pub mod persistence;
pub mod serialization;

pub use adapters::XmlModelCodec;
pub use maven::{
    model_to_string, read_model, read_model_from_reader, read_model_from_str, write_model,
    write_model_to, write_model_to_with_settings, write_model_to_writer,
    write_model_with_settings,
};
pub use persistence::StdFileSystem;
pub use serialization::{XmlError, parse_document, to_xml_stable};
