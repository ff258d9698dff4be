//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the use cases and external systems.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod file_system;
mod model_codec;

pub use file_system::{FileSystem, FileSystemError};
pub use model_codec::{CodecError, ModelCodec};
