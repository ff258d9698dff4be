//! Read model use case.

use std::io::Read;
use std::path::Path;

use pomhelper_domain::Model;
use tracing::debug;

use crate::error::{ModelError, ModelResult};
use crate::ports::{FileSystem, FileSystemError, ModelCodec};

/// Use case for reading a descriptor into a [`Model`].
pub struct ReadModel<F: FileSystem, C: ModelCodec> {
    fs: F,
    codec: C,
}

impl<F: FileSystem, C: ModelCodec> ReadModel<F, C> {
    /// Creates a new `ReadModel` use case.
    #[must_use]
    pub const fn new(fs: F, codec: C) -> Self {
        Self { fs, codec }
    }

    /// Reads the descriptor at `path`.
    ///
    /// The model's location is set to the absolute form of `path`, resolved
    /// against the current directory without following symlinks.
    ///
    /// # Errors
    /// - `NotFound` if nothing exists at `path`
    /// - `Io` if the file cannot be read
    /// - `Parse` if the content is not a descriptor
    pub fn execute(&self, path: &Path) -> ModelResult<Model> {
        let absolute = std::path::absolute(path)
            .map_err(|e| ModelError::from_file_system(path, FileSystemError::Io(e)))?;

        let content = self
            .fs
            .read_file(&absolute)
            .map_err(|e| ModelError::from_file_system(&absolute, e))?;

        let mut model = self.codec.decode_bytes(&content)?;
        debug!(
            path = %absolute.display(),
            properties = model.properties.len(),
            "read descriptor"
        );
        model.set_pom_file(absolute);
        Ok(model)
    }

    /// Reads a descriptor from an open stream. The model has no location.
    ///
    /// The stream is consumed to its end but not closed; pass `&mut reader`
    /// to keep using it.
    ///
    /// # Errors
    /// - `Io` if the stream fails
    /// - `Parse` if the content cannot be decoded or is not a descriptor
    pub fn execute_reader<R: Read>(&self, mut reader: R) -> ModelResult<Model> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content)?;
        let model = self.codec.decode_bytes(&content)?;
        debug!(properties = model.properties.len(), "read descriptor from stream");
        Ok(model)
    }

    /// Parses descriptor text. The model has no location.
    ///
    /// # Errors
    ///
    /// Returns `Parse` if the content is not a descriptor.
    pub fn parse(&self, content: &str) -> ModelResult<Model> {
        let model = self.codec.decode(content)?;
        debug!(properties = model.properties.len(), "parsed descriptor");
        Ok(model)
    }
}
