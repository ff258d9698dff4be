//! Write model use case.

use std::io::Write;
use std::path::{Path, PathBuf};

use pomhelper_domain::{Model, WriterSettings};
use tracing::{debug, warn};

use crate::error::{ModelError, ModelResult};
use crate::ports::{FileSystem, ModelCodec};

/// Use case for writing a [`Model`] back out.
pub struct WriteModel<F: FileSystem, C: ModelCodec> {
    fs: F,
    codec: C,
    settings: WriterSettings,
}

impl<F: FileSystem, C: ModelCodec> WriteModel<F, C> {
    /// Creates a new `WriteModel` use case with default settings.
    #[must_use]
    pub fn new(fs: F, codec: C) -> Self {
        Self::with_settings(fs, codec, WriterSettings::default())
    }

    /// Creates a new `WriteModel` use case with explicit settings.
    #[must_use]
    pub const fn with_settings(fs: F, codec: C, settings: WriterSettings) -> Self {
        Self {
            fs,
            codec,
            settings,
        }
    }

    /// Writes `model` to its associated location and returns that path.
    ///
    /// # Errors
    /// - `MissingLocation` if the model has no location
    /// - `Encode` if the model cannot be serialized
    /// - `Io` if the file cannot be written
    pub fn execute(&self, model: &Model) -> ModelResult<PathBuf> {
        let Some(target) = model.pom_file() else {
            warn!("refusing to write a model with no associated location");
            return Err(ModelError::MissingLocation);
        };
        self.write_to(model, target)?;
        Ok(target.to_path_buf())
    }

    /// Writes `model` to `path`, leaving the model's own location untouched.
    ///
    /// The model is serialized before the file is opened, so a model that
    /// cannot be encoded leaves `path` as it was.
    ///
    /// # Errors
    /// - `Encode` if the model cannot be serialized
    /// - `Io` if the file cannot be written
    pub fn write_to(&self, model: &Model, path: &Path) -> ModelResult<()> {
        let content = self.render(model)?;
        self.fs
            .write_file(path, content.as_bytes())
            .map_err(|e| ModelError::from_file_system(path, e))?;
        debug!(
            path = %path.display(),
            properties = model.properties.len(),
            "wrote descriptor"
        );
        Ok(())
    }

    /// Writes `model` to an open stream and flushes it.
    ///
    /// # Errors
    /// - `Encode` if the model cannot be serialized
    /// - `Io` if the stream fails
    pub fn write_to_writer<W: Write>(&self, model: &Model, mut writer: W) -> ModelResult<()> {
        let content = self.render(model)?;
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Serializes `model` to a string.
    ///
    /// # Errors
    ///
    /// Returns `Encode` if the model cannot be serialized.
    pub fn render(&self, model: &Model) -> ModelResult<String> {
        Ok(self.codec.encode(model, &self.settings)?)
    }
}
