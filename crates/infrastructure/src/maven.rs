//! Stateless read/write helpers for `pom.xml` descriptors.
//!
//! Each function wires the use cases to [`StdFileSystem`] and
//! [`XmlModelCodec`]; nothing is kept between calls.
//!
//! ```no_run
//! use pomhelper_infrastructure::maven;
//!
//! let mut model = maven::read_model("pom.xml")?;
//! model.properties.insert("maven.compiler.release", "21");
//! maven::write_model(&model)?;
//! # Ok::<(), pomhelper_application::ModelError>(())
//! ```

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use pomhelper_application::{ModelResult, ReadModel, WriteModel};
use pomhelper_domain::{Model, WriterSettings};

use crate::adapters::XmlModelCodec;
use crate::persistence::StdFileSystem;

fn read_use_case() -> ReadModel<StdFileSystem, XmlModelCodec> {
    ReadModel::new(StdFileSystem::new(), XmlModelCodec::new())
}

fn write_use_case(settings: WriterSettings) -> WriteModel<StdFileSystem, XmlModelCodec> {
    WriteModel::with_settings(StdFileSystem::new(), XmlModelCodec::new(), settings)
}

/// Reads the descriptor at `path` (a `Path`, `PathBuf` or string).
///
/// The model remembers the absolute form of `path` as its location.
///
/// # Errors
///
/// `NotFound`, `Io` or `Parse`; see [`ReadModel::execute`].
pub fn read_model(path: impl AsRef<Path>) -> ModelResult<Model> {
    read_use_case().execute(path.as_ref())
}

/// Reads a descriptor from an open stream. The model has no location.
///
/// # Errors
///
/// `Io` or `Parse`; see [`ReadModel::execute_reader`].
pub fn read_model_from_reader(reader: impl Read) -> ModelResult<Model> {
    read_use_case().execute_reader(reader)
}

/// Parses descriptor text. The model has no location.
///
/// # Errors
///
/// Returns `Parse` for malformed content.
pub fn read_model_from_str(source: &str) -> ModelResult<Model> {
    read_use_case().parse(source)
}

/// Writes `model` to its own location and returns that path.
///
/// # Errors
///
/// `MissingLocation` if the model has none, otherwise `Encode` or `Io`.
pub fn write_model(model: &Model) -> ModelResult<PathBuf> {
    write_model_with_settings(model, WriterSettings::default())
}

/// [`write_model`] with explicit layout settings.
///
/// # Errors
///
/// Same as [`write_model`].
pub fn write_model_with_settings(model: &Model, settings: WriterSettings) -> ModelResult<PathBuf> {
    write_use_case(settings).execute(model)
}

/// Writes `model` to `path` without changing the model's location.
///
/// # Errors
///
/// `Encode` or `Io`.
pub fn write_model_to(model: &Model, path: impl AsRef<Path>) -> ModelResult<()> {
    write_model_to_with_settings(model, path, WriterSettings::default())
}

/// [`write_model_to`] with explicit layout settings.
///
/// # Errors
///
/// Same as [`write_model_to`].
pub fn write_model_to_with_settings(
    model: &Model,
    path: impl AsRef<Path>,
    settings: WriterSettings,
) -> ModelResult<()> {
    write_use_case(settings).write_to(model, path.as_ref())
}

/// Writes `model` to an open stream.
///
/// # Errors
///
/// `Encode` or `Io`.
pub fn write_model_to_writer(model: &Model, out: impl Write) -> ModelResult<()> {
    write_use_case(WriterSettings::default()).write_to_writer(model, out)
}

/// Serializes `model` with default settings.
///
/// # Errors
///
/// Returns `Encode` if the model cannot be serialized.
pub fn model_to_string(model: &Model) -> ModelResult<String> {
    write_use_case(WriterSettings::default()).render(model)
}
