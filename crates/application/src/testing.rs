//! Test doubles for the ports.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use pomhelper_domain::{Model, WriterSettings, validate_element_name};

use crate::ports::{CodecError, FileSystem, FileSystemError, ModelCodec};

/// File system kept in a shared map; clones see the same files.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileSystem {
    files: Arc<Mutex<BTreeMap<PathBuf, Vec<u8>>>>,
}

impl InMemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, path: impl Into<PathBuf>, content: &str) {
        self.put_bytes(path, content.as_bytes());
    }

    pub fn put_bytes(&self, path: impl Into<PathBuf>, content: &[u8]) {
        self.lock().insert(path.into(), content.to_vec());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, Vec<u8>>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileSystem for InMemoryFileSystem {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        self.lock()
            .get(path)
            .cloned()
            .ok_or_else(|| FileSystemError::NotFound(path.to_path_buf()))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        self.put_bytes(path, contents);
        Ok(())
    }
}

/// Line-based stand-in codec: `artifact=<id>` plus one `key=value` line per
/// property.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCodec;

impl ModelCodec for LineCodec {
    fn decode(&self, source: &str) -> Result<Model, CodecError> {
        let mut model = Model::new();
        for line in source.lines().filter(|line| !line.is_empty()) {
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| CodecError::Malformed(format!("no '=' in {line:?}")))?;
            if key == "artifact" {
                model.artifact_id = Some(value.to_string());
            } else {
                model.properties.insert(key, value);
            }
        }
        Ok(model)
    }

    fn decode_bytes(&self, source: &[u8]) -> Result<Model, CodecError> {
        let text = std::str::from_utf8(source).map_err(|e| CodecError::Malformed(e.to_string()))?;
        self.decode(text)
    }

    fn encode(&self, model: &Model, _settings: &WriterSettings) -> Result<String, CodecError> {
        let mut out = String::new();
        if let Some(artifact) = &model.artifact_id {
            out.push_str(&format!("artifact={artifact}\n"));
        }
        for (key, value) in &model.properties {
            validate_element_name(key).map_err(|e| CodecError::Unencodable(e.to_string()))?;
            out.push_str(&format!("{key}={value}\n"));
        }
        Ok(out)
    }
}
