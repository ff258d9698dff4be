//! XML codec adapter

use pomhelper_application::ports::{CodecError, ModelCodec};
use pomhelper_domain::{Model, WriterSettings};

use crate::serialization::{decode_source, parse_document, to_xml_stable};

/// [`ModelCodec`] for `pom.xml` descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlModelCodec;

impl XmlModelCodec {
    /// Creates a new XML codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ModelCodec for XmlModelCodec {
    fn decode(&self, source: &str) -> Result<Model, CodecError> {
        let document =
            parse_document(source).map_err(|e| CodecError::Malformed(e.to_string()))?;
        Model::from_document(document).map_err(|e| CodecError::Malformed(e.to_string()))
    }

    fn decode_bytes(&self, source: &[u8]) -> Result<Model, CodecError> {
        let text = decode_source(source).map_err(|e| CodecError::Malformed(e.to_string()))?;
        self.decode(&text)
    }

    fn encode(&self, model: &Model, settings: &WriterSettings) -> Result<String, CodecError> {
        let document = model
            .to_document()
            .map_err(|e| CodecError::Unencodable(e.to_string()))?;
        to_xml_stable(&document, settings).map_err(|e| CodecError::Unencodable(e.to_string()))
    }
}
