//! Descriptor codec port.

use pomhelper_domain::{Model, WriterSettings};

/// Error type for codec operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The input is not a well-formed descriptor.
    #[error("{0}")]
    Malformed(String),

    /// The model cannot be represented in the output format.
    #[error("{0}")]
    Unencodable(String),
}

/// Converts between descriptor text and [`Model`].
pub trait ModelCodec: Send + Sync {
    /// Parses descriptor text.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Malformed`] for invalid input.
    fn decode(&self, source: &str) -> Result<Model, CodecError>;

    /// Parses raw descriptor bytes, decoding them with the encoding the
    /// content declares.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Malformed`] if the bytes cannot be decoded or
    /// are not a descriptor.
    fn decode_bytes(&self, source: &[u8]) -> Result<Model, CodecError>;

    /// Serializes a model.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Unencodable`] if the model cannot be written.
    fn encode(&self, model: &Model, settings: &WriterSettings) -> Result<String, CodecError>;
}
