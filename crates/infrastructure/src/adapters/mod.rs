//! Port adapters.

mod xml_codec;

pub use xml_codec::XmlModelCodec;
