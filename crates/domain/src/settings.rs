//! Writer settings
//!
//! Controls the layout of serialized descriptors.

use serde::{Deserialize, Serialize};

/// Layout options for writing a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterSettings {
    /// Number of spaces per nesting level.
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Whether to emit `<?xml version="1.0" encoding="UTF-8"?>` first.
    #[serde(default = "default_xml_declaration")]
    pub xml_declaration: bool,
}

const fn default_indent_size() -> usize {
    2
}

const fn default_xml_declaration() -> bool {
    true
}

impl Default for WriterSettings {
    fn default() -> Self {
        Self {
            indent_size: default_indent_size(),
            xml_declaration: default_xml_declaration(),
        }
    }
}
