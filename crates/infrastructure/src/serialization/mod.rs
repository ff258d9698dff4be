//! Deterministic XML serialization for descriptor files.
//!
//! Ensures clean Git diffs by:
//! - Writing properties in key order (via `SortedProperties` in the model)
//! - Re-indenting with a fixed number of spaces
//! - Adding a trailing newline
//! - UTF-8 encoding without BOM

mod xml;

pub use xml::*;
