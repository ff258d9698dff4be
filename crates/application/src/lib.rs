//! pomhelper Application - Use cases and ports
//!
//! Orchestrates reading and writing descriptors through the ports in
//! [`ports`]. Concrete adapters live in the infrastructure crate.

mod error;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

pub use error::{ModelError, ModelErrorKind, ModelResult};
pub use use_cases::{ReadModel, WriteModel};
