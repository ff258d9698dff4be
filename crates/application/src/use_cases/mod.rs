//! Application use cases (descriptor read/write orchestration).

mod read_model;
mod write_model;

pub use read_model::*;
pub use write_model::*;
