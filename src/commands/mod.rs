//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod convert;
pub mod models;

// Re-export main command functions
pub use convert::{execute_convert, validate_args};
pub use models::ConvertArgs;
