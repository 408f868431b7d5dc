//! Output writers for Allure results.
//!
//! This module handles writing data to disk:
//! - One `<uuid>-result.json` file per converted spec
//! - Reading result files back for inspection

pub mod json;

// Re-export main types and functions
pub use json::{read_result, result_file_name, FileResultWriter, ResultWriter};

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
