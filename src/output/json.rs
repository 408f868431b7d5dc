//! JSON result writer.
//!
//! Writes AllureResult structs into an `allure-results` directory.

use super::validate_path;
use crate::allure::AllureResult;
use crate::utils::config::RESULT_FILE_SUFFIX;
use crate::utils::error::OutputError;
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Persistence for converted results
pub trait ResultWriter {
    fn save_result(&self, result: &AllureResult) -> Result<(), OutputError>;
}

/// Writes each result as a compact JSON file in one directory
#[derive(Debug, Clone)]
pub struct FileResultWriter {
    results_dir: PathBuf,
}

impl FileResultWriter {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }
}

impl ResultWriter for FileResultWriter {
    /// Write `result` to `<results_dir>/<uuid>-result.json`
    ///
    /// # Errors
    /// * `OutputError::InvalidPath` - directory cannot be created
    /// * `OutputError::WriteFailed` - I/O error during write
    /// * `OutputError::SerializationFailed` - JSON serialization error
    fn save_result(&self, result: &AllureResult) -> Result<(), OutputError> {
        if !self.results_dir.exists() {
            debug!("Creating results directory: {}", self.results_dir.display());
            std::fs::create_dir_all(&self.results_dir).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    self.results_dir.display(),
                    e
                ))
            })?;
        }

        let output_path = self.results_dir.join(result_file_name(result));
        validate_path(&output_path)?;

        let file = File::create(&output_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, result)?;
        writer.flush()?;

        debug!("Result written to: {}", output_path.display());

        Ok(())
    }
}

/// File name Allure expects for a result
pub fn result_file_name(result: &AllureResult) -> String {
    format!("{}{}", result.uuid, RESULT_FILE_SUFFIX)
}

/// Read a result back from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_result(input_path: impl AsRef<Path>) -> Result<AllureResult, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading result from: {}", input_path.display());

    let file = File::open(input_path)?;
    let result: AllureResult = serde_json::from_reader(BufReader::new(file))?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allure::{Label, Status, Step};
    use uuid::Uuid;

    fn create_test_result() -> AllureResult {
        AllureResult {
            uuid: Uuid::new_v4(),
            name: "test 1".to_string(),
            status: Status::Failed,
            labels: vec![Label::new("epic", "base")],
            steps: vec![Step {
                name: "nested 1".to_string(),
                status: Status::Failed,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_save_and_read_result() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = FileResultWriter::new(temp_dir.path());
        let result = create_test_result();

        writer.save_result(&result).unwrap();

        let path = temp_dir.path().join(format!("{}-result.json", result.uuid));
        let loaded = read_result(&path).unwrap();
        assert_eq!(loaded, result);
    }

    #[test]
    fn test_save_creates_results_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested/allure-results");
        let writer = FileResultWriter::new(&nested);

        writer.save_result(&create_test_result()).unwrap();

        assert!(nested.is_dir());
        assert_eq!(std::fs::read_dir(&nested).unwrap().count(), 1);
    }

    #[test]
    fn test_save_into_file_path_fails() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let writer = FileResultWriter::new(temp_file.path());

        assert!(writer.save_result(&create_test_result()).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_path(temp_dir.path()).is_err());
        assert!(validate_path(Path::new("")).is_err());
    }
}
