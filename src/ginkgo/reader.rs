//! Ginkgo JSON report loader.

use super::schema::Report;
use crate::utils::error::InputError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the report array written by `ginkgo --json-report`
///
/// **Public** - entry point for the convert command
///
/// # Errors
/// * `InputError::ReadFailed` - file cannot be opened
/// * `InputError::JsonError` - content is not a Ginkgo report array
pub fn read_ginkgo_reports(input_path: impl AsRef<Path>) -> Result<Vec<Report>, InputError> {
    let input_path = input_path.as_ref();

    debug!("Reading Ginkgo report from: {}", input_path.display());

    let file = File::open(input_path)?;
    let reports: Vec<Report> = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Loaded {} suite report(s) with {} spec report(s)",
        reports.len(),
        reports.iter().map(|r| r.spec_reports.len()).sum::<usize>()
    );

    Ok(reports)
}
