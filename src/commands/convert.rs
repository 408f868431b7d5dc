//! Convert command implementation.
//!
//! The convert command:
//! 1. Reads the Ginkgo JSON report
//! 2. Converts every `It` spec into an Allure result
//! 3. Writes one result file per spec

use super::models::ConvertArgs;
use crate::convert::{ginkgo_to_allure, save_allure_results, SpecConverter};
use crate::ginkgo::read_ginkgo_reports;
use crate::output::FileResultWriter;
use anyhow::{Context, Result};
use log::{error, info};
use std::time::Instant;

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed Ginkgo report
/// * Spec conversion failures (missing labels, malformed stack traces)
/// * Any result file that could not be written
pub fn execute_convert(args: ConvertArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Converting Ginkgo report: {}", args.ginkgo_report.display());

    // Step 1: Read report
    info!("Step 1/3: Reading Ginkgo report...");
    let reports = read_ginkgo_reports(&args.ginkgo_report).with_context(|| {
        format!("Error reading Ginkgo report {}", args.ginkgo_report.display())
    })?;

    // Step 2: Convert
    info!("Step 2/3: Converting specs...");
    let config = args.to_config();
    let results = ginkgo_to_allure(&reports, SpecConverter::from_config, &config)
        .with_context(|| format!("Error converting report {}", args.ginkgo_report.display()))?;

    // Step 3: Write results
    info!("Step 3/3: Writing {} result file(s)...", results.len());
    let writer = FileResultWriter::new(&args.results_dir);
    let errors = save_allure_results(&results, &writer);
    for e in &errors {
        error!("{}", e);
    }
    if !errors.is_empty() {
        anyhow::bail!(
            "Failed to save {} of {} result(s) to {}",
            errors.len(),
            results.len(),
            writer.results_dir().display()
        );
    }

    info!("Results written to: {}", writer.results_dir().display());
    info!("Conversion completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    if args.ginkgo_report.as_os_str().is_empty() {
        anyhow::bail!("Ginkgo report path cannot be empty");
    }

    if !args.ginkgo_report.is_file() {
        anyhow::bail!(
            "Ginkgo report not found: {}",
            args.ginkgo_report.display()
        );
    }

    if args.results_dir.as_os_str().is_empty() {
        anyhow::bail!("Results directory cannot be empty");
    }

    if args.results_dir.is_file() {
        anyhow::bail!(
            "Results path is a file: {}",
            args.results_dir.display()
        );
    }

    if args.label_separator.is_empty() {
        anyhow::bail!("Label separator cannot be empty");
    }

    Ok(())
}
