//! Conversion of whole Ginkgo reports into Allure results.
//!
//! Only `It` specs become results; suite-level setup nodes are skipped.

pub mod converter;

pub use converter::{ConvertConfig, ConverterFactory, SpecConverter};

use crate::allure::AllureResult;
use crate::ginkgo::{NodeType, Report};
use crate::output::ResultWriter;
use crate::utils::error::{ConvertError, OutputError};
use log::{debug, info};

/// Convert every `It` spec of every suite report
///
/// **Public** - main entry point for the convert command
///
/// # Arguments
/// * `reports` - Parsed Ginkgo report array
/// * `factory` - Builds the converter for each spec
/// * `config` - Base settings; the suite name label is filled in per report
///
/// # Errors
/// Stops at the first spec that fails to convert
pub fn ginkgo_to_allure(
    reports: &[Report],
    factory: ConverterFactory,
    config: &ConvertConfig,
) -> Result<Vec<AllureResult>, ConvertError> {
    let mut results = Vec::new();

    for report in reports {
        let mut suite_config = config.clone();
        suite_config.labels.suite_name = report.suite_description.clone();

        for spec_report in &report.spec_reports {
            if spec_report.leaf_node_type != NodeType::It {
                debug!("Skipping {} node {:?}", spec_report.leaf_node_type, spec_report.leaf_node_text);
                continue;
            }

            let mut converter = factory(spec_report.clone(), &suite_config)?;
            results.push(converter.allure_result()?);
        }
    }

    info!("Converted {} spec(s) from {} suite(s)", results.len(), reports.len());

    Ok(results)
}

/// Persist every result, collecting failures instead of stopping at the first
pub fn save_allure_results(results: &[AllureResult], writer: &dyn ResultWriter) -> Vec<OutputError> {
    results
        .iter()
        .filter_map(|result| writer.save_result(result).err())
        .collect()
}
