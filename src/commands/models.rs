use crate::convert::ConvertConfig;
use crate::report::{LabelConfig, ReportConfig};
use crate::transform::TransformConfig;
use crate::utils::config::{
    DEFAULT_ANALYZE_ERRORS, DEFAULT_EPIC, DEFAULT_LABEL_SEPARATOR, ID_LABEL_NAME,
};
use std::path::PathBuf;

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// Ginkgo JSON report to read
    pub ginkgo_report: PathBuf,

    /// Directory receiving `<uuid>-result.json` files
    pub results_dir: PathBuf,

    /// Epic label added to every result (empty to omit)
    pub epic: String,

    /// Separator between label key and value
    pub label_separator: String,

    /// Labels every spec must carry
    pub mandatory_labels: Vec<String>,

    /// Attribute failures to steps; malformed stack traces become fatal
    pub analyze_errors: bool,

    /// Generate ids for specs without an `id` label
    pub auto_generate_id: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            ginkgo_report: PathBuf::from("ginkgo-report.json"),
            results_dir: PathBuf::from("allure-results"),
            epic: DEFAULT_EPIC.to_string(),
            label_separator: DEFAULT_LABEL_SEPARATOR.to_string(),
            mandatory_labels: vec![ID_LABEL_NAME.to_string()],
            analyze_errors: DEFAULT_ANALYZE_ERRORS,
            auto_generate_id: false,
        }
    }
}

impl ConvertArgs {
    /// Settings for the conversion pipeline
    ///
    /// Empty mandatory label names are dropped, so an empty list turns the
    /// check off.
    pub fn to_config(&self) -> ConvertConfig {
        let mandatory_labels = self
            .mandatory_labels
            .iter()
            .filter(|label| !label.is_empty())
            .cloned()
            .collect();

        ConvertConfig {
            transform: TransformConfig::default()
                .with_error_analysis(self.analyze_errors, self.analyze_errors),
            labels: LabelConfig::default()
                .with_epic(self.epic.clone())
                .with_separator(self.label_separator.clone())
                .with_auto_generate_id(self.auto_generate_id),
            report: ReportConfig::default().with_mandatory_labels(mandatory_labels),
        }
    }
}
