//! Assembly of an Allure result around a reconstructed step tree.

use super::labels::{DefaultLabelScraper, LabelConfig, LabelScraper};
use crate::allure::{AllureResult, Status, StatusDetails, Step};
use crate::ginkgo::SpecReport;
use crate::utils::config::ID_LABEL_NAME;
use crate::utils::error::ReportError;
use md5::{Digest, Md5};
use uuid::Uuid;

/// Wraps steps and spec metadata into a result
pub trait Reporter {
    fn set_label_scraper(&mut self, scraper: Box<dyn LabelScraper>);

    fn generate_report(&self, steps: Vec<Step>) -> Result<AllureResult, ReportError>;
}

/// Report settings
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Labels every spec must carry
    pub mandatory_labels: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mandatory_labels: vec![ID_LABEL_NAME.to_string()],
        }
    }
}

impl ReportConfig {
    pub fn with_mandatory_labels(mut self, mandatory_labels: Vec<String>) -> Self {
        self.mandatory_labels = mandatory_labels;
        self
    }
}

pub struct DefaultReport {
    config: ReportConfig,
    spec_report: SpecReport,
    label_scraper: Box<dyn LabelScraper>,
}

impl DefaultReport {
    /// Start with a scraper over the spec's own labels and default settings
    pub fn new(spec_report: SpecReport, config: ReportConfig) -> Self {
        let label_scraper = Box::new(DefaultLabelScraper::new(
            &spec_report.leaf_node_labels,
            &LabelConfig::default(),
        ));
        Self {
            config,
            spec_report,
            label_scraper,
        }
    }

    /// Container texts followed by the leaf text, space separated
    fn default_description(&self) -> String {
        self.spec_report
            .container_hierarchy_texts
            .iter()
            .chain(std::iter::once(&self.spec_report.leaf_node_text))
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Reporter for DefaultReport {
    fn set_label_scraper(&mut self, scraper: Box<dyn LabelScraper>) {
        self.label_scraper = scraper;
    }

    fn generate_report(&self, steps: Vec<Step>) -> Result<AllureResult, ReportError> {
        self.label_scraper
            .check_mandatory_labels(&self.config.mandatory_labels)?;

        let id = self.label_scraper.id(Uuid::new_v4())?;
        let test_case_id = md5_hex(&id.to_string());
        let history_id = md5_hex(&test_case_id);

        let description = self.label_scraper.description(&self.default_description());

        let failure = &self.spec_report.failure;
        let (status, status_details) = if failure.timeline_location.order != 0 {
            (
                Status::Failed,
                StatusDetails {
                    message: failure.message.clone(),
                    trace: failure.location.full_stack_trace.clone(),
                },
            )
        } else {
            (Status::Passed, StatusDetails::default())
        };

        Ok(AllureResult {
            uuid: id,
            name: self.spec_report.leaf_node_text.clone(),
            full_name: id.to_string(),
            description,
            status,
            status_details,
            start: self.spec_report.start_time.map(|t| t.timestamp_millis()).unwrap_or(0),
            stop: self.spec_report.end_time.map(|t| t.timestamp_millis()).unwrap_or(0),
            test_case_id,
            history_id,
            labels: self.label_scraper.allure_labels(),
            steps,
        })
    }
}

/// Hex MD5 digest used for Allure's testCaseId and historyId
pub fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ginkgo::{Failure, FailureLocation, TimelineLocation};

    const ID: &str = "8791ccdd-83c6-4333-b589-f3a7822166f5";

    fn spec_report(leaf_node_labels: Vec<String>) -> SpecReport {
        SpecReport {
            container_hierarchy_texts: vec!["Login".to_string(), "with password".to_string()],
            leaf_node_text: "test".to_string(),
            leaf_node_labels,
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_report_with_id() {
        let report = DefaultReport::new(spec_report(vec![format!("id={}", ID)]), ReportConfig::default());
        let result = report.generate_report(Vec::new()).unwrap();

        assert_eq!(result.name, "test");
        assert_eq!(result.full_name, ID);
        assert_eq!(result.uuid.to_string(), ID);
        assert_eq!(result.status, Status::Passed);
        assert_eq!(result.description, "Login with password test");
        assert_eq!(result.test_case_id, md5_hex(ID));
        assert_eq!(result.history_id, md5_hex(&result.test_case_id));
    }

    #[test]
    fn test_mandatory_labels_block_report() {
        let report = DefaultReport::new(
            spec_report(vec![format!("id={}", ID)]),
            ReportConfig::default().with_mandatory_labels(vec!["story".to_string()]),
        );
        assert!(matches!(
            report.generate_report(Vec::new()),
            Err(ReportError::MissingMandatoryLabel(_))
        ));
    }

    #[test]
    fn test_invalid_id_blocks_report() {
        let report = DefaultReport::new(spec_report(vec!["id=incorrect-uuid".to_string()]), ReportConfig::default());
        assert!(matches!(report.generate_report(Vec::new()), Err(ReportError::InvalidId(_))));
    }

    #[test]
    fn test_failure_sets_status_details() {
        let mut spec = spec_report(vec![format!("id={}", ID)]);
        spec.failure = Failure {
            message: "Expected 1 to equal 2".to_string(),
            location: FailureLocation {
                full_stack_trace: "main.func1()\n\t/src/a.go:3 +0x1\n".to_string(),
                ..Default::default()
            },
            timeline_location: TimelineLocation { order: 1, time: None },
        };

        let result = DefaultReport::new(spec, ReportConfig::default())
            .generate_report(Vec::new())
            .unwrap();

        assert_eq!(result.status, Status::Failed);
        assert_eq!(result.status_details.message, "Expected 1 to equal 2");
        assert!(result.status_details.trace.contains("/src/a.go:3"));
    }

    #[test]
    fn test_replaced_scraper_is_used() {
        let mut report = DefaultReport::new(spec_report(Vec::new()), ReportConfig::default());
        report.set_label_scraper(Box::new(DefaultLabelScraper::new(
            &[],
            &LabelConfig::default().with_auto_generate_id(true),
        )));

        let result = report.generate_report(Vec::new()).unwrap();
        assert!(!result.uuid.is_nil());
        assert_eq!(result.full_name, result.uuid.to_string());
    }

    #[test]
    fn test_md5_hex() {
        assert_eq!(md5_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(md5_hex(ID), "5dba7ea33e67b62e7d1821f482f19372");
    }

    #[test]
    fn test_history_id_chains_test_case_id() {
        let report = DefaultReport::new(spec_report(vec![format!("id={}", ID)]), ReportConfig::default());
        let result = report.generate_report(Vec::new()).unwrap();

        assert_eq!(result.test_case_id, "5dba7ea33e67b62e7d1821f482f19372");
        assert_eq!(result.history_id, md5_hex("5dba7ea33e67b62e7d1821f482f19372"));
    }
}
