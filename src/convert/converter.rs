//! Per-spec conversion: events to steps, steps to an Allure result.

use crate::allure::AllureResult;
use crate::ginkgo::SpecReport;
use crate::report::{DefaultLabelScraper, DefaultReport, LabelConfig, LabelScraper, ReportConfig, Reporter};
use crate::transform::{DefaultTransform, TransformConfig, Transformer};
use crate::utils::error::ConvertError;

/// Settings for every stage of a conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    pub transform: TransformConfig,
    pub labels: LabelConfig,
    pub report: ReportConfig,
}

/// Builds the converter for one spec report
pub type ConverterFactory = fn(SpecReport, &ConvertConfig) -> Result<SpecConverter, ConvertError>;

/// Converts a single spec report into an Allure result
pub struct SpecConverter {
    transformer: Box<dyn Transformer>,
    reporter: Box<dyn Reporter>,
    spec_report: SpecReport,
}

impl SpecConverter {
    /// Wire the stages together; the reporter takes over `label_scraper`
    pub fn new(
        spec_report: SpecReport,
        transformer: Box<dyn Transformer>,
        label_scraper: Box<dyn LabelScraper>,
        mut reporter: Box<dyn Reporter>,
    ) -> Self {
        reporter.set_label_scraper(label_scraper);
        Self {
            transformer,
            reporter,
            spec_report,
        }
    }

    /// Default factory: standard transform, label scraper and report
    pub fn from_config(
        spec_report: SpecReport,
        config: &ConvertConfig,
    ) -> Result<Self, ConvertError> {
        let transformer = Box::new(DefaultTransform::new(config.transform));
        let label_scraper = Box::new(DefaultLabelScraper::new(
            &spec_report.leaf_node_labels,
            &config.labels,
        ));
        let reporter = Box::new(DefaultReport::new(spec_report.clone(), config.report.clone()));

        Ok(Self::new(spec_report, transformer, label_scraper, reporter))
    }

    /// Analyze the spec's events and assemble its result
    pub fn allure_result(&mut self) -> Result<AllureResult, ConvertError> {
        self.transformer
            .analyze_events(&self.spec_report.spec_events, &self.spec_report.failure)?;

        let steps = self.transformer.steps().to_vec();
        Ok(self.reporter.generate_report(steps)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allure::Status;
    use crate::ginkgo::{CodeLocation, SpecEvent, SpecEventType, TimelineLocation};

    fn by(kind: SpecEventType, line: u32, order: u64) -> SpecEvent {
        SpecEvent {
            spec_event_type: kind,
            code_location: CodeLocation::new("/src/suite_test.go", line),
            timeline_location: TimelineLocation { order, time: None },
            message: "login".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_config_converts_spec() {
        let spec_report = SpecReport {
            leaf_node_text: "logs in".to_string(),
            leaf_node_labels: vec!["id=c57e2b09-901f-4991-a516-a22c8bb625d4".to_string()],
            spec_events: vec![by(SpecEventType::ByStart, 10, 1), by(SpecEventType::ByEnd, 10, 2)],
            ..Default::default()
        };

        let mut converter = SpecConverter::from_config(spec_report, &ConvertConfig::default()).unwrap();
        let result = converter.allure_result().unwrap();

        assert_eq!(result.name, "logs in");
        assert_eq!(result.status, Status::Passed);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].name, "login");
    }

    #[test]
    fn test_report_error_surfaces() {
        let spec_report = SpecReport::default();
        let mut converter = SpecConverter::from_config(spec_report, &ConvertConfig::default()).unwrap();
        assert!(matches!(converter.allure_result(), Err(ConvertError::Report(_))));
    }
}
