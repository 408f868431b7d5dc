//! Label extraction from Ginkgo `Label(...)` decorators.
//!
//! Leaf labels such as `"id=c57e2b09-..."` or `"story=login"` become Allure
//! labels. A few well-known keys also drive the result id and description.

use crate::allure::Label;
use crate::utils::config::{
    DEFAULT_EPIC, DEFAULT_LABEL_SEPARATOR, DEFAULT_SUITE_NAME, DESCRIPTION_LABEL_NAME,
    EPIC_LABEL_NAME, ID_LABEL_NAME, LABEL_PARTS, SUITE_LABEL_NAME,
};
use crate::utils::error::ReportError;
use log::debug;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Source of labels, id and description for one result
pub trait LabelScraper {
    /// Fail on the first mandatory label the spec does not carry
    fn check_mandatory_labels(&self, mandatory: &[String]) -> Result<(), ReportError>;

    fn allure_labels(&self) -> Vec<Label>;

    /// Result id from the `id` label, or `default` when ids are auto-generated
    fn id(&self, default: Uuid) -> Result<Uuid, ReportError>;

    fn description(&self, default: &str) -> String;
}

/// Label scraper settings
#[derive(Debug, Clone)]
pub struct LabelConfig {
    /// Added as the `epic` label when non-empty
    pub epic: String,

    /// Added as the `suite` label when non-empty
    pub suite_name: String,

    /// Splits `key<separator>value` leaf labels
    pub separator: String,

    /// Accept specs without an `id` label
    pub auto_generate_id: bool,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            epic: DEFAULT_EPIC.to_string(),
            suite_name: DEFAULT_SUITE_NAME.to_string(),
            separator: DEFAULT_LABEL_SEPARATOR.to_string(),
            auto_generate_id: false,
        }
    }
}

impl LabelConfig {
    pub fn with_epic(mut self, epic: impl Into<String>) -> Self {
        self.epic = epic.into();
        self
    }

    pub fn with_suite_name(mut self, suite_name: impl Into<String>) -> Self {
        self.suite_name = suite_name.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_auto_generate_id(mut self, auto_generate_id: bool) -> Self {
        self.auto_generate_id = auto_generate_id;
        self
    }
}

#[derive(Debug, Clone)]
pub struct DefaultLabelScraper {
    labels: BTreeMap<String, String>,
    auto_generate_id: bool,
}

impl DefaultLabelScraper {
    pub fn new(leaf_node_labels: &[String], config: &LabelConfig) -> Self {
        let mut labels = split_labels(leaf_node_labels, &config.separator);

        if !config.epic.is_empty() {
            labels.insert(EPIC_LABEL_NAME.to_string(), config.epic.clone());
        }
        if !config.suite_name.is_empty() {
            labels.insert(SUITE_LABEL_NAME.to_string(), config.suite_name.clone());
        }

        Self {
            labels,
            auto_generate_id: config.auto_generate_id,
        }
    }

    /// All labels, keyed by name
    pub fn test_case_labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }
}

/// Keep only labels that split into exactly a key and a value
///
/// **Private** - internal helper for DefaultLabelScraper::new
fn split_labels(leaf_node_labels: &[String], separator: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();

    for label in leaf_node_labels {
        let parts: Vec<&str> = label.split(separator).collect();
        if parts.len() != LABEL_PARTS {
            debug!("Skipping label {:?}: not a key{}value pair", label, separator);
            continue;
        }
        labels.insert(parts[0].to_string(), parts[1].to_string());
    }

    labels
}

impl LabelScraper for DefaultLabelScraper {
    fn check_mandatory_labels(&self, mandatory: &[String]) -> Result<(), ReportError> {
        for label in mandatory {
            if self.auto_generate_id && label == ID_LABEL_NAME {
                continue;
            }
            if !self.labels.contains_key(label) {
                return Err(ReportError::MissingMandatoryLabel(label.clone()));
            }
        }
        Ok(())
    }

    fn allure_labels(&self) -> Vec<Label> {
        self.labels
            .iter()
            .map(|(name, value)| Label::new(name, value))
            .collect()
    }

    fn id(&self, default: Uuid) -> Result<Uuid, ReportError> {
        match self.labels.get(ID_LABEL_NAME) {
            Some(id) => Ok(Uuid::parse_str(id)?),
            None if self.auto_generate_id => Ok(default),
            None => Err(ReportError::MissingId),
        }
    }

    fn description(&self, default: &str) -> String {
        self.labels
            .get(DESCRIPTION_LABEL_NAME)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn bare() -> LabelConfig {
        LabelConfig::default().with_epic("")
    }

    #[test]
    fn test_split_labels() {
        let scraper = DefaultLabelScraper::new(
            &labels(&["incorrect-label", "multi=incorrect=label", "correct=label"]),
            &bare(),
        );

        let expected: BTreeMap<String, String> =
            [("correct".to_string(), "label".to_string())].into_iter().collect();
        assert_eq!(scraper.test_case_labels(), &expected);
    }

    #[test]
    fn test_epic_and_suite_labels() {
        let config = LabelConfig::default()
            .with_epic("test")
            .with_suite_name("suite")
            .with_separator(":");
        let scraper = DefaultLabelScraper::new(&labels(&["correct:label"]), &config);

        assert_eq!(
            scraper.allure_labels(),
            vec![
                Label::new("correct", "label"),
                Label::new("epic", "test"),
                Label::new("suite", "suite"),
            ]
        );
    }

    #[test]
    fn test_default_epic() {
        let scraper = DefaultLabelScraper::new(&[], &LabelConfig::default());
        assert_eq!(scraper.allure_labels(), vec![Label::new("epic", "base")]);
    }

    #[test]
    fn test_check_mandatory_labels() {
        let mandatory = vec![ID_LABEL_NAME.to_string()];

        let scraper = DefaultLabelScraper::new(&labels(&["id=label"]), &bare());
        assert!(scraper.check_mandatory_labels(&mandatory).is_ok());

        let scraper = DefaultLabelScraper::new(&labels(&["incorrect=label"]), &bare());
        assert!(matches!(
            scraper.check_mandatory_labels(&mandatory),
            Err(ReportError::MissingMandatoryLabel(label)) if label == "id"
        ));

        let scraper = DefaultLabelScraper::new(&[], &bare().with_auto_generate_id(true));
        assert!(scraper.check_mandatory_labels(&mandatory).is_ok());
    }

    #[test]
    fn test_id() {
        let default = Uuid::parse_str("f67b2057-fc82-4dd7-bbd5-9d178aab9901").unwrap();

        let scraper = DefaultLabelScraper::new(&labels(&["incorrect=incorrect"]), &bare());
        assert!(matches!(scraper.id(default), Err(ReportError::MissingId)));

        let scraper = DefaultLabelScraper::new(&labels(&["id=incorrect"]), &bare());
        assert!(matches!(scraper.id(default), Err(ReportError::InvalidId(_))));

        let scraper =
            DefaultLabelScraper::new(&labels(&["id=ad7583dc-0e3d-4640-a020-567452d84886"]), &bare());
        assert_eq!(
            scraper.id(default).unwrap(),
            Uuid::parse_str("ad7583dc-0e3d-4640-a020-567452d84886").unwrap()
        );

        let scraper = DefaultLabelScraper::new(&[], &bare().with_auto_generate_id(true));
        assert_eq!(scraper.id(default).unwrap(), default);
    }

    #[test]
    fn test_description() {
        let scraper = DefaultLabelScraper::new(&[], &bare());
        assert_eq!(scraper.description("test"), "test");

        let scraper = DefaultLabelScraper::new(&labels(&["description=custom"]), &bare());
        assert_eq!(scraper.description(""), "custom");
    }
}
