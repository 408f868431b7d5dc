//! Output schema for Allure result files.
//!
//! Mirrors the `*-result.json` layout consumed by `allure generate`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a test or step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Passed,
    Failed,
}

/// One Allure test result, written as `<uuid>-result.json`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllureResult {
    pub uuid: Uuid,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub full_name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub status_details: StatusDetails,

    /// Unix milliseconds
    #[serde(default)]
    pub start: i64,

    #[serde(default)]
    pub stop: i64,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub test_case_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub history_id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<Label>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Failure message and trace shown for a failed result
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub trace: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub value: String,
}

impl Label {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A step inside a test result; steps own their nested children
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Step {
    pub name: String,

    #[serde(default)]
    pub status: Status,

    #[serde(default)]
    pub start: i64,

    #[serde(default)]
    pub stop: i64,

    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Step {
    /// Number of steps in this subtree with the given status
    pub fn count_with_status(&self, status: Status) -> usize {
        let own = usize::from(self.status == status);
        own + self
            .steps
            .iter()
            .map(|child| child.count_with_status(status))
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_serializes_camel_case() {
        let result = AllureResult {
            name: "test 1".to_string(),
            status: Status::Failed,
            test_case_id: "abc".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], json!("failed"));
        assert_eq!(value["testCaseId"], json!("abc"));
        assert!(value.get("fullName").is_none());
        assert!(value.get("labels").is_none());
        assert_eq!(value["steps"], json!([]));
    }

    #[test]
    fn test_count_with_status() {
        let step = Step {
            name: "outer".to_string(),
            steps: vec![
                Step {
                    name: "inner".to_string(),
                    status: Status::Failed,
                    ..Default::default()
                },
                Step {
                    name: "sibling".to_string(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };

        assert_eq!(step.count_with_status(Status::Failed), 1);
        assert_eq!(step.count_with_status(Status::Passed), 2);
    }
}
