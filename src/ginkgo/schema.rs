//! Input schema for Ginkgo JSON reports.
//!
//! Only the fields the converter reads are modelled; everything else in the
//! report is ignored by serde. Ginkgo writes Go field names verbatim, hence
//! the PascalCase renames.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::fmt;

/// One test suite run (`ginkgo --json-report` writes an array of these)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Report {
    /// Suite description passed to `RunSpecs`
    pub suite_description: String,

    /// One entry per executed node (specs and suite-level setup)
    pub spec_reports: Vec<SpecReport>,
}

/// Result of a single spec (or suite-level node)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SpecReport {
    /// Texts of the enclosing `Describe`/`Context` containers
    pub container_hierarchy_texts: Vec<String>,

    pub leaf_node_type: NodeType,
    pub leaf_node_text: String,

    /// Free-form `Label(...)` decorators on the leaf node
    pub leaf_node_labels: Vec<String>,

    pub start_time: Option<DateTime<FixedOffset>>,
    pub end_time: Option<DateTime<FixedOffset>>,

    pub failure: Failure,

    /// Flat timeline of everything that happened while the spec ran
    pub spec_events: Vec<SpecEvent>,
}

/// A single recorded occurrence on a spec's timeline
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SpecEvent {
    pub spec_event_type: SpecEventType,
    pub code_location: CodeLocation,
    pub timeline_location: TimelineLocation,
    pub message: String,

    /// Absent for `By` events
    pub node_type: NodeType,
}

/// Source statement that produced an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CodeLocation {
    pub file_name: String,
    pub line_number: u32,
}

impl CodeLocation {
    pub fn new(file_name: impl Into<String>, line_number: u32) -> Self {
        Self {
            file_name: file_name.into(),
            line_number,
        }
    }
}

impl fmt::Display for CodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name, self.line_number)
    }
}

/// Position of an event on the spec timeline
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TimelineLocation {
    /// Monotonic, unique within one spec
    pub order: u64,
    pub time: Option<DateTime<FixedOffset>>,
}

impl TimelineLocation {
    /// Event time as Unix milliseconds (0 when Ginkgo recorded none)
    pub fn unix_millis(&self) -> i64 {
        self.time.map(|t| t.timestamp_millis()).unwrap_or(0)
    }
}

/// Failure attached to a spec; an empty message means the spec passed
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Failure {
    pub message: String,
    pub location: FailureLocation,
    pub timeline_location: TimelineLocation,
}

impl Failure {
    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct FailureLocation {
    pub file_name: String,
    pub line_number: u32,
    pub full_stack_trace: String,
}

/// Ginkgo node types, serialized by Ginkgo as their display names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum NodeType {
    /// Events that carry no node type (e.g. `By`)
    #[default]
    Invalid,
    Container,
    It,
    BeforeEach,
    JustBeforeEach,
    AfterEach,
    JustAfterEach,
    BeforeAll,
    AfterAll,
    BeforeSuite,
    SynchronizedBeforeSuite,
    AfterSuite,
    SynchronizedAfterSuite,
    ReportBeforeEach,
    ReportAfterEach,
    ReportBeforeSuite,
    ReportAfterSuite,
    CleanupInvalid,
    CleanupAfterEach,
    CleanupAfterAll,
    CleanupAfterSuite,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "INVALID NODE TYPE",
            Self::Container => "Container",
            Self::It => "It",
            Self::BeforeEach => "BeforeEach",
            Self::JustBeforeEach => "JustBeforeEach",
            Self::AfterEach => "AfterEach",
            Self::JustAfterEach => "JustAfterEach",
            Self::BeforeAll => "BeforeAll",
            Self::AfterAll => "AfterAll",
            Self::BeforeSuite => "BeforeSuite",
            Self::SynchronizedBeforeSuite => "SynchronizedBeforeSuite",
            Self::AfterSuite => "AfterSuite",
            Self::SynchronizedAfterSuite => "SynchronizedAfterSuite",
            Self::ReportBeforeEach => "ReportBeforeEach",
            Self::ReportAfterEach => "ReportAfterEach",
            Self::ReportBeforeSuite => "ReportBeforeSuite",
            Self::ReportAfterSuite => "ReportAfterSuite",
            Self::CleanupInvalid => "DeferCleanup",
            Self::CleanupAfterEach => "DeferCleanup (Each)",
            Self::CleanupAfterAll => "DeferCleanup (All)",
            Self::CleanupAfterSuite => "DeferCleanup (Suite)",
        }
    }
}

impl From<&str> for NodeType {
    fn from(s: &str) -> Self {
        match s {
            "Container" => Self::Container,
            "It" => Self::It,
            "BeforeEach" => Self::BeforeEach,
            "JustBeforeEach" => Self::JustBeforeEach,
            "AfterEach" => Self::AfterEach,
            "JustAfterEach" => Self::JustAfterEach,
            "BeforeAll" => Self::BeforeAll,
            "AfterAll" => Self::AfterAll,
            "BeforeSuite" => Self::BeforeSuite,
            "SynchronizedBeforeSuite" => Self::SynchronizedBeforeSuite,
            "AfterSuite" => Self::AfterSuite,
            "SynchronizedAfterSuite" => Self::SynchronizedAfterSuite,
            "ReportBeforeEach" => Self::ReportBeforeEach,
            "ReportAfterEach" => Self::ReportAfterEach,
            "ReportBeforeSuite" => Self::ReportBeforeSuite,
            "ReportAfterSuite" => Self::ReportAfterSuite,
            "DeferCleanup" => Self::CleanupInvalid,
            "DeferCleanup (Each)" => Self::CleanupAfterEach,
            "DeferCleanup (All)" => Self::CleanupAfterAll,
            "DeferCleanup (Suite)" => Self::CleanupAfterSuite,
            _ => Self::Invalid,
        }
    }
}

impl From<String> for NodeType {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of timeline event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum SpecEventType {
    #[default]
    Invalid,
    ByStart,
    ByEnd,
    NodeStart,
    NodeEnd,
    SpecRepeat,
    SpecRetry,
}

impl SpecEventType {
    /// Events that open a block on the timeline
    pub fn is_start(&self) -> bool {
        matches!(self, Self::NodeStart | Self::ByStart)
    }

    pub fn is_by(&self) -> bool {
        matches!(self, Self::ByStart | Self::ByEnd)
    }
}

impl From<String> for SpecEventType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "By" => Self::ByStart,
            "By (End)" => Self::ByEnd,
            "Node" => Self::NodeStart,
            "Node (End)" => Self::NodeEnd,
            "Repeat" => Self::SpecRepeat,
            "Retry" => Self::SpecRetry,
            _ => Self::Invalid,
        }
    }
}
