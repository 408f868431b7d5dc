//! Ginkgo report input.
//!
//! This module handles:
//! - The subset of the Ginkgo JSON report schema the converter reads
//! - Loading report files from disk

pub mod reader;
pub mod schema;

// Re-export main types
pub use reader::read_ginkgo_reports;
pub use schema::{
    CodeLocation, Failure, FailureLocation, NodeType, Report, SpecEvent, SpecEventType,
    SpecReport, TimelineLocation,
};
