//! Allure result assembly.
//!
//! This module handles:
//! - Turning Ginkgo leaf labels into Allure labels, id and description
//! - Wrapping a step tree and spec metadata into an Allure result

pub mod assembler;
pub mod labels;

// Re-export main types
pub use assembler::{md5_hex, DefaultReport, ReportConfig, Reporter};
pub use labels::{DefaultLabelScraper, LabelConfig, LabelScraper};
