//! ginkgo2allure
//!
//! Converts Ginkgo JSON test reports into Allure result files.
//!
//! The interesting part is [`transform`]: Ginkgo records a spec as a flat
//! timeline of events, which is rebuilt here into nested Allure steps, with
//! the step a failure originated in located from its stack trace.
//!
//! ## Getting Started
//!
//! ```bash
//! ginkgo --json-report=report.json ./...
//! ginkgo2allure report.json ./allure-results
//! ```

pub mod allure;
pub mod commands;
pub mod convert;
pub mod ginkgo;
pub mod output;
pub mod report;
pub mod transform;
pub mod utils;
