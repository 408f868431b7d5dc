//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised while reading frames out of a Ginkgo stack trace
#[derive(Error, Debug)]
pub enum TraceParseError {
    #[error("Stack trace location has no line number: {0:?}")]
    MissingLineNumber(String),

    #[error("Invalid line number in stack trace location {entry:?}: {source}")]
    InvalidLineNumber {
        entry: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Errors that can occur while assembling an Allure result
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Missing mandatory label: {0}")]
    MissingMandatoryLabel(String),

    #[error("Test doesn't contain allure id in labels")]
    MissingId,

    #[error("Invalid allure id: {0}")]
    InvalidId(#[from] uuid::Error),
}

/// Errors that can occur while converting one spec report
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to analyze spec events: {0}")]
    Transform(#[from] TraceParseError),

    #[error("Failed to generate allure report: {0}")]
    Report(#[from] ReportError),
}

/// Errors that can occur while loading a Ginkgo report
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read file: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
