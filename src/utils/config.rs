//! Configuration and constants for the converter.

/// Allure label carrying the test epic
pub const EPIC_LABEL_NAME: &str = "epic";
/// Allure label carrying the Ginkgo suite description
pub const SUITE_LABEL_NAME: &str = "suite";
/// Label whose value becomes the Allure result UUID
pub const ID_LABEL_NAME: &str = "id";
/// Label overriding the generated description
pub const DESCRIPTION_LABEL_NAME: &str = "description";

pub const DEFAULT_LABEL_SEPARATOR: &str = "=";
pub const DEFAULT_EPIC: &str = "base";
pub const DEFAULT_SUITE_NAME: &str = "";

/// A leaf label is only used when it splits into exactly key and value
pub const LABEL_PARTS: usize = 2;

pub const DEFAULT_ANALYZE_ERRORS: bool = true;
pub const DEFAULT_FAIL_ON_TRACE_ERROR: bool = true;

// Ginkgo stack traces print each location as "\t<file>:<line> +0x<offset>"
pub const TRACE_OFFSET_MARKER: &str = " +0x";

/// Suffix Allure expects on result files
pub const RESULT_FILE_SUFFIX: &str = "-result.json";
