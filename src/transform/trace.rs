//! Stack trace frame extraction.
//!
//! Ginkgo records a failure's stack as alternating lines:
//!
//! ```text
//! example.com/suite.glob..func1.2()
//! 	/src/suite/suite_test.go:42 +0x1d
//! example.com/suite.glob..func1()
//! 	/src/suite/suite_test.go:40 +0x3a
//! ```
//!
//! Only the location lines (odd indices) are parsed. Innermost call first,
//! so the outermost frame ends up last.

use crate::ginkgo::CodeLocation;
use crate::utils::config::TRACE_OFFSET_MARKER;
use crate::utils::error::TraceParseError;

/// One `(file, line)` entry of a stack trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceFrame {
    pub file_name: String,
    pub line_number: u32,
}

impl TraceFrame {
    /// True when the frame points at the same source line as `location`
    pub fn matches(&self, location: &CodeLocation) -> bool {
        self.file_name == location.file_name && self.line_number == location.line_number
    }
}

/// Parse a Ginkgo full stack trace into frames
///
/// **Public** - used by the failure locator
///
/// # Errors
/// * `TraceParseError::MissingLineNumber` - location line has no `:`
/// * `TraceParseError::InvalidLineNumber` - line segment is not an integer
pub fn parse_stack_trace(full_stack_trace: &str) -> Result<Vec<TraceFrame>, TraceParseError> {
    full_stack_trace
        .split('\n')
        .skip(1)
        .step_by(2)
        .map(parse_location_line)
        .collect()
}

/// Parse one "\t<file>:<line> +0x<offset>" line
///
/// **Private** - internal helper for parse_stack_trace
fn parse_location_line(raw: &str) -> Result<TraceFrame, TraceParseError> {
    let line = raw.strip_prefix('\t').unwrap_or(raw);
    let location = line
        .split(TRACE_OFFSET_MARKER)
        .next()
        .unwrap_or(line);

    let (file_name, line_number) = location
        .rsplit_once(':')
        .ok_or_else(|| TraceParseError::MissingLineNumber(raw.to_string()))?;

    let line_number = line_number
        .parse::<u32>()
        .map_err(|source| TraceParseError::InvalidLineNumber {
            entry: raw.to_string(),
            source,
        })?;

    Ok(TraceFrame {
        file_name: file_name.to_string(),
        line_number,
    })
}
