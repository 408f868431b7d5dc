//! Reconstruction of Allure steps from Ginkgo spec events.
//!
//! This module handles:
//! - Pairing flat timeline events into nodes
//! - Locating the node a failure originated in from its stack trace
//! - Nesting nodes into a step tree
//!
//! # Example
//! ```ignore
//! let mut transform = DefaultTransform::new(TransformConfig::default());
//! transform.analyze_events(&spec_report.spec_events, &spec_report.failure)?;
//! let steps = transform.steps();
//! ```

pub mod locator;
pub mod node;
pub mod steps;
pub mod trace;

// Re-export main types and functions
pub use locator::locate_failure_node;
pub use node::{build_nodes, default_event_filter, keep_all_events, EventFilter, Node};
pub use steps::build_steps;
pub use trace::{parse_stack_trace, TraceFrame};

use crate::allure::Step;
use crate::ginkgo::{Failure, SpecEvent};
use crate::utils::config::{DEFAULT_ANALYZE_ERRORS, DEFAULT_FAIL_ON_TRACE_ERROR};
use crate::utils::error::TraceParseError;
use log::{debug, warn};
use std::fmt;

/// Turns one spec's events into a step tree
pub trait Transformer {
    /// Rebuild the step tree from scratch for one spec
    fn analyze_events(
        &mut self,
        events: &[SpecEvent],
        failure: &Failure,
    ) -> Result<(), TraceParseError>;

    /// Steps produced by the last successful analysis
    fn steps(&self) -> &[Step];
}

/// Transform settings
#[derive(Clone, Copy)]
pub struct TransformConfig {
    /// Attribute failures to steps at all
    pub analyze_errors: bool,

    /// Propagate malformed stack traces instead of leaving the failure unattributed
    pub fail_on_trace_error: bool,

    /// Which events may open a node
    pub event_filter: EventFilter,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            analyze_errors: DEFAULT_ANALYZE_ERRORS,
            fail_on_trace_error: DEFAULT_FAIL_ON_TRACE_ERROR,
            event_filter: default_event_filter,
        }
    }
}

impl fmt::Debug for TransformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformConfig")
            .field("analyze_errors", &self.analyze_errors)
            .field("fail_on_trace_error", &self.fail_on_trace_error)
            .finish_non_exhaustive()
    }
}

impl TransformConfig {
    /// Set both failure-analysis switches at once
    pub fn with_error_analysis(mut self, analyze_errors: bool, fail_on_trace_error: bool) -> Self {
        self.analyze_errors = analyze_errors;
        self.fail_on_trace_error = fail_on_trace_error;
        self
    }

    pub fn with_event_filter(mut self, event_filter: EventFilter) -> Self {
        self.event_filter = event_filter;
        self
    }
}

/// Standard transformer; holds only the result of its last analysis
#[derive(Debug, Clone, Default)]
pub struct DefaultTransform {
    config: TransformConfig,
    steps: Vec<Step>,
}

impl DefaultTransform {
    pub fn new(config: TransformConfig) -> Self {
        Self {
            config,
            steps: Vec::new(),
        }
    }
}

impl Transformer for DefaultTransform {
    fn analyze_events(
        &mut self,
        events: &[SpecEvent],
        failure: &Failure,
    ) -> Result<(), TraceParseError> {
        self.steps.clear();

        let nodes = build_nodes(events, self.config.event_filter);

        let failed_node = if self.config.analyze_errors {
            match locate_failure_node(&nodes, failure) {
                Ok(node) => node,
                Err(e) if self.config.fail_on_trace_error => return Err(e),
                Err(e) => {
                    warn!("Leaving failure unattributed: {}", e);
                    None
                }
            }
        } else {
            None
        };

        self.steps = build_steps(&nodes, failed_node.as_ref());
        debug!("Analyzed {} events into {} root steps", events.len(), self.steps.len());

        Ok(())
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}
