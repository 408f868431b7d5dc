//! Attribution of a spec failure to the node it originated in.
//!
//! Frames from the failure's stack trace are matched against node begin
//! locations, deepest (latest discovered) node first. Two fallbacks cover
//! what the runner leaves out: a step that panicked before recording its end
//! event, and failures raised directly in the `It` body.

use super::node::Node;
use super::trace::{parse_stack_trace, TraceFrame};
use crate::ginkgo::{Failure, NodeType};
use crate::utils::error::TraceParseError;
use log::debug;

/// Locate the node a failure should be blamed on
///
/// **Public** - second stage of the transform
///
/// # Returns
/// * `Ok(None)` - no failure, or no node could be attributed
/// * `Ok(Some(node))` - the node to mark as failed
///
/// # Errors
/// * `TraceParseError` - the failure's stack trace is malformed
pub fn locate_failure_node(
    nodes: &[Node],
    failure: &Failure,
) -> Result<Option<Node>, TraceParseError> {
    if failure.is_empty() {
        return Ok(None);
    }

    let frames = parse_stack_trace(&failure.location.full_stack_trace)?;
    debug!("Failure stack trace has {} frames", frames.len());

    if let Some(node) = find_traced_node(nodes, &frames) {
        debug!("Failure located at {}", node.begin.code_location);
        return Ok(Some(node.clone()));
    }

    let root = find_root_node(nodes, &frames);
    match root {
        Some(node) => debug!("Failure attributed to leaf node at {}", node.begin.code_location),
        None => debug!("Failure could not be attributed to any node"),
    }
    Ok(root.cloned())
}

/// Reverse scan for a node whose begin location appears in the trace
///
/// **Private** - internal helper for locate_failure_node
fn find_traced_node<'a>(nodes: &'a [Node], frames: &[TraceFrame]) -> Option<&'a Node> {
    let last = nodes.last()?;

    if in_trace(last, frames) {
        return Some(last);
    }

    // An atomic last node may be an unterminated step: if any block that
    // outlives it is on the trace, the failure happened inside the step.
    if last.is_atomic()
        && nodes
            .iter()
            .any(|node| node.end_order() > last.end_order() && in_trace(node, frames))
    {
        return Some(last);
    }

    nodes.iter().rev().skip(1).find(|node| in_trace(node, frames))
}

/// Fallback: the `It` node enclosing the outermost trace frame
///
/// **Private** - internal helper for locate_failure_node
fn find_root_node<'a>(nodes: &'a [Node], frames: &[TraceFrame]) -> Option<&'a Node> {
    let outermost = frames.last()?;

    // Last match in discovery order wins
    nodes.iter().rev().find(|node| {
        let location = &node.begin.code_location;
        node.begin.node_type == NodeType::It
            && location.file_name == outermost.file_name
            && location.line_number < outermost.line_number
    })
}

fn in_trace(node: &Node, frames: &[TraceFrame]) -> bool {
    frames
        .iter()
        .any(|frame| frame.matches(&node.begin.code_location))
}
