//! Step tree construction from nodes.
//!
//! Nesting follows timeline containment: a node's parent is the nearest
//! earlier node whose span strictly encloses its own.

use super::node::Node;
use crate::allure::{Status, Step};
use crate::ginkgo::NodeType;
use log::debug;

/// Build the Allure step forest for a spec
///
/// **Public** - final stage of the transform
///
/// # Arguments
/// * `nodes` - Nodes in discovery order
/// * `failed_node` - Node the failure was attributed to, if any
///
/// # Returns
/// Root steps in discovery order, each owning its children
pub fn build_steps(nodes: &[Node], failed_node: Option<&Node>) -> Vec<Step> {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut roots = Vec::new();

    for i in 0..nodes.len() {
        match find_parent(nodes, i) {
            Some(parent) => children[parent].push(i),
            None => roots.push(i),
        }
    }

    let mut steps: Vec<Option<Step>> = nodes
        .iter()
        .map(|node| Some(to_step(node, failed_node)))
        .collect();

    debug!("Built {} steps, {} at the root", nodes.len(), roots.len());

    roots
        .into_iter()
        .map(|root| assemble(root, &mut steps, &children))
        .collect()
}

/// Backward scan for the nearest enclosing node
///
/// **Private** - internal helper for build_steps
fn find_parent(nodes: &[Node], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| nodes[j].contains(&nodes[i]))
}

/// Attach built children to their parent, depth first
///
/// **Private** - internal helper for build_steps
fn assemble(index: usize, steps: &mut [Option<Step>], children: &[Vec<usize>]) -> Step {
    let nested: Vec<Step> = children[index]
        .iter()
        .map(|&child| assemble(child, steps, children))
        .collect();

    // Every index has exactly one parent, so each slot is taken once
    let mut step = steps[index].take().unwrap_or_default();
    step.steps = nested;
    step
}

/// Convert one node into a childless step
///
/// **Private** - internal helper for build_steps
fn to_step(node: &Node, failed_node: Option<&Node>) -> Step {
    let name = match node.begin.node_type {
        NodeType::Invalid => node.begin.message.clone(),
        node_type => format!("[{}] {}", node_type, node.begin.message),
    };

    let status = match failed_node {
        Some(failed) if node.same_location(failed) => Status::Failed,
        _ => Status::Passed,
    };

    Step {
        name,
        status,
        start: node.begin.timeline_location.unix_millis(),
        stop: node.end.timeline_location.unix_millis(),
        steps: Vec::new(),
    }
}
