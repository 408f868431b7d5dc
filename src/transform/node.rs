//! Pairing of begin/end timeline events into nodes.
//!
//! A node is one logical block on the spec timeline (a setup node or a `By`
//! step). Begin and end events are paired purely by code location: the end
//! of a block is any other event recorded at the same source line.

use crate::ginkgo::{NodeType, SpecEvent};
use log::debug;

/// Predicate selecting which events may open a node
pub type EventFilter = fn(&SpecEvent) -> bool;

/// A matched begin/end event pair
///
/// When no closing event was recorded, `begin` and `end` are the same event
/// and the node is atomic.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub begin: SpecEvent,
    pub end: SpecEvent,
}

impl Node {
    /// Build a node for a block that never recorded a closing event
    pub fn atomic(event: SpecEvent) -> Self {
        Self {
            end: event.clone(),
            begin: event,
        }
    }

    pub fn is_atomic(&self) -> bool {
        self.begin.timeline_location.order == self.end.timeline_location.order
    }

    pub fn begin_order(&self) -> u64 {
        self.begin.timeline_location.order
    }

    pub fn end_order(&self) -> u64 {
        self.end.timeline_location.order
    }

    /// True when this node's span strictly encloses `other`'s span
    pub fn contains(&self, other: &Node) -> bool {
        self.begin_order() < other.begin_order() && self.end_order() > other.end_order()
    }

    /// True when both nodes begin at the same source line
    pub fn same_location(&self, other: &Node) -> bool {
        self.begin.code_location == other.begin.code_location
    }
}

/// Default event filter
///
/// Keeps `By` step events and every event of a concrete setup/teardown node
/// type. The leaf `It` node and other untyped events are dropped.
pub fn default_event_filter(event: &SpecEvent) -> bool {
    if event.spec_event_type.is_by() {
        return true;
    }
    event.node_type != NodeType::Invalid && event.node_type != NodeType::It
}

/// Filter that keeps every event, including the leaf `It` node
pub fn keep_all_events(_event: &SpecEvent) -> bool {
    true
}

/// Build nodes from a flat spec event list
///
/// **Public** - first stage of the transform
///
/// For every begin event kept by `filter`, each other event at the same code
/// location closes a separate node. A begin event with no match produces
/// one atomic node. Nodes come out in begin-event order.
pub fn build_nodes(events: &[SpecEvent], filter: EventFilter) -> Vec<Node> {
    let mut nodes = Vec::new();

    for event in events {
        if !filter(event) || !event.spec_event_type.is_start() {
            continue;
        }

        let before = nodes.len();
        nodes.extend(
            events
                .iter()
                .filter(|end| {
                    end.code_location == event.code_location
                        && end.timeline_location.order != event.timeline_location.order
                })
                .map(|end| Node {
                    begin: event.clone(),
                    end: end.clone(),
                }),
        );

        if nodes.len() == before {
            nodes.push(Node::atomic(event.clone()));
        }
    }

    debug!("Built {} nodes from {} events", nodes.len(), events.len());

    nodes
}
