//! String id -> compact id lookup.

use std::collections::HashMap;

use sf_core::{FlowId, NodeId};

/// Bidirectional mapping between user-facing string ids and compact ids.
///
/// Constraints reference flows as `flows.<id>`; this index resolves those
/// references without scanning the topology.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    nodes: HashMap<String, NodeId>,
    flows: HashMap<String, FlowId>,
}

impl NameIndex {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a node name; returns false if the name was already present.
    pub(crate) fn insert_node(&mut self, name: &str, id: NodeId) -> bool {
        self.nodes.insert(name.to_string(), id).is_none()
    }

    /// Insert a flow name; returns false if the name was already present.
    pub(crate) fn insert_flow(&mut self, name: &str, id: FlowId) -> bool {
        self.flows.insert(name.to_string(), id).is_none()
    }

    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.nodes.get(name).copied()
    }

    pub fn flow(&self, name: &str) -> Option<FlowId> {
        self.flows.get(name).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn flow_count(&self) -> usize {
        self.flows.len()
    }
}
