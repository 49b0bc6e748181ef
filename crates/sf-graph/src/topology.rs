//! Core topology data structures.

use sf_core::{FlowId, NodeId};

use crate::indexing::NameIndex;

/// A node in the flow network.
///
/// Nodes are minimal: a stable compact id plus the user-facing string id.
/// The optional label is cosmetic and ignored by the solver; a node's role
/// (source, sink, intermediate) is derived from adjacency, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    pub label: Option<String>,
}

/// A directed flow between two nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow {
    pub id: FlowId,
    pub name: String,
    pub from: NodeId,
    pub to: NodeId,
}

/// The topology: a validated, immutable collection of nodes and flows.
///
/// The topology stores:
/// - All nodes and flows in vectors (indexed by their IDs).
/// - Compact adjacency: for each node, its incident input and output flows
///   as two separate partitions (node balancing needs the two sums
///   separately).
///
/// Within each partition, flows keep their original declaration order.
#[derive(Debug, Clone)]
pub struct Topology {
    pub(crate) nodes: Vec<Node>,
    pub(crate) flows: Vec<Flow>,

    /// Offsets for node->input adjacency: node i's inputs are in
    /// node_inputs[node_input_offsets[i]..node_input_offsets[i+1]].
    pub(crate) node_input_offsets: Vec<usize>,
    pub(crate) node_inputs: Vec<FlowId>,

    /// Same layout for outputs.
    pub(crate) node_output_offsets: Vec<usize>,
    pub(crate) node_outputs: Vec<FlowId>,

    pub(crate) names: NameIndex,
}

impl Topology {
    /// Return all nodes, in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Return all flows, in declaration order.
    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    /// Get a node by ID (returns None if ID out of bounds).
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index() as usize)
    }

    /// Get a flow by ID (returns None if ID out of bounds).
    pub fn flow(&self, id: FlowId) -> Option<&Flow> {
        self.flows.get(id.index() as usize)
    }

    /// Look up a node by its string id.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.names.node(name)
    }

    /// Look up a flow by its string id.
    pub fn flow_by_name(&self, name: &str) -> Option<FlowId> {
        self.names.flow(name)
    }

    /// All flows entering a node, in declaration order.
    pub fn node_inputs(&self, node_id: NodeId) -> &[FlowId] {
        let idx = node_id.index() as usize;
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.node_input_offsets[idx];
        let end = self.node_input_offsets[idx + 1];
        &self.node_inputs[start..end]
    }

    /// All flows leaving a node, in declaration order.
    pub fn node_outputs(&self, node_id: NodeId) -> &[FlowId] {
        let idx = node_id.index() as usize;
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.node_output_offsets[idx];
        let end = self.node_output_offsets[idx + 1];
        &self.node_outputs[start..end]
    }

    /// True iff the node has no inputs or no outputs (including the fully
    /// isolated case of both empty). Such nodes carry no balance constraint.
    pub fn is_source_or_sink(&self, node_id: NodeId) -> bool {
        self.node_inputs(node_id).is_empty() || self.node_outputs(node_id).is_empty()
    }
}
