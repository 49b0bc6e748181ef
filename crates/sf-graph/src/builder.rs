//! Incremental topology builder.

use sf_core::{FlowId, NodeId, SfResult};

use crate::topology::{Flow, Node, Topology};
use crate::validate;

/// Builder for constructing a topology incrementally.
///
/// Use `add_node` and `add_flow` to build up the network, then call
/// `build()` to validate and freeze it into an immutable `Topology`.
/// Duplicate string ids and dangling flow endpoints are reported by
/// `build()`, not at insertion time.
#[derive(Debug, Default)]
pub struct TopologyBuilder {
    nodes: Vec<Node>,
    flows: Vec<Flow>,
    next_node_id: u32,
    next_flow_id: u32,
}

impl TopologyBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its compact ID.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId::from_index(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node {
            id,
            name: name.into(),
            label: None,
        });
        id
    }

    /// Add a node with a cosmetic display label.
    pub fn add_labeled_node(
        &mut self,
        name: impl Into<String>,
        label: impl Into<String>,
    ) -> NodeId {
        let id = self.add_node(name);
        self.nodes[id.index() as usize].label = Some(label.into());
        id
    }

    /// Add a directed flow between two nodes and return its compact ID.
    pub fn add_flow(&mut self, name: impl Into<String>, from: NodeId, to: NodeId) -> FlowId {
        let id = FlowId::from_index(self.next_flow_id);
        self.next_flow_id += 1;
        self.flows.push(Flow {
            id,
            name: name.into(),
            from,
            to,
        });
        id
    }

    /// Look up an already-added node by its string id.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.name == name).map(|n| n.id)
    }

    /// Build and validate the topology, returning an immutable `Topology`.
    ///
    /// This performs validation and constructs the per-node input/output
    /// adjacency partitions.
    pub fn build(self) -> SfResult<Topology> {
        let names = validate::validate_structure(&self.nodes, &self.flows)?;

        let (node_input_offsets, node_inputs, node_output_offsets, node_outputs) =
            Self::build_adjacency(&self.nodes, &self.flows);

        validate::validate_adjacency(
            &self.nodes,
            &self.flows,
            &node_input_offsets,
            &node_inputs,
            &node_output_offsets,
            &node_outputs,
        )?;

        Ok(Topology {
            nodes: self.nodes,
            flows: self.flows,
            node_input_offsets,
            node_inputs,
            node_output_offsets,
            node_outputs,
            names,
        })
    }

    /// Build the two adjacency partitions: for each node, its incident
    /// input flows and output flows, preserving flow declaration order.
    #[allow(clippy::type_complexity)]
    fn build_adjacency(
        nodes: &[Node],
        flows: &[Flow],
    ) -> (Vec<usize>, Vec<FlowId>, Vec<usize>, Vec<FlowId>) {
        let n = nodes.len();
        let mut inputs_by_node: Vec<Vec<FlowId>> = vec![Vec::new(); n];
        let mut outputs_by_node: Vec<Vec<FlowId>> = vec![Vec::new(); n];

        // Flow ids are assigned in declaration order, so pushing in flow
        // order keeps each partition ordered.
        for flow in flows {
            inputs_by_node[flow.to.index() as usize].push(flow.id);
            outputs_by_node[flow.from.index() as usize].push(flow.id);
        }

        let flatten = |by_node: Vec<Vec<FlowId>>| {
            let mut offsets = Vec::with_capacity(n + 1);
            let mut flat = Vec::new();
            offsets.push(0);
            for list in by_node {
                flat.extend_from_slice(&list);
                offsets.push(flat.len());
            }
            (offsets, flat)
        };

        let (in_offsets, in_flat) = flatten(inputs_by_node);
        let (out_offsets, out_flat) = flatten(outputs_by_node);
        (in_offsets, in_flat, out_offsets, out_flat)
    }
}
