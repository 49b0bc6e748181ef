//! Topology validation logic.

use std::collections::HashSet;

use sf_core::{FlowId, SfResult};

use crate::error::TopologyError;
use crate::indexing::NameIndex;
use crate::topology::{Flow, Node};

/// Validate structure: unique names, endpoints in range. Returns the name
/// index as a byproduct so `build()` doesn't scan twice.
pub(crate) fn validate_structure(nodes: &[Node], flows: &[Flow]) -> SfResult<NameIndex> {
    let mut names = NameIndex::new();

    for node in nodes {
        if !names.insert_node(&node.name, node.id) {
            return Err(TopologyError::DuplicateNode {
                name: node.name.clone(),
            }
            .into());
        }
    }

    for flow in flows {
        if !names.insert_flow(&flow.name, flow.id) {
            return Err(TopologyError::DuplicateFlow {
                name: flow.name.clone(),
            }
            .into());
        }

        for endpoint in [flow.from, flow.to] {
            if endpoint.index() as usize >= nodes.len() {
                return Err(TopologyError::UnknownEndpoint {
                    flow: flow.name.clone(),
                    node: format!("#{endpoint}"),
                }
                .into());
            }
        }
    }

    Ok(names)
}

/// Validate the input/output adjacency partitions for consistency.
pub(crate) fn validate_adjacency(
    nodes: &[Node],
    flows: &[Flow],
    node_input_offsets: &[usize],
    node_inputs: &[FlowId],
    node_output_offsets: &[usize],
    node_outputs: &[FlowId],
) -> SfResult<()> {
    check_partition(nodes, flows, node_input_offsets, node_inputs, |f| f.to)?;
    check_partition(nodes, flows, node_output_offsets, node_outputs, |f| f.from)?;
    Ok(())
}

fn check_partition(
    nodes: &[Node],
    flows: &[Flow],
    offsets: &[usize],
    flat: &[FlowId],
    endpoint: impl Fn(&Flow) -> sf_core::NodeId,
) -> SfResult<()> {
    if offsets.len() != nodes.len() + 1 {
        return Err(sf_core::SfError::Invariant {
            what: "adjacency offsets length mismatch".to_string(),
        });
    }

    // Each flow in a node's slice must reference that node at the expected
    // endpoint, and every flow must appear exactly once across the partition.
    let mut seen: HashSet<FlowId> = HashSet::new();
    for node in nodes {
        let idx = node.id.index() as usize;
        for &flow_id in &flat[offsets[idx]..offsets[idx + 1]] {
            let flow = flows.get(flow_id.index() as usize).ok_or(
                TopologyError::InconsistentAdjacency {
                    flow: flow_id,
                    node: node.id,
                },
            )?;
            if endpoint(flow) != node.id || !seen.insert(flow_id) {
                return Err(TopologyError::InconsistentAdjacency {
                    flow: flow_id,
                    node: node.id,
                }
                .into());
            }
        }
    }

    if seen.len() != flows.len() {
        return Err(sf_core::SfError::Invariant {
            what: "flow missing from adjacency partition".to_string(),
        });
    }

    Ok(())
}
