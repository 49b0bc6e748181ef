//! Topology-specific error types.

use sf_core::{FlowId, NodeId, SfError};
use thiserror::Error;

/// Topology construction and validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    /// Two nodes share the same string id.
    #[error("Duplicate node id '{name}'")]
    DuplicateNode { name: String },

    /// Two flows share the same string id.
    #[error("Duplicate flow id '{name}'")]
    DuplicateFlow { name: String },

    /// A flow endpoint refers to a node that doesn't exist.
    #[error("Flow '{flow}' refers to unknown node '{node}'")]
    UnknownEndpoint { flow: String, node: String },

    /// Adjacency list is inconsistent (flow in a node's partition but the
    /// flow doesn't reference that node).
    #[error("Flow {flow} in node {node}'s adjacency but doesn't reference that node")]
    InconsistentAdjacency { flow: FlowId, node: NodeId },
}

impl From<TopologyError> for SfError {
    fn from(err: TopologyError) -> Self {
        SfError::Invariant {
            what: err.to_string(),
        }
    }
}
