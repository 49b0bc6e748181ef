//! Node balance propagation.

use sf_core::{FlowId, NodeId, Real};
use sf_graph::{FlowValues, Topology};
use tracing::{debug, trace};

use crate::error::SolverResult;

/// Try to determine a single flow from one node's balance constraint.
///
/// Returns `None` when no new value can be derived here:
/// - source/sink nodes carry no balance constraint;
/// - zero undefined incident flows means the node is already determined;
/// - two or more undefined flows cannot be isolated.
///
/// With exactly one unknown, conservation `sum(inputs) = sum(outputs)` is
/// solved for it:
/// - unknown input:  `sum(outputs) - sum(other defined inputs)`
/// - unknown output: `sum(inputs) - sum(other defined outputs)`
///
/// Negative results are valid and preserved.
pub fn solve_node_balance(
    node: NodeId,
    topo: &Topology,
    values: &FlowValues,
) -> Option<(FlowId, Real)> {
    if topo.is_source_or_sink(node) {
        return None;
    }

    let inputs = topo.node_inputs(node);
    let outputs = topo.node_outputs(node);

    let mut unknown: Option<(FlowId, bool)> = None;
    for &flow in inputs {
        if !values.is_defined(flow) {
            if unknown.is_some() {
                // Underdetermined at this node.
                return None;
            }
            unknown = Some((flow, true));
        }
    }
    for &flow in outputs {
        if !values.is_defined(flow) {
            if unknown.is_some() {
                return None;
            }
            unknown = Some((flow, false));
        }
    }
    let (flow, is_input) = unknown?;

    let sum_defined = |flows: &[FlowId]| -> Real {
        flows.iter().filter_map(|&f| values.get(f)).sum()
    };

    let value = if is_input {
        sum_defined(outputs) - sum_defined(inputs)
    } else {
        sum_defined(inputs) - sum_defined(outputs)
    };
    Some((flow, value))
}

/// One propagation pass: visit every node once, in topology order.
///
/// Values solved earlier in the pass are visible to later nodes in the same
/// pass (propagation within a pass is sequential, not simultaneous).
/// Returns whether anything was defined.
pub fn solve_iteration(topo: &Topology, values: &mut FlowValues) -> SolverResult<bool> {
    let mut changed = false;
    for node in topo.nodes() {
        if let Some((flow, value)) = solve_node_balance(node.id, topo, values) {
            trace!(node = %node.name, flow = %flow, value, "balance solved flow");
            values.define(flow, value)?;
            changed = true;
        }
    }
    Ok(changed)
}

/// Iterate passes to a fixed point, bounded by `max_iterations`.
///
/// The caller passes `2 x |flows|`, enough for any acyclic topology; for a
/// cyclic one the bound simply cuts the loop and the remaining flows stay
/// undefined. Completeness is the orchestrator's concern, not this
/// function's.
pub fn solve_iteratively(
    topo: &Topology,
    mut values: FlowValues,
    max_iterations: usize,
) -> SolverResult<FlowValues> {
    for iteration in 0..max_iterations {
        let changed = solve_iteration(topo, &mut values)?;
        debug!(
            iteration,
            defined = values.defined_count(),
            total = values.len(),
            changed,
            "balance pass"
        );
        if !changed {
            break;
        }
    }
    Ok(values)
}
