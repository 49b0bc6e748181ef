//! Conservation verification and completeness checks.

use sf_core::{NodeId, Real, balanced};
use sf_graph::{FlowValues, Topology};

/// A node whose known incident flows violate conservation.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceViolation {
    /// String id of the violating node.
    pub node: String,
    pub sum_inputs: Real,
    pub sum_outputs: Real,
    /// `sum_inputs - sum_outputs`.
    pub difference: Real,
}

/// Check one node's balance.
///
/// Returns `None` for source/sink nodes, and for nodes with any undefined
/// incident flow (partial information is never flagged). Otherwise compares
/// the two sums within the balance tolerance.
pub fn verify_node_balance(
    node: NodeId,
    topo: &Topology,
    values: &FlowValues,
) -> Option<BalanceViolation> {
    if topo.is_source_or_sink(node) {
        return None;
    }

    let mut sum_inputs = 0.0;
    for &flow in topo.node_inputs(node) {
        sum_inputs += values.get(flow)?;
    }
    let mut sum_outputs = 0.0;
    for &flow in topo.node_outputs(node) {
        sum_outputs += values.get(flow)?;
    }

    if balanced(sum_inputs, sum_outputs) {
        return None;
    }
    Some(BalanceViolation {
        node: topo.node(node)?.name.clone(),
        sum_inputs,
        sum_outputs,
        difference: sum_inputs - sum_outputs,
    })
}

/// All balance violations, in topology node order.
pub fn verify_balance(topo: &Topology, values: &FlowValues) -> Vec<BalanceViolation> {
    topo.nodes()
        .iter()
        .filter_map(|node| verify_node_balance(node.id, topo, values))
        .collect()
}

/// True iff every flow in the topology has a value (zero counts).
pub fn is_fully_solved(topo: &Topology, values: &FlowValues) -> bool {
    topo.flows().iter().all(|f| values.is_defined(f.id))
}

/// Topology-ordered string ids of flows still undefined.
pub fn undetermined_flows(topo: &Topology, values: &FlowValues) -> Vec<String> {
    topo.flows()
        .iter()
        .filter(|f| !values.is_defined(f.id))
        .map(|f| f.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_graph::TopologyBuilder;

    fn branch() -> Topology {
        let mut builder = TopologyBuilder::new();
        let source = builder.add_node("source");
        let split = builder.add_node("split");
        let d1 = builder.add_node("dest1");
        let d2 = builder.add_node("dest2");
        builder.add_flow("src_split", source, split);
        builder.add_flow("split_d1", split, d1);
        builder.add_flow("split_d2", split, d2);
        builder.build().unwrap()
    }

    fn with_values(topo: &Topology, bindings: &[(&str, f64)]) -> FlowValues {
        let mut values = FlowValues::for_topology(topo);
        for (name, v) in bindings {
            values.define(topo.flow_by_name(name).unwrap(), *v).unwrap();
        }
        values
    }

    #[test]
    fn balanced_node_has_no_violation() {
        let topo = branch();
        let values = with_values(
            &topo,
            &[("src_split", 1000.0), ("split_d1", 400.0), ("split_d2", 600.0)],
        );
        assert!(verify_balance(&topo, &values).is_empty());
        assert!(is_fully_solved(&topo, &values));
    }

    #[test]
    fn imbalance_reported_with_sums_and_difference() {
        let topo = branch();
        let values = with_values(
            &topo,
            &[("src_split", 1000.0), ("split_d1", 400.0), ("split_d2", 500.0)],
        );

        let violations = verify_balance(&topo, &values);
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.node, "split");
        assert_eq!(v.sum_inputs, 1000.0);
        assert_eq!(v.sum_outputs, 900.0);
        assert_eq!(v.difference, 100.0);
    }

    #[test]
    fn partial_information_never_flagged() {
        let topo = branch();
        let values = with_values(&topo, &[("src_split", 1000.0), ("split_d1", 400.0)]);
        assert!(verify_balance(&topo, &values).is_empty());
        assert!(!is_fully_solved(&topo, &values));
        assert_eq!(undetermined_flows(&topo, &values), vec!["split_d2"]);
    }

    #[test]
    fn tolerance_absorbs_float_accumulation() {
        let topo = branch();
        let values = with_values(
            &topo,
            &[
                ("src_split", 1000.0),
                ("split_d1", 400.00001),
                ("split_d2", 599.99999),
            ],
        );
        assert!(verify_balance(&topo, &values).is_empty());
    }

    #[test]
    fn zero_is_a_defined_value() {
        let topo = branch();
        let values = with_values(
            &topo,
            &[("src_split", 0.0), ("split_d1", 0.0), ("split_d2", 0.0)],
        );
        assert!(is_fully_solved(&topo, &values));
        assert!(undetermined_flows(&topo, &values).is_empty());
    }
}
