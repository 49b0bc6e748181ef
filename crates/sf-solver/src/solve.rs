//! High-level solve orchestration.

use sf_core::{Parameters, Real};
use sf_expr::evaluate_all_constraints;
use sf_graph::{FlowValues, Topology};
use tracing::{debug, warn};

use crate::balance::solve_iteratively;
use crate::verify::{BalanceViolation, is_fully_solved, undetermined_flows, verify_balance};

/// Outcome of a solve: the four-way classification.
///
/// Flow maps are `(string id, value)` pairs in topology order.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// Every flow has a value and conservation holds everywhere.
    Solved { flows: Vec<(String, Real)> },

    /// No violations, but some flows could not be determined.
    Underdetermined {
        flows: Vec<(String, Real)>,
        undetermined: Vec<String>,
    },

    /// Conservation is violated at one or more nodes. Takes priority over
    /// incompleteness: a contradiction indicates a modeling error rather
    /// than insufficient information.
    Contradictory { violations: Vec<BalanceViolation> },

    /// A constraint failed to evaluate; propagation and verification were
    /// not attempted.
    EvaluationFailed { message: String },
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved { .. })
    }
}

/// Solve a flow network.
///
/// 1. Evaluate all explicit constraints, in order, from an empty value map.
///    Any evaluator failure short-circuits to `EvaluationFailed`.
/// 2. Propagate node balances to a fixed point, bounded by `2 x |flows|`
///    passes.
/// 3. Verify conservation; violations win over incompleteness.
/// 4. Classify as `Solved` or `Underdetermined`.
///
/// The solve never mutates its inputs and allocates its own value map, so
/// concurrent solves over distinct snapshots are safe.
pub fn solve(topo: &Topology, params: &Parameters, constraints: &[String]) -> SolveOutcome {
    let seeded = match evaluate_all_constraints(constraints, params, topo) {
        Ok(values) => values,
        Err(err) => {
            warn!(error = %err, "constraint evaluation failed");
            return SolveOutcome::EvaluationFailed {
                message: err.to_string(),
            };
        }
    };
    debug!(
        constraints = constraints.len(),
        defined = seeded.defined_count(),
        "constraints evaluated"
    );

    let max_iterations = 2 * topo.flows().len();
    let values = match solve_iteratively(topo, seeded, max_iterations) {
        Ok(values) => values,
        Err(err) => {
            // Only reachable if a balance pass tries to redefine a flow,
            // which the single-unknown rule rules out.
            warn!(error = %err, "balance propagation failed");
            return SolveOutcome::EvaluationFailed {
                message: err.to_string(),
            };
        }
    };

    let violations = verify_balance(topo, &values);
    if !violations.is_empty() {
        return SolveOutcome::Contradictory { violations };
    }

    let flows = defined_in_order(topo, &values);
    if is_fully_solved(topo, &values) {
        SolveOutcome::Solved { flows }
    } else {
        SolveOutcome::Underdetermined {
            flows,
            undetermined: undetermined_flows(topo, &values),
        }
    }
}

/// The defined subset of flows as `(string id, value)`, in topology order.
fn defined_in_order(topo: &Topology, values: &FlowValues) -> Vec<(String, Real)> {
    topo.flows()
        .iter()
        .filter_map(|f| values.get(f.id).map(|v| (f.name.clone(), v)))
        .collect()
}
