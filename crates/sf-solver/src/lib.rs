//! Constraint-propagation solver for flow networks.
//!
//! This crate turns a topology, a parameter set, and an ordered list of
//! equality constraints into flow values. Explicit constraints are
//! evaluated first (sf-expr), then conservation of flow is propagated node
//! by node: any non-source/sink node with exactly one undefined incident
//! flow determines that flow. Iteration stops at a fixed point or at a
//! safety bound of `2 x |flows|` passes. A verification pass then checks
//! conservation at every fully-known node and the result is classified as
//! solved, underdetermined, or contradictory.
//!
//! Cyclic topologies are not detected: a cycle simply leaves its flows
//! undefined when the pass bound is reached, and the solve is reported as
//! underdetermined.

pub mod balance;
pub mod error;
pub mod solve;
pub mod verify;

pub use balance::{solve_iteration, solve_iteratively, solve_node_balance};
pub use error::{SolverError, SolverResult};
pub use solve::{SolveOutcome, solve};
pub use verify::{BalanceViolation, is_fully_solved, undetermined_flows, verify_balance};
