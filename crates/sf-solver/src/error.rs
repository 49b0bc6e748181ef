//! Error types for solver operations.

use sf_core::SfError;
use sf_expr::ExprError;
use thiserror::Error;

/// Errors that can occur during a solve.
///
/// Underdetermined and contradictory systems are *not* errors; they are
/// normal `SolveOutcome` variants.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Constraint evaluation failed: {0}")]
    Expr(#[from] ExprError),

    #[error("Solver invariant: {0}")]
    Internal(#[from] SfError),
}

pub type SolverResult<T> = Result<T, SolverError>;
