//! sf-expr: sandboxed arithmetic expression evaluation for constraints.
//!
//! Expressions support `+ - * /`, parentheses, numeric literals, and two
//! reference forms: `parameters.<name>` (named constants) and `flows.<id>`
//! (previously-solved flow values). This is a small recursive-descent
//! evaluator, deliberately not a general-purpose one: references and the
//! four operators are the entire language.
//!
//! Constraints are strings of the form `flows.<id> == <expression>`,
//! evaluated strictly in the order given.

pub mod constraint;
pub mod error;
pub mod eval;
pub(crate) mod token;

pub use constraint::{evaluate_all_constraints, evaluate_constraint, parse_constraint};
pub use error::{ExprError, ExprResult};
pub use eval::evaluate_expression;
