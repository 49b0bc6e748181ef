//! Error types for expression and constraint evaluation.

use thiserror::Error;

/// Errors from expression or constraint evaluation.
///
/// All of these are fatal to the solve that raised them: constraints are
/// evaluated strictly in order and no reordering or retry is attempted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("Unknown parameter '{name}'")]
    UnknownParameter { name: String },

    #[error("Flow '{name}' is not yet defined")]
    FlowNotYetDefined { name: String },

    #[error("Unknown flow '{name}'")]
    UnknownFlow { name: String },

    #[error("Flow '{name}' is already defined")]
    FlowAlreadyDefined { name: String },

    #[error("Malformed constraint: expected exactly one '==' in '{text}'")]
    MalformedConstraint { text: String },

    #[error("Left side must be a single flow reference, got '{left}'")]
    LeftSideNotFlowReference { left: String },

    #[error("Invalid expression: {what}")]
    InvalidExpression { what: String },

    #[error("Failed to evaluate constraint '{text}': {source}")]
    Constraint {
        text: String,
        #[source]
        source: Box<ExprError>,
    },
}

impl ExprError {
    /// Wrap an error with the offending constraint's literal text.
    pub(crate) fn in_constraint(self, text: &str) -> Self {
        ExprError::Constraint {
            text: text.to_string(),
            source: Box::new(self),
        }
    }
}

pub type ExprResult<T> = Result<T, ExprError>;
