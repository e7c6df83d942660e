use thiserror::Error;

use crate::operator::BinaryOp;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExprError {
    /// Unrecognized character or malformed numeric literal.
    #[error("invalid input at offset {position}: '{fragment}' in \"{input}\"")]
    InvalidInput {
        input: String,
        position: usize,
        fragment: String,
    },
    #[error("parse error: expected {expected}, found {found}")]
    Parse { expected: &'static str, found: String },
    #[error("operator '{op}' takes {expected} operands, got {found}")]
    Arity {
        op: BinaryOp,
        expected: usize,
        found: usize,
    },
    #[error("variable name must not be empty")]
    EmptyVariableName,
    /// A library defect, never caused by input.
    #[error("internal error: {0}")]
    Unreachable(&'static str),
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}
