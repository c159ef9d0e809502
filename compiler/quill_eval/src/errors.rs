//! Error types for the value model.
//!
//! There is no global diagnostic sink: every fallible operation returns
//! [`EvalResult`], and the embedding evaluator decides abort-vs-collect.
//! The contract to preserve is "first error stops evaluation" — callers
//! propagate with `?` and never use a value produced under error.
//!
//! Factory functions (e.g. [`operand_arity`]) are the only way errors are
//! constructed; they populate both `kind` and `message`.

use std::fmt;

use quill_ir::{BinaryOp, Span, UnaryOp};

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for structured diagnostics.
///
/// Each variant carries the data needed to render the error condition,
/// enabling programmatic matching instead of string parsing. The `Display`
/// impl produces the user-facing message strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A numeric token whose lexeme cannot be decoded. Fatal at
    /// construction time: no usable value exists on this path.
    InvalidNumericLiteral { lexeme: String },

    /// A multi-value aggregate used as an operand with length != 1.
    OperandArity { got: usize },

    /// Operand kinds not supported by the given binary operator.
    /// `left` and `right` are the operand renderings.
    UnsupportedBinaryOp {
        op: BinaryOp,
        left: String,
        right: String,
    },

    /// Operand kind not supported by the given unary operator.
    UnsupportedUnaryOp { op: UnaryOp, operand: String },

    /// Checked integer arithmetic overflowed.
    IntegerOverflow { operation: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidNumericLiteral { lexeme } => {
                write!(f, "invalid numeric literal: {lexeme}")
            }
            Self::OperandArity { got } => {
                write!(f, "right operand must contain exactly 1 value, got {got}")
            }
            Self::UnsupportedBinaryOp { op, left, right } => {
                write!(
                    f,
                    "unsupported `{}` between {left} and {right}",
                    op.as_symbol()
                )
            }
            Self::UnsupportedUnaryOp { op, operand } => {
                write!(f, "unsupported unary `{}` on {operand}", op.as_symbol())
            }
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; always equals `kind.to_string()`.
    pub message: String,
    /// Source location where the error occurred, when known.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source span to this error.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory functions

/// Numeric token with an undecodable lexeme.
#[cold]
pub fn invalid_numeric_literal(lexeme: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidNumericLiteral {
        lexeme: lexeme.to_string(),
    })
}

/// Multi-value aggregate used as an operand with the wrong length.
#[cold]
pub fn operand_arity(got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::OperandArity { got })
}

/// Operand kinds not supported by a binary operator.
#[cold]
pub fn unsupported_binary_op(op: BinaryOp, left: &str, right: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedBinaryOp {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

/// Operand kind not supported by a unary operator.
#[cold]
pub fn unsupported_unary_op(op: UnaryOp, operand: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedUnaryOp {
        op,
        operand: operand.to_string(),
    })
}

/// Checked integer arithmetic overflowed.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}
