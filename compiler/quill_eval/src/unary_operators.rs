//! Unary operator implementations for the evaluator.
//!
//! Negation is pure: it builds a new value with a synthesized token and
//! never mutates the receiver, so shared values stay referentially intact.

use quill_ir::UnaryOp;
use tracing::trace;

use crate::errors::{integer_overflow, unsupported_unary_op, EvalError, EvalResult};
use crate::value::Value;

/// Evaluate a unary operation.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> EvalResult {
    trace!(op = op.as_symbol(), operand = value.type_name(), "dispatch unary");
    match (value, op) {
        (Value::Int(n, tok), UnaryOp::Neg) => n
            .checked_neg()
            .map(|m| Value::int_from(m, tok))
            .ok_or_else(|| integer_overflow("negation").with_span(tok.span)),
        (Value::Float(f, tok), UnaryOp::Neg) => Ok(Value::float_from(-f, tok)),
        _ => Err(unsupported(value, op)),
    }
}

#[cold]
fn unsupported(value: &Value, op: UnaryOp) -> EvalError {
    let err = unsupported_unary_op(op, &value.describe());
    match value.token() {
        Some(tok) => err.with_span(tok.span),
        None => err,
    }
}
