//! Binary operator implementations for the evaluator.
//!
//! Provides direct enum-based dispatch for binary operations. The type set
//! is fixed (not user-extensible), so a single exhaustive match per operand
//! pair is preferred over per-kind methods, letting the compiler enforce
//! that every kind/operator combination is handled.

use std::cmp::Ordering;

use quill_ir::{BinaryOp, Token};
use tracing::trace;

use crate::errors::{
    integer_overflow, operand_arity, unsupported_binary_op, EvalError, EvalResult,
};
use crate::value::Value;

/// Evaluate a binary operation.
///
/// A multi-value aggregate on the right must hold exactly one value, which
/// becomes the operand; each aggregate layer unwraps one level per
/// recursion. The result value carries a synthesized token: lexeme is the
/// rendered result, kind matches the constructed variant, position copied
/// from the left operand's token.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    trace!(
        op = op.as_symbol(),
        left = left.type_name(),
        right = right.type_name(),
        "dispatch binary"
    );
    if let Value::Multi(values) = right {
        if values.len() != 1 {
            return Err(at_left(operand_arity(values.len()), left));
        }
        return evaluate_binary(left, &values[0], op);
    }
    match (left, right) {
        (Value::Int(a, tok), Value::Int(b, _)) => eval_int_binary(*a, *b, op, tok),

        // Mixed int/float promotes the int operand to f64; the result is
        // always float-kind, never truncated back.
        (Value::Int(a, tok), Value::Float(b, _)) => eval_float_binary(*a as f64, *b, op, tok),
        (Value::Float(a, tok), Value::Int(b, _)) => eval_float_binary(*a, *b as f64, op, tok),
        (Value::Float(a, tok), Value::Float(b, _)) => eval_float_binary(*a, *b, op, tok),

        (Value::Bool(a, tok), Value::Bool(b, _)) if op == BinaryOp::Eq => {
            Ok(Value::bool_from(a == b, tok))
        }

        // Everything else: str on either side, bool outside equality, and
        // an aggregate on the left (never a dispatch target).
        _ => Err(unsupported(left, right, op)),
    }
}

/// Binary operations on integers.
///
/// Add/Sub/Mul go through checked arithmetic; overflow is a structured
/// error, never a silently wrapped value. Division always produces a
/// float with native IEEE semantics, so `1 / 0` is infinity rather than
/// a panic or a diagnostic.
fn eval_int_binary(a: i64, b: i64, op: BinaryOp, origin: &Token) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition", origin),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction", origin),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication", origin),
        BinaryOp::Div => Ok(Value::float_from(a as f64 / b as f64, origin)),
        BinaryOp::Lt => Ok(Value::bool_from(a < b, origin)),
        BinaryOp::LtEq => Ok(Value::bool_from(a <= b, origin)),
        BinaryOp::Gt => Ok(Value::bool_from(a > b, origin)),
        BinaryOp::GtEq => Ok(Value::bool_from(a >= b, origin)),
        BinaryOp::Eq => Ok(Value::bool_from(a == b, origin)),
    }
}

/// Binary operations on floats (and promoted integers).
///
/// Comparisons use `partial_cmp` for IEEE 754 compliance: bit-exact, no
/// epsilon tolerance, and every comparison involving NaN is false.
fn eval_float_binary(a: f64, b: f64, op: BinaryOp, origin: &Token) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Value::float_from(a + b, origin)),
        BinaryOp::Sub => Ok(Value::float_from(a - b, origin)),
        BinaryOp::Mul => Ok(Value::float_from(a * b, origin)),
        // Divide-by-zero is not special-cased: IEEE yields ±inf or NaN.
        BinaryOp::Div => Ok(Value::float_from(a / b, origin)),
        BinaryOp::Eq => Ok(Value::bool_from(
            a.partial_cmp(&b) == Some(Ordering::Equal),
            origin,
        )),
        BinaryOp::Lt => Ok(Value::bool_from(
            a.partial_cmp(&b) == Some(Ordering::Less),
            origin,
        )),
        BinaryOp::LtEq => Ok(Value::bool_from(
            matches!(a.partial_cmp(&b), Some(Ordering::Less | Ordering::Equal)),
            origin,
        )),
        BinaryOp::Gt => Ok(Value::bool_from(
            a.partial_cmp(&b) == Some(Ordering::Greater),
            origin,
        )),
        BinaryOp::GtEq => Ok(Value::bool_from(
            matches!(a.partial_cmp(&b), Some(Ordering::Greater | Ordering::Equal)),
            origin,
        )),
    }
}

/// Checked integer arithmetic with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str, origin: &Token) -> EvalResult {
    result
        .map(|n| Value::int_from(n, origin))
        .ok_or_else(|| integer_overflow(op_name).with_span(origin.span))
}

/// Unsupported operand combination, naming both operand renderings.
#[cold]
fn unsupported(left: &Value, right: &Value, op: BinaryOp) -> EvalError {
    at_left(
        unsupported_binary_op(op, &left.describe(), &right.describe()),
        left,
    )
}

/// Attach the left operand's span to an error, when it has one.
fn at_left(err: EvalError, left: &Value) -> EvalError {
    match left.token() {
        Some(tok) => err.with_span(tok.span),
        None => err,
    }
}
