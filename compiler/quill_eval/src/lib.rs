#![deny(clippy::arithmetic_side_effects)]
//! Quill Eval - runtime value model for the Quill tree-walking evaluator.
//!
//! This crate provides the boxed, dynamically-typed values that AST nodes
//! carry and the pairwise binary-operator dispatch between them.
//!
//! # Architecture
//!
//! - `Value`: closed tagged union over int, float, bool, str, and the
//!   multi-value aggregate of a multi-return call
//! - `evaluate_binary`: direct enum-based binary operator dispatch
//! - `evaluate_unary`: direct enum-based unary operator dispatch
//! - `EvalError`: structured errors threaded through every fallible path;
//!   there is no global diagnostic sink
//!
//! Values are immutable after construction. Operator results are new
//! values whose synthesized tokens propagate the left operand's source
//! position.

pub mod errors;
mod operators;
mod unary_operators;
mod value;

#[cfg(test)]
mod tests;

pub use errors::{
    integer_overflow, invalid_numeric_literal, operand_arity, unsupported_binary_op,
    unsupported_unary_op, EvalError, EvalErrorKind, EvalResult,
};
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::{Heap, Value};

// Re-export from quill_ir so embedders need only one import path.
pub use quill_ir::{BinaryOp, FileId, Span, Token, TokenKind, UnaryOp};
