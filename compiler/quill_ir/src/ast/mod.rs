//! AST-level types consumed by the evaluator.
//!
//! Only the operator enums live here; expression nodes belong to the
//! front end and never cross into the value model.

mod operators;

pub use operators::{BinaryOp, UnaryOp};
