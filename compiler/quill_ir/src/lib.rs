//! Quill IR - lexical and source-location types.
//!
//! This crate holds the types shared between the front end (lexer/parser,
//! not part of this workspace) and the evaluator:
//!
//! - `Span`: compact 8-byte source range
//! - `FileId`, `Token`, `TokenKind`: the lexical facts a value wraps
//! - `BinaryOp`, `UnaryOp`: the operator set the evaluator dispatches on
//!
//! Tokens are immutable once created. Operator results carry *synthesized*
//! tokens built with [`Token::synthetic`], which propagate the origin
//! token's position verbatim rather than recomputing it.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, UnaryOp};
pub use span::Span;
pub use token::{FileId, Token, TokenKind};
