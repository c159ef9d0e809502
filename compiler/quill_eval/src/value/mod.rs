//! Runtime values for the Quill evaluator.
//!
//! A [`Value`] is a decoded, typed runtime value wrapping its originating
//! [`Token`]. The type set is closed: int, float, bool, str, and the
//! multi-value aggregate produced by a call returning several values.
//!
//! # Immutability
//!
//! Values are never mutated after construction. Every operator builds a
//! brand-new value whose synthesized token carries the new lexeme and the
//! origin token's position (propagated, not recomputed). Negation follows
//! the same rule — it is copy-on-negate, never in-place.
//!
//! # Heap Enforcement
//!
//! Heap allocations go through factory methods on `Value`. The `Heap<T>`
//! wrapper has a private constructor, so external code cannot create heap
//! values directly.

mod heap;

use std::fmt;

use quill_ir::{Token, TokenKind};

use crate::errors::{invalid_numeric_literal, EvalResult};

pub use heap::Heap;

/// Runtime value in the Quill evaluator.
///
/// Each scalar variant carries the token it was decoded from (or the
/// synthesized token of the operation that produced it). `Multi` is the
/// transient aggregate of a multi-return call; it has no token of its own
/// and is only ever consumed as a binary right operand.
#[derive(Clone)]
pub enum Value {
    /// Integer value.
    Int(i64, Token),
    /// Floating-point value.
    Float(f64, Token),
    /// Boolean value.
    Bool(bool, Token),
    /// String value.
    Str(Heap<String>, Token),
    /// Ordered aggregate of a multi-return call.
    ///
    /// Valid as a binary operand only when it holds exactly one element;
    /// never a dispatch target on the left.
    Multi(Heap<Vec<Value>>),
}

impl Value {
    /// Decode a token into a value.
    ///
    /// Numeric lexemes are parsed eagerly; a malformed numeric lexeme is
    /// fatal — the error carries the token's span and no usable value
    /// exists on that path. Bool and str lexemes decode trivially.
    pub fn from_token(token: Token) -> EvalResult {
        match token.kind {
            TokenKind::Int => {
                let n: i64 = token
                    .text
                    .parse()
                    .map_err(|_| invalid_numeric_literal(&token.text).with_span(token.span))?;
                Ok(Value::Int(n, token))
            }
            TokenKind::Float => {
                let f: f64 = token
                    .text
                    .parse()
                    .map_err(|_| invalid_numeric_literal(&token.text).with_span(token.span))?;
                Ok(Value::Float(f, token))
            }
            TokenKind::Bool => {
                let b = token.text == "true";
                Ok(Value::Bool(b, token))
            }
            TokenKind::Str => {
                let text = token.text.clone();
                Ok(Value::Str(Heap::new(text), token))
            }
        }
    }

    // Factory methods for folded constants and tests; these synthesize a
    // detached token with the rendered lexeme and a matching kind.

    /// Create an integer value with no source position.
    pub fn int(n: i64) -> Self {
        Value::Int(n, Token::detached(TokenKind::Int, n.to_string()))
    }

    /// Create a float value with no source position.
    pub fn float(f: f64) -> Self {
        Value::Float(f, Token::detached(TokenKind::Float, render_float(f)))
    }

    /// Create a boolean value with no source position.
    pub fn bool(b: bool) -> Self {
        Value::Bool(b, Token::detached(TokenKind::Bool, render_bool(b)))
    }

    /// Create a string value with no source position.
    pub fn string(s: impl Into<String>) -> Self {
        let s = s.into();
        let token = Token::detached(TokenKind::Str, s.clone());
        Value::Str(Heap::new(s), token)
    }

    /// Create a multi-value aggregate.
    pub fn multi(values: Vec<Value>) -> Self {
        Value::Multi(Heap::new(values))
    }

    // Operator-result constructors: the synthesized token carries the
    // rendered lexeme and the origin token's position.

    pub(crate) fn int_from(n: i64, origin: &Token) -> Self {
        Value::Int(n, Token::synthetic(TokenKind::Int, n.to_string(), origin))
    }

    pub(crate) fn float_from(f: f64, origin: &Token) -> Self {
        Value::Float(f, Token::synthetic(TokenKind::Float, render_float(f), origin))
    }

    pub(crate) fn bool_from(b: bool, origin: &Token) -> Self {
        Value::Bool(b, Token::synthetic(TokenKind::Bool, render_bool(b), origin))
    }

    /// The originating token. `None` for a multi-value aggregate, which
    /// has no lexical identity of its own.
    pub fn token(&self) -> Option<&Token> {
        match self {
            Value::Int(_, tok)
            | Value::Float(_, tok)
            | Value::Bool(_, tok)
            | Value::Str(_, tok) => Some(tok),
            Value::Multi(_) => None,
        }
    }

    /// Get the type name for diagnostics.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(..) => "int",
            Value::Float(..) => "float",
            Value::Bool(..) => "bool",
            Value::Str(..) => "str",
            Value::Multi(_) => "multi",
        }
    }

    // Typed accessors: the decoded native value, used by the embedding
    // evaluator as the observable result of an expression subtree.

    /// The decoded integer, if this is an int.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n, _) => Some(*n),
            _ => None,
        }
    }

    /// The decoded float, if this is a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f, _) => Some(*f),
            _ => None,
        }
    }

    /// The decoded boolean, if this is a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b, _) => Some(*b),
            _ => None,
        }
    }

    /// The decoded string, if this is a str.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s, _) => Some(s),
            _ => None,
        }
    }

    /// The contained values, if this is a multi-value aggregate.
    pub fn values(&self) -> Option<&[Value]> {
        match self {
            Value::Multi(values) => Some(values),
            _ => None,
        }
    }

    /// Rendering used in diagnostics: the value plus its type tag and,
    /// when the token carries one, its source position.
    pub fn describe(&self) -> String {
        match self.token() {
            Some(tok) => format!(
                "`{self}` ({} at {}:{})",
                self.type_name(),
                tok.line,
                tok.span.start
            ),
            None => format!("`{self}` ({})", self.type_name()),
        }
    }
}

/// Fixed six-decimal float rendering; deterministic and locale-independent.
fn render_float(f: f64) -> String {
    format!("{f:.6}")
}

const fn render_bool(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n, _) => write!(f, "Int({n})"),
            Value::Float(n, _) => write!(f, "Float({n})"),
            Value::Bool(b, _) => write!(f, "Bool({b})"),
            Value::Str(s, _) => write!(f, "Str({:?})", &**s),
            Value::Multi(values) => write!(f, "Multi({:?})", &**values),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n, _) => write!(f, "{n}"),
            Value::Float(n, _) => write!(f, "{n:.6}"),
            Value::Bool(b, _) => write!(f, "{b}"),
            Value::Str(s, _) => write!(f, "\"{}\"", &**s),
            Value::Multi(values) => {
                write!(f, "(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Equality compares decoded values only; the wrapped token is positional
/// metadata and never participates. Float comparison is bit-exact IEEE
/// `==` (NaN is not equal to itself).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a, _), Value::Int(b, _)) => a == b,
            (Value::Float(a, _), Value::Float(b, _)) => a == b,
            (Value::Bool(a, _), Value::Bool(b, _)) => a == b,
            (Value::Str(a, _), Value::Str(b, _)) => a == b,
            (Value::Multi(a), Value::Multi(b)) => a == b,
            _ => false,
        }
    }
}
