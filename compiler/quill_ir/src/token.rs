//! Lexical tokens.
//!
//! A [`Token`] is an immutable lexical fact: the raw lexeme, a kind tag,
//! and where it came from (byte span, line, file). The front end produces
//! them; the value model wraps them and reads them back for diagnostics.

use std::fmt;

use crate::span::Span;

/// Identifier for a source file.
///
/// The mapping from `FileId` to a path is owned by the front end; this
/// layer only threads the identifier through for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FileId(pub u32);

impl FileId {
    /// File id for synthesized tokens with no source file.
    pub const UNKNOWN: FileId = FileId(u32::MAX);
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == FileId::UNKNOWN {
            write!(f, "<synthesized>")
        } else {
            write!(f, "file#{}", self.0)
        }
    }
}

/// Kind tag for the lexemes the value model decodes.
///
/// Only the literal kinds reach this layer; identifiers, keywords, and
/// punctuation are consumed by the front end.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    Int,
    Float,
    Str,
    Bool,
}

impl TokenKind {
    /// Returns the lowercase name used in renderings and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable lexical token.
///
/// `span`, `line`, and `file` locate the lexeme in its source. For tokens
/// built with [`Token::synthetic`] they locate the *origin* token the
/// result was derived from.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
    pub line: u32,
    pub file: FileId,
}

impl Token {
    /// Create a token from front-end output.
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        span: Span,
        line: u32,
        file: FileId,
    ) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            line,
            file,
        }
    }

    /// Create a token for an operator result.
    ///
    /// Carries the new lexeme and kind while propagating the origin
    /// token's span, line, and file verbatim. The kind must match the
    /// kind of the value actually constructed.
    pub fn synthetic(kind: TokenKind, text: impl Into<String>, origin: &Token) -> Self {
        Token {
            kind,
            text: text.into(),
            span: origin.span,
            line: origin.line,
            file: origin.file,
        }
    }

    /// Create a token with no source position, for folded constants
    /// and tests.
    pub fn detached(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
            span: Span::DUMMY,
            line: 0,
            file: FileId::UNKNOWN,
        }
    }

    /// Rendering used in diagnostics: lexeme, kind tag, and position.
    pub fn describe(&self) -> String {
        format!(
            "`{}` ({} at {}:{})",
            self.text, self.kind, self.line, self.span.start
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
