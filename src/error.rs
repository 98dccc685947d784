//! Error types for every stage of compilation.
//!
//! Split into [`ParseError`] (lexing and parsing) and [`TranslateError`]
//! (Cypher-backend failures), unified under [`CompileError`] — the only
//! error type either public entry point returns. Modeled on the teacher's
//! `InterchangeError`: one `thiserror` enum per failure domain, each variant
//! spelling out its own message rather than delegating to a shared
//! formatter.

use crate::base::Span;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected token at {span:?}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("unknown token {text:?} at {span:?}")]
    UnknownToken { text: String, span: Span },

    #[error("reserved word {word:?} cannot be used as an identifier at {span:?}")]
    ReservedWord { word: String, span: Span },

    #[error("invalid integer literal {text:?} at {span:?}")]
    InvalidInteger { text: String, span: Span },

    #[error("empty set literal at {span:?}: a set requires at least one element")]
    EmptySet { span: Span },

    #[error("unknown rule priority {text:?} at {span:?}: expected Error, Info, or Warn")]
    UnknownPriority { text: String, span: Span },

    #[error("trailing content after rule body at {span:?}")]
    TrailingContent { span: Span },
}

impl ParseError {
    pub(crate) fn unknown_token(text: String, span: Span) -> Self {
        Self::UnknownToken { text, span }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Variable {0} not exist in current context")]
    UnboundVariable(String),

    #[error("Function {0} not exist")]
    UnknownFunction(String),

    #[error("unsupported quantifier source: {0}")]
    UnsupportedSource(String),

    #[error("function {function} expects {expected} argument(s), found {found}")]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },

    /// Unreachable through the parser: every `Expr` child in this crate's
    /// AST is an owned, always-present `Box<Expr>`, so there is no runtime
    /// state corresponding to the original's null child pointer. Kept for
    /// parity with the documented error surface and as a guard for anyone
    /// constructing an `Expr` tree by hand.
    #[error("broken AST: {0}")]
    BrokenAst(String),
}

impl TranslateError {
    pub(crate) fn unbound(name: &str) -> Self {
        Self::UnboundVariable(name.to_string())
    }

    pub(crate) fn unknown_function(name: &str) -> Self {
        Self::UnknownFunction(name.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Translate(#[from] TranslateError),
}
