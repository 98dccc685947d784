//! Foundation types shared by the lexer, parser, and both backends.
//!
//! Kept deliberately small: this crate compiles one source string per call
//! and never retains cross-call state, so there is no file table, interner,
//! or incremental index here — just the byte-offset span used to report
//! parse errors.

mod span;

pub use span::{LineCol, Span};
