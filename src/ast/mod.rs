//! The typed AST (§3 of the language model).
//!
//! A tree of owned nodes — every child is a `Box<Expr>` or a plain struct
//! field, never shared and never nullable. That makes the AST acyclic and
//! exclusively-owned by construction, which is the invariant spec §3.2
//! states explicitly; it also means the JSON backend's "broken AST" error
//! (§4.5, §4.7) has no reachable trigger through this crate's own parser —
//! see `backend::json` for the note.

mod expr;
mod rule;
mod stmt;

pub use expr::{BinaryOp, Expr, Keyword, Literal, UnaryOp};
pub use rule::{Block, Priority, Rule};
pub use stmt::{
    Assignment, BaseStatement, BodyStatement, Conditional, Except, FilteredStatement, Predicate,
    Quantifier, QuantifierKind,
};
