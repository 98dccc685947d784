//! Statement nodes (§3.1, §4.3) — contextual statement categories:
//! `BodyStatement` at block top level, `BaseStatement` for a nested
//! quantifier or conditional, `Predicate` for whatever follows a
//! quantifier's `:`.

use super::expr::Expr;
use smol_str::SmolStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantifierKind {
    All,
    Any,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Quantifier {
    pub kind: QuantifierKind,
    pub identifiers: Vec<SmolStr>,
    pub source: Expr,
    pub predicate: Box<Predicate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Conditional {
    IfThen {
        cond: Expr,
        then_branch: Box<Predicate>,
    },
    IfThenElse {
        cond: Expr,
        then_branch: Box<Predicate>,
        else_branch: Box<Predicate>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum BaseStatement {
    Quantifier(Quantifier),
    Conditional(Conditional),
}

/// A leading boolean expression followed by `:` and a nested quantifier —
/// the expression filters the quantifier's source before the inner
/// predicate is evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredStatement {
    pub leading: Expr,
    pub inner: Quantifier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Expression(Expr),
    Base(BaseStatement),
    Filtered(FilteredStatement),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: SmolStr,
    pub value: Expr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Except {
    pub inner: Quantifier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BodyStatement {
    Assignment(Assignment),
    Quantifier(Quantifier),
    Except(Except),
}
