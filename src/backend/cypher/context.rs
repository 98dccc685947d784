//! Translation context (§4.6, Context) and its two scoped fields.
//!
//! `quantifier_level` and `except_rule` follow strict stack discipline: set
//! on entry, restored on every exit path — including an early `?` return —
//! which in Rust means a `Drop`-based guard rather than manual push/pop.
//! This mirrors the teacher's `ParseContext` scope-stack discipline
//! (`parser/errors/context.rs`) translated into the RAII idiom spec §9
//! calls for explicitly.

use crate::ast::Keyword;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Default)]
pub struct Context {
    pub variable_table: FxHashSet<SmolStr>,
    /// Identifier -> inferred kind. An `IndexMap` rather than a plain hash
    /// map for the same reason the teacher's symbol index is one
    /// (`hir::resolve::SymbolIndex::by_qualified_name`): insertion order is
    /// the binding order, which is handy when a diagnostic needs to name
    /// "the most recently bound variable" without a separate side table.
    pub variable_type: IndexMap<SmolStr, Keyword>,
    pub quantifier_level: u32,
    pub except_rule: bool,
    pub returns: Vec<SmolStr>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: SmolStr, kind: Keyword) {
        self.variable_type.insert(name.clone(), kind);
        self.variable_table.insert(name);
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.variable_table.contains(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<Keyword> {
        self.variable_type.get(name).copied()
    }

    /// Enters a new quantifier-nesting level for the duration of the
    /// returned guard, restoring it on drop.
    pub fn enter_quantifier(&mut self) -> QuantifierLevelGuard<'_> {
        self.quantifier_level += 1;
        QuantifierLevelGuard { ctx: self }
    }

    /// Sets `except_rule` for the duration of the returned guard, restoring
    /// the previous value on drop (multiple nested `except` clauses are not
    /// expected by this grammar, but restoring the previous value rather
    /// than hardcoding `false` keeps the guard correct if that ever
    /// changes).
    pub fn enter_except(&mut self) -> ExceptGuard<'_> {
        let previous = self.except_rule;
        self.except_rule = true;
        ExceptGuard {
            ctx: self,
            previous,
        }
    }
}

pub struct QuantifierLevelGuard<'ctx> {
    ctx: &'ctx mut Context,
}

impl Drop for QuantifierLevelGuard<'_> {
    fn drop(&mut self) {
        self.ctx.quantifier_level -= 1;
    }
}

impl Deref for QuantifierLevelGuard<'_> {
    type Target = Context;
    fn deref(&self) -> &Context {
        self.ctx
    }
}

impl DerefMut for QuantifierLevelGuard<'_> {
    fn deref_mut(&mut self) -> &mut Context {
        self.ctx
    }
}

pub struct ExceptGuard<'ctx> {
    ctx: &'ctx mut Context,
    previous: bool,
}

impl Drop for ExceptGuard<'_> {
    fn drop(&mut self) {
        self.ctx.except_rule = self.previous;
    }
}

impl Deref for ExceptGuard<'_> {
    type Target = Context;
    fn deref(&self) -> &Context {
        self.ctx
    }
}

impl DerefMut for ExceptGuard<'_> {
    fn deref_mut(&mut self) -> &mut Context {
        self.ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantifier_level_restores_on_guard_drop() {
        let mut ctx = Context::new();
        assert_eq!(ctx.quantifier_level, 0);
        {
            let mut guard = ctx.enter_quantifier();
            assert_eq!(guard.quantifier_level, 1);
            {
                let inner = guard.enter_quantifier();
                assert_eq!(inner.quantifier_level, 2);
            }
            assert_eq!(guard.quantifier_level, 1);
        }
        assert_eq!(ctx.quantifier_level, 0);
    }

    #[test]
    fn except_rule_restores_to_previous_value_on_drop() {
        let mut ctx = Context::new();
        assert!(!ctx.except_rule);
        {
            let guard = ctx.enter_except();
            assert!(guard.except_rule);
        }
        assert!(!ctx.except_rule);
    }

    #[test]
    fn quantifier_level_restores_even_on_early_return() {
        fn run(ctx: &mut Context) -> Result<(), ()> {
            let _guard = ctx.enter_quantifier();
            Err(())
        }
        let mut ctx = Context::new();
        let _ = run(&mut ctx);
        assert_eq!(ctx.quantifier_level, 0);
    }
}
