//! Expression translation (§4.6.4): template substitution over an already
//! type-checked-by-construction AST, failing only on an unbound variable or
//! an unknown/misused function call.

use super::context::Context;
use super::tables::{
    access_template, articulation_template, builtin_arity, case_when_template, cross_template,
    keyword_label, route_template, safe_access_template, unary_neg_template, union_template,
};
use crate::ast::{Expr, Literal, UnaryOp};
use crate::error::TranslateError;

pub fn translate_expr(ctx: &Context, expr: &Expr) -> Result<String, TranslateError> {
    match expr {
        Expr::Keyword(k) => Ok(keyword_label(*k).to_string()),
        Expr::Literal(Literal::Integer(n)) => Ok(n.to_string()),
        Expr::Literal(Literal::String(s)) => Ok(format!("\"{s}\"")),
        Expr::Literal(Literal::Boolean(b)) => Ok(b.to_string()),
        Expr::Literal(Literal::Set(items)) => {
            let parts = items
                .iter()
                .map(|item| translate_expr(ctx, item))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", parts.join(", ")))
        }
        Expr::Variable(name) => {
            if ctx.is_bound(name) {
                Ok(name.to_string())
            } else {
                Err(TranslateError::unbound(name))
            }
        }
        Expr::Call { name, args } => translate_call(ctx, name, args),
        Expr::Access {
            operand,
            prop,
            safe,
        } => {
            let operand_str = translate_expr(ctx, operand)?;
            Ok(if *safe {
                safe_access_template(&operand_str, prop)
            } else {
                access_template(&operand_str, prop)
            })
        }
        Expr::Unary { op, operand } => {
            let UnaryOp::Neg = op;
            Ok(unary_neg_template(&translate_expr(ctx, operand)?))
        }
        Expr::Binary { op, left, right } => {
            let l = translate_expr(ctx, left)?;
            let r = translate_expr(ctx, right)?;
            Ok(apply_binary_template(*op, &l, &r))
        }
        Expr::Ternary {
            cond,
            then_branch,
            else_branch,
        } => Ok(case_when_template(
            &translate_expr(ctx, cond)?,
            &translate_expr(ctx, then_branch)?,
            &translate_expr(ctx, else_branch)?,
        )),
    }
}

fn apply_binary_template(op: crate::ast::BinaryOp, l: &str, r: &str) -> String {
    super::tables::binary_template(op)
        .replacen("{}", l, 1)
        .replacen("{}", r, 1)
}

/// Translates a call to one of the four expression-level built-ins
/// (`route`, `cross`, `union`, `articulation`). `instance` is a known
/// function name but has no expansion here — §4.6.3 reserves it for
/// quantifier-source position only (see `source::synthesize_source`).
pub fn translate_call(ctx: &Context, name: &str, args: &[Expr]) -> Result<String, TranslateError> {
    if name == "instance" {
        return Err(TranslateError::UnsupportedSource(
            "instance is only valid as a quantifier source".to_string(),
        ));
    }

    let Some(expected_arity) = builtin_arity(name) else {
        return Err(TranslateError::unknown_function(name));
    };
    if args.len() != expected_arity {
        return Err(TranslateError::ArityMismatch {
            function: name.to_string(),
            expected: expected_arity,
            found: args.len(),
        });
    }

    let translated = args
        .iter()
        .map(|a| translate_expr(ctx, a))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(match name {
        "route" => route_template(&translated[0], &translated[1]),
        "cross" => cross_template(&translated[0], &translated[1]),
        "union" => union_template(&translated[0], &translated[1]),
        "articulation" => articulation_template(&translated[0]),
        _ => unreachable!("builtin_arity only returns Some for the names matched above"),
    })
}
