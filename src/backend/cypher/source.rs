//! Quantifier source-clause synthesis (§4.6.5) — the subtlest part of the
//! backend. Builds the `MATCH ... WHERE ...` clause for a quantifier's
//! identifiers and binds each identifier's inferred [`Keyword`] kind in the
//! context as a side effect, independent of whether the clause text itself
//! ends up in the final output (an `except` quantifier discards the text
//! but still needs the bindings — see `stmt::translate_quantifier`).

use super::context::Context;
use super::expr::translate_expr;
use super::tables::{keyword_label, next_kind_in_chain};
use crate::ast::{Expr, Keyword};
use crate::error::TranslateError;
use smol_str::SmolStr;

/// The pairwise-inequality tail shared by every source shape: `xi <> xj AND
/// ` for every `i < j`, trailing `AND ` included even for the last pair. A
/// single identifier produces an empty tail — the `WHERE` keyword is still
/// emitted by the caller.
fn pairwise_inequality(identifiers: &[SmolStr]) -> String {
    let mut out = String::new();
    for i in 0..identifiers.len() {
        for j in (i + 1)..identifiers.len() {
            out.push_str(&format!("{} <> {} AND ", identifiers[i], identifiers[j]));
        }
    }
    out
}

fn where_clause(identifiers: &[SmolStr]) -> String {
    format!("WHERE {}", pairwise_inequality(identifiers))
}

pub fn synthesize_source(
    ctx: &mut Context,
    identifiers: &[SmolStr],
    source: &Expr,
) -> Result<String, TranslateError> {
    match source {
        Expr::Keyword(k) => synthesize_keyword_source(ctx, identifiers, *k),
        Expr::Variable(name) => synthesize_variable_source(ctx, identifiers, name),
        Expr::Call { name, args } => synthesize_call_source(ctx, identifiers, name, args),
        _ => Err(TranslateError::UnsupportedSource(
            "quantifier source must be a keyword, a bound variable, or a call to route/instance"
                .to_string(),
        )),
    }
}

fn synthesize_keyword_source(
    ctx: &mut Context,
    identifiers: &[SmolStr],
    kind: Keyword,
) -> Result<String, TranslateError> {
    let label = keyword_label(kind);
    let patterns: Vec<String> = identifiers
        .iter()
        .map(|id| format!("({id}:{label})"))
        .collect();
    for id in identifiers {
        ctx.bind(id.clone(), kind);
    }
    Ok(format!(
        "MATCH {} {}",
        patterns.join(", "),
        where_clause(identifiers)
    ))
}

fn synthesize_variable_source(
    ctx: &mut Context,
    identifiers: &[SmolStr],
    variable: &str,
) -> Result<String, TranslateError> {
    let kind = ctx
        .kind_of(variable)
        .ok_or_else(|| TranslateError::unbound(variable))?;

    if kind == Keyword::Deploy {
        let patterns: Vec<String> = identifiers
            .iter()
            .map(|id| {
                format!(
                    "({variable})-[:CONTAINS*]->(:ContainerInstance)-[:INSTANCE_OF]->({id}:Container)"
                )
            })
            .collect();
        for id in identifiers {
            ctx.bind(id.clone(), Keyword::Container);
        }
        return Ok(format!(
            "MATCH {} {}",
            patterns.join(", "),
            where_clause(identifiers)
        ));
    }

    let Some(next) = next_kind_in_chain(kind) else {
        return Err(TranslateError::UnsupportedSource(format!(
            "variable {variable} has no containment successor"
        )));
    };

    let patterns: Vec<String> = identifiers
        .iter()
        .map(|id| format!("({variable})-[:CONTAINS*]->({id})"))
        .collect();
    for id in identifiers {
        ctx.bind(id.clone(), next);
    }
    Ok(format!(
        "MATCH {} {}",
        patterns.join(", "),
        where_clause(identifiers)
    ))
}

fn synthesize_call_source(
    ctx: &mut Context,
    identifiers: &[SmolStr],
    name: &str,
    args: &[Expr],
) -> Result<String, TranslateError> {
    match name {
        "route" => synthesize_route_source(ctx, identifiers, args),
        "instance" => synthesize_instance_source(ctx, identifiers, args),
        other => Err(TranslateError::UnsupportedSource(format!(
            "{other} cannot be used as a quantifier source"
        ))),
    }
}

fn synthesize_route_source(
    ctx: &mut Context,
    identifiers: &[SmolStr],
    args: &[Expr],
) -> Result<String, TranslateError> {
    if args.len() != 2 {
        return Err(TranslateError::ArityMismatch {
            function: "route".to_string(),
            expected: 2,
            found: args.len(),
        });
    }
    let a = translate_expr(ctx, &args[0])?;
    let b = translate_expr(ctx, &args[1])?;

    let mut out = format!("MATCH p = ({a})-[*1..]->({b})");
    for id in identifiers {
        out.push_str(&format!(" UNWIND nodes(p) AS {id} WITH {id}"));
        ctx.bind(id.clone(), Keyword::None);
    }
    out.push(' ');
    out.push_str(&where_clause(identifiers));
    Ok(out)
}

fn synthesize_instance_source(
    ctx: &mut Context,
    identifiers: &[SmolStr],
    args: &[Expr],
) -> Result<String, TranslateError> {
    if identifiers.is_empty() {
        return Err(TranslateError::UnsupportedSource(
            "instance requires at least one identifier".to_string(),
        ));
    }
    if identifiers.len() > 1 {
        return Err(TranslateError::UnsupportedSource(
            "instance supports only a single identifier".to_string(),
        ));
    }
    if args.len() != 1 {
        return Err(TranslateError::ArityMismatch {
            function: "instance".to_string(),
            expected: 1,
            found: args.len(),
        });
    }
    let route_expansion = translate_expr(ctx, &args[0])?;
    let id = &identifiers[0];
    ctx.bind(id.clone(), Keyword::None);
    Ok(format!(
        "MATCH ({id}:ContainerInstance)-({route_expansion})"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Literal;

    #[test]
    fn single_identifier_keyword_source_has_empty_inequality_tail() {
        let mut ctx = Context::new();
        let ids = vec![SmolStr::new("c")];
        let clause = synthesize_source(&mut ctx, &ids, &Expr::Keyword(Keyword::Container)).unwrap();
        assert_eq!(clause, "MATCH (c:Container) WHERE ");
        assert_eq!(ctx.kind_of("c"), Some(Keyword::Container));
    }

    #[test]
    fn multiple_identifiers_get_pairwise_inequality() {
        let mut ctx = Context::new();
        let ids = vec![SmolStr::new("s1"), SmolStr::new("s2")];
        let clause = synthesize_source(&mut ctx, &ids, &Expr::Keyword(Keyword::System)).unwrap();
        assert_eq!(
            clause,
            "MATCH (s1:SoftwareSystem), (s2:SoftwareSystem) WHERE s1 <> s2 AND "
        );
    }

    #[test]
    fn variable_source_walks_the_containment_chain() {
        let mut ctx = Context::new();
        ctx.bind(SmolStr::new("s"), Keyword::System);
        let ids = vec![SmolStr::new("c")];
        let clause = synthesize_source(&mut ctx, &ids, &Expr::Variable(SmolStr::new("s"))).unwrap();
        assert_eq!(clause, "MATCH (s)-[:CONTAINS*]->(c) WHERE ");
        assert_eq!(ctx.kind_of("c"), Some(Keyword::Container));
    }

    #[test]
    fn deploy_source_uses_container_instance_pattern() {
        let mut ctx = Context::new();
        ctx.bind(SmolStr::new("d"), Keyword::Deploy);
        let ids = vec![SmolStr::new("c")];
        let clause = synthesize_source(&mut ctx, &ids, &Expr::Variable(SmolStr::new("d"))).unwrap();
        assert!(clause.contains("ContainerInstance"));
        assert!(clause.contains("INSTANCE_OF"));
        assert_eq!(ctx.kind_of("c"), Some(Keyword::Container));
    }

    #[test]
    fn code_kind_variable_has_no_containment_successor() {
        let mut ctx = Context::new();
        ctx.bind(SmolStr::new("x"), Keyword::Code);
        let ids = vec![SmolStr::new("y")];
        assert!(synthesize_source(&mut ctx, &ids, &Expr::Variable(SmolStr::new("x"))).is_err());
    }

    #[test]
    fn route_source_unwinds_each_identifier() {
        let mut ctx = Context::new();
        ctx.bind(SmolStr::new("a"), Keyword::System);
        ctx.bind(SmolStr::new("b"), Keyword::System);
        let ids = vec![SmolStr::new("x")];
        let call = Expr::Call {
            name: SmolStr::new("route"),
            args: vec![
                Expr::Variable(SmolStr::new("a")),
                Expr::Variable(SmolStr::new("b")),
            ],
        };
        let clause = synthesize_source(&mut ctx, &ids, &call).unwrap();
        assert!(clause.starts_with("MATCH p = (a)-[*1..]->(b)"));
        assert!(clause.contains("UNWIND nodes(p) AS x WITH x"));
    }

    #[test]
    fn instance_source_requires_exactly_one_identifier() {
        let mut ctx = Context::new();
        let call = Expr::Call {
            name: SmolStr::new("instance"),
            args: vec![Expr::Keyword(Keyword::Container)],
        };
        assert!(synthesize_source(&mut ctx, &[], &call).is_err());
        let two = vec![SmolStr::new("a"), SmolStr::new("b")];
        assert!(synthesize_source(&mut ctx, &two, &call).is_err());
    }

    #[test]
    fn unsupported_source_shape_is_rejected() {
        let mut ctx = Context::new();
        let ids = vec![SmolStr::new("x")];
        assert!(synthesize_source(&mut ctx, &ids, &Expr::Literal(Literal::Integer(1))).is_err());
    }
}
