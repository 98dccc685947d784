//! Statement and rule expansion (§4.6.6–§4.6.9).

use super::context::Context;
use super::expr::translate_expr;
use super::source::synthesize_source;
use super::tables::case_when_template;
use crate::ast::{
    Assignment, BaseStatement, Block, BodyStatement, Conditional, Except, FilteredStatement,
    Predicate, Quantifier, QuantifierKind, Rule,
};
use crate::ast::Keyword;
use crate::error::TranslateError;

/// Quantifier expansion templates keyed on `(quantifier_level, except_rule)`
/// (§4.6.6). The source clause is part of the template at level 1 outside
/// an `except`, and at level > 1; inside an `except` at level 1 it is
/// dropped from the text (its bindings were still registered by
/// `synthesize_source`).
pub fn translate_quantifier(ctx: &mut Context, q: &Quantifier) -> Result<String, TranslateError> {
    let source_clause = synthesize_source(ctx, &q.identifiers, &q.source)?;

    let mut guard = ctx.enter_quantifier();
    let level = guard.quantifier_level;
    let except_rule = guard.except_rule;
    tracing::trace!(
        level,
        except_rule,
        kind = ?q.kind,
        identifiers = ?q.identifiers,
        "entering quantifier"
    );

    if level == 1 {
        guard.returns = q.identifiers.clone();
    }

    let predicate_str = translate_predicate(&mut guard, &q.predicate)?;

    Ok(match (level, except_rule) {
        (1, false) => match q.kind {
            QuantifierKind::All => format!("{source_clause} NOT ({predicate_str})"),
            QuantifierKind::Any => format!("{source_clause} ({predicate_str})"),
        },
        (1, true) => match q.kind {
            QuantifierKind::All => format!("NOT ({predicate_str})"),
            QuantifierKind::Any => format!("({predicate_str})"),
        },
        _ => match q.kind {
            QuantifierKind::All => {
                format!("NOT EXISTS {{ {source_clause} NOT ({predicate_str}) }}")
            }
            QuantifierKind::Any => format!("EXISTS {{ {source_clause} ({predicate_str}) }}"),
        },
    })
}

pub fn translate_predicate(
    ctx: &mut Context,
    predicate: &Predicate,
) -> Result<String, TranslateError> {
    match predicate {
        Predicate::Expression(e) => translate_expr(ctx, e),
        Predicate::Base(BaseStatement::Quantifier(q)) => translate_quantifier(ctx, q),
        Predicate::Base(BaseStatement::Conditional(c)) => translate_conditional(ctx, c),
        Predicate::Filtered(fs) => translate_filtered(ctx, fs),
    }
}

fn translate_filtered(
    ctx: &mut Context,
    fs: &FilteredStatement,
) -> Result<String, TranslateError> {
    let leading = translate_expr(ctx, &fs.leading)?;
    let inner = translate_quantifier(ctx, &fs.inner)?;
    Ok(format!("{leading} AND {inner}"))
}

fn translate_conditional(ctx: &mut Context, c: &Conditional) -> Result<String, TranslateError> {
    match c {
        Conditional::IfThen { cond, then_branch } => {
            let cond_str = translate_expr(ctx, cond)?;
            let then_str = translate_predicate(ctx, then_branch)?;
            Ok(case_when_template(&cond_str, &then_str, "true"))
        }
        Conditional::IfThenElse {
            cond,
            then_branch,
            else_branch,
        } => {
            let cond_str = translate_expr(ctx, cond)?;
            let then_str = translate_predicate(ctx, then_branch)?;
            let else_str = translate_predicate(ctx, else_branch)?;
            Ok(case_when_template(&cond_str, &then_str, &else_str))
        }
    }
}

fn translate_assignment(ctx: &mut Context, a: &Assignment) -> Result<String, TranslateError> {
    let value = translate_expr(ctx, &a.value)?;
    ctx.bind(a.name.clone(), Keyword::None);
    Ok(format!("WITH {value} AS {name}", name = a.name))
}

fn translate_except(ctx: &mut Context, e: &Except) -> Result<String, TranslateError> {
    if ctx.except_rule {
        // Spec §9 Open Questions: nested/repeated `except` semantics are
        // undocumented upstream. We emit sequentially rather than reject.
        tracing::warn!("except nested inside another except; emitting sequentially");
    }
    let mut guard = ctx.enter_except();
    let inner = translate_quantifier(&mut guard, &e.inner)?;
    Ok(format!("AND NOT ( {inner} )"))
}

fn translate_body_statement(
    ctx: &mut Context,
    stmt: &BodyStatement,
) -> Result<String, TranslateError> {
    match stmt {
        BodyStatement::Assignment(a) => translate_assignment(ctx, a),
        BodyStatement::Quantifier(q) => translate_quantifier(ctx, q),
        BodyStatement::Except(e) => translate_except(ctx, e),
    }
}

fn translate_block(ctx: &mut Context, block: &Block) -> Result<String, TranslateError> {
    let parts = block
        .statements
        .iter()
        .map(|s| translate_body_statement(ctx, s))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(parts.join(" "))
}

/// Rule expansion (§4.6.9): a three-line header comment, the translated
/// block, and the final `RETURN` clause over the outermost quantifier's
/// identifiers.
pub fn translate_rule(rule: &Rule) -> Result<String, TranslateError> {
    tracing::debug!(
        rule = %rule.name,
        priority = rule.priority.as_str(),
        statements = rule.body.statements.len(),
        "translating rule to Cypher"
    );
    let mut ctx = Context::new();
    let block_str = translate_block(&mut ctx, &rule.body)?;
    debug_assert_eq!(
        ctx.quantifier_level, 0,
        "quantifier_level must return to zero at the end of translation"
    );

    let header = format!(
        "// [RULE]: {}\n// [DESCRIPTION]: {}\n// [PRIORITY]: {}\n",
        rule.name,
        rule.description,
        rule.priority.as_str()
    );
    let returns = ctx
        .returns
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" ,");

    Ok(format!("{header}{block_str} RETURN {returns}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_rule;

    fn cypher(src: &str) -> String {
        let rule = parse_rule(src).unwrap();
        translate_rule(&rule).unwrap()
    }

    #[test]
    fn quantifier_level_is_balanced_after_translation() {
        let rule = parse_rule("rule r { all { s in system: exist { c in s: true } } }").unwrap();
        let mut ctx = Context::new();
        translate_block(&mut ctx, &rule.body).unwrap();
        assert_eq!(ctx.quantifier_level, 0);
    }

    #[test]
    fn level_one_any_quantifier_keeps_source_in_text() {
        let out = cypher("rule r { exist { c in container: true } }");
        assert!(out.contains("MATCH (c:Container) WHERE"));
        assert!(out.contains("(true)"));
    }

    #[test]
    fn level_one_all_quantifier_negates_predicate() {
        let out = cypher("rule r { all { c in container: true } }");
        assert!(out.contains("NOT (true)"));
    }

    #[test]
    fn nested_quantifier_uses_exists_template() {
        let out = cypher("rule r { all { s in system: exist { c in s: true } } }");
        assert!(out.contains("EXISTS {"));
    }

    #[test]
    fn except_drops_its_own_source_clause_from_output() {
        let out = cypher(
            "rule r { all { s in system: true }; except exist { s in system: false } }",
        );
        assert!(out.contains("AND NOT ( (false) )"));
    }

    #[test]
    fn if_without_else_uses_true_branch() {
        let out = cypher(r#"rule r { all { s in system: if s.tech == "Go" then true } }"#);
        assert!(out.contains("ELSE (true) END"));
    }

    #[test]
    fn rule_header_includes_name_description_and_priority() {
        let out = cypher(r#"rule orphan { description: "no orphans"; x = 1 }"#);
        assert!(out.starts_with(
            "// [RULE]: orphan\n// [DESCRIPTION]: no orphans\n// [PRIORITY]: ERROR\n"
        ));
    }

    #[test]
    fn rule_with_no_description_still_emits_the_empty_header_line() {
        let out = cypher("rule r { x = 1 }");
        assert!(out.starts_with("// [RULE]: r\n// [DESCRIPTION]: \n// [PRIORITY]: ERROR\n"));
    }

    #[test]
    fn returns_are_set_from_the_outermost_quantifier() {
        let out = cypher("rule r { all { c in container: true } }");
        assert!(out.ends_with("RETURN c"));
    }
}
