//! JSON backend (C6, §4.5) — a recursive visitor building a `serde_json::Value`
//! tree and serializing it minified.
//!
//! Every node emits a stable `type` tag: `keyword`, `literal`, `variable`,
//! `set`, `call`, `ternary`, or the operator's own enumeration name
//! (`PLUS`, `ACCESS`, `NOT_IN`, ...). The original this was distilled from
//! throws `"broken AST: ptr is null"` when a child pointer is null
//! (`original`'s `json/serializer.hpp`); this crate's `Expr` has no such
//! state — every child is an owned, always-present `Box<Expr>` — so that
//! failure mode is a static impossibility here rather than a checked
//! runtime condition. `TranslateError::BrokenAst` stays in the error enum
//! for parity with the documented error surface, but nothing in this module
//! can produce it.

use crate::ast::{
    Assignment, BaseStatement, BinaryOp, Block, BodyStatement, Conditional, Except, Expr,
    FilteredStatement, Keyword, Literal, Predicate, Quantifier, QuantifierKind, Rule, UnaryOp,
};
use serde_json::{json, Value};

pub fn serialize_rule(rule: &Rule) -> Value {
    json!({
        "type": "rule",
        "name": rule.name.as_str(),
        "description": rule.description,
        "priority": rule.priority.as_str(),
        "blocks": serialize_block(&rule.body),
    })
}

fn serialize_block(block: &Block) -> Value {
    Value::Array(
        block
            .statements
            .iter()
            .map(serialize_body_statement)
            .collect(),
    )
}

fn serialize_body_statement(stmt: &BodyStatement) -> Value {
    match stmt {
        BodyStatement::Assignment(a) => serialize_assignment(a),
        BodyStatement::Quantifier(q) => serialize_quantifier(q),
        BodyStatement::Except(e) => serialize_except(e),
    }
}

fn serialize_assignment(a: &Assignment) -> Value {
    json!({
        "type": "assignment",
        "name": a.name.as_str(),
        "value": serialize_expr(&a.value),
    })
}

fn serialize_except(e: &Except) -> Value {
    json!({
        "type": "except",
        "quantifier": serialize_quantifier(&e.inner),
    })
}

fn serialize_quantifier(q: &Quantifier) -> Value {
    json!({
        "type": match q.kind {
            QuantifierKind::All => "ALL",
            QuantifierKind::Any => "ANY",
        },
        "args": q.identifiers.iter().map(|id| Value::String(id.to_string())).collect::<Vec<_>>(),
        "source": serialize_expr(&q.source),
        "predicate": serialize_predicate(&q.predicate),
    })
}

fn serialize_predicate(predicate: &Predicate) -> Value {
    match predicate {
        Predicate::Expression(e) => serialize_expr(e),
        Predicate::Base(BaseStatement::Quantifier(q)) => serialize_quantifier(q),
        Predicate::Base(BaseStatement::Conditional(c)) => serialize_conditional(c),
        Predicate::Filtered(fs) => serialize_filtered(fs),
    }
}

fn serialize_filtered(fs: &FilteredStatement) -> Value {
    json!({
        "type": "filtered",
        "leading": serialize_expr(&fs.leading),
        "quantifier": serialize_quantifier(&fs.inner),
    })
}

fn serialize_conditional(c: &Conditional) -> Value {
    match c {
        Conditional::IfThen { cond, then_branch } => json!({
            "type": "if",
            "cond": serialize_expr(cond),
            "then": serialize_predicate(then_branch),
        }),
        Conditional::IfThenElse {
            cond,
            then_branch,
            else_branch,
        } => json!({
            "type": "if",
            "cond": serialize_expr(cond),
            "then": serialize_predicate(then_branch),
            "else": serialize_predicate(else_branch),
        }),
    }
}

fn keyword_tag(k: Keyword) -> &'static str {
    match k {
        Keyword::System => "SYSTEM",
        Keyword::Container => "CONTAINER",
        Keyword::Component => "COMPONENT",
        Keyword::Code => "CODE",
        Keyword::Deploy => "DEPLOY",
        Keyword::Infrastructure => "INFRASTRUCTURE",
        Keyword::None => "NONE",
    }
}

fn binary_tag(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Plus => "PLUS",
        BinaryOp::Minus => "MINUS",
        BinaryOp::Mult => "MULT",
        BinaryOp::Div => "DIV",
        BinaryOp::Eq => "EQ",
        BinaryOp::NotEq => "NOT_EQ",
        BinaryOp::Less => "LESS",
        BinaryOp::Greater => "GREATER",
        BinaryOp::LessEq => "LESS_EQ",
        BinaryOp::GreaterEq => "GREATER_EQ",
        BinaryOp::In => "IN",
        BinaryOp::NotIn => "NOT_IN",
        BinaryOp::And => "AND",
        BinaryOp::Or => "OR",
        BinaryOp::Xor => "XOR",
    }
}

fn serialize_expr(expr: &Expr) -> Value {
    match expr {
        Expr::Keyword(k) => json!({ "type": "keyword", "keyword": keyword_tag(*k) }),
        Expr::Literal(Literal::Integer(n)) => json!({ "type": "literal", "value": n }),
        Expr::Literal(Literal::String(s)) => json!({ "type": "literal", "value": s.as_str() }),
        Expr::Literal(Literal::Boolean(b)) => json!({ "type": "literal", "value": b }),
        Expr::Literal(Literal::Set(items)) => json!({
            "type": "set",
            "items": items.iter().map(serialize_expr).collect::<Vec<_>>(),
        }),
        Expr::Variable(name) => json!({ "type": "variable", "name": name.as_str() }),
        Expr::Call { name, args } => json!({
            "type": "call",
            "name": name.as_str(),
            "args": args.iter().map(serialize_expr).collect::<Vec<_>>(),
        }),
        Expr::Access {
            operand,
            prop,
            safe,
        } => json!({
            "type": if *safe { "SAFE_ACCESS" } else { "ACCESS" },
            "operand": serialize_expr(operand),
            "property": prop.as_str(),
        }),
        Expr::Unary { op, operand } => {
            let UnaryOp::Neg = op;
            json!({ "type": "NEG", "operand": serialize_expr(operand) })
        }
        Expr::Binary { op, left, right } => json!({
            "type": binary_tag(*op),
            "left": serialize_expr(left),
            "right": serialize_expr(right),
        }),
        Expr::Ternary {
            cond,
            then_branch,
            else_branch,
        } => json!({
            "type": "ternary",
            "cond": serialize_expr(cond),
            "then": serialize_expr(then_branch),
            "else": serialize_expr(else_branch),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_rule;

    #[test]
    fn rule_with_no_description_still_emits_empty_description_field() {
        let rule = parse_rule("rule r { x = 1 }").unwrap();
        let value = serialize_rule(&rule);
        assert_eq!(value["type"], "rule");
        assert_eq!(value["description"], "");
        assert_eq!(value["priority"], "ERROR");
    }

    #[test]
    fn binary_node_emits_operator_tag_and_operands() {
        let rule = parse_rule("rule r { x = 1 + 2 }").unwrap();
        let value = serialize_rule(&rule);
        let assignment = &value["blocks"][0];
        assert_eq!(assignment["value"]["type"], "PLUS");
        assert_eq!(assignment["value"]["left"]["value"], 1);
        assert_eq!(assignment["value"]["right"]["value"], 2);
    }

    #[test]
    fn set_literal_uses_its_own_tag_not_literal() {
        let rule = parse_rule(r#"rule r { x = ["a", "b"] }"#).unwrap();
        let value = serialize_rule(&rule);
        let set = &value["blocks"][0]["value"];
        assert_eq!(set["type"], "set");
        assert_eq!(set["items"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn safe_access_gets_its_own_tag() {
        let rule = parse_rule("rule r { x = a.!b }").unwrap();
        let value = serialize_rule(&rule);
        assert_eq!(value["blocks"][0]["value"]["type"], "SAFE_ACCESS");
    }

    #[test]
    fn serialized_json_is_total_over_a_varied_rule() {
        let rule = parse_rule(
            "rule r { all { s in system: exist { c in s: c.tech == \"Go\" } } }",
        )
        .unwrap();
        let value = serialize_rule(&rule);
        let serialized = serde_json::to_string(&value).unwrap();
        assert!(!serialized.contains("null"));
    }
}
