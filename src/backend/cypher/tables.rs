//! The Cypher backend's three lookup tables (§4.6.1–§4.6.3), reproduced
//! verbatim. These are `const fn`/`match`-based rather than `static` maps:
//! the keys are closed enums, so a `match` is both the idiomatic choice and
//! a free exhaustiveness check against the AST's operator set.

use crate::ast::{BinaryOp, Keyword};

/// §4.6.1 — keyword to Cypher node label.
pub fn keyword_label(k: Keyword) -> &'static str {
    match k {
        Keyword::System => "SoftwareSystem",
        Keyword::Container => "Container",
        Keyword::Component => "Component",
        Keyword::Code => "Code",
        Keyword::Deploy => "DeploymentNode",
        Keyword::Infrastructure => "InfrastructureNode",
        Keyword::None => "[]",
    }
}

/// §4.6.2 — binary operator template, `{}` placeholders for operands.
pub fn binary_template(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Plus => "{} + {}",
        BinaryOp::Minus => "{} - {}",
        BinaryOp::Mult => "{} * {}",
        BinaryOp::Div => "{} / {}",
        BinaryOp::Eq => "{} = {}",
        BinaryOp::NotEq => "{} <> {}",
        BinaryOp::Less => "{} < {}",
        BinaryOp::Greater => "{} > {}",
        BinaryOp::LessEq => "{} <= {}",
        BinaryOp::GreaterEq => "{} >= {}",
        BinaryOp::In => "{} IN {}",
        // Not in the original's operator table verbatim: the Open Question
        // on `not in` resolves to the obvious expansion around the `IN`
        // template rather than its own row.
        BinaryOp::NotIn => "NOT ({} IN {})",
        BinaryOp::And => "{} AND {}",
        BinaryOp::Or => "{} OR {}",
        BinaryOp::Xor => "{} XOR {}",
    }
}

/// §4.6.2 — the unary `NEG` template. Despite the name this is the
/// expansion for the `not` keyword (see `ast::expr::UnaryOp`'s doc comment);
/// reproduced exactly as given, arithmetic-looking surface syntax and all.
pub fn unary_neg_template(operand: &str) -> String {
    format!("-{operand}")
}

pub fn access_template(operand: &str, prop: &str) -> String {
    format!("{operand}.{prop}")
}

pub fn safe_access_template(operand: &str, prop: &str) -> String {
    format!("exists({operand}.{prop})")
}

pub fn case_when_template(cond: &str, then_str: &str, else_str: &str) -> String {
    format!("CASE WHEN ({cond}) THEN ({then_str}) ELSE ({else_str}) END")
}

/// Fixed arities for the four expression-level built-ins (§4.6.3). `instance`
/// is deliberately absent — it has no expression-level expansion, only a
/// quantifier-source one (§4.6.5).
pub fn builtin_arity(name: &str) -> Option<usize> {
    match name {
        "route" => Some(2),
        "cross" => Some(2),
        "union" => Some(2),
        "articulation" => Some(1),
        _ => None,
    }
}

pub fn route_template(a: &str, b: &str) -> String {
    format!("({a})-[*1..]->({b})")
}

pub fn cross_template(a: &str, b: &str) -> String {
    format!("[ x IN {a} WHERE x IN {b} ]")
}

pub fn union_template(a: &str, b: &str) -> String {
    format!(
        "WITH {a} + {b} AS combined UNWIND combined AS item RETURN collect(DISTINCT item) AS unionSet"
    )
}

pub fn articulation_template(a: &str) -> String {
    format!("({a}.articulationPoint IS NULL OR {a}.articulationPoint = 0)")
}

/// The containment chain a plain (non-`deploy`) variable source walks
/// (§4.6.5): `system -> container -> component -> code`. `code`,
/// `infrastructure`, and `none` have no next link.
pub fn next_kind_in_chain(kind: Keyword) -> Option<Keyword> {
    match kind {
        Keyword::System => Some(Keyword::Container),
        Keyword::Container => Some(Keyword::Component),
        Keyword::Component => Some(Keyword::Code),
        _ => None,
    }
}
