//! Expression nodes (§3.1, §4.2).

use smol_str::SmolStr;

/// One of the six node-universe keywords, or `none` (the empty set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    System,
    Container,
    Component,
    Code,
    Deploy,
    Infrastructure,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer(i64),
    String(SmolStr),
    Boolean(bool),
    /// Restricted at parse time to simple (non-recursive) literal elements.
    Set(Vec<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Plus,
    Minus,
    Mult,
    Div,
    Eq,
    NotEq,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    In,
    NotIn,
    And,
    Or,
    Xor,
}

/// The only unary operator in the grammar is the `not` keyword. It is named
/// `Neg` because that is the tag the Cypher backend's operator table keys
/// off (§4.6.2: `NEG -> "-{}"`) — a naming quirk inherited unchanged from the
/// grammar this was distilled from, not a typo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Keyword(Keyword),
    Literal(Literal),
    Variable(SmolStr),
    Call {
        name: SmolStr,
        args: Vec<Expr>,
    },
    Access {
        operand: Box<Expr>,
        prop: SmolStr,
        safe: bool,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Ternary {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}
