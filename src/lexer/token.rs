//! Token kinds for the rule language, lexed with `logos`.
//!
//! Reserved words (§4.1 of the rule-language grammar) get their own
//! dedicated variants so that "expected an identifier, found a reserved
//! word" falls out of ordinary token-kind mismatch instead of a second
//! lookup against a keyword table. `rule` and the priority values
//! (`Error`/`Info`/`Warn`) are deliberately *not* reserved — they are
//! recognized contextually by the parser as plain `Ident` tokens whose text
//! happens to match, the same way the source grammar leaves them out of its
//! reserved-word set.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[regex(r"[A-Za-z0-9_]+", priority = 1)]
    Ident,

    #[regex(r#""[^"]*""#)]
    String,

    #[regex(r"[0-9]+", priority = 2)]
    Integer,

    // Reserved words — higher priority than `Ident` so e.g. "not" lexes as
    // `Not`, not as a bare identifier.
    #[token("not", priority = 3)]
    Not,
    #[token("in", priority = 3)]
    In,
    #[token("or", priority = 3)]
    Or,
    #[token("and", priority = 3)]
    And,
    #[token("xor", priority = 3)]
    Xor,
    #[token("all", priority = 3)]
    All,
    #[token("exist", priority = 3)]
    Exist,
    #[token("true", priority = 3)]
    True,
    #[token("false", priority = 3)]
    False,
    #[token("if", priority = 3)]
    If,
    #[token("then", priority = 3)]
    Then,
    #[token("else", priority = 3)]
    Else,
    #[token("none", priority = 3)]
    None,
    #[token("except", priority = 3)]
    Except,
    #[token("priority", priority = 3)]
    Priority,
    #[token("description", priority = 3)]
    Description,
    #[token("system", priority = 3)]
    System,
    #[token("container", priority = 3)]
    Container,
    #[token("component", priority = 3)]
    Component,
    #[token("code", priority = 3)]
    Code,
    #[token("deploy", priority = 3)]
    Deploy,
    #[token("infrastructure", priority = 3)]
    Infrastructure,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(";")]
    Semi,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".!")]
    DotBang,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,

    #[token("==")]
    EqEq,
    #[token("/=")]
    NotEq,
    #[token("<=")]
    LessEq,
    #[token(">=")]
    GreaterEq,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
}

impl TokenKind {
    /// A human-readable name used in parse-error messages.
    pub fn describe(self) -> &'static str {
        use TokenKind::*;
        match self {
            Ident => "an identifier",
            String => "a string literal",
            Integer => "an integer literal",
            Not => "'not'",
            In => "'in'",
            Or => "'or'",
            And => "'and'",
            Xor => "'xor'",
            All => "'all'",
            Exist => "'exist'",
            True => "'true'",
            False => "'false'",
            If => "'if'",
            Then => "'then'",
            Else => "'else'",
            None => "'none'",
            Except => "'except'",
            Priority => "'priority'",
            Description => "'description'",
            System => "'system'",
            Container => "'container'",
            Component => "'component'",
            Code => "'code'",
            Deploy => "'deploy'",
            Infrastructure => "'infrastructure'",
            LBrace => "'{'",
            RBrace => "'}'",
            LBracket => "'['",
            RBracket => "']'",
            LParen => "'('",
            RParen => "')'",
            Semi => "';'",
            Colon => "':'",
            Comma => "','",
            DotBang => "'.!'",
            Dot => "'.'",
            Question => "'?'",
            EqEq => "'=='",
            NotEq => "'/='",
            LessEq => "'<='",
            GreaterEq => "'>='",
            Less => "'<'",
            Greater => "'>'",
            Eq => "'='",
            Plus => "'+'",
            Minus => "'-'",
            Star => "'*'",
            Slash => "'/'",
        }
    }

    /// Whether this token kind is one of the reserved words listed in §4.1
    /// (i.e. not usable as a plain identifier).
    pub fn is_reserved_word(self) -> bool {
        !matches!(self, TokenKind::Ident)
    }
}
