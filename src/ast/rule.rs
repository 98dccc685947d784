//! Rule and block nodes (§3.1, §4.4) — the top of the AST.

use super::stmt::BodyStatement;
use smol_str::SmolStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Info,
    Warn,
    #[default]
    Error,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Info => "INFO",
            Priority::Warn => "WARN",
            Priority::Error => "ERROR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<BodyStatement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: SmolStr,
    pub description: String,
    pub priority: Priority,
    pub body: Block,
}
