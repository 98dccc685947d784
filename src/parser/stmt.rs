//! Statement grammar (§4.3): blocks, body statements, quantifiers,
//! conditionals, and the predicate dispatch between them.
//!
//! The dispatch this grammar needs never requires real backtracking: `all`,
//! `exist`, and `if` are reserved words, so they can never start an
//! expression, which means a one-token lookahead is enough to tell a nested
//! `BaseStatement` apart from a plain expression, and a `FilteredStatement`
//! is just "parse an expression, then see if a `:` follows it" — `:` is not
//! a valid expression-continuation token, so no expression parse ever
//! swallows it by accident.

use super::cursor::Parser;
use crate::ast::{
    Assignment, BaseStatement, Block, BodyStatement, Conditional, Except, FilteredStatement,
    Predicate, Quantifier, QuantifierKind,
};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use smol_str::SmolStr;

impl<'src> Parser<'src> {
    pub fn parse_block(&mut self) -> Result<Block, ParseError> {
        let mut statements = vec![self.parse_body_statement()?];
        while self.at(TokenKind::Semi) {
            self.bump();
            statements.push(self.parse_body_statement()?);
        }
        Ok(Block { statements })
    }

    fn parse_body_statement(&mut self) -> Result<BodyStatement, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Except) => {
                self.bump();
                let inner = self.parse_quantifier()?;
                Ok(BodyStatement::Except(Except { inner }))
            }
            Some(TokenKind::All) | Some(TokenKind::Exist) => {
                Ok(BodyStatement::Quantifier(self.parse_quantifier()?))
            }
            _ => {
                let name = self.expect(TokenKind::Ident)?;
                self.expect(TokenKind::Eq)?;
                let value = self.parse_expr()?;
                Ok(BodyStatement::Assignment(Assignment {
                    name: SmolStr::new(name.text),
                    value,
                }))
            }
        }
    }

    fn parse_quantifier(&mut self) -> Result<Quantifier, ParseError> {
        let kind = match self.peek_kind() {
            Some(TokenKind::All) => QuantifierKind::All,
            Some(TokenKind::Exist) => QuantifierKind::Any,
            _ => return Err(self.unexpected("'all' or 'exist'")),
        };
        self.bump();
        self.expect(TokenKind::LBrace)?;

        let mut identifiers = vec![SmolStr::new(self.expect(TokenKind::Ident)?.text)];
        while self.at(TokenKind::Comma) {
            self.bump();
            identifiers.push(SmolStr::new(self.expect(TokenKind::Ident)?.text));
        }

        self.expect(TokenKind::In)?;
        let source = self.parse_expr()?;
        self.expect(TokenKind::Colon)?;
        let predicate = self.parse_predicate()?;
        self.expect(TokenKind::RBrace)?;

        Ok(Quantifier {
            kind,
            identifiers,
            source,
            predicate: Box::new(predicate),
        })
    }

    fn parse_predicate(&mut self) -> Result<Predicate, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::If) => Ok(Predicate::Base(BaseStatement::Conditional(
                self.parse_conditional()?,
            ))),
            Some(TokenKind::All) | Some(TokenKind::Exist) => Ok(Predicate::Base(
                BaseStatement::Quantifier(self.parse_quantifier()?),
            )),
            _ => {
                let leading = self.parse_expr()?;
                if self.at(TokenKind::Colon) {
                    self.bump();
                    let inner = self.parse_quantifier()?;
                    Ok(Predicate::Filtered(FilteredStatement { leading, inner }))
                } else {
                    Ok(Predicate::Expression(leading))
                }
            }
        }
    }

    fn parse_conditional(&mut self) -> Result<Conditional, ParseError> {
        self.expect(TokenKind::If)?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::Then)?;
        let then_branch = Box::new(self.parse_predicate()?);
        if self.at(TokenKind::Else) {
            self.bump();
            let else_branch = Box::new(self.parse_predicate()?);
            Ok(Conditional::IfThenElse {
                cond,
                then_branch,
                else_branch,
            })
        } else {
            Ok(Conditional::IfThen { cond, then_branch })
        }
    }
}
