//! Expression grammar (§4.2), weakest to strongest precedence: ternary,
//! logical, compare, additive, multiplicative, unary, postfix access, atom.

use super::cursor::Parser;
use crate::ast::{BinaryOp, Expr, Keyword, Literal, UnaryOp};
use crate::error::ParseError;
use crate::lexer::TokenKind;
use smol_str::SmolStr;

impl<'src> Parser<'src> {
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        self.parse_ternary()
    }

    fn parse_ternary(&mut self) -> Result<Expr, ParseError> {
        let cond = self.parse_logical()?;
        if self.at(TokenKind::Question) {
            self.bump();
            // The `then` branch is a fresh expression (full recursion back
            // to the top of the grammar); the `else` branch continues at
            // the logical level, matching the infix operand on both sides
            // of the ternary in the source grammar.
            let then_branch = self.parse_expr()?;
            self.expect(TokenKind::Colon)?;
            let else_branch = self.parse_logical()?;
            Ok(Expr::Ternary {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            })
        } else {
            Ok(cond)
        }
    }

    fn parse_logical(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_compare()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::And) => BinaryOp::And,
                Some(TokenKind::Or) => BinaryOp::Or,
                Some(TokenKind::Xor) => BinaryOp::Xor,
                _ => break,
            };
            self.bump();
            let right = self.parse_compare()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_compare(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::EqEq) => BinaryOp::Eq,
                Some(TokenKind::NotEq) => BinaryOp::NotEq,
                Some(TokenKind::Less) => BinaryOp::Less,
                Some(TokenKind::Greater) => BinaryOp::Greater,
                Some(TokenKind::LessEq) => BinaryOp::LessEq,
                Some(TokenKind::GreaterEq) => BinaryOp::GreaterEq,
                Some(TokenKind::In) => BinaryOp::In,
                Some(TokenKind::Not) if self.peek_nth_kind(1) == Some(TokenKind::In) => {
                    self.bump();
                    BinaryOp::NotIn
                }
                _ => break,
            };
            self.bump();
            let right = self.parse_additive()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Plus) => BinaryOp::Plus,
                Some(TokenKind::Minus) => BinaryOp::Minus,
                _ => break,
            };
            self.bump();
            let right = self.parse_multiplicative()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek_kind() {
                Some(TokenKind::Star) => BinaryOp::Mult,
                Some(TokenKind::Slash) => BinaryOp::Div,
                _ => break,
            };
            self.bump();
            let right = self.parse_unary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.at(TokenKind::Not) {
            self.bump();
            let operand = self.parse_unary()?;
            Ok(Expr::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            })
        } else {
            self.parse_postfix()
        }
    }

    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_atom()?;
        loop {
            let safe = match self.peek_kind() {
                Some(TokenKind::Dot) => false,
                Some(TokenKind::DotBang) => true,
                _ => break,
            };
            self.bump();
            let prop = self.expect(TokenKind::Ident)?;
            expr = Expr::Access {
                operand: Box::new(expr),
                prop: SmolStr::new(prop.text),
                safe,
            };
        }
        Ok(expr)
    }

    fn parse_atom(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::LParen) => {
                self.bump();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            Some(TokenKind::System) => {
                self.bump();
                Ok(Expr::Keyword(Keyword::System))
            }
            Some(TokenKind::Container) => {
                self.bump();
                Ok(Expr::Keyword(Keyword::Container))
            }
            Some(TokenKind::Component) => {
                self.bump();
                Ok(Expr::Keyword(Keyword::Component))
            }
            Some(TokenKind::Code) => {
                self.bump();
                Ok(Expr::Keyword(Keyword::Code))
            }
            Some(TokenKind::Deploy) => {
                self.bump();
                Ok(Expr::Keyword(Keyword::Deploy))
            }
            Some(TokenKind::Infrastructure) => {
                self.bump();
                Ok(Expr::Keyword(Keyword::Infrastructure))
            }
            Some(TokenKind::None) => {
                self.bump();
                Ok(Expr::Keyword(Keyword::None))
            }
            Some(TokenKind::String) => {
                let tok = self.bump();
                Ok(Expr::Literal(Literal::String(strip_quotes(tok.text))))
            }
            Some(TokenKind::Integer) => {
                let tok = self.bump();
                let value = tok
                    .text
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidInteger {
                        text: tok.text.to_string(),
                        span: tok.span,
                    })?;
                Ok(Expr::Literal(Literal::Integer(value)))
            }
            Some(TokenKind::True) => {
                self.bump();
                Ok(Expr::Literal(Literal::Boolean(true)))
            }
            Some(TokenKind::False) => {
                self.bump();
                Ok(Expr::Literal(Literal::Boolean(false)))
            }
            Some(TokenKind::LBracket) => self.parse_set(),
            Some(TokenKind::Ident) => {
                let name = self.bump().text;
                if self.at(TokenKind::LParen) {
                    let args = self.parse_call_args()?;
                    Ok(Expr::Call {
                        name: SmolStr::new(name),
                        args,
                    })
                } else {
                    Ok(Expr::Variable(SmolStr::new(name)))
                }
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_call_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.at(TokenKind::RParen) {
            args.push(self.parse_expr()?);
            while self.at(TokenKind::Comma) {
                self.bump();
                args.push(self.parse_expr()?);
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }

    fn parse_set(&mut self) -> Result<Expr, ParseError> {
        let open = self.expect(TokenKind::LBracket)?;
        let mut items = Vec::new();
        if !self.at(TokenKind::RBracket) {
            items.push(self.parse_simple_literal()?);
            while self.at(TokenKind::Comma) {
                self.bump();
                items.push(self.parse_simple_literal()?);
            }
        }
        self.expect(TokenKind::RBracket)?;
        if items.is_empty() {
            return Err(ParseError::EmptySet { span: open.span });
        }
        Ok(Expr::Literal(Literal::Set(items)))
    }

    fn parse_simple_literal(&mut self) -> Result<Expr, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::String) => {
                let tok = self.bump();
                Ok(Expr::Literal(Literal::String(strip_quotes(tok.text))))
            }
            Some(TokenKind::Integer) => {
                let tok = self.bump();
                let value = tok
                    .text
                    .parse::<i64>()
                    .map_err(|_| ParseError::InvalidInteger {
                        text: tok.text.to_string(),
                        span: tok.span,
                    })?;
                Ok(Expr::Literal(Literal::Integer(value)))
            }
            Some(TokenKind::True) => {
                self.bump();
                Ok(Expr::Literal(Literal::Boolean(true)))
            }
            Some(TokenKind::False) => {
                self.bump();
                Ok(Expr::Literal(Literal::Boolean(false)))
            }
            _ => Err(self.unexpected("a string, number, or boolean literal")),
        }
    }
}

fn strip_quotes(text: &str) -> SmolStr {
    SmolStr::new(&text[1..text.len() - 1])
}
