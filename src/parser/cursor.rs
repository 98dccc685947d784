//! The token cursor: `at`/`bump`/`expect` helpers shared by every grammar
//! layer, generalizing the teacher's rowan-CST-builder cursor
//! (`parser/grammar/kerml_expressions/*.rs`) to build a typed AST directly
//! instead of a lossless green tree.

use crate::base::Span;
use crate::error::ParseError;
use crate::lexer::{Token, TokenKind};

pub struct Parser<'src> {
    tokens: Vec<Token<'src>>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: Vec<Token<'src>>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    pub fn peek_nth_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    pub fn peek_text(&self) -> Option<&'src str> {
        self.tokens.get(self.pos).map(|t| t.text)
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map(|t| t.span)
            .unwrap_or_else(|| {
                self.tokens
                    .last()
                    .map(|t| Span::at(t.span.end))
                    .unwrap_or_default()
            })
    }

    fn found_description(&self) -> String {
        match self.tokens.get(self.pos) {
            Some(t) => t.kind.describe().to_string(),
            None => "end of input".to_string(),
        }
    }

    /// Consumes and returns the current token unconditionally. Callers must
    /// have already checked `at`/`peek_kind` — this never returns a token of
    /// the wrong kind by construction of the call sites in this module.
    pub fn bump(&mut self) -> Token<'src> {
        let tok = self.tokens[self.pos];
        self.pos += 1;
        tok
    }

    pub fn expect(&mut self, kind: TokenKind) -> Result<Token<'src>, ParseError> {
        if self.at(kind) {
            Ok(self.bump())
        } else if self.at_eof() {
            Err(ParseError::UnexpectedEof {
                expected: kind.describe().to_string(),
            })
        } else {
            Err(ParseError::UnexpectedToken {
                expected: kind.describe().to_string(),
                found: self.found_description(),
                span: self.current_span(),
            })
        }
    }

    /// Consumes an `Ident` token, additionally requiring its text to equal
    /// `word` — used for the soft keywords (`rule`, and the priority values
    /// `Error`/`Info`/`Warn`) that the grammar singles out positionally
    /// rather than reserving outright (§4.1 never lists them).
    pub fn expect_word(&mut self, word: &str) -> Result<Token<'src>, ParseError> {
        if self.peek_kind() == Some(TokenKind::Ident) && self.peek_text() == Some(word) {
            Ok(self.bump())
        } else if self.at_eof() {
            Err(ParseError::UnexpectedEof {
                expected: format!("'{word}'"),
            })
        } else {
            Err(ParseError::UnexpectedToken {
                expected: format!("'{word}'"),
                found: self.found_description(),
                span: self.current_span(),
            })
        }
    }

    pub fn unexpected(&self, expected: &str) -> ParseError {
        if self.at_eof() {
            ParseError::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: self.found_description(),
                span: self.current_span(),
            }
        }
    }
}
