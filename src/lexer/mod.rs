//! Tokenizer for the rule language.
//!
//! A thin wrapper around a `logos::Lexer` that attaches byte-offset [`Span`]s
//! to each token and turns an illegal byte sequence into a [`ParseError`]
//! instead of a bare `()`.

mod token;

pub use token::TokenKind;

use crate::base::Span;
use crate::error::ParseError;
use logos::Logos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

/// Tokenizes `source` in full, stopping at the first illegal byte sequence.
///
/// The grammar has no recovery strategy (spec §4.7: halt on the first
/// unrecoverable token), so there is no point returning a partial stream —
/// callers just want the token vector or the first lex error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut lexer = TokenKind::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let span = Span::new(span.start as u32, span.end as u32);
        match result {
            Ok(kind) => tokens.push(Token {
                kind,
                text: lexer.slice(),
                span,
            }),
            Err(()) => {
                let text = lexer.slice().to_string();
                tracing::warn!(text = %text, ?span, "unrecognized byte sequence while lexing");
                return Err(ParseError::unknown_token(text, span));
            }
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_rule_header() {
        let tokens = tokenize("rule r { priority: Error; }").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Ident,
                TokenKind::LBrace,
                TokenKind::Priority,
                TokenKind::Colon,
                TokenKind::Ident,
                TokenKind::Semi,
                TokenKind::RBrace,
            ]
        );
    }

    #[test]
    fn dot_bang_takes_priority_over_dot() {
        let tokens = tokenize("a.!b").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Ident, TokenKind::DotBang, TokenKind::Ident]
        );
    }

    #[test]
    fn not_in_is_two_tokens() {
        let tokens = tokenize("a not in b").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident,
                TokenKind::Not,
                TokenKind::In,
                TokenKind::Ident
            ]
        );
    }

    #[test]
    fn integer_literal_does_not_lex_as_identifier() {
        let tokens = tokenize("42").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Integer);
    }

    #[test]
    fn unknown_byte_is_a_lex_error() {
        assert!(tokenize("a $ b").is_err());
    }
}
