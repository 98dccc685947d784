//! Rule grammar (§4.4): `rule` and the priority literals are soft keywords —
//! plain identifiers recognized positionally, since §4.1's reserved-word set
//! never lists them.

use super::cursor::Parser;
use crate::ast::{Priority, Rule};
use crate::error::ParseError;
use crate::lexer::{tokenize, TokenKind};
use smol_str::SmolStr;

/// Parses a single rule declaration, the only top-level production this
/// grammar has.
pub fn parse_rule(source: &str) -> Result<Rule, ParseError> {
    let tokens = tokenize(source)?;
    tracing::trace!(tokens = tokens.len(), "tokenized rule source");
    let mut parser = Parser::new(tokens);
    let rule = parser.parse_rule_decl().inspect_err(|err| {
        tracing::warn!(%err, "rule parse failed");
    })?;
    if !parser.at_eof() {
        return Err(ParseError::TrailingContent {
            span: parser.current_span(),
        });
    }
    Ok(rule)
}

impl<'src> Parser<'src> {
    fn parse_rule_decl(&mut self) -> Result<Rule, ParseError> {
        self.expect_word("rule")?;
        let name = self.expect(TokenKind::Ident)?;
        self.expect(TokenKind::LBrace)?;

        let mut description = String::new();
        if self.at(TokenKind::Description) {
            self.bump();
            self.expect(TokenKind::Colon)?;
            let text = self.expect(TokenKind::String)?;
            description = text.text[1..text.text.len() - 1].to_string();
            self.expect(TokenKind::Semi)?;
        }

        let mut priority = Priority::default();
        if self.at(TokenKind::Priority) {
            self.bump();
            self.expect(TokenKind::Colon)?;
            let tok = self.expect(TokenKind::Ident)?;
            priority = match tok.text {
                "Error" => Priority::Error,
                "Info" => Priority::Info,
                "Warn" => Priority::Warn,
                other => {
                    return Err(ParseError::UnknownPriority {
                        text: other.to_string(),
                        span: tok.span,
                    })
                }
            };
            self.expect(TokenKind::Semi)?;
        }

        let body = self.parse_block()?;
        self.expect(TokenKind::RBrace)?;

        Ok(Rule {
            name: SmolStr::new(name.text),
            description,
            priority,
            body,
        })
    }
}
