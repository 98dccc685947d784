//! # archrule
//!
//! Compiler front-end and translator for a small declarative
//! architecture-rule language: lexer and recursive-descent parser produce a
//! typed AST, which either backend then walks independently.
//!
//! ## Module structure (dependency order)
//!
//! ```text
//! backend   → JSON and Cypher output, each a tree walk over `ast`
//!   ↓
//! parser    → Logos lexer, recursive-descent parser
//!   ↓
//! ast       → Rule/Block/Expr/Statement node types
//!   ↓
//! error     → ParseError, TranslateError, CompileError
//!   ↓
//! base      → Span, the one primitive shared by lexer and parser
//! ```

/// Foundation types: byte-offset spans.
pub mod base;

/// Lex/parse/translate error types.
pub mod error;

/// The typed AST: `Rule`, `Block`, `Expr`, and the statement categories.
pub mod ast;

/// Logos lexer and recursive-descent parser.
pub mod parser;

/// JSON and Cypher output backends.
pub mod backend;

pub use error::{CompileError, ParseError, TranslateError};

/// Compiles `source` to its JSON AST dump (§4.5).
///
/// Parse failures surface as [`CompileError::Parse`]; the JSON backend
/// itself cannot fail (every AST node this parser produces is total under
/// serialization).
pub fn compile_to_json(source: &str) -> Result<String, CompileError> {
    tracing::debug!(bytes = source.len(), "compile_to_json: parsing rule");
    let rule = parser::parse_rule(source)?;
    tracing::trace!(rule = %rule.name, "compile_to_json: parsed, serializing");
    let value = backend::json::serialize_rule(&rule);
    Ok(serde_json::to_string(&value).expect("serde_json::Value serialization is infallible"))
}

/// Compiles `source` to a Cypher query (§4.6).
pub fn compile_to_cypher(source: &str) -> Result<String, CompileError> {
    tracing::debug!(bytes = source.len(), "compile_to_cypher: parsing rule");
    let rule = parser::parse_rule(source)?;
    tracing::trace!(rule = %rule.name, "compile_to_cypher: parsed, translating");
    let cypher = backend::cypher::translate_rule(&rule)?;
    tracing::debug!(rule = %rule.name, "compile_to_cypher: translation succeeded");
    Ok(cypher)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_to_json_round_trips_a_minimal_rule() {
        let json = compile_to_json("rule r { x = 1 }").unwrap();
        assert!(json.contains("\"type\":\"rule\""));
        assert!(json.contains("\"name\":\"r\""));
    }

    #[test]
    fn compile_to_cypher_rejects_unbound_variables() {
        let err = compile_to_cypher("rule r { x = y }").unwrap_err();
        assert!(matches!(err, CompileError::Translate(TranslateError::UnboundVariable(_))));
    }

    #[test]
    fn compile_to_cypher_rejects_syntax_errors() {
        let err = compile_to_cypher("rule r { x = }").unwrap_err();
        assert!(matches!(err, CompileError::Parse(_)));
    }

    #[test]
    fn compile_to_json_never_errors_on_a_well_formed_rule() {
        let source = "rule r { all { s in system: exist { c in s: c.tech in [\"Go\"] } } }";
        assert!(compile_to_json(source).is_ok());
    }
}
