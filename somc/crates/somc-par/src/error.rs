//! Parser error types.

use somc_lex::LexError;
use somc_util::DiagnosticCode;
use thiserror::Error;

/// Errors produced by [`Parser::parse`](crate::Parser::parse).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token stream contained one or more error tokens.
    #[error("{} lexical error(s), first: {}", .0.len(), first_message(.0))]
    Lexical(Vec<LexError>),
}

fn first_message(errors: &[LexError]) -> String {
    errors
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}

impl ParseError {
    /// Diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ParseError::Lexical(_) => DiagnosticCode::E_PARSER_LEXICAL,
        }
    }

    /// The lexical errors, in source order.
    pub fn lex_errors(&self) -> &[LexError] {
        match self {
            ParseError::Lexical(errors) => errors,
        }
    }
}

/// Result type alias for parser operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
