//! Lexical error values.

use somc_util::DiagnosticCode;
use thiserror::Error;

/// A structured lexical error: what went wrong and at which byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("illegal character {ch:?} at byte {offset}")]
    IllegalCharacter {
        /// The offending character.
        ch: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// A string literal that reaches end of input before its closing quote.
    #[error("unterminated string literal starting at byte {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },
}

impl LexError {
    /// Byte offset where the error starts.
    pub fn offset(&self) -> usize {
        match self {
            LexError::IllegalCharacter { offset, .. } | LexError::UnterminatedString { offset } => {
                *offset
            },
        }
    }

    /// Diagnostic code reported for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::IllegalCharacter { .. } => DiagnosticCode::E_LEXER_ILLEGAL_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
        }
    }
}

/// Result type alias for lexer operations.
pub type LexResult<T> = std::result::Result<T, LexError>;
