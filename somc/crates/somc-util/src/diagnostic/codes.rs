//! Diagnostic codes for categorizing front-end errors and warnings.
//!
//! # Examples
//!
//! ```
//! use somc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_ILLEGAL_CHAR;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "E1001");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}`: `E` for errors, `W` for
/// warnings, and a number padded to four digits. The thousands digit names
/// the phase (`1xxx` lexer, `2xxx` parser).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001", "W1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Lexer - Character that starts no token
    pub const E_LEXER_ILLEGAL_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - String literal reaching end of input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);

    /// E2001: Parser - Lexical error surfaced through the token stream
    pub const E_PARSER_LEXICAL: Self = Self::new("E", 2001);

    /// W1001: Lexer - Escape sequence with no known replacement
    pub const W_LEXER_UNKNOWN_ESCAPE: Self = Self::new("W", 1001);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
