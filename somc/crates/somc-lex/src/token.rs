//! Token definitions for the SOM lexer.

use std::fmt;

use somc_util::Span;

use crate::error::LexError;

/// The reserved word marking a natively implemented method body.
pub const PRIMITIVE: &str = "primitive";

/// Minimum number of consecutive dashes that form a separator.
pub const SEPARATOR_MIN_LEN: usize = 4;

/// The kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character operators and punctuation
    /// `=`
    Equal,
    /// `|`
    Or,
    /// `~`
    Not,
    /// `&`
    And,
    /// `*`
    Star,
    /// `/`
    Div,
    /// `\`
    Mod,
    /// `+`
    Plus,
    /// `>`
    More,
    /// `<`
    Less,
    /// `@`
    At,
    /// `%`
    Percent,
    /// `,`
    Comma,
    /// `[`
    NewBlock,
    /// `]`
    EndBlock,
    /// `(`
    NewTerm,
    /// `)`
    EndTerm,
    /// `#`
    Pound,
    /// `^`
    Exit,
    /// `.`
    Period,

    // Lookahead-dependent punctuation
    /// `:` not followed by `=`
    Colon,
    /// `:=`
    Assign,
    /// A single `-`
    Minus,
    /// A run of four or more dashes
    Separator,

    // Literals and names
    /// A quoted string with escapes resolved
    String,
    /// A run of decimal digits
    Integer,
    /// Digits, one `.`, digits
    Double,
    /// A name starting with a letter
    Identifier,
    /// The reserved word `primitive`
    Primitive,
    /// A name followed by one `:`
    Keyword,
    /// Two or more chained keyword segments
    KeywordSequence,

    // Errors and end of input
    /// A character that starts no token
    Illegal,
    /// A string literal that reaches end of input
    UnterminatedString,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the upper-case display name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use somc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::KeywordSequence.name(), "KEYWORD_SEQUENCE");
    /// assert_eq!(TokenKind::NewTerm.name(), "NEWTERM");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Equal => "EQUAL",
            TokenKind::Or => "OR",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Star => "STAR",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::Plus => "PLUS",
            TokenKind::More => "MORE",
            TokenKind::Less => "LESS",
            TokenKind::At => "AT",
            TokenKind::Percent => "PERCENT",
            TokenKind::Comma => "COMMA",
            TokenKind::NewBlock => "NEWBLOCK",
            TokenKind::EndBlock => "ENDBLOCK",
            TokenKind::NewTerm => "NEWTERM",
            TokenKind::EndTerm => "ENDTERM",
            TokenKind::Pound => "POUND",
            TokenKind::Exit => "EXIT",
            TokenKind::Period => "PERIOD",
            TokenKind::Colon => "COLON",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Minus => "MINUS",
            TokenKind::Separator => "SEPARATOR",
            TokenKind::String => "STRING",
            TokenKind::Integer => "INTEGER",
            TokenKind::Double => "DOUBLE",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Primitive => "PRIMITIVE",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::KeywordSequence => "KEYWORD_SEQUENCE",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::UnterminatedString => "UNTERMINATED_STRING",
            TokenKind::Eof => "EOF",
        }
    }

    /// Looks up the kind of a single-character token.
    ///
    /// `:` and `-` are not listed because they need lookahead.
    ///
    /// # Example
    ///
    /// ```
    /// use somc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_punctuation('^'), Some(TokenKind::Exit));
    /// assert_eq!(TokenKind::from_punctuation(':'), None);
    /// ```
    pub fn from_punctuation(c: char) -> Option<TokenKind> {
        let kind = match c {
            '=' => TokenKind::Equal,
            '|' => TokenKind::Or,
            '~' => TokenKind::Not,
            '&' => TokenKind::And,
            '*' => TokenKind::Star,
            '/' => TokenKind::Div,
            '\\' => TokenKind::Mod,
            '+' => TokenKind::Plus,
            '>' => TokenKind::More,
            '<' => TokenKind::Less,
            '@' => TokenKind::At,
            '%' => TokenKind::Percent,
            ',' => TokenKind::Comma,
            '[' => TokenKind::NewBlock,
            ']' => TokenKind::EndBlock,
            '(' => TokenKind::NewTerm,
            ')' => TokenKind::EndTerm,
            '#' => TokenKind::Pound,
            '^' => TokenKind::Exit,
            '.' => TokenKind::Period,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for kinds that signal malformed input.
    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, TokenKind::Illegal | TokenKind::UnterminatedString)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token: its kind, the text it stands for, and where it came from.
///
/// For strings the literal keeps both quotes and has escapes resolved, so it
/// can differ from the source slice under `span`. For every other kind the
/// literal is exactly the source slice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Text the token represents.
    pub literal: String,
    /// Source location of the consumed lexeme.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            literal: literal.into(),
            span,
        }
    }

    /// Returns true if this token marks the end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true if this token signals malformed input.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind.is_error()
    }

    /// Converts an error-kind token into the matching [`LexError`].
    ///
    /// Returns `None` for well-formed tokens.
    ///
    /// # Example
    ///
    /// ```
    /// use somc_lex::{LexError, Token, TokenKind};
    /// use somc_util::Span;
    ///
    /// let token = Token::new(TokenKind::Illegal, "$", Span::new(4, 5, 1, 5));
    /// assert_eq!(
    ///     token.to_error(),
    ///     Some(LexError::IllegalCharacter { ch: '$', offset: 4 })
    /// );
    /// ```
    pub fn to_error(&self) -> Option<LexError> {
        match self.kind {
            TokenKind::Illegal => Some(LexError::IllegalCharacter {
                ch: self.literal.chars().next().unwrap_or('\0'),
                offset: self.span.start,
            }),
            TokenKind::UnterminatedString => Some(LexError::UnterminatedString {
                offset: self.span.start,
            }),
            _ => None,
        }
    }
}

/// Formats as `KIND literal`, or just `KIND` when the literal is empty.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literal.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {}", self.kind, self.literal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_punctuation_covers_all_single_chars() {
        let table = "=|~&*/\\+><@%,[]()#^.";
        assert_eq!(table.chars().count(), 20);
        for c in table.chars() {
            assert!(TokenKind::from_punctuation(c).is_some(), "{:?}", c);
        }
        assert_eq!(TokenKind::from_punctuation('-'), None);
        assert_eq!(TokenKind::from_punctuation('\''), None);
        assert_eq!(TokenKind::from_punctuation('a'), None);
    }

    #[test]
    fn test_error_kinds() {
        assert!(TokenKind::Illegal.is_error());
        assert!(TokenKind::UnterminatedString.is_error());
        assert!(!TokenKind::Eof.is_error());
        assert!(!TokenKind::String.is_error());
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::Keyword, "at:", Span::new(0, 3, 1, 1));
        assert_eq!(token.to_string(), "KEYWORD at:");

        let eof = Token::new(TokenKind::Eof, "", Span::point(3, 1, 4));
        assert_eq!(eof.to_string(), "EOF");
    }

    #[test]
    fn test_to_error() {
        let ok = Token::new(TokenKind::Integer, "12", Span::new(0, 2, 1, 1));
        assert_eq!(ok.to_error(), None);

        let bad = Token::new(TokenKind::UnterminatedString, "'ab", Span::new(7, 10, 1, 8));
        assert_eq!(bad.to_error(), Some(LexError::UnterminatedString { offset: 7 }));
    }

    #[test]
    fn test_illegal_multibyte_literal() {
        let token = Token::new(TokenKind::Illegal, "€", Span::new(2, 5, 1, 3));
        assert_eq!(
            token.to_error(),
            Some(LexError::IllegalCharacter { ch: '€', offset: 2 })
        );
    }
}
