//! Numeric literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or double literal.
    ///
    /// Only one decimal point is recognized, and only when a digit follows
    /// it. A second `.` ends the literal, so `1.2.3` is a double, a period
    /// and an integer.
    pub(crate) fn lex_number(&mut self) -> Token {
        let mut kind = TokenKind::Integer;

        loop {
            match self.cursor.peek() {
                c if c.is_ascii_digit() => self.cursor.advance(),
                '.' if kind == TokenKind::Integer && self.cursor.peek2().is_ascii_digit() => {
                    self.cursor.advance();
                    kind = TokenKind::Double;
                },
                _ => break,
            }
        }
        // The loop stops on the last digit.
        self.cursor.advance();

        self.token_from_source(kind)
    }
}
