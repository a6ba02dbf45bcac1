//! Minus and separator lexing.

use crate::token::{Token, TokenKind, SEPARATOR_MIN_LEN};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a dash.
    ///
    /// A run of at least [`SEPARATOR_MIN_LEN`] dashes is consumed whole as a
    /// separator. A shorter run yields a single minus, leaving the rest of
    /// the run for the following calls.
    pub(crate) fn lex_dash(&mut self) -> Token {
        let run = self
            .cursor
            .remaining()
            .bytes()
            .take_while(|&b| b == b'-')
            .count();

        if run >= SEPARATOR_MIN_LEN {
            self.cursor.advance_n(run);
            self.token_from_source(TokenKind::Separator)
        } else {
            self.cursor.advance();
            self.token_from_source(TokenKind::Minus)
        }
    }
}
