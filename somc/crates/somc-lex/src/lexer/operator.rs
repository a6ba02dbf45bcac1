//! Colon and assignment lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `:=` as an assignment, or a lone `:` as a colon.
    pub(crate) fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.token_from_source(TokenKind::Assign)
        } else {
            self.token_from_source(TokenKind::Colon)
        }
    }
}
