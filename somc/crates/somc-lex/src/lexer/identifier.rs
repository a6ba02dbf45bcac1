//! Identifier, primitive and keyword lexing.

use crate::chars::{is_ident_continue, is_ident_start};
use crate::token::{Token, TokenKind, PRIMITIVE};
use crate::Lexer;

/// Length in bytes of a complete `name:` segment at the start of `rest`.
///
/// Returns `None` unless `rest` starts with a letter, continues with
/// identifier characters, and ends the name with a `:` that is not the
/// start of `:=`.
fn keyword_segment_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !is_ident_start(char::from(*bytes.first()?)) {
        return None;
    }

    let name_len = 1 + bytes[1..]
        .iter()
        .take_while(|&&b| is_ident_continue(char::from(b)))
        .count();

    match (bytes.get(name_len), bytes.get(name_len + 1)) {
        (Some(b':'), Some(b'=')) => None,
        (Some(b':'), _) => Some(name_len + 1),
        _ => None,
    }
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier, the `primitive` marker, a keyword, or a keyword
    /// sequence.
    ///
    /// The whole name is scanned before it is compared with `primitive`, so
    /// `primitiveFoo` stays an identifier. A `:` right after the name makes
    /// it a keyword unless it starts `:=`. Further complete `name:`
    /// segments with no whitespace in between extend it to a keyword
    /// sequence.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.advance();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        if self.cursor.current_char() == ':' && self.cursor.peek() != '=' {
            self.cursor.advance();

            let mut kind = TokenKind::Keyword;
            while let Some(len) = keyword_segment_len(self.cursor.remaining()) {
                // Segments are ASCII, so bytes and characters coincide.
                self.cursor.advance_n(len);
                kind = TokenKind::KeywordSequence;
            }
            return self.token_from_source(kind);
        }

        let kind = if self.cursor.slice_from(self.token_start) == PRIMITIVE {
            TokenKind::Primitive
        } else {
            TokenKind::Identifier
        };
        self.token_from_source(kind)
    }
}
