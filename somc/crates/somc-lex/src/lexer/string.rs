//! String literal lexing.

use somc_util::{DiagnosticCode, Span};

use crate::token::{Token, TokenKind};
use crate::Lexer;

/// Maps an escape character to the text it stands for inside a literal.
///
/// `\'` keeps its backslash so the resolved literal still reads as one
/// quoted string. `\\` collapses to one backslash, so a body ending in it
/// no longer closes when the literal is lexed again.
fn escape_replacement(c: char) -> Option<&'static str> {
    match c {
        't' => Some("\t"),
        'b' => Some("\u{8}"),
        'n' => Some("\n"),
        'r' => Some("\r"),
        'f' => Some("\u{c}"),
        '\'' => Some("\\'"),
        '\\' => Some("\\"),
        _ => None,
    }
}

const KNOWN_ESCAPES_HELP: &str = r"known escapes are \t \b \n \r \f \' and \\";

impl<'a> Lexer<'a> {
    /// Lexes a single-quoted string literal.
    ///
    /// The literal keeps both quotes and has escapes resolved. Reaching end
    /// of input before the closing quote yields an unterminated string.
    pub(crate) fn lex_string(&mut self) -> Token {
        let mut literal = String::from('\'');
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                let diagnostic = self
                    .error_at_token(
                        DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                        "unterminated string literal".to_string(),
                    )
                    .help("close the string with `'`");
                self.emit(diagnostic);
                return self.token(TokenKind::UnterminatedString, literal);
            }

            match self.cursor.current_char() {
                '\'' => {
                    self.cursor.advance();
                    literal.push('\'');
                    return self.token(TokenKind::String, literal);
                },
                '\\' => self.lex_escape(&mut literal),
                c => {
                    self.cursor.advance();
                    literal.push(c);
                },
            }
        }
    }

    /// Lexes an escape sequence with the cursor on its backslash.
    ///
    /// Unknown escapes pass through unchanged with a warning. A backslash at
    /// end of input is kept and leaves the string unterminated.
    fn lex_escape(&mut self, literal: &mut String) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();
        self.cursor.advance();

        if self.cursor.is_at_end() {
            literal.push('\\');
            return;
        }

        let escaped = self.cursor.current_char();
        self.cursor.advance();

        match escape_replacement(escaped) {
            Some(replacement) => literal.push_str(replacement),
            None => {
                literal.push('\\');
                literal.push(escaped);
                let diagnostic = self
                    .warning_at(
                        DiagnosticCode::W_LEXER_UNKNOWN_ESCAPE,
                        format!("unknown escape sequence '\\{}'", escaped),
                        Span::new(start, self.cursor.position(), line, column),
                    )
                    .note("the backslash and the character are kept in the literal")
                    .help(KNOWN_ESCAPES_HELP);
                self.emit(diagnostic);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use somc_util::{Handler, Level};

    fn lex_one(source: &str) -> (Token, Handler) {
        let handler = Handler::new();
        let token = Lexer::new(source, &handler).next_token();
        (token, handler)
    }

    #[test]
    fn test_simple_string() {
        let (token, handler) = lex_one("'hello'");
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.literal, "'hello'");
        assert_eq!(token.span.len(), 7);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_empty_string() {
        let (token, _) = lex_one("''");
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.literal, "''");
    }

    #[test]
    fn test_escaped_quote_keeps_backslash() {
        let (token, _) = lex_one(r"'hello\''");
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.literal, r"'hello\''");
        assert_eq!(token.span.end, 9);
    }

    #[test]
    fn test_control_escapes_resolved() {
        let (token, handler) = lex_one(r"'\t\b\n\r\f\\'");
        assert_eq!(token.literal, "'\t\u{8}\n\r\u{c}\\'");
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_escaped_backslash_before_quote_does_not_survive_relexing() {
        let handler = Handler::new();
        let first: Vec<Token> = Lexer::new(r"'a\\' x", &handler).collect();
        assert_eq!(
            first.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::String, TokenKind::Identifier]
        );
        assert_eq!(first[0].literal, r"'a\'");
        assert!(handler.diagnostics().is_empty());

        // The lone backslash now escapes the closing quote.
        let joined = format!("{} {}", first[0].literal, first[1].literal);
        let second: Vec<Token> = Lexer::new(&joined, &Handler::new()).collect();
        assert_eq!(
            second.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![TokenKind::UnterminatedString]
        );
    }

    #[test]
    fn test_escaped_backslash_mid_string_relexes_as_string() {
        let (token, _) = lex_one(r"'a\\q'");
        assert_eq!(token.literal, r"'a\q'");

        let (again, handler) = lex_one(&token.literal);
        assert_eq!(again.kind, TokenKind::String);
        assert_eq!(again.literal, r"'a\q'");
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_unknown_escape_passes_through_with_warning() {
        let (token, handler) = lex_one(r"'a\qb'");
        assert_eq!(token.kind, TokenKind::String);
        assert_eq!(token.literal, r"'a\qb'");

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].level, Level::Warning);
        assert_eq!(diags[0].code, Some(DiagnosticCode::W_LEXER_UNKNOWN_ESCAPE));
        assert_eq!((diags[0].span.start, diags[0].span.end), (2, 4));
        assert_eq!(diags[0].span.column, 3);
        assert_eq!(
            diags[0].notes,
            vec!["the backslash and the character are kept in the literal"]
        );
        assert_eq!(diags[0].helps, vec![KNOWN_ESCAPES_HELP]);
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_unterminated_string() {
        let (token, handler) = lex_one("'abc");
        assert_eq!(token.kind, TokenKind::UnterminatedString);
        assert_eq!(token.literal, "'abc");
        assert_eq!((token.span.start, token.span.end), (0, 4));

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].code,
            Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
        );
        assert_eq!(diags[0].helps, vec!["close the string with `'`"]);
    }

    #[test]
    fn test_trailing_backslash_is_unterminated() {
        let (token, handler) = lex_one("'abc\\");
        assert_eq!(token.kind, TokenKind::UnterminatedString);
        assert_eq!(token.literal, "'abc\\");
        assert_eq!(handler.error_count(), 1);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let (token, _) = lex_one(r"'it\'s");
        assert_eq!(token.kind, TokenKind::UnterminatedString);
    }

    #[test]
    fn test_multiline_string_advances_line() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("'a\nb' x", &handler);
        let string = lexer.next_token();
        assert_eq!(string.literal, "'a\nb'");
        let x = lexer.next_token();
        assert_eq!((x.span.line, x.span.column), (2, 4));
    }

    #[test]
    fn test_escape_table() {
        assert_eq!(escape_replacement('n'), Some("\n"));
        assert_eq!(escape_replacement('\''), Some("\\'"));
        assert_eq!(escape_replacement('q'), None);
        assert_eq!(escape_replacement('0'), None);
    }
}
