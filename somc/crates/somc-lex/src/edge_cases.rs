//! Edge case tests for somc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, LexError, Token, TokenKind};
    use somc_util::{DiagnosticCode, Handler};

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::new(source, &handler).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== END OF INPUT ====================

    #[test]
    fn test_edge_empty_source_is_eof_first() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("", &handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_edge_eof_span_at_source_len() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("a\n  ", &handler);
        lexer.next_token();
        let eof = lexer.next_token();
        assert_eq!(eof.span.start, 4);
        assert!(eof.span.is_empty());
        assert_eq!((eof.span.line, eof.span.column), (2, 3));
    }

    #[test]
    fn test_edge_nul_is_illegal_not_eof() {
        let t = lex_all("a\0b");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1].kind, TokenKind::Illegal);
        assert_eq!(t[1].literal, "\0");
        assert_eq!(t[2].literal, "b");
    }

    // ==================== ILLEGAL INPUT ====================

    #[test]
    fn test_edge_every_illegal_ascii_char() {
        for c in ['!', '$', '?', ';', '`', '{', '}', '"', '_'] {
            let t = lex_all(&c.to_string());
            assert_eq!(t.len(), 1, "{:?}", c);
            assert_eq!(t[0].kind, TokenKind::Illegal, "{:?}", c);
        }
    }

    #[test]
    fn test_edge_other_control_chars_are_illegal() {
        assert_eq!(kinds("\u{c}"), vec![TokenKind::Illegal]);
        assert_eq!(kinds("\u{b}x"), vec![TokenKind::Illegal, TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_illegal_run_yields_one_token_each() {
        let handler = Handler::new();
        let t: Vec<_> = Lexer::new("$$$", &handler).collect();
        assert_eq!(t.len(), 3);
        assert_eq!(handler.error_count(), 3);
        let starts: Vec<_> = t.iter().map(|t| t.span.start).collect();
        assert_eq!(starts, vec![0, 1, 2]);
    }

    #[test]
    fn test_edge_non_ascii_letter_is_illegal() {
        let t = lex_all("é");
        assert_eq!(t[0].kind, TokenKind::Illegal);
        assert_eq!(t[0].literal, "é");
        assert_eq!(t[0].to_error(), Some(LexError::IllegalCharacter { ch: 'é', offset: 0 }));
    }

    // ==================== STRINGS ====================

    #[test]
    fn test_edge_lone_quote() {
        let handler = Handler::new();
        let t: Vec<_> = Lexer::new("'", &handler).collect();
        assert_eq!(t[0].kind, TokenKind::UnterminatedString);
        assert_eq!(t[0].literal, "'");
        assert_eq!(handler.diagnostics()[0].code, Some(DiagnosticCode::E_LEXER_UNTERMINATED_STRING));
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let t = lex_all("'a''b'");
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].literal, "'a'");
        assert_eq!(t[1].literal, "'b'");
    }

    #[test]
    fn test_edge_string_holds_anything() {
        let t = lex_all("'$ -- := €'");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::String);
        assert_eq!(t[0].literal, "'$ -- := €'");
    }

    #[test]
    fn test_edge_escaped_backslash_before_quote() {
        let t = lex_all(r"'a\\' x");
        assert_eq!(t[0].kind, TokenKind::String);
        assert_eq!(t[0].literal, r"'a\'");
        assert_eq!(t[1].literal, "x");
    }

    #[test]
    fn test_edge_unknown_escape_multibyte() {
        let handler = Handler::new();
        let t: Vec<_> = Lexer::new("'\\é'", &handler).collect();
        assert_eq!(t[0].literal, "'\\é'");
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.diagnostics()[0].span.len(), 3);
    }

    // ==================== NUMBERS ====================

    #[test]
    fn test_edge_long_integer_is_not_parsed() {
        let digits = "9".repeat(200);
        let t = lex_all(&digits);
        assert_eq!(t[0].kind, TokenKind::Integer);
        assert_eq!(t[0].literal.len(), 200);
    }

    #[test]
    fn test_edge_point_then_number() {
        assert_eq!(kinds(".5"), vec![TokenKind::Period, TokenKind::Integer]);
    }

    #[test]
    fn test_edge_double_then_keyword() {
        let t = lex_all("1.5e:");
        assert_eq!(t[0].literal, "1.5");
        assert_eq!(t[1].kind, TokenKind::Keyword);
    }

    // ==================== NAMES ====================

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(kinds("x"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("{} := 1", name));
        assert_eq!(t[0].literal, name);
    }

    #[test]
    fn test_edge_underscore_cannot_start_ident() {
        assert_eq!(kinds("_x"), vec![TokenKind::Illegal, TokenKind::Identifier]);
        assert_eq!(kinds("x_"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_edge_keyword_then_colon() {
        let t = lex_all("a::");
        assert_eq!(t[0].literal, "a:");
        assert_eq!(t[1].kind, TokenKind::Colon);
    }

    #[test]
    fn test_edge_keyword_sequence_then_digit_segment() {
        let t = lex_all("a:b:1:");
        assert_eq!(t[0].kind, TokenKind::KeywordSequence);
        assert_eq!(t[0].literal, "a:b:");
        assert_eq!(t[1].kind, TokenKind::Integer);
        assert_eq!(t[2].kind, TokenKind::Colon);
    }

    #[test]
    fn test_edge_primitive_variants() {
        assert_eq!(kinds("primitive."), vec![TokenKind::Primitive, TokenKind::Period]);
        assert_eq!(kinds("Primitive"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("primitive_x"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("primitive:x:"), vec![TokenKind::KeywordSequence]);
    }

    // ==================== DASHES ====================

    #[test]
    fn test_edge_dash_runs() {
        for n in 1..4 {
            assert_eq!(kinds(&"-".repeat(n)), vec![TokenKind::Minus; n]);
        }
        for n in 4..10 {
            let t = lex_all(&"-".repeat(n));
            assert_eq!(t.len(), 1);
            assert_eq!(t[0].kind, TokenKind::Separator);
            assert_eq!(t[0].literal.len(), n);
        }
    }

    #[test]
    fn test_edge_dashes_split_by_space() {
        assert_eq!(
            kinds("-- --"),
            vec![TokenKind::Minus, TokenKind::Minus, TokenKind::Minus, TokenKind::Minus]
        );
    }

    // ==================== WHITESPACE ====================

    #[test]
    fn test_edge_crlf_lines() {
        let t = lex_all("a\r\nb");
        assert_eq!(t[1].span.line, 2);
        assert_eq!(t[1].span.column, 1);
    }

    #[test]
    fn test_edge_tabs_count_one_column() {
        let t = lex_all("\t\tx");
        assert_eq!(t[0].span.column, 3);
    }
}
