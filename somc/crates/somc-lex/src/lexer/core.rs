//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use std::iter::FusedIterator;

use somc_util::{DiagnosticBuilder, DiagnosticCode, FileId, Handler, Span};
use tracing::{debug, trace};

use crate::chars;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for SOM source text.
///
/// The lexer is pull-based: each call to [`next_token`](Lexer::next_token)
/// skips whitespace, scans exactly one lexeme and returns it. Malformed
/// input becomes an error-kind token plus a diagnostic on the handler, and
/// scanning continues after it. Once the input is exhausted every call
/// returns an [`TokenKind::Eof`] token.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Diagnostics sink shared with the caller.
    handler: &'a Handler,

    /// File the produced spans belong to.
    file_id: FileId,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            file_id: FileId::DUMMY,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Tags every produced span with `file_id`.
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }

    /// Returns the next token from the source code.
    ///
    /// Punctuation is looked up first, then `:`, `-` and `'`, then letters,
    /// then digits. Anything else is illegal.
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return self.token(TokenKind::Eof, String::new());
        }

        let c = self.cursor.current_char();
        let token = match TokenKind::from_punctuation(c) {
            Some(kind) => {
                self.cursor.advance();
                self.token_from_source(kind)
            },
            None => match c {
                ':' => self.lex_colon(),
                '-' => self.lex_dash(),
                '\'' => self.lex_string(),
                c if chars::is_ident_start(c) => self.lex_identifier(),
                c if c.is_ascii_digit() => self.lex_number(),
                _ => self.lex_illegal(),
            },
        };

        trace!(
            kind = %token.kind,
            literal = %token.literal,
            start = token.span.start,
            end = token.span.end,
            "token"
        );
        token
    }

    /// Returns the next token, or the lexical error it stands for.
    ///
    /// The diagnostic for the error has already been reported to the
    /// handler, and the lexer is positioned after the malformed lexeme.
    pub fn try_next_token(&mut self) -> Result<Token, LexError> {
        let token = self.next_token();
        match token.to_error() {
            Some(err) => Err(err),
            None => Ok(token),
        }
    }

    fn lex_illegal(&mut self) -> Token {
        let c = self.cursor.current_char();
        self.cursor.advance();
        let diagnostic = self
            .error_at_token(
                DiagnosticCode::E_LEXER_ILLEGAL_CHAR,
                format!("illegal character {:?}", c),
            )
            .help("tokens start with a letter, a digit, a quote or an operator character");
        self.emit(diagnostic);
        self.token_from_source(TokenKind::Illegal)
    }

    /// Builds a token spanning from the token start to the cursor.
    pub(crate) fn token(&self, kind: TokenKind, literal: impl Into<String>) -> Token {
        Token::new(kind, literal, self.token_span())
    }

    /// Builds a token whose literal is the consumed source text.
    pub(crate) fn token_from_source(&self, kind: TokenKind) -> Token {
        let literal = self.cursor.slice_from(self.token_start);
        self.token(kind, literal)
    }

    /// Span of the lexeme consumed since the token started.
    pub(crate) fn token_span(&self) -> Span {
        Span::with_file(
            self.token_start,
            self.cursor.position(),
            self.file_id,
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Starts a lexical error covering the current token.
    pub(crate) fn error_at_token(
        &self,
        code: DiagnosticCode,
        message: String,
    ) -> DiagnosticBuilder {
        let span = self.token_span();
        debug!(code = %code, start = span.start, "{}", message);
        self.handler.build_error(span, message).code(code)
    }

    /// Starts a lexical warning at an explicit span.
    pub(crate) fn warning_at(
        &self,
        code: DiagnosticCode,
        message: String,
        span: Span,
    ) -> DiagnosticBuilder {
        debug!(code = %code, start = span.start, "{}", message);
        self.handler
            .build_warning(span.with_file_id(self.file_id), message)
            .code(code)
    }

    /// Hands a finished diagnostic to the handler.
    pub(crate) fn emit(&self, diagnostic: DiagnosticBuilder) {
        diagnostic.emit(self.handler);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the source text being lexed.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }
}

/// Yields tokens up to, but not including, [`TokenKind::Eof`].
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
