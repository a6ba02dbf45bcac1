//! somc-par - Token consumer for the SOM front end
//!
//! The parser pulls tokens from a [`Lexer`] one at a time and keeps a
//! one-token lookahead: [`current`](Parser::current) is the token being
//! looked at and [`peek`](Parser::peek) is the one after it. Both are filled
//! when the parser is created, so the lexer has already produced two tokens
//! before the first decision is made.
//!
//! No grammar is recognized yet. [`Parser::parse`] walks the stream to end
//! of input and reports whether it was lexically clean.
//!
//! # Example Usage
//!
//! ```
//! use somc_lex::{Lexer, TokenKind};
//! use somc_par::Parser;
//! use somc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut parser = Parser::new(Lexer::new("x := 3", &handler));
//!
//! assert_eq!(parser.current().kind, TokenKind::Identifier);
//! assert_eq!(parser.peek().kind, TokenKind::Assign);
//!
//! parser.next_token();
//! assert_eq!(parser.current().kind, TokenKind::Assign);
//!
//! assert_eq!(parser.parse(), Ok(2));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod edge_cases;
pub mod error;

pub use error::{ParseError, ParseResult};

use somc_lex::{Lexer, Token, TokenKind};
use tracing::debug;

/// Pull-based consumer of a token stream with one token of lookahead.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    peek: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser and primes `current` and `peek` from `lexer`.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        debug!(current = %current.kind, peek = %peek.kind, "parser primed");
        Self {
            lexer,
            current,
            peek,
        }
    }

    /// Shifts `peek` into `current` and pulls a fresh `peek`.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// The token under consideration.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.current
    }

    /// The token after [`current`](Parser::current).
    #[inline]
    pub fn peek(&self) -> &Token {
        &self.peek
    }

    /// Returns true once `current` is end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_eof()
    }

    /// Returns true if `current` has the given kind.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes `current` if it has the given kind.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Walks the remaining stream to end of input.
    ///
    /// Returns the number of tokens consumed, or every lexical error met on
    /// the way. Diagnostics for those errors are already on the lexer's
    /// handler.
    pub fn parse(&mut self) -> ParseResult<usize> {
        let mut count = 0;
        let mut errors = Vec::new();

        while !self.is_at_end() {
            if let Some(err) = self.current.to_error() {
                errors.push(err);
            }
            count += 1;
            self.next_token();
        }

        debug!(tokens = count, errors = errors.len(), "reached end of input");
        if errors.is_empty() {
            Ok(count)
        } else {
            Err(ParseError::Lexical(errors))
        }
    }
}
