//! somc-lex - Lexical Analyzer for SOM
//!
//! This crate turns SOM source text into a stream of tokens for the parser.
//! Lexing is pull-based: the parser asks for one token at a time with
//! [`Lexer::next_token`].
//!
//! # Example Usage
//!
//! ```
//! use somc_lex::{Lexer, TokenKind};
//! use somc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("at: 1 put: 'x'", &handler);
//!
//! let token = lexer.next_token();
//! assert_eq!(token.kind, TokenKind::Keyword);
//! assert_eq!(token.literal, "at:");
//!
//! // The rest of the stream, up to end of input
//! let rest: Vec<_> = lexer.map(|t| t.kind).collect();
//! assert_eq!(
//!     rest,
//!     vec![TokenKind::Integer, TokenKind::Keyword, TokenKind::String]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds and the token value
//! - [`lexer`] - The lexer and its per-lexeme scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classification
//! - [`error`] - Structured lexical errors
//!
//! # Token Categories
//!
//! - **Punctuation**: `=` `|` `~` `&` `*` `/` `\` `+` `>` `<` `@` `%` `,`
//!   `[` `]` `(` `)` `#` `^` `.`, plus `:` and `:=`
//! - **Dashes**: `-`, and a run of four or more dashes as a separator
//! - **Literals**: `'strings'`, integers `42`, doubles `3.14`
//! - **Names**: identifiers, `primitive`, keywords `at:` and keyword
//!   sequences `at:put:`
//! - **Special**: `Illegal`, `UnterminatedString` and `Eof`
//!
//! # Errors
//!
//! Malformed input never stops the lexer. An illegal character or an
//! unterminated string comes back as an error-kind token, and a diagnostic
//! with a stable code is emitted to the [`Handler`](somc_util::Handler):
//!
//! | Code | Level | Meaning |
//! |---|---|---|
//! | `E1001` | error | illegal character |
//! | `E1002` | error | unterminated string literal |
//! | `W1001` | warning | unknown escape sequence, kept as written |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Token, TokenKind, PRIMITIVE, SEPARATOR_MIN_LEN};

use somc_util::Handler;

/// Lexes `source` to completion.
///
/// Returns every token before end of input. Diagnostics go to `handler`.
///
/// # Example
///
/// ```
/// use somc_lex::{tokenize, TokenKind};
/// use somc_util::Handler;
///
/// let handler = Handler::new();
/// let tokens = tokenize("x := 3", &handler);
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::Assign);
/// ```
pub fn tokenize(source: &str, handler: &Handler) -> Vec<Token> {
    Lexer::new(source, handler).collect()
}
