//! Lexer implementation split into modules by lexeme family.
//!
//! - `core` - the `Lexer` struct, dispatch and diagnostics
//! - `operator` - colon and assignment
//! - `separator` - minus and dash runs
//! - `string` - string literals and escapes
//! - `number` - integer and double literals
//! - `identifier` - identifiers, `primitive` and keywords

mod core;
mod identifier;
mod number;
mod operator;
mod separator;
mod string;

pub use self::core::Lexer;
