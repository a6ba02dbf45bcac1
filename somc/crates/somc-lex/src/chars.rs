//! Character classification for the SOM lexer.
//!
//! SOM source is classified on ASCII only. Any character outside these
//! classes that is not punctuation is an illegal character.

/// Checks if a character can start an identifier.
///
/// # Example
///
/// ```
/// use somc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('Z'));
/// assert!(!is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('é'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier.
///
/// # Example
///
/// ```
/// use somc_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('_'));
/// assert!(is_ident_continue('7'));
/// assert!(!is_ident_continue(':'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is skipped between tokens.
///
/// Only space, tab, newline and carriage return count. Form feeds, vertical
/// tabs and Unicode spaces are illegal characters.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
