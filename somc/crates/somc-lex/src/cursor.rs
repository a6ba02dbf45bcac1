//! Character cursor for traversing source code.
//!
//! The cursor keeps the scanner's position state: the byte offset of the
//! character under the cursor, the lookahead offset one character further,
//! the current character itself, and line/column information for spans.

use crate::chars;

/// A cursor for traversing source code character by character.
///
/// At rest `read_position` is one past the current character, which for
/// ASCII means `read_position == position + 1`. Once the end of input is
/// reached `current_char` is `'\0'` and `read_position` is one past the
/// source length. End of input is decided by position, so a literal NUL in
/// the source is still an ordinary character.
///
/// # Example
///
/// ```
/// use somc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x := 3");
///
/// assert_eq!(cursor.current_char(), 'x');
/// assert_eq!(cursor.peek(), ' ');
/// cursor.advance();
/// assert_eq!(cursor.position(), 1);
/// assert_eq!(cursor.read_position(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the current character.
    position: usize,

    /// Byte offset of the lookahead character.
    read_position: usize,

    /// Character at `position`, or `'\0'` past the end.
    current: char,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned on the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut cursor = Self {
            source,
            position: 0,
            read_position: 0,
            current: '\0',
            line: 1,
            column: 1,
        };
        cursor.read_char();
        cursor
    }

    /// Loads the character at `read_position` into `current`.
    fn read_char(&mut self) {
        self.position = self.read_position;
        match self.char_at(self.read_position) {
            Some(c) => {
                self.current = c;
                self.read_position += c.len_utf8();
            },
            None => {
                self.current = '\0';
                self.read_position = self.source.len() + 1;
            },
        }
    }

    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        let b = *self.source.as_bytes().get(offset)?;
        if b < 128 {
            return Some(b as char);
        }
        self.source.get(offset..)?.chars().next()
    }

    /// Returns the character under the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.current
    }

    /// Returns the character after the current one without moving.
    ///
    /// # Example
    ///
    /// ```
    /// use somc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(":=");
    /// assert_eq!(cursor.peek(), '=');
    /// assert_eq!(Cursor::new(":").peek(), '\0');
    /// ```
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(self.read_position).unwrap_or('\0')
    }

    /// Returns the character two places ahead of the current one.
    ///
    /// # Example
    ///
    /// ```
    /// use somc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek(), '.');
    /// assert_eq!(cursor.peek2(), '5');
    /// ```
    #[inline]
    pub fn peek2(&self) -> char {
        match self.char_at(self.read_position) {
            Some(next) => self
                .char_at(self.read_position + next.len_utf8())
                .unwrap_or('\0'),
            None => '\0',
        }
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        if self.current == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.read_char();
    }

    /// Advances the cursor by the given number of characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use somc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=x");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), 'x');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips spaces, tabs, newlines and carriage returns.
    ///
    /// # Example
    ///
    /// ```
    /// use somc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\r\n x");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), 'x');
    /// assert_eq!(cursor.line(), 2);
    /// ```
    pub fn skip_whitespace(&mut self) {
        while !self.is_at_end() && chars::is_whitespace(self.current) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the byte offset of the current character.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the byte offset of the lookahead character.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use somc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("at:put:");
    /// cursor.advance_n(3);
    /// assert_eq!(cursor.slice_from(0), "at:");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.position).unwrap_or("")
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.position..).unwrap_or("")
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
