// curlicue-cli/src/pipeline/cursor.rs

// Random-access character cursor over a UTF-8 document.

// The lexer and the XML filter read one character at a time in a hot loop.
// Rather than bounds-check before every read, out-of-range reads return the
// `DONE` sentinel and the loops detect end-of-input once per lexeme. All
// positions are byte offsets so lexeme spans can slice the source directly.

/// Returned for any read past either end of the document. U+FFFF is a
/// Unicode noncharacter, so it can never collide with document content.
pub const DONE: char = '\u{ffff}';

/// Byte-position cursor with single-character lookahead.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    text: &'t str,
    len: usize,
    pos: usize,
}

impl<'t> Cursor<'t> {
    /// Creates a cursor at byte offset `0`.
    #[must_use]
    pub fn new(text: &'t str) -> Self {
        Self {
            text,
            len: text.len(),
            pos: 0,
        }
    }

    /// Returns the current byte offset. After the final [`Self::next`] this
    /// equals the document length.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.pos
    }

    /// Returns the character at the cursor, or [`DONE`] past the end.
    #[must_use]
    pub fn current(&self) -> char {
        self.char_at(self.pos)
    }

    /// Returns the character after the current one without consuming it, or
    /// [`DONE`] when there is none.
    #[must_use]
    pub fn peek(&self) -> char {
        match self.char_at(self.pos) {
            DONE => DONE,
            c => self.char_at(self.pos + c.len_utf8()),
        }
    }

    /// Steps onto the next character and returns it, or [`DONE`] when the
    /// document is exhausted.
    pub fn advance(&mut self) -> char {
        self.next();
        self.current()
    }

    /// Steps onto the next character boundary. Saturates at document end.
    pub fn next(&mut self) {
        match self.char_at(self.pos) {
            DONE => self.pos = self.len,
            c => self.pos += c.len_utf8(),
        }
    }

    /// Steps back onto the previous character boundary. Saturates at zero.
    pub fn prev(&mut self) {
        while self.pos > 0 {
            self.pos -= 1;
            if self.text.is_char_boundary(self.pos) {
                break;
            }
        }
    }

    /// Answers whether [`Self::current`] would return a document character.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.pos < self.len
    }

    /// Advances while the predicate holds for the character under the
    /// cursor, then backs up onto the last accepted character.
    ///
    /// The predicate also receives the cursor so callers can peek past the
    /// candidate (numeric connectors and spaced ellipses need one character
    /// of context beyond the character being tested).
    pub fn skip(&mut self, mut accept: impl FnMut(&Self, char) -> bool) {
        loop {
            let c = self.advance();
            if c == DONE || !accept(&*self, c) {
                break;
            }
        }
        self.prev();
    }

    /// Slices consecutive bytes out of the document.
    ///
    /// # Panics
    /// Panics when the offsets are out of range or split a character.
    #[must_use]
    pub fn substring(&self, began: usize, ended: usize) -> &'t str {
        &self.text[began..ended]
    }

    /// Returns the byte offset one past the current character. This is the
    /// exclusive end of a lexeme whose last character sits under the cursor.
    #[must_use]
    pub fn after_current(&self) -> usize {
        match self.char_at(self.pos) {
            DONE => self.pos,
            c => self.pos + c.len_utf8(),
        }
    }

    fn char_at(&self, pos: usize) -> char {
        if pos >= self.len {
            return DONE;
        }
        let byte = self.text.as_bytes()[pos];
        if byte < 0x80 {
            byte as char
        } else {
            // Non-ASCII: decode from the character boundary.
            self.text[pos..].chars().next().unwrap_or(DONE)
        }
    }
}
