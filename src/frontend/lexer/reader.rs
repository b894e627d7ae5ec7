//! Byte-indexed source reader for the lexer.
//!
//! Invariants:
//! - `offset` is a byte index into `source`.
//! - `line` and `column` are 1-based; `column` counts bytes since the
//!   last recognized line terminator.
//! - Recognized line terminators: LF, standalone CR, CRLF, NEL
//!   (`C2 85`), and the Unicode line separator (`E2 80 A8`). Each
//!   sequence counts as one newline.

use std::sync::Arc;

use crate::frontend::position::Position;

#[derive(Debug, Clone)]
pub(super) struct ByteReader {
    source: Arc<str>,
    offset: usize,
    line: usize,
    column: usize,
}

impl ByteReader {
    pub(super) fn new(input: String) -> Self {
        Self {
            source: Arc::from(input),
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub(super) fn source_arc(&self) -> Arc<str> {
        Arc::clone(&self.source)
    }

    #[inline(always)]
    fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }

    #[inline(always)]
    pub(super) fn current_byte(&self) -> Option<u8> {
        self.bytes().get(self.offset).copied()
    }

    #[inline(always)]
    pub(super) fn peek_byte(&self) -> Option<u8> {
        self.bytes().get(self.offset + 1).copied()
    }

    #[inline(always)]
    pub(super) fn peek_at(&self, n: usize) -> Option<u8> {
        self.bytes().get(self.offset + n).copied()
    }

    pub(super) fn prev_byte(&self) -> Option<u8> {
        self.offset.checked_sub(1).and_then(|i| self.bytes().get(i).copied())
    }

    /// Returns the byte under the cursor and moves past it, bumping the
    /// column. Line terminators must go through `take_newline` instead.
    #[inline]
    pub(super) fn advance(&mut self) -> Option<u8> {
        let b = self.current_byte()?;
        self.offset += 1;
        self.column += 1;
        Some(b)
    }

    pub(super) fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Byte length of the line terminator under the cursor, if any.
    pub(super) fn newline_len(&self) -> Option<usize> {
        match self.current_byte()? {
            0x0A => Some(1),
            0x0D => match self.peek_byte() {
                Some(0x0A) => Some(2),
                _ => Some(1),
            },
            0xC2 if self.peek_byte() == Some(0x85) => Some(2),
            0xE2 if self.peek_byte() == Some(0x80) && self.peek_at(2) == Some(0xA8) => Some(3),
            _ => None,
        }
    }

    /// Consumes the line terminator under the cursor, counting the
    /// whole sequence as a single newline.
    pub(super) fn take_newline(&mut self) -> bool {
        match self.newline_len() {
            Some(len) => {
                self.offset += len;
                self.line += 1;
                self.column = 1;
                true
            }
            None => false,
        }
    }

    /// Skips a UTF-8 byte-order mark at the very start of the buffer.
    /// Line and column are unaffected.
    pub(super) fn skip_bom(&mut self) {
        if self.offset == 0 && self.bytes().starts_with(&[0xEF, 0xBB, 0xBF]) {
            self.offset = 3;
        }
    }

    fn consume_ascii_while<F>(&mut self, mut predicate: F)
    where
        F: FnMut(u8) -> bool,
    {
        let bytes = self.bytes();
        let mut idx = self.offset;
        while idx < bytes.len() && predicate(bytes[idx]) {
            idx += 1;
        }
        self.column += idx - self.offset;
        self.offset = idx;
    }

    pub(super) fn consume_identifier_run(&mut self) {
        self.consume_ascii_while(|b| b == b'_' || b.is_ascii_alphanumeric());
    }

    pub(super) fn consume_macro_run(&mut self) {
        self.consume_ascii_while(|b| b.is_ascii_alphanumeric());
    }

    /// Advances to the next line terminator (or end of input) without
    /// consuming the terminator itself.
    pub(super) fn consume_until_newline(&mut self) {
        while self.current_byte().is_some() && self.newline_len().is_none() {
            self.advance();
        }
    }

    pub(super) fn index(&self) -> usize {
        self.offset
    }

    pub(super) fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub(super) fn slice_str(&self, start: usize, end: usize) -> &str {
        self.source.get(start..end).unwrap_or_else(|| {
            panic!(
                "invalid source slice {}..{} for source len {}",
                start,
                end,
                self.source.len()
            )
        })
    }
}
