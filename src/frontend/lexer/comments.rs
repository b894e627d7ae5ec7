//! Comment scanning (line comments as tokens, block comments skipped)

use crate::frontend::diagnostic::{LexError, LexErrorKind};
use crate::frontend::token::Token;
use crate::frontend::token_type::TokenKind;

use super::Lexer;

impl Lexer {
    /// Entry: the cursor sits on `#` or the first `/` of `//`. The body
    /// runs to the next line terminator (exclusive) or end of input.
    /// Empty comments produce no token; the parser decides which of the
    /// surviving ones matter.
    pub(super) fn read_line_comment(&mut self) -> Option<Token> {
        if self.reader.current_byte() == Some(b'#') {
            self.reader.advance();
        } else {
            self.reader.advance_n(2); // '//'
        }

        // The token anchors at the first body byte, so its value is the
        // verbatim slice at its offset.
        let body_start = self.reader.index();
        let position = self.reader.position();
        self.reader.consume_until_newline();
        let body_end = self.reader.index();

        if body_end == body_start {
            return None;
        }

        let literal = self.reader.slice_str(body_start, body_end).to_string();
        Some(Token::new(
            TokenKind::Comment,
            literal,
            body_start,
            position,
            self.file.clone(),
        ))
    }

    /// Entry: the cursor sits on `/*`. Block comments do not nest and
    /// never produce tokens.
    pub(super) fn skip_block_comment(&mut self) -> Result<(), LexError> {
        debug_assert!(
            self.reader.current_byte() == Some(b'/') && self.reader.peek_byte() == Some(b'*'),
            "skip_block_comment expects `/*` under the cursor"
        );
        let position = self.reader.position();
        self.reader.advance_n(2);

        loop {
            match (self.reader.current_byte(), self.reader.peek_byte()) {
                (Some(b'*'), Some(b'/')) => {
                    self.reader.advance_n(2);
                    return Ok(());
                }
                (Some(_), _) => {
                    if !self.reader.take_newline() {
                        self.reader.advance();
                    }
                }
                (None, _) => {
                    return Err(self.error_at(
                        LexErrorKind::UnterminatedBlockComment,
                        "Unterminated block comment",
                        position,
                    ));
                }
            }
        }
    }
}
