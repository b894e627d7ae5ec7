//! String literal scanning

use crate::frontend::diagnostic::{LexError, LexErrorKind};
use crate::frontend::token::Token;
use crate::frontend::token_type::TokenKind;

use super::Lexer;

impl Lexer {
    /// Entry: the current byte is `"` and the literal is non-empty (the
    /// dispatcher short-circuits `""`). Escapes are carried through
    /// uninterpreted; decoding them is the parser's job. The token value
    /// excludes the surrounding quotes.
    pub(super) fn read_string_token(&mut self) -> Result<Token, LexError> {
        let start = self.reader.index();
        let position = self.reader.position();

        self.reader.advance(); // opening quote
        debug_assert_eq!(self.reader.prev_byte(), Some(b'"'));
        self.in_string = true;

        let body_start = self.reader.index();
        let body_end = loop {
            match self.reader.current_byte() {
                None => {
                    self.in_string = false;
                    return Err(self.error_at(
                        LexErrorKind::UnterminatedString,
                        "Unterminated string literal",
                        position,
                    ));
                }
                Some(b'"') => {
                    let end = self.reader.index();
                    self.reader.advance(); // closing quote
                    break end;
                }
                Some(b'\\') => {
                    self.reader.advance(); // backslash
                    // The escaped byte is consumed blind; a line
                    // terminator after it still counts as a newline.
                    if !self.reader.take_newline() {
                        self.reader.advance();
                    }
                }
                Some(_) => {
                    if !self.reader.take_newline() {
                        self.reader.advance();
                    }
                }
            }
        };
        self.in_string = false;

        let literal = self.reader.slice_str(body_start, body_end).to_string();
        Ok(Token::new(
            TokenKind::Str,
            literal,
            start,
            position,
            self.file.clone(),
        ))
    }
}
