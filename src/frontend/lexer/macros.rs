//! Macro name scanning (`@name`)

use crate::frontend::token::Token;
use crate::frontend::token_type::TokenKind;

use super::{Lexer, MAX_TOKEN_LENGTH};

impl Lexer {
    /// Entry: the current byte is `@`. The sigil is consumed but kept
    /// out of the token value; the token itself starts at the `@`.
    pub(super) fn read_macro_token(&mut self) -> Token {
        let start = self.reader.index();
        let position = self.reader.position();

        self.reader.advance(); // '@'
        debug_assert_eq!(self.reader.prev_byte(), Some(b'@'));

        let name_start = self.reader.index();
        self.reader.consume_macro_run();
        let name_end = self.reader.index();

        let literal = self.reader.slice_str(name_start, name_end).to_string();
        if literal.len() > MAX_TOKEN_LENGTH {
            self.warn(
                format!("Macro name longer than {} bytes", MAX_TOKEN_LENGTH),
                position,
            );
        }

        Token::new(TokenKind::Macro, literal, start, position, self.file.clone())
    }
}
