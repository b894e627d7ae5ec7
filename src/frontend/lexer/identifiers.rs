//! Identifier and keyword scanning

use crate::frontend::token::Token;
use crate::frontend::token_type::lookup_ident;

use super::{Lexer, MAX_TOKEN_LENGTH};

impl Lexer {
    /// Entry: the current byte is a letter or `_`. Consumes the maximal
    /// identifier run and decides keyword-vs-identifier against the
    /// canonical spelling table.
    pub(super) fn read_identifier_token(&mut self) -> Token {
        let start = self.reader.index();
        let position = self.reader.position();

        self.reader.consume_identifier_run();
        let end = self.reader.index();

        let literal = self.reader.slice_str(start, end).to_string();
        if literal.len() > MAX_TOKEN_LENGTH {
            self.warn(
                format!("Identifier longer than {} bytes", MAX_TOKEN_LENGTH),
                position,
            );
        }

        let kind = lookup_ident(&literal);
        Token::new(kind, literal, start, position, self.file.clone())
    }
}
