use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::frontend::position::Position;
use crate::frontend::token_type::TokenKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Textual slice from the source. Fixed-spelling kinds carry their
    /// canonical spelling; sentinels carry the empty string.
    pub literal: String,
    /// Absolute byte index of the token's first byte.
    pub offset: usize,
    pub position: Position,
    /// Logical source name, shared across the whole token stream.
    pub file: Arc<str>,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        literal: impl Into<String>,
        offset: usize,
        position: Position,
        file: Arc<str>,
    ) -> Self {
        Self {
            kind,
            literal: literal.into(),
            offset,
            position,
            file,
        }
    }

    /// A token whose spelling is fully determined by its kind.
    pub fn fixed(kind: TokenKind, offset: usize, position: Position, file: Arc<str>) -> Self {
        Self::new(kind, kind.spelling(), offset, position, file)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?}, {})",
            self.kind, self.literal, self.position
        )
    }
}
