use std::fmt;

use serde::Serialize;

use crate::frontend::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LexErrorKind {
    UnexpectedCharacter,
    MalformedNumber,
    UnterminatedString,
    UnterminatedBlockComment,
}

/// A fatal tokenization error.
///
/// The lexer stops at the first one of these; there is no recovery or
/// resynchronization. The position points at the offending byte, not at
/// the start of the token being scanned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub message: String,
    pub file: String,
    pub position: Position,
}

impl LexError {
    pub fn new(
        kind: LexErrorKind,
        message: impl Into<String>,
        file: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            file: file.into(),
            position,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SyntaxError: {} at {}:{}",
            self.message, self.file, self.position
        )
    }
}

impl std::error::Error for LexError {}
