//! The Ember lexer - tokenizes source code into tokens

// Module declarations
mod comments;
mod helpers;
mod identifiers;
mod macros;
mod numbers;
mod reader;
mod strings;

use std::sync::Arc;

use serde::Serialize;

use reader::ByteReader;

use crate::frontend::diagnostic::{LexError, LexErrorKind};
use crate::frontend::position::Position;
use crate::frontend::token::Token;
use crate::frontend::token_type::TokenKind;

use helpers::{is_digit, is_ident_start, is_operator_start, is_whitespace_no_newline, show_byte};

/// Identifiers, numbers, and macro names longer than this are legal but
/// suspicious; the lexer records a warning and carries on.
pub const MAX_TOKEN_LENGTH: usize = 256;

/// Warning emitted during lexing
#[derive(Debug, Clone, Serialize)]
pub struct LexerWarning {
    pub message: String,
    pub position: Position,
}

/// The Ember lexer
#[derive(Debug, Clone)]
pub struct Lexer {
    reader: ByteReader,
    file: Arc<str>,
    /// Net count of `{` minus `}` emitted so far, exposed for
    /// bracket-mismatch hints. Never consulted for token boundaries.
    nest_level: i32,
    /// True while scanning a string literal body.
    in_string: bool,
    warnings: Vec<LexerWarning>,
}

impl Lexer {
    pub fn new(input: impl Into<String>, file: impl Into<String>) -> Self {
        let mut reader = ByteReader::new(input.into());
        reader.skip_bom();
        let mut lexer = Self {
            reader,
            file: Arc::from(file.into()),
            nest_level: 0,
            in_string: false,
            warnings: Vec::new(),
        };
        lexer.skip_shebang();
        lexer
    }

    /// Get warnings collected during lexing
    pub fn warnings(&self) -> &[LexerWarning] {
        &self.warnings
    }

    /// Net `{`/`}` balance of the tokens emitted so far.
    pub fn nest_level(&self) -> i32 {
        self.nest_level
    }

    /// True while the scanner is inside a string literal body.
    pub fn in_string(&self) -> bool {
        self.in_string
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    /// The source buffer being tokenized.
    pub fn source(&self) -> Arc<str> {
        self.reader.source_arc()
    }

    /// Get the next token from the input.
    ///
    /// Returns `Eof` at (and after) end of input. Fatal errors abort the
    /// scan; see `LexError` for the taxonomy.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.skip_ignorable()?;

            let start = self.reader.index();
            let position = self.reader.position();

            // End of input
            let Some(b0) = self.reader.current_byte() else {
                return Ok(Token::fixed(
                    TokenKind::Eof,
                    start,
                    position,
                    self.file.clone(),
                ));
            };
            let b1 = self.reader.peek_byte();

            // Identifiers/keywords: ASCII run with keyword table lookup.
            if is_ident_start(b0) {
                return Ok(self.read_identifier_token());
            }

            // Numbers: delimit the slice and tag the radix; parsing the
            // value is the parser's job.
            if is_digit(b0) {
                return self.read_number_token();
            }

            if b0 == b'"' {
                // Empty string literal has no body to scan.
                if b1 == Some(b'"') {
                    self.reader.advance_n(2);
                    return Ok(Token::new(
                        TokenKind::Str,
                        "",
                        start,
                        position,
                        self.file.clone(),
                    ));
                }
                return self.read_string_token();
            }

            // Line comments are tokens; empty ones vanish.
            if b0 == b'#' || (b0 == b'/' && b1 == Some(b'/')) {
                match self.read_line_comment() {
                    Some(token) => return Ok(token),
                    None => continue,
                }
            }

            if b0 == b'@' {
                return Ok(self.read_macro_token());
            }

            // Leading-dot fraction, e.g. `.5`
            if b0 == b'.' && b1.is_some_and(is_digit) {
                return self.read_number_token();
            }

            if is_operator_start(b0) {
                if let Some(token) = self.read_operator_token(b0) {
                    return Ok(token);
                }
            }

            return Err(self.error_here(
                LexErrorKind::UnexpectedCharacter,
                format!("Invalid character `{}`", show_byte(b0)),
            ));
        }
    }

    /// Lex the whole buffer into a token list terminated by `Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Skip whitespace, line terminators, and block comments. Line
    /// comments are not skipped here; they produce tokens.
    fn skip_ignorable(&mut self) -> Result<(), LexError> {
        loop {
            match self.reader.current_byte() {
                Some(b) if is_whitespace_no_newline(b) => {
                    self.reader.advance();
                }
                Some(b'/') if self.reader.peek_byte() == Some(b'*') => {
                    self.skip_block_comment()?;
                }
                _ => {
                    if !self.reader.take_newline() {
                        return Ok(());
                    }
                }
            }
        }
    }

    // `#!/` at the very start of the buffer discards the first line.
    fn skip_shebang(&mut self) {
        if self.reader.current_byte() == Some(b'#')
            && self.reader.peek_byte() == Some(b'!')
            && self.reader.peek_at(2) == Some(b'/')
        {
            self.reader.consume_until_newline();
        }
    }

    /// Longest-match operator/separator/delimiter dispatch: three-byte
    /// spellings win over two-byte ones, which win over single bytes.
    fn read_operator_token(&mut self, b0: u8) -> Option<Token> {
        let start = self.reader.index();
        let position = self.reader.position();
        let b1 = self.reader.peek_byte();
        let b2 = self.reader.peek_at(2);

        let (kind, len) = three_byte_token(b0, b1, b2)
            .map(|kind| (kind, 3))
            .or_else(|| two_byte_token(b0, b1).map(|kind| (kind, 2)))
            .or_else(|| one_byte_token(b0).map(|kind| (kind, 1)))?;

        match kind {
            TokenKind::LBrace => self.nest_level += 1,
            TokenKind::RBrace => self.nest_level -= 1,
            _ => {}
        }

        self.reader.advance_n(len);
        Some(Token::fixed(kind, start, position, self.file.clone()))
    }

    pub(super) fn warn(&mut self, message: impl Into<String>, position: Position) {
        self.warnings.push(LexerWarning {
            message: message.into(),
            position,
        });
    }

    /// A fatal error at the current cursor position.
    pub(super) fn error_here(&self, kind: LexErrorKind, message: impl Into<String>) -> LexError {
        self.error_at(kind, message, self.reader.position())
    }

    pub(super) fn error_at(
        &self,
        kind: LexErrorKind,
        message: impl Into<String>,
        position: Position,
    ) -> LexError {
        LexError::new(kind, message, self.file.to_string(), position)
    }
}

fn three_byte_token(b0: u8, b1: Option<u8>, b2: Option<u8>) -> Option<TokenKind> {
    let kind = match (b0, b1?, b2?) {
        (b'<', b'<', b'=') => TokenKind::ShlEq,
        (b'>', b'>', b'=') => TokenKind::ShrEq,
        (b'.', b'.', b'.') => TokenKind::Ellipsis,
        _ => return None,
    };
    Some(kind)
}

fn two_byte_token(b0: u8, b1: Option<u8>) -> Option<TokenKind> {
    let kind = match (b0, b1?) {
        (b'=', b'=') => TokenKind::Eq,
        (b'=', b'>') => TokenKind::FatArrow,
        (b'+', b'+') => TokenKind::PlusPlus,
        (b'+', b'=') => TokenKind::PlusEq,
        (b'-', b'-') => TokenKind::MinusMinus,
        (b'-', b'=') => TokenKind::MinusEq,
        (b'-', b'>') => TokenKind::RArrow,
        (b'*', b'*') => TokenKind::Power,
        (b'*', b'=') => TokenKind::AsteriskEq,
        (b'/', b'=') => TokenKind::SlashEq,
        (b'%', b'%') => TokenKind::PercentPercent,
        (b'%', b'=') => TokenKind::PercentEq,
        (b'!', b'=') => TokenKind::NotEq,
        (b'&', b'&') => TokenKind::AmpAmp,
        (b'&', b'^') => TokenKind::AmpCaret,
        (b'&', b'=') => TokenKind::AmpEq,
        (b'|', b'|') => TokenKind::PipePipe,
        (b'|', b'=') => TokenKind::PipeEq,
        (b'^', b'=') => TokenKind::CaretEq,
        (b'~', b'=') => TokenKind::TildeEq,
        (b'<', b'=') => TokenKind::Lte,
        (b'<', b'-') => TokenKind::LArrow,
        (b'<', b'<') => TokenKind::Shl,
        (b'>', b'=') => TokenKind::Gte,
        (b'>', b'>') => TokenKind::Shr,
        (b'.', b'.') => TokenKind::DotDot,
        (b':', b':') => TokenKind::ColonColon,
        _ => return None,
    };
    Some(kind)
}

fn one_byte_token(b0: u8) -> Option<TokenKind> {
    let kind = match b0 {
        b'=' => TokenKind::Assign,
        b'+' => TokenKind::Plus,
        b'-' => TokenKind::Minus,
        b'*' => TokenKind::Asterisk,
        b'/' => TokenKind::Slash,
        b'%' => TokenKind::Percent,
        b'!' => TokenKind::Bang,
        b'&' => TokenKind::Amp,
        b'|' => TokenKind::Pipe,
        b'^' => TokenKind::Caret,
        b'~' => TokenKind::Tilde,
        b'<' => TokenKind::Lt,
        b'>' => TokenKind::Gt,
        b'.' => TokenKind::Dot,
        b':' => TokenKind::Colon,
        b';' => TokenKind::Semicolon,
        b',' => TokenKind::Comma,
        b'\\' => TokenKind::Backslash,
        b'?' => TokenKind::Question,
        b'[' => TokenKind::LBracket,
        b']' => TokenKind::RBracket,
        b'{' => TokenKind::LBrace,
        b'}' => TokenKind::RBrace,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        _ => return None,
    };
    Some(kind)
}
