//! Numeric literal scanning (radix prefixes, fractions, exponents)

use crate::frontend::diagnostic::{LexError, LexErrorKind};
use crate::frontend::token::Token;
use crate::frontend::token_type::TokenKind;

use super::helpers::{is_binary_digit, is_digit, is_hex_digit, is_letter, is_octal_digit, show_byte};
use super::{Lexer, MAX_TOKEN_LENGTH};

impl Lexer {
    /// Entry: the current byte is a digit, or a `.` directly followed by
    /// a digit (leading-dot fraction). Delimits the slice and tags its
    /// radix; the value itself is never converted here.
    pub(super) fn read_number_token(&mut self) -> Result<Token, LexError> {
        let start = self.reader.index();
        let position = self.reader.position();

        let kind = match (self.reader.current_byte(), self.reader.peek_byte()) {
            (Some(b'0'), Some(b'x' | b'X')) => {
                self.reader.advance_n(2);
                if self.digit_run(is_hex_digit) == 0 {
                    return Err(self.error_here(
                        LexErrorKind::MalformedNumber,
                        "Expected hexadecimal digits [0-9A-Fa-f] after `0x`",
                    ));
                }
                TokenKind::HexInt
            }
            (Some(b'0'), Some(b'o' | b'O')) => {
                self.reader.advance_n(2);
                if self.digit_run(is_octal_digit) == 0 {
                    return Err(self.error_here(
                        LexErrorKind::MalformedNumber,
                        "Expected octal digits [0-7] after `0o`",
                    ));
                }
                TokenKind::OctInt
            }
            (Some(b'0'), Some(b'b' | b'B')) => {
                self.reader.advance_n(2);
                if self.digit_run(is_binary_digit) == 0 {
                    return Err(self.error_here(
                        LexErrorKind::MalformedNumber,
                        "Expected binary digits [0-1] after `0b`",
                    ));
                }
                TokenKind::BinInt
            }
            _ => self.read_decimal_body()?,
        };

        let end = self.reader.index();
        let literal = self.reader.slice_str(start, end).to_string();
        if literal.len() > MAX_TOKEN_LENGTH {
            self.warn(
                format!("Number longer than {} bytes", MAX_TOKEN_LENGTH),
                position,
            );
        }

        Ok(Token::new(kind, literal, start, position, self.file.clone()))
    }

    /// Decimal integer, fraction, exponent, and imaginary forms; all of
    /// them share the `Integer` kind.
    fn read_decimal_body(&mut self) -> Result<TokenKind, LexError> {
        // A leading zero admits only `0` itself, a fraction, a
        // separator, or more digits. Any other letter is the C-style
        // octal trap.
        if self.reader.current_byte() == Some(b'0') {
            self.reader.advance();
            if let Some(b) = self.reader.current_byte() {
                if is_letter(b) {
                    return Err(self.error_here(
                        LexErrorKind::MalformedNumber,
                        format!(
                            "Invalid character `{}` after `0`. Expected a radix marker [xXoObB]",
                            show_byte(b)
                        ),
                    ));
                }
            }
        }

        self.digit_run(is_digit);

        // Fraction: `.` only joins the number when a digit follows, so
        // `1..5` still lexes as a range.
        if self.reader.current_byte() == Some(b'.') && self.reader.peek_byte().is_some_and(is_digit)
        {
            self.reader.advance(); // '.'
            self.digit_run(is_digit);
        }

        // Exponent: the sign is mandatory.
        if matches!(self.reader.current_byte(), Some(b'e' | b'E')) {
            self.reader.advance();
            match self.reader.current_byte() {
                Some(b'+' | b'-') => {
                    self.reader.advance();
                }
                Some(b) => {
                    return Err(self.error_here(
                        LexErrorKind::MalformedNumber,
                        format!("Expected [+-] after exponent `e`. Got `{}`", show_byte(b)),
                    ));
                }
                None => {
                    return Err(self.error_here(
                        LexErrorKind::MalformedNumber,
                        "Expected [+-] after exponent `e`",
                    ));
                }
            }
            if self.digit_run(is_digit) == 0 {
                return Err(self.error_here(
                    LexErrorKind::MalformedNumber,
                    "Expected digits after the exponent sign",
                ));
            }
        }

        // Imaginary suffix
        if matches!(self.reader.current_byte(), Some(b'j' | b'J')) {
            self.reader.advance();
        }

        Ok(TokenKind::Integer)
    }

    /// Consumes a run of class digits with `_` separators interleaved;
    /// returns the count of actual digits (separators excluded).
    fn digit_run(&mut self, is_class_digit: fn(u8) -> bool) -> usize {
        let mut count = 0;
        while let Some(b) = self.reader.current_byte() {
            if is_class_digit(b) {
                self.reader.advance();
                count += 1;
            } else if b == b'_' {
                self.reader.advance();
            } else {
                break;
            }
        }
        count
    }
}
