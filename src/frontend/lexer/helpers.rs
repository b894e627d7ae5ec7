//! Byte classifiers for lexing

/// Letter for identifier purposes (ASCII alphabetic, no underscore).
pub(super) fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// First byte of an identifier.
pub(super) fn is_ident_start(b: u8) -> bool {
    is_letter(b) || b == b'_'
}

pub(super) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

pub(super) fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

pub(super) fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

pub(super) fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

/// Whitespace that does not terminate a line: space, tab, vertical tab,
/// form feed. Carriage returns never reach this set; they are claimed
/// by newline recognition first.
pub(super) fn is_whitespace_no_newline(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C)
}

/// Printable form of a byte for error messages.
pub(super) fn show_byte(b: u8) -> String {
    if b.is_ascii_graphic() {
        (b as char).to_string()
    } else {
        format!("0x{:02X}", b)
    }
}

/// First byte of an operator, separator, or delimiter cluster.
pub(super) fn is_operator_start(b: u8) -> bool {
    matches!(
        b,
        b'=' | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'!'
            | b'&'
            | b'|'
            | b'^'
            | b'~'
            | b'<'
            | b'>'
            | b'.'
            | b':'
            | b';'
            | b','
            | b'\\'
            | b'?'
            | b'['
            | b']'
            | b'{'
            | b'}'
            | b'('
            | b')'
    )
}
