use std::collections::HashSet;

use ember::frontend::token_type::{KEYWORDS, TokenKind, lookup_ident};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_every_keyword() {
        for &kind in KEYWORDS {
            let spelling = kind.spelling();
            assert!(!spelling.is_empty(), "keyword {:?} needs a spelling", kind);
            assert_eq!(lookup_ident(spelling), kind);
        }
    }

    #[test]
    fn lookup_is_byte_for_byte() {
        assert_eq!(lookup_ident("return"), TokenKind::Return);
        assert_eq!(lookup_ident("Return"), TokenKind::Ident);
        assert_eq!(lookup_ident("returning"), TokenKind::Ident);
        assert_eq!(lookup_ident("retur"), TokenKind::Ident);
        assert_eq!(lookup_ident(""), TokenKind::Ident);
    }

    #[test]
    fn keyword_predicate_matches_the_table() {
        for &kind in KEYWORDS {
            assert!(kind.is_keyword());
        }
        assert!(!TokenKind::Ident.is_keyword());
        assert!(!TokenKind::Integer.is_keyword());
        assert!(!TokenKind::Plus.is_keyword());
        assert!(!TokenKind::Eof.is_keyword());
        assert!(!TokenKind::Macro.is_keyword());
    }

    #[test]
    fn variable_spelling_kinds_have_empty_spellings() {
        for kind in [
            TokenKind::Illegal,
            TokenKind::Eof,
            TokenKind::Comment,
            TokenKind::Ident,
            TokenKind::Integer,
            TokenKind::HexInt,
            TokenKind::OctInt,
            TokenKind::BinInt,
            TokenKind::Str,
            TokenKind::Char,
            TokenKind::Macro,
        ] {
            assert_eq!(kind.spelling(), "", "{:?}", kind);
        }
    }

    #[test]
    fn operator_spellings() {
        assert_eq!(TokenKind::Assign.spelling(), "=");
        assert_eq!(TokenKind::Eq.spelling(), "==");
        assert_eq!(TokenKind::FatArrow.spelling(), "=>");
        assert_eq!(TokenKind::ShlEq.spelling(), "<<=");
        assert_eq!(TokenKind::ShrEq.spelling(), ">>=");
        assert_eq!(TokenKind::AmpCaret.spelling(), "&^");
        assert_eq!(TokenKind::Ellipsis.spelling(), "...");
        assert_eq!(TokenKind::LArrow.spelling(), "<-");
        assert_eq!(TokenKind::RArrow.spelling(), "->");
        assert_eq!(TokenKind::Backslash.spelling(), "\\");
    }

    #[test]
    fn non_empty_spellings_are_unique() {
        let all = [
            TokenKind::Assign,
            TokenKind::Eq,
            TokenKind::FatArrow,
            TokenKind::Bang,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Lte,
            TokenKind::Gt,
            TokenKind::Gte,
            TokenKind::Plus,
            TokenKind::PlusPlus,
            TokenKind::PlusEq,
            TokenKind::Minus,
            TokenKind::MinusMinus,
            TokenKind::MinusEq,
            TokenKind::Asterisk,
            TokenKind::Power,
            TokenKind::AsteriskEq,
            TokenKind::Slash,
            TokenKind::SlashEq,
            TokenKind::Percent,
            TokenKind::PercentPercent,
            TokenKind::PercentEq,
            TokenKind::Amp,
            TokenKind::AmpAmp,
            TokenKind::AmpCaret,
            TokenKind::AmpEq,
            TokenKind::Pipe,
            TokenKind::PipePipe,
            TokenKind::PipeEq,
            TokenKind::Caret,
            TokenKind::CaretEq,
            TokenKind::Tilde,
            TokenKind::TildeEq,
            TokenKind::Shl,
            TokenKind::ShlEq,
            TokenKind::Shr,
            TokenKind::ShrEq,
            TokenKind::RArrow,
            TokenKind::LArrow,
            TokenKind::Dot,
            TokenKind::DotDot,
            TokenKind::Ellipsis,
            TokenKind::Colon,
            TokenKind::ColonColon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Backslash,
            TokenKind::Question,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LParen,
            TokenKind::RParen,
        ];

        let mut seen = HashSet::new();
        for kind in all {
            assert!(
                seen.insert(kind.spelling()),
                "duplicate spelling {:?}",
                kind.spelling()
            );
        }
        for &kind in KEYWORDS {
            assert!(
                seen.insert(kind.spelling()),
                "keyword collides with an operator spelling: {:?}",
                kind
            );
        }
    }

    #[test]
    fn display_tags_variable_kinds() {
        assert_eq!(TokenKind::Ident.to_string(), "IDENT");
        assert_eq!(TokenKind::Integer.to_string(), "INT");
        assert_eq!(TokenKind::HexInt.to_string(), "HEX_INT");
        assert_eq!(TokenKind::Str.to_string(), "STRING");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        assert_eq!(TokenKind::Comment.to_string(), "COMMENT");
        assert_eq!(TokenKind::Plus.to_string(), "+");
        assert_eq!(TokenKind::Return.to_string(), "return");
    }
}
