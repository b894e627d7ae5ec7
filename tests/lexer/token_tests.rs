use std::sync::Arc;

use ember::frontend::position::Position;
use ember::frontend::token::Token;
use ember::frontend::token_type::TokenKind;

#[cfg(test)]
mod tests {
    use super::*;

    fn file() -> Arc<str> {
        Arc::from("main.em")
    }

    #[test]
    fn token_new() {
        let tok = Token::new(TokenKind::Ident, "foo", 4, Position::new(1, 5), file());
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.literal, "foo");
        assert_eq!(tok.offset, 4);
        assert_eq!(tok.position.line, 1);
        assert_eq!(tok.position.column, 5);
        assert_eq!(&*tok.file, "main.em");
    }

    #[test]
    fn fixed_tokens_take_their_canonical_spelling() {
        let tok = Token::fixed(TokenKind::ShrEq, 0, Position::new(1, 1), file());
        assert_eq!(tok.literal, ">>=");

        let tok = Token::fixed(TokenKind::Return, 0, Position::new(1, 1), file());
        assert_eq!(tok.literal, "return");

        let tok = Token::fixed(TokenKind::Eof, 0, Position::new(1, 1), file());
        assert_eq!(tok.literal, "");
    }

    #[test]
    fn token_display() {
        let tok = Token::new(TokenKind::Return, "return", 0, Position::new(1, 5), file());
        let s = format!("{}", tok);
        assert!(s.contains("return"));
        assert!(s.contains("1:5"));
    }

    #[test]
    fn keyword_kinds_know_themselves() {
        let ret = Token::fixed(TokenKind::Return, 0, Position::new(1, 1), file());
        assert!(ret.kind.is_keyword());

        let ident = Token::new(TokenKind::Ident, "foo", 0, Position::new(1, 1), file());
        assert!(!ident.kind.is_keyword());

        let plus = Token::fixed(TokenKind::Plus, 0, Position::new(1, 1), file());
        assert!(!plus.kind.is_keyword());
    }

    #[test]
    fn tokens_serialize_for_dumps() {
        let tok = Token::new(TokenKind::Integer, "42", 4, Position::new(1, 5), file());
        let value = serde_json::to_value(&tok).expect("token serializes");

        assert_eq!(value["kind"], "Integer");
        assert_eq!(value["literal"], "42");
        assert_eq!(value["offset"], 4);
        assert_eq!(value["position"]["line"], 1);
        assert_eq!(value["position"]["column"], 5);
        assert_eq!(value["file"], "main.em");
    }
}
