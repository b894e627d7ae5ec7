use ember::frontend::lexer::Lexer;
use insta::assert_snapshot;

fn tokenize_to_string(input: &str) -> String {
    let mut lexer = Lexer::new(input, "snap.em");
    let tokens = lexer.tokenize().expect("snapshot inputs lex cleanly");

    let lines: Vec<String> = tokens
        .iter()
        .map(|token| {
            format!(
                "{}:{} {} {:?}",
                token.position.line, token.position.column, token.kind, token.literal
            )
        })
        .collect();
    lines.join("\n")
}

#[test]
fn snapshot_simple_assignment() {
    let output = tokenize_to_string("x = 42");
    assert_snapshot!(output, @r#"
1:1 IDENT "x"
1:3 = "="
1:5 INT "42"
1:7 EOF ""
"#);
}

#[test]
fn snapshot_radix_literals() {
    let output = tokenize_to_string("0xFF + 0b10");
    assert_snapshot!(output, @r#"
1:1 HEX_INT "0xFF"
1:6 + "+"
1:8 BIN_INT "0b10"
1:12 EOF ""
"#);
}

#[test]
fn snapshot_control_flow() {
    let output = tokenize_to_string("if x { return }");
    assert_snapshot!(output, @r#"
1:1 if "if"
1:4 IDENT "x"
1:6 { "{"
1:8 return "return"
1:15 } "}"
1:16 EOF ""
"#);
}

#[test]
fn snapshot_comment_then_keyword() {
    let output = tokenize_to_string("// note\nreturn");
    assert_snapshot!(output, @r#"
1:3 COMMENT " note"
2:1 return "return"
2:7 EOF ""
"#);
}

#[test]
fn snapshot_macro_and_string() {
    let output = tokenize_to_string("@inline \"hi\"");
    assert_snapshot!(output, @r#"
1:1 MACRO "inline"
1:9 STRING "hi"
1:13 EOF ""
"#);
}

#[test]
fn snapshot_lex_error_rendering() {
    let mut lexer = Lexer::new("0z", "snap.em");
    let err = lexer.tokenize().expect_err("bad leading zero");
    assert_snapshot!(
        err.to_string(),
        @"SyntaxError: Invalid character `z` after `0`. Expected a radix marker [xXoObB] at snap.em:1:2"
    );
}
