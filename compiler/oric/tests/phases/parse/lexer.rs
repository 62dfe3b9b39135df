use ori_ir::TokenKind;
use pretty_assertions::assert_eq;

use crate::common::{kinds, parse_ok};

#[test]
fn test_comments_are_tokens_but_not_syntax() {
    let source = "package main // entry\n// nothing here\nfunc main() {}\n";
    let lexed = kinds(source);
    assert_eq!(
        lexed.iter().filter(|&&k| k == TokenKind::Comment).count(),
        2
    );

    let output = parse_ok(source);
    assert_eq!(output.file.decls.len(), 1);
}

#[test]
fn test_call_arguments_and_separated_numbers() {
    use TokenKind::{Comma, FloatLit, Ident, IntLit, LParen, RParen};
    assert_eq!(
        kinds("f(1, 2, 3.141,592)"),
        vec![Ident, LParen, IntLit, Comma, IntLit, Comma, FloatLit, RParen, TokenKind::Eof]
    );
}

#[test]
fn test_positions_across_lines() {
    let tokens = ori_lexer::lex("package main\n\nfunc  f() {}\n");
    let func = tokens.iter().find(|t| t.kind == TokenKind::Func).unwrap();
    assert_eq!((func.line, func.column), (3, 1));
    let name = tokens.iter().find(|t| t.value == "f").unwrap();
    assert_eq!((name.line, name.column), (3, 7));
}
