#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn values(source: &str) -> Vec<String> {
    lex(source).into_iter().map(|t| t.value).collect()
}

#[test]
fn test_lex_package_clause() {
    let tokens = lex("package main");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Package, "package", 1, 1),
            Token::new(TokenKind::Ident, "main", 1, 9),
            Token::new(TokenKind::Eof, "", 1, 13),
        ]
    );
}

#[test]
fn test_newlines_advance_line_and_reset_column() {
    let tokens = lex("package main\nfunc main() {}\n");
    let func = &tokens[2];
    assert_eq!((func.kind, func.line, func.column), (TokenKind::Func, 2, 1));
    let rbrace = &tokens[7];
    assert_eq!((rbrace.kind, rbrace.line, rbrace.column), (TokenKind::RBrace, 2, 14));
    let eof = tokens.last().unwrap();
    assert_eq!((eof.kind, eof.line, eof.column), (TokenKind::Eof, 3, 1));
}

#[test]
fn test_empty_source_is_just_eof() {
    assert_eq!(lex(""), vec![Token::new(TokenKind::Eof, "", 1, 1)]);
}

#[test]
fn test_single_and_double_char_operators() {
    assert_eq!(
        kinds("+ += ++ - -= -- * *= / /= % = == ! != < <= > >= := : && || |"),
        vec![
            TokenKind::Plus,
            TokenKind::PlusEq,
            TokenKind::Inc,
            TokenKind::Minus,
            TokenKind::MinusEq,
            TokenKind::Dec,
            TokenKind::Star,
            TokenKind::StarEq,
            TokenKind::Slash,
            TokenKind::SlashEq,
            TokenKind::Modulo,
            TokenKind::Assign,
            TokenKind::Eq,
            TokenKind::Not,
            TokenKind::Neq,
            TokenKind::Lt,
            TokenKind::Lte,
            TokenKind::Gt,
            TokenKind::Gte,
            TokenKind::Define,
            TokenKind::Colon,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Pipe,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_chained_stars_advance() {
    assert_eq!(
        kinds("a**b"),
        vec![
            TokenKind::Ident,
            TokenKind::Star,
            TokenKind::Star,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_brackets_and_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] , ; ."),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Dot,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_and_identifiers() {
    assert_eq!(
        kinds("func Func funcs _x int8 true false"),
        vec![
            TokenKind::Func,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Int8,
            TokenKind::BoolLit,
            TokenKind::BoolLit,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_underscore_led_number_is_identifier() {
    assert_eq!(kinds("_123"), vec![TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn test_float_with_comma_separators_is_one_token() {
    let tokens = lex("3.141,592,653,59");
    assert_eq!(tokens[0].kind, TokenKind::FloatLit);
    assert_eq!(tokens[0].value, "3.141,592,653,59");
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_comma_without_digit_ends_number() {
    assert_eq!(
        kinds("3.141,"),
        vec![TokenKind::FloatLit, TokenKind::Comma, TokenKind::Eof]
    );
    assert_eq!(
        kinds("f(1, 2)"),
        vec![
            TokenKind::Ident,
            TokenKind::LParen,
            TokenKind::IntLit,
            TokenKind::Comma,
            TokenKind::IntLit,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_malformed_numbers_are_illegal() {
    for source in ["3.141.592", "3.141.", "12_", ".5"] {
        let tokens = lex(source);
        assert_eq!(tokens[0].kind, TokenKind::Illegal, "{source}");
        assert_eq!(tokens[0].value, source);
    }
}

#[test]
fn test_string_keeps_quotes() {
    let tokens = lex(r#"x := "hello world""#);
    assert_eq!(tokens[2].kind, TokenKind::StringLit);
    assert_eq!(tokens[2].value, "\"hello world\"");
    assert_eq!(tokens[2].column, 6);
}

#[test]
fn test_unterminated_string_is_illegal_to_end_of_line() {
    let tokens = lex("\"test\nx");
    assert_eq!(tokens[0], Token::new(TokenKind::Illegal, "\"test", 1, 1));
    assert_eq!(tokens[1], Token::new(TokenKind::Ident, "x", 2, 1));
}

#[test]
fn test_comments_run_to_end_of_line() {
    let tokens = lex("a // note * here\r\nb");
    assert_eq!(
        values("a // note * here\r\nb"),
        vec!["a", "// note * here", "b", ""]
    );
    assert_eq!(tokens[1].kind, TokenKind::Comment);
    assert_eq!(tokens[2].line, 2);
}

#[test]
fn test_stray_bytes_become_one_illegal_per_character() {
    let tokens = lex("a & b é#");
    let illegal: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Illegal)
        .map(|t| (t.value.as_str(), t.column))
        .collect();
    assert_eq!(illegal, vec![("&", 3), ("é", 7), ("#", 9)]);
}

#[test]
fn test_tabs_count_as_one_column() {
    let tokens = lex("\tx");
    assert_eq!(tokens[0].column, 2);
}

proptest! {
    #[test]
    fn lexing_never_panics_and_ends_with_eof(source in "\\PC{0,200}") {
        let tokens = lex(&source);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
    }

    #[test]
    fn positions_are_monotonic(source in "[a-z0-9 (){};:=+*<>.,\"\n\t-]{0,120}") {
        let tokens = lex(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].pos() < pair[1].pos(), "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn relexing_joined_values_keeps_kinds(
        words in prop::collection::vec(
            prop_oneof![
                "[a-z][a-z0-9]{0,6}",
                "[0-9]{1,4}",
                "[0-9]{1,3}\\.[0-9]{1,3}",
                Just("(".to_string()),
                Just(")".to_string()),
                Just("{".to_string()),
                Just("}".to_string()),
                Just("==".to_string()),
                Just(":=".to_string()),
                Just("+".to_string()),
                Just("\"s t r\"".to_string()),
            ],
            0..30,
        )
    ) {
        let source = words.join(" ");
        let first: Vec<_> = lex(&source).into_iter().map(|t| t.kind).collect();
        let joined = lex(&source)
            .into_iter()
            .filter(|t| t.kind != TokenKind::Eof)
            .map(|t| t.value)
            .collect::<Vec<_>>()
            .join(" ");
        let second: Vec<_> = lex(&joined).into_iter().map(|t| t.kind).collect();
        prop_assert_eq!(first, second);
    }
}
