#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn cursor(source: &str) -> Cursor {
    Cursor::new(ori_lexer::lex(source))
}

#[test]
fn test_comments_are_dropped() {
    let c = cursor("a // note\nb");
    assert_eq!(c.nth_kind(0), TokenKind::Ident);
    assert_eq!(c.nth_kind(1), TokenKind::Ident);
    assert_eq!(c.nth_kind(2), TokenKind::Eof);
}

#[test]
fn test_next_stops_at_eof() {
    let mut c = cursor("x");
    assert_eq!(c.next().value, "x");
    assert!(c.at_eof());
    assert_eq!(c.next().kind, TokenKind::Eof);
    assert_eq!(c.next().kind, TokenKind::Eof);
    assert_eq!(c.position(), 1);
}

#[test]
fn test_lookahead_is_clamped_to_eof() {
    let c = cursor("a b");
    assert_eq!(c.nth_kind(100), TokenKind::Eof);
    assert_eq!(c.nth_kind(usize::MAX), TokenKind::Eof);
}

#[test]
fn test_missing_eof_is_synthesized_after_last_token() {
    let mut c = Cursor::new(vec![Token::new(TokenKind::Ident, "abc", 2, 4)]);
    c.next();
    assert_eq!(c.peek(), &Token::new(TokenKind::Eof, "", 2, 7));

    let empty = Cursor::new(Vec::new());
    assert!(empty.at_eof());
    assert!(empty.peek().is_synthetic());
}

#[test]
fn test_tokens_after_eof_are_ignored() {
    let tokens = vec![
        Token::new(TokenKind::Eof, "", 1, 1),
        Token::new(TokenKind::Ident, "ghost", 1, 2),
    ];
    let c = Cursor::new(tokens);
    assert!(c.at_eof());
    assert_eq!(c.nth_kind(1), TokenKind::Eof);
}

#[test]
fn test_matches_consumes_only_on_hit() {
    let mut c = cursor("( x");
    assert!(c.matches(TokenKind::RParen).is_none());
    assert_eq!(c.position(), 0);
    assert_eq!(c.matches(TokenKind::LParen).map(|t| t.value), Some("(".into()));
    assert_eq!(c.position(), 1);
}

#[test]
fn test_newline_since_prev() {
    let mut c = cursor("a b\nc");
    assert!(!c.newline_since_prev());
    c.next();
    assert!(!c.newline_since_prev());
    c.next();
    assert!(c.newline_since_prev());
}

#[test]
fn test_prev_tracks_last_consumed() {
    let mut c = cursor("a b");
    assert_eq!(c.prev().value, "a");
    c.next();
    assert_eq!(c.prev().value, "a");
    c.next();
    assert_eq!(c.prev().value, "b");
}

#[test]
fn test_header_scan_stops_at_lbrace() {
    let c = cursor("k, v := range xs { ; }");
    assert!(c.header_contains(TokenKind::Range));
    assert!(!c.header_contains(TokenKind::Semicolon));

    let c = cursor("i := 0; i < n; i++ {");
    assert!(c.header_contains(TokenKind::Semicolon));
    assert!(!c.header_contains(TokenKind::Range));
}
