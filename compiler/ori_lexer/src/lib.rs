//! Lexer for Ori using logos.
//!
//! Produces a `Vec<Token>` terminated by an EOF token. The lexer never
//! fails: malformed lexemes and stray characters become
//! [`TokenKind::Illegal`] tokens carrying the offending text so the parser
//! can report them at the right position.

mod number;

use logos::Logos;
use ori_ir::{Token, TokenKind};
use tracing::debug;

pub use number::classify_number;

/// Raw token from logos, before keyword resolution and number checks.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip horizontal whitespace
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("|")]
    Pipe,

    // Assignment
    #[token("=")]
    Assign,
    #[token(":=")]
    Define,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,

    // Arithmetic
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Modulo,
    #[token("++")]
    Inc,
    #[token("--")]
    Dec,

    // Comparison
    #[token("==")]
    Eq,
    #[token("!=")]
    Neq,
    #[token("<")]
    Lt,
    #[token("<=")]
    Lte,
    #[token(">")]
    Gt,
    #[token(">=")]
    Gte,

    // Logical
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("!")]
    Not,

    // A digit (or a dot followed by a digit), then digits, dots and `_`.
    // A `,` separator only continues the run when a digit follows it.
    #[regex(r"([0-9]|\.[0-9])([0-9._]|,[0-9])*")]
    Number,

    // String literal; no escapes, no newlines
    #[regex(r#""[^"\r\n]*""#)]
    String,

    // Opening quote with no closing quote on the same line
    #[regex(r#""[^"\r\n]*"#)]
    UnterminatedString,

    // Identifier or keyword
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Tracks the 1-based line and the byte offset where it starts.
struct LineMap {
    line: u32,
    line_start: usize,
}

impl LineMap {
    fn new() -> Self {
        LineMap {
            line: 1,
            line_start: 0,
        }
    }

    fn newline(&mut self, end: usize) {
        self.line += 1;
        self.line_start = end;
    }

    fn column(&self, offset: usize) -> u32 {
        u32::try_from(offset - self.line_start + 1).unwrap_or(u32::MAX)
    }
}

/// Lex source code into tokens.
///
/// Newlines produce no token; they only advance the line counter. Comments
/// are kept as [`TokenKind::Comment`] tokens. The last token is always EOF,
/// placed one column past the last character of the last line.
pub fn lex(source: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut lines = LineMap::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = logos.span();
        let slice = logos.slice();
        let column = lines.column(span.start);

        match token_result {
            Ok(RawToken::Newline) => lines.newline(span.end),
            Ok(RawToken::LineComment) => {
                let text = slice.strip_suffix('\r').unwrap_or(slice);
                result.push(Token::new(TokenKind::Comment, text, lines.line, column));
            }
            Ok(raw) => {
                let kind = convert_token(raw, slice);
                result.push(Token::new(kind, slice, lines.line, column));
            }
            Err(()) => {
                // One Illegal token per stray character
                for (offset, ch) in slice.char_indices() {
                    result.push(Token::new(
                        TokenKind::Illegal,
                        ch.to_string(),
                        lines.line,
                        lines.column(span.start + offset),
                    ));
                }
            }
        }
    }

    result.push(Token::new(
        TokenKind::Eof,
        "",
        lines.line,
        lines.column(source.len()),
    ));

    debug!(tokens = result.len(), lines = lines.line, "lexed source");
    result
}

/// Resolve a raw token to its final kind.
fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Pipe => TokenKind::Pipe,

        RawToken::Assign => TokenKind::Assign,
        RawToken::Define => TokenKind::Define,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::SlashEq => TokenKind::SlashEq,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Modulo => TokenKind::Modulo,
        RawToken::Inc => TokenKind::Inc,
        RawToken::Dec => TokenKind::Dec,

        RawToken::Eq => TokenKind::Eq,
        RawToken::Neq => TokenKind::Neq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Lte => TokenKind::Lte,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Gte => TokenKind::Gte,

        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Not => TokenKind::Not,

        RawToken::Number => classify_number(slice),
        RawToken::String => TokenKind::StringLit,
        RawToken::UnterminatedString => TokenKind::Illegal,
        RawToken::Ident => TokenKind::keyword(slice).unwrap_or(TokenKind::Ident),

        // Handled by `lex` before conversion
        RawToken::LineComment => TokenKind::Comment,
        RawToken::Newline => TokenKind::Illegal,
    }
}

#[cfg(test)]
mod tests;
