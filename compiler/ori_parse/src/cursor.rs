//! Token cursor for navigating the token stream.
//!
//! Owns the parser's view of the tokens: comments are dropped on
//! construction and the stream always ends in exactly one EOF token, so
//! every lookahead has an answer.

use ori_ir::{Token, TokenKind};

/// Cursor over a comment-free, EOF-terminated token vector.
///
/// Invariant: `pos < tokens.len()` and the last token is EOF.
pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Build a cursor, dropping comments and anything after the first EOF.
    ///
    /// A stream without an EOF gets one placed just past its last token.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|token| token.kind != TokenKind::Comment)
            .collect();

        if let Some(eof) = tokens.iter().position(|token| token.kind == TokenKind::Eof) {
            tokens.truncate(eof + 1);
        } else {
            let eof = match tokens.last() {
                Some(last) => {
                    let end = last.end_pos();
                    Token::new(TokenKind::Eof, "", end.line, end.column)
                }
                None => Token::synthetic(TokenKind::Eof),
            };
            tokens.push(eof);
        }

        Cursor { tokens, pos: 0 }
    }

    /// Index of the current token.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Kind of the token `offset` places ahead; `nth_kind(0)` is the
    /// current one. Lookahead past the end reads EOF.
    pub fn nth_kind(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos.saturating_add(offset))
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    /// The last consumed token, or the current one before anything was
    /// consumed.
    pub fn prev(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    #[inline]
    pub fn at_eof(&self) -> bool {
        self.kind() == TokenKind::Eof
    }

    /// Return the current token and advance. EOF is never consumed.
    pub fn next(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn matches(&mut self, kind: TokenKind) -> Option<Token> {
        if self.kind() == kind {
            Some(self.next())
        } else {
            None
        }
    }

    /// True when the current token starts a later line than the previous one.
    pub fn newline_since_prev(&self) -> bool {
        self.pos > 0 && self.tokens[self.pos].line > self.tokens[self.pos - 1].line
    }

    /// Whether `kind` occurs between here and the next `{` (or EOF).
    ///
    /// Used to pick the shape of `for` and `switch` headers before parsing
    /// them.
    pub fn header_contains(&self, kind: TokenKind) -> bool {
        self.tokens[self.pos..]
            .iter()
            .map(|token| token.kind)
            .take_while(|&k| k != TokenKind::LBrace && k != TokenKind::Eof)
            .any(|k| k == kind)
    }
}

#[cfg(test)]
mod tests;
