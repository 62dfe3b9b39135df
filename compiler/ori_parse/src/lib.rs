//! Recursive descent parser for Ori.
//!
//! Turns the lexer's token vector into a [`File`] AST plus a list of
//! diagnostics. Parsing never stops at the first error: each failed
//! production records a [`Diagnostic`], yields the `Bad` variant of its
//! node category spanning the offending tokens, and the parser skips ahead
//! to a synchronization point.
//!
//! # Organization
//!
//! - [`cursor`]: token navigation and lookahead
//! - [`recovery`]: token sets and skip routines for resynchronization
//! - `grammar`: the productions, split into expressions, statements,
//!   types and file-scope items

mod cursor;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use recovery::{synchronize, TokenSet};

use ori_diagnostic::{expected, illegal_token, Diagnostic, ErrorCode};
use ori_ir::{BadNode, File, Token, TokenKind};
use ori_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

/// Deepest nesting of expressions and statements the parser descends into.
///
/// Anything deeper is reported as E1015 and skipped, which keeps every
/// tree the parser returns shallow enough to dump, walk and drop.
pub const MAX_NESTING: u32 = 1000;

/// Result of parsing one token stream.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub file: File,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Parser state.
pub struct Parser {
    cursor: Cursor,
    /// Number of enclosing `for` bodies.
    loop_depth: u32,
    /// Number of enclosing expressions and statements.
    nesting: u32,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            loop_depth: 0,
            nesting: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parse a whole source file.
    pub fn parse_file(mut self) -> ParseOutput {
        let file = self.file();
        debug!(
            items = file.item_count(),
            diagnostics = self.diagnostics.len(),
            "parsed file"
        );
        ParseOutput {
            file,
            diagnostics: self.diagnostics,
        }
    }

    // Cursor delegation

    #[inline]
    fn peek(&self) -> &Token {
        self.cursor.peek()
    }

    #[inline]
    fn kind(&self) -> TokenKind {
        self.cursor.kind()
    }

    #[inline]
    fn next(&mut self) -> Token {
        self.cursor.next()
    }

    #[inline]
    fn matches(&mut self, kind: TokenKind) -> Option<Token> {
        self.cursor.matches(kind)
    }

    #[inline]
    fn nth_kind(&self, offset: usize) -> TokenKind {
        self.cursor.nth_kind(offset)
    }

    #[inline]
    fn newline_since_prev(&self) -> bool {
        self.cursor.newline_since_prev()
    }

    /// Run a recursive production one nesting level deeper.
    ///
    /// Past [`MAX_NESTING`] levels the production is not entered; the
    /// caller gets a bad node at the current token and skips the construct.
    fn descend<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Result<T, BadNode>,
    ) -> Result<T, BadNode> {
        if self.nesting >= MAX_NESTING {
            let diagnostic = Diagnostic::error(ErrorCode::E1015)
                .with_message(format!("nesting deeper than {MAX_NESTING} levels"))
                .with_token(self.peek().clone());
            return Err(self.fail_here(diagnostic));
        }
        self.nesting += 1;
        let result = ensure_sufficient_stack(|| production(self));
        self.nesting -= 1;
        result
    }

    // Error reporting

    /// Record `diagnostic` and build the bad node spanning `from..=to`.
    ///
    /// This is the only place bad nodes come from, so every bad node in the
    /// tree has a diagnostic behind it.
    fn fail(&mut self, diagnostic: Diagnostic, from: Token, to: Token) -> BadNode {
        trace!(
            code = %diagnostic.code,
            line = diagnostic.got.line,
            column = diagnostic.got.column,
            message = %diagnostic.message,
            "syntax error"
        );
        let reason = diagnostic.message.clone();
        self.diagnostics.push(diagnostic);
        BadNode::new(from, to, reason)
    }

    /// Fail at the current token without consuming it.
    fn fail_here(&mut self, diagnostic: Diagnostic) -> BadNode {
        let here = self.peek().clone();
        self.fail(diagnostic, here.clone(), here)
    }

    /// `expected {what}` at the current token, or the lexical error an
    /// `Illegal` token stands for.
    fn expected_here(&self, code: ErrorCode, what: &str) -> Diagnostic {
        let got = self.peek();
        if got.kind == TokenKind::Illegal {
            illegal_token(got)
        } else {
            expected(code, what, got)
        }
    }

    /// Step over the token an error was reported at, unless recovery needs
    /// to see it: closing delimiters, `{`, and keywords that may start the
    /// next statement or declaration.
    fn skip_unexpected(&mut self) {
        let kind = self.kind();
        if !kind.is_closing() && !kind.is_keyword() && kind != TokenKind::LBrace {
            self.next();
        }
    }

    /// Consume a token of `kind`, or report `expected {what}` and step over
    /// the offending token (see [`Parser::skip_unexpected`]).
    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, BadNode> {
        if self.kind() == kind {
            return Ok(self.next());
        }
        let diagnostic = self.expected_here(ErrorCode::E1001, what);
        let bad = self.fail_here(diagnostic);
        self.skip_unexpected();
        Err(bad)
    }

    fn expect_ident(&mut self, what: &str) -> Result<Token, BadNode> {
        if self.kind() == TokenKind::Ident {
            return Ok(self.next());
        }
        let diagnostic = self.expected_here(ErrorCode::E1003, what);
        let bad = self.fail_here(diagnostic);
        self.skip_unexpected();
        Err(bad)
    }

    /// Stretch `bad` so it starts at `from` and ends no earlier than the
    /// last consumed token.
    fn cover(&self, from: &Token, bad: BadNode) -> BadNode {
        let mut to = bad.to;
        for candidate in [self.cursor.prev(), from] {
            if candidate.pos() > to.pos() {
                to = candidate.clone();
            }
        }
        BadNode::new(from.clone(), to, bad.reason)
    }
}

/// Parse a token stream produced by [`ori_lexer::lex`].
pub fn parse(tokens: Vec<Token>) -> ParseOutput {
    Parser::new(tokens).parse_file()
}

/// Lex and parse `source` in one step.
pub fn parse_source(source: &str) -> ParseOutput {
    parse(ori_lexer::lex(source))
}

#[cfg(test)]
mod tests;
