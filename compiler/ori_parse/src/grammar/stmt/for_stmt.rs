//! `for` loops.
//!
//! The header is scanned up to its `{` once to pick the form:
//! `for { }`, `for ... range X { }`, `for INIT; COND; POST { }` or
//! `for COND { }`.

use ori_diagnostic::{Diagnostic, ErrorCode};
use ori_ir::ast::{BlockStmt, ForStmt, RangeStmt};
use ori_ir::{BadNode, Positioned, Precedence, Stmt, Token, TokenKind};

use crate::recovery::skip_compound;
use crate::Parser;

/// Which clause of a three-clause header is being parsed.
#[derive(Copy, Clone, PartialEq, Eq)]
enum Clause {
    Init,
    Post,
}

impl Parser {
    /// A broken loop is skipped through its body so the header's `;`
    /// separators are not mistaken for statement ends.
    pub(super) fn parse_for(&mut self) -> Result<Stmt, BadNode> {
        let for_kw = self.next();
        self.parse_for_forms(for_kw.clone()).map_err(|bad| {
            skip_compound(&mut self.cursor);
            self.cover(&for_kw, bad)
        })
    }

    fn parse_for_forms(&mut self, for_kw: Token) -> Result<Stmt, BadNode> {
        if self.kind() == TokenKind::LBrace {
            let body = self.parse_loop_body()?;
            return Ok(Stmt::For(ForStmt {
                for_kw,
                init: None,
                condition: None,
                post: None,
                body,
            }));
        }
        if self.cursor.header_contains(TokenKind::Range) {
            return self.parse_range(for_kw);
        }
        if self.cursor.header_contains(TokenKind::Semicolon) {
            return self.parse_three_clause(for_kw);
        }

        let condition = self.parse_expr(Precedence::Lowest);
        let body = self.parse_loop_body()?;
        Ok(Stmt::For(ForStmt {
            for_kw,
            init: None,
            condition: Some(condition),
            post: None,
            body,
        }))
    }

    /// Parse a loop body one level deeper, restoring the depth on every path.
    fn parse_loop_body(&mut self) -> Result<BlockStmt, BadNode> {
        self.loop_depth += 1;
        let body = self.parse_block();
        self.loop_depth -= 1;
        body
    }

    /// `for [KEY [, VALUE] (:= | =)] range X { }`
    fn parse_range(&mut self, for_kw: Token) -> Result<Stmt, BadNode> {
        let (key, value, op) = if self.kind() == TokenKind::Range {
            (None, None, None)
        } else {
            let key = self.parse_expr(Precedence::Lowest);
            let value = self
                .matches(TokenKind::Comma)
                .map(|_| self.parse_expr(Precedence::Lowest));
            let op = match self.kind() {
                TokenKind::Define | TokenKind::Assign => self.next(),
                _ => {
                    let diagnostic = self.expected_here(ErrorCode::E1001, "':=' or '=' before 'range'");
                    let got = self.peek().clone();
                    return Err(self.fail(diagnostic, for_kw, got));
                }
            };
            (Some(key), value, Some(op))
        };

        let range_kw = self.expect(TokenKind::Range, "'range'")?;
        let x = self.parse_expr(Precedence::Lowest);
        let body = self.parse_loop_body()?;
        Ok(Stmt::Range(RangeStmt {
            for_kw,
            key,
            value,
            op,
            range_kw,
            x,
            body,
        }))
    }

    /// `for [INIT]; [COND]; [POST] { }`
    fn parse_three_clause(&mut self, for_kw: Token) -> Result<Stmt, BadNode> {
        let init = if self.kind() == TokenKind::Semicolon {
            None
        } else {
            Some(Box::new(self.parse_for_clause(Clause::Init)?))
        };
        self.expect(TokenKind::Semicolon, "';' after for init")?;

        let condition = if self.kind() == TokenKind::Semicolon {
            None
        } else {
            Some(self.parse_expr(Precedence::Lowest))
        };
        self.expect(TokenKind::Semicolon, "';' after for condition")?;

        let post = if self.kind() == TokenKind::LBrace {
            None
        } else {
            Some(Box::new(self.parse_for_clause(Clause::Post)?))
        };

        let body = self.parse_loop_body()?;
        Ok(Stmt::For(ForStmt {
            for_kw,
            init,
            condition,
            post,
            body,
        }))
    }

    /// Init takes an assignment or a call; post also takes `x++` / `x--`.
    fn parse_for_clause(&mut self, clause: Clause) -> Result<Stmt, BadNode> {
        let stmt = self.parse_simple_stmt()?;
        let allowed = match &stmt {
            Stmt::Assign(_) => true,
            Stmt::IncDec(_) => clause == Clause::Post,
            other => other.is_call(),
        };
        if allowed {
            return Ok(stmt);
        }

        let what = match clause {
            Clause::Init => "init",
            Clause::Post => "post",
        };
        let diagnostic = Diagnostic::error(ErrorCode::E1011)
            .with_message(format!("invalid for {what} statement"))
            .with_token(stmt.start().clone());
        Err(self.fail(diagnostic, stmt.start().clone(), stmt.end().clone()))
    }
}
