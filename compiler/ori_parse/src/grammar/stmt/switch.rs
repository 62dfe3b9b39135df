//! `switch` statements.

use ori_diagnostic::{Diagnostic, ErrorCode};
use ori_ir::ast::{CaseClause, SwitchStmt};
use ori_ir::{BadNode, Positioned, Precedence, Stmt, Token, TokenKind};

use crate::recovery::{skip_compound, synchronize, CASE_BOUNDARY};
use crate::Parser;

impl Parser {
    /// `switch [INIT ;] [TAG] { case ...: ... default: ... }`
    pub(super) fn parse_switch(&mut self) -> Result<Stmt, BadNode> {
        let switch_kw = self.next();
        self.parse_switch_rest(switch_kw.clone()).map_err(|bad| {
            skip_compound(&mut self.cursor);
            self.cover(&switch_kw, bad)
        })
    }

    fn parse_switch_rest(&mut self, switch_kw: Token) -> Result<Stmt, BadNode> {
        let init = if self.cursor.header_contains(TokenKind::Semicolon) {
            let init = self.parse_simple_stmt()?;
            self.expect(TokenKind::Semicolon, "';' after switch init")?;
            Some(Box::new(init))
        } else {
            None
        };
        let tag = if self.kind() == TokenKind::LBrace {
            None
        } else {
            Some(self.parse_expr(Precedence::Lowest))
        };

        let lbrace = self.expect(TokenKind::LBrace, "'{'")?;
        let cases = self.parse_cases();
        let rbrace = self
            .expect(TokenKind::RBrace, "'}'")
            .map_err(|bad| self.cover(&switch_kw, bad))?;

        Ok(Stmt::Switch(SwitchStmt {
            switch_kw,
            init,
            tag,
            lbrace,
            cases,
            rbrace,
        }))
    }

    /// Clauses up to the closing `}`. A second `default` is reported and
    /// replaced by a bad statement.
    fn parse_cases(&mut self) -> Vec<Stmt> {
        let mut cases = Vec::new();
        let mut seen_default = false;

        loop {
            match self.kind() {
                TokenKind::RBrace | TokenKind::Eof => return cases,
                TokenKind::Semicolon => {
                    self.next();
                }
                TokenKind::Case | TokenKind::Default => {
                    let start = self.peek().clone();
                    let case = match self.parse_case_clause() {
                        Ok(clause) if clause.is_default() && seen_default => {
                            let diagnostic = Diagnostic::error(ErrorCode::E1010)
                                .with_message("multiple defaults in switch")
                                .with_token(clause.case_kw.clone());
                            let to = clause.end().clone();
                            Stmt::Bad(self.fail(diagnostic, clause.case_kw, to))
                        }
                        Ok(clause) => {
                            seen_default |= clause.is_default();
                            Stmt::Case(clause)
                        }
                        Err(bad) => {
                            synchronize(&mut self.cursor, CASE_BOUNDARY);
                            Stmt::Bad(self.cover(&start, bad))
                        }
                    };
                    cases.push(case);
                }
                _ => {
                    let start = self.peek().clone();
                    let diagnostic = self.expected_here(ErrorCode::E1001, "'case' or 'default'");
                    let bad = self.fail_here(diagnostic);
                    self.next();
                    synchronize(&mut self.cursor, CASE_BOUNDARY);
                    cases.push(Stmt::Bad(self.cover(&start, bad)));
                }
            }
        }
    }

    /// `case EXPR, ...:` or `default:`, then statements up to the next
    /// clause. An empty body is fine.
    fn parse_case_clause(&mut self) -> Result<CaseClause, BadNode> {
        let case_kw = self.next();
        let mut values = Vec::new();
        if case_kw.kind == TokenKind::Case {
            loop {
                values.push(self.parse_expr(Precedence::Lowest));
                if self.matches(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }

        let colon = self.expect(TokenKind::Colon, "':'")?;
        let body = self.parse_stmt_list(|kind| {
            matches!(kind, TokenKind::Case | TokenKind::Default | TokenKind::RBrace)
        });

        Ok(CaseClause {
            case_kw,
            values,
            colon,
            body,
        })
    }
}
