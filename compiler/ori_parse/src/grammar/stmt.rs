//! Statement Parsing
//!
//! Statement dispatch, blocks, simple statements, `const`/`var`, `return`,
//! `if` and the branch statements. Loops and switches live in the
//! submodules.

mod for_stmt;
mod switch;

use ori_diagnostic::{Diagnostic, ErrorCode};
use ori_ir::ast::{AssignStmt, BlockStmt, BranchStmt, ExprStmt, IfStmt, IncDecStmt, ReturnStmt, ValueDecl};
use ori_ir::{BadNode, Expr, Positioned, Precedence, Stmt, TokenKind};
use tracing::trace;

use crate::recovery::skip_statement;
use crate::Parser;

impl Parser {
    /// Parse one statement. Never fails: errors come back as [`Stmt::Bad`]
    /// after skipping the rest of the statement.
    pub(crate) fn parse_stmt(&mut self) -> Stmt {
        trace!(kind = %self.kind(), line = self.peek().line, "statement");
        let start = self.peek().clone();
        match self.descend(Self::parse_stmt_inner) {
            Ok(stmt) => stmt,
            Err(bad) => {
                skip_statement(&mut self.cursor);
                Stmt::Bad(self.cover(&start, bad))
            }
        }
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, BadNode> {
        match self.kind() {
            TokenKind::Const => self.parse_value_decl("constant name").map(Stmt::ConstDecl),
            TokenKind::Var => self.parse_value_decl("variable name").map(Stmt::VarDecl),
            TokenKind::Return => Ok(self.parse_return()),
            TokenKind::If => self.parse_if().map(Stmt::If),
            TokenKind::For => self.parse_for(),
            TokenKind::Switch => self.parse_switch(),
            TokenKind::Break | TokenKind::Continue => self.parse_branch(),
            TokenKind::Fallthrough => self.parse_fallthrough(),
            TokenKind::LBrace => self.parse_block().map(Stmt::Block),
            TokenKind::Type if self.at_type_decl() => self
                .parse_type_decl()
                .map(|decl| Stmt::Decl(Box::new(decl))),
            _ => self.parse_simple_stmt(),
        }
    }

    /// `{ stmts }`.
    pub(crate) fn parse_block(&mut self) -> Result<BlockStmt, BadNode> {
        let lbrace = self.expect(TokenKind::LBrace, "'{'")?;
        let stmts = self.parse_stmt_list(|kind| kind == TokenKind::RBrace);
        let rbrace = self
            .expect(TokenKind::RBrace, "'}'")
            .map_err(|bad| self.cover(&lbrace, bad))?;
        Ok(BlockStmt {
            lbrace,
            stmts,
            rbrace,
        })
    }

    /// Statements up to a token for which `stop` holds, or EOF.
    ///
    /// Stray `;` separators are skipped.
    pub(crate) fn parse_stmt_list(&mut self, stop: fn(TokenKind) -> bool) -> Vec<Stmt> {
        let mut stmts = Vec::new();
        loop {
            let kind = self.kind();
            if kind == TokenKind::Eof || stop(kind) {
                return stmts;
            }
            if kind == TokenKind::Semicolon {
                self.next();
                continue;
            }

            let before = self.cursor.position();
            stmts.push(self.parse_stmt());
            if self.cursor.position() == before {
                // A bad statement that could not consume anything.
                self.next();
            }
        }
    }

    /// `const NAME [TYPE] = EXPR` or the `var` equivalent.
    pub(crate) fn parse_value_decl(&mut self, what: &str) -> Result<ValueDecl, BadNode> {
        let keyword = self.next();
        let name = self.expect_ident(what)?;
        let ty = if self.kind() == TokenKind::Assign {
            None
        } else {
            Some(self.parse_type(TokenKind::is_var_const_type, "type"))
        };
        let eq = self.expect(TokenKind::Assign, "'='")?;
        let init = self.parse_expr(Precedence::Lowest);
        Ok(ValueDecl {
            keyword,
            name,
            ty,
            eq,
            init,
        })
    }

    /// Assignment, increment/decrement, or a call used as a statement.
    pub(crate) fn parse_simple_stmt(&mut self) -> Result<Stmt, BadNode> {
        let expr = self.parse_expr(Precedence::Lowest);
        if let Expr::Bad(bad) = expr {
            return Err(bad);
        }

        let kind = self.kind();
        if expr.is_assignable() && kind.is_assign_op() {
            let op = self.next();
            let right = self.parse_expr(Precedence::Lowest);
            return Ok(Stmt::Assign(AssignStmt {
                left: expr,
                op,
                right,
            }));
        }
        if expr.is_assignable() && kind.is_inc_dec() {
            let op = self.next();
            return Ok(Stmt::IncDec(IncDecStmt { x: expr, op }));
        }
        if expr.is_call() {
            return Ok(Stmt::Expr(ExprStmt { expr }));
        }

        let diagnostic = Diagnostic::error(ErrorCode::E1012)
            .with_message("unsupported statement")
            .with_token(expr.start().clone());
        Err(self.fail(diagnostic, expr.start().clone(), expr.end().clone()))
    }

    /// Whether the statement ended: `}`, `;`, EOF, a case label, or a new line.
    fn at_stmt_end(&self) -> bool {
        matches!(
            self.kind(),
            TokenKind::RBrace
                | TokenKind::Semicolon
                | TokenKind::Eof
                | TokenKind::Case
                | TokenKind::Default
        ) || self.newline_since_prev()
    }

    fn parse_return(&mut self) -> Stmt {
        let return_kw = self.next();
        let mut values = Vec::new();
        if !self.at_stmt_end() {
            loop {
                values.push(self.parse_expr(Precedence::Lowest));
                if self.matches(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        Stmt::Return(ReturnStmt { return_kw, values })
    }

    /// `if COND { } [else if ... | else { }]`
    fn parse_if(&mut self) -> Result<IfStmt, BadNode> {
        let if_kw = self.next();
        if self.kind() == TokenKind::LBrace {
            let diagnostic = self.expected_here(ErrorCode::E1002, "condition after 'if'");
            let lbrace = self.peek().clone();
            return Err(self.fail(diagnostic, if_kw, lbrace));
        }

        let condition = self.parse_expr(Precedence::Lowest);
        if self.kind().is_assign_op() {
            let op = self.peek().clone();
            let diagnostic = Diagnostic::error(ErrorCode::E1007)
                .with_message("assignment not allowed in if condition; use ==")
                .with_token(op.clone());
            return Err(self.fail(diagnostic, if_kw, op));
        }

        let then = self.parse_block()?;
        let else_ = match self.matches(TokenKind::Else) {
            None => None,
            Some(else_kw) => match self.kind() {
                TokenKind::If => Some(Box::new(Stmt::If(self.descend(Self::parse_if)?))),
                TokenKind::LBrace => Some(Box::new(Stmt::Block(self.parse_block()?))),
                _ => {
                    let diagnostic = self.expected_here(ErrorCode::E1001, "'if' or '{' after 'else'");
                    let got = self.peek().clone();
                    return Err(self.fail(diagnostic, else_kw, got));
                }
            },
        };

        Ok(IfStmt {
            if_kw,
            condition,
            then,
            else_,
        })
    }

    /// `break` / `continue`: only inside a loop, and last on their line.
    fn parse_branch(&mut self) -> Result<Stmt, BadNode> {
        let keyword = self.next();
        if self.loop_depth == 0 {
            let diagnostic = Diagnostic::error(ErrorCode::E1008)
                .with_message(format!("expected '{}' inside 'for' loop", keyword.value))
                .with_token(keyword.clone());
            return Err(self.fail(diagnostic, keyword.clone(), keyword));
        }

        let ends = matches!(
            self.kind(),
            TokenKind::RBrace | TokenKind::Semicolon | TokenKind::Eof
        ) || self.newline_since_prev();
        if !ends {
            let got = self.peek().clone();
            let diagnostic = Diagnostic::error(ErrorCode::E1009)
                .with_message(format!("unexpected token after '{}'", keyword.value))
                .with_token(got.clone());
            return Err(self.fail(diagnostic, keyword, got));
        }

        let branch = BranchStmt { keyword };
        Ok(if branch.keyword.kind == TokenKind::Break {
            Stmt::Break(branch)
        } else {
            Stmt::Continue(branch)
        })
    }

    /// `fallthrough [;]`, which must close its case clause.
    fn parse_fallthrough(&mut self) -> Result<Stmt, BadNode> {
        let keyword = self.next();
        self.matches(TokenKind::Semicolon);

        let closes_case = matches!(
            self.kind(),
            TokenKind::RBrace | TokenKind::Eof | TokenKind::Case | TokenKind::Default
        );
        if !closes_case {
            let got = self.peek().clone();
            let diagnostic = Diagnostic::error(ErrorCode::E1009)
                .with_message("'fallthrough' must be the last statement in a case")
                .with_token(got.clone());
            return Err(self.fail(diagnostic, keyword, got));
        }

        Ok(Stmt::FallThrough(BranchStmt { keyword }))
    }

    /// `type NAME struct|interface|enum|sum` ahead.
    pub(crate) fn at_type_decl(&self) -> bool {
        self.nth_kind(1) == TokenKind::Ident
            && matches!(
                self.nth_kind(2),
                TokenKind::Struct | TokenKind::Interface | TokenKind::Enum | TokenKind::Sum
            )
    }
}
