//! Expression Parsing
//!
//! Pratt parser over the precedence table in [`ori_ir::Precedence`]:
//! prefix forms first, then a loop folding infix and postfix operators
//! whose binding power reaches the caller's minimum.

use ori_diagnostic::{Diagnostic, ErrorCode};
use ori_ir::ast::{BasicLit, BinaryExpr, CallExpr, IdentExpr, IndexExpr, ParenExpr, SelectorExpr, UnaryExpr};
use ori_ir::{BadNode, Expr, Positioned, Precedence, Token, TokenKind};

use crate::recovery::{skip_list, skip_nested};
use crate::Parser;

impl Parser {
    /// Parse an expression whose operators bind at least as tightly as `min`.
    ///
    /// Never fails: errors come back as [`Expr::Bad`].
    pub(crate) fn parse_expr(&mut self, min: Precedence) -> Expr {
        let start = self.peek().clone();
        match self.descend(|p| Ok(p.parse_expr_inner(min))) {
            Ok(expr) => expr,
            Err(bad) => {
                skip_nested(&mut self.cursor);
                Expr::Bad(self.cover(&start, bad))
            }
        }
    }

    fn parse_expr_inner(&mut self, min: Precedence) -> Expr {
        let mut left = match self.parse_prefix() {
            Ok(expr) => expr,
            Err(bad) => return Expr::Bad(bad),
        };

        loop {
            let kind = self.kind();
            let prec = kind.precedence();
            // An operator opening a new line starts a new statement.
            if prec == Precedence::Lowest || prec < min || self.newline_since_prev() {
                break;
            }

            left = if kind.is_postfix() {
                let start = left.start().clone();
                match self.parse_postfix(left) {
                    Ok(expr) => expr,
                    Err(bad) => return Expr::Bad(self.cover(&start, bad)),
                }
            } else {
                self.parse_infix(left, prec)
            };
        }

        left
    }

    fn parse_prefix(&mut self) -> Result<Expr, BadNode> {
        match self.kind() {
            TokenKind::Ident => Ok(Expr::Ident(IdentExpr { name: self.next() })),
            TokenKind::IntLit => Ok(Expr::IntLit(BasicLit { value: self.next() })),
            TokenKind::FloatLit => Ok(Expr::FloatLit(BasicLit { value: self.next() })),
            TokenKind::BoolLit => Ok(Expr::BoolLit(BasicLit { value: self.next() })),
            TokenKind::StringLit => Ok(Expr::StringLit(BasicLit { value: self.next() })),
            TokenKind::LParen => self.parse_paren(),
            TokenKind::Minus | TokenKind::Not => {
                let op = self.next();
                // Unary binds tighter than every binary operator.
                let right = self.parse_expr(Precedence::Postfix);
                Ok(Expr::Unary(UnaryExpr {
                    op,
                    right: Box::new(right),
                }))
            }
            _ => {
                let diagnostic = self.expected_here(ErrorCode::E1002, "expression");
                let bad = self.fail_here(diagnostic);
                self.skip_unexpected();
                Err(bad)
            }
        }
    }

    fn parse_paren(&mut self) -> Result<Expr, BadNode> {
        let left = self.next();
        if self.kind() == TokenKind::RParen {
            let diagnostic = self.expected_here(ErrorCode::E1002, "expression inside '()'");
            let right = self.next();
            return Err(self.fail(diagnostic, left, right));
        }

        let inner = self.parse_expr(Precedence::Lowest);
        let right = self
            .expect(TokenKind::RParen, "')'")
            .map_err(|bad| self.cover(&left, bad))?;
        Ok(Expr::Paren(ParenExpr {
            left,
            inner: Box::new(inner),
            right,
        }))
    }

    /// Fold `left <op> right`, rejecting `a < b < c`.
    fn parse_infix(&mut self, left: Expr, prec: Precedence) -> Expr {
        let op = self.next();
        // One level tighter on the right keeps equal levels left-associative.
        let right = self.parse_expr(prec.tighter());

        let chained = op.kind.is_comparison()
            && left.binary_op().is_some_and(|inner| inner.kind.is_comparison());
        if chained {
            let diagnostic = Diagnostic::error(ErrorCode::E1006)
                .with_message("use && (e.g. a < b && b < c)")
                .with_token(op.clone())
                .with_note("chained comparison needs parentheses or &&");
            let to = right.end().clone();
            return Expr::Bad(self.fail(diagnostic, op, to));
        }

        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    fn parse_postfix(&mut self, x: Expr) -> Result<Expr, BadNode> {
        match self.kind() {
            TokenKind::Dot => {
                let dot = self.next();
                let selector = self.expect_ident("selector after '.'")?;
                Ok(Expr::Selector(SelectorExpr {
                    x: Box::new(x),
                    dot,
                    selector,
                }))
            }
            TokenKind::LBracket => {
                let lbracket = self.next();
                let index = self.parse_expr(Precedence::Lowest);
                let rbracket = self.expect(TokenKind::RBracket, "']'")?;
                Ok(Expr::Index(IndexExpr {
                    x: Box::new(x),
                    lbracket,
                    index: Box::new(index),
                    rbracket,
                }))
            }
            _ => self.parse_call(x),
        }
    }

    /// `callee ( args )`. Any malformed argument list makes the whole call bad.
    fn parse_call(&mut self, callee: Expr) -> Result<Expr, BadNode> {
        let lparen = self.next();
        match self.parse_args() {
            Ok(args) => {
                let rparen = self.next();
                Ok(Expr::Call(CallExpr {
                    callee: Box::new(callee),
                    lparen,
                    args,
                    rparen,
                }))
            }
            Err(bad) => {
                skip_list(&mut self.cursor, TokenKind::LParen, TokenKind::RParen);
                Err(bad)
            }
        }
    }

    /// Arguments up to (not including) the closing `)`.
    fn parse_args(&mut self) -> Result<Vec<Expr>, BadNode> {
        let mut args = Vec::new();
        if self.kind() == TokenKind::Comma {
            return Err(self.list_error("unexpected ',' before first argument"));
        }

        loop {
            match self.kind() {
                TokenKind::RParen => return Ok(args),
                TokenKind::Eof => {
                    let diagnostic = self.expected_here(ErrorCode::E1001, "')'");
                    return Err(self.fail_here(diagnostic));
                }
                _ => {}
            }

            args.push(self.parse_expr(Precedence::Lowest));

            match self.kind() {
                TokenKind::Comma => {
                    self.next();
                    if self.kind() == TokenKind::RParen {
                        return Err(self.list_error("unexpected ',' before ')'"));
                    }
                }
                TokenKind::RParen => {}
                _ => return Err(self.list_error("expected ',' or ')' in argument list")),
            }
        }
    }

    /// A malformed comma-separated list, reported at the current token.
    pub(crate) fn list_error(&mut self, message: &str) -> BadNode {
        let got: Token = self.peek().clone();
        let diagnostic = Diagnostic::error(ErrorCode::E1005)
            .with_message(message)
            .with_token(got);
        self.fail_here(diagnostic)
    }
}
