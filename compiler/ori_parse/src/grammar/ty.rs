//! Type Parsing
//!
//! Type names, parameter lists and function results. Which type keywords
//! are allowed depends on the position, so callers pass the predicate.

use ori_diagnostic::{Diagnostic, ErrorCode};
use ori_ir::ast::{NameType, Param, ParamList, QualifiedName, Results};
use ori_ir::{BadNode, TokenKind, TypeExpr};

use crate::recovery::skip_list;
use crate::Parser;

/// Accepted type kinds for one position.
pub(crate) type TypeFilter = fn(TokenKind) -> bool;

impl Parser {
    /// A single type name. An unsupported kind becomes [`TypeExpr::Bad`].
    pub(crate) fn parse_type(&mut self, accept: TypeFilter, what: &str) -> TypeExpr {
        if accept(self.kind()) {
            return TypeExpr::Name(NameType { name: self.next() });
        }

        let got = self.peek().clone();
        let diagnostic = if got.kind == TokenKind::Illegal {
            self.expected_here(ErrorCode::E1004, what)
        } else {
            Diagnostic::error(ErrorCode::E1004)
                .with_message(format!("unsupported {what}"))
                .with_token(got)
        };
        let bad = self.fail_here(diagnostic);
        // The token stands where a type belongs, keyword or not.
        if !self.kind().is_closing() && self.kind() != TokenKind::LBrace {
            self.next();
        }
        TypeExpr::Bad(bad)
    }

    /// `( [name] type, ... )`.
    ///
    /// With `named` each entry is an `IDENT TYPE` pair, otherwise a bare
    /// type. Leading, trailing and missing commas fail the whole list.
    pub(crate) fn parse_param_list(
        &mut self,
        accept: TypeFilter,
        named: bool,
    ) -> Result<ParamList, BadNode> {
        let lparen = self.expect(TokenKind::LParen, "'('")?;
        match self.parse_params(accept, named) {
            Ok(params) => {
                let rparen = self.next();
                Ok(ParamList {
                    lparen,
                    params,
                    rparen,
                })
            }
            Err(bad) => {
                skip_list(&mut self.cursor, TokenKind::LParen, TokenKind::RParen);
                Err(self.cover(&lparen, bad))
            }
        }
    }

    fn parse_params(&mut self, accept: TypeFilter, named: bool) -> Result<Vec<Param>, BadNode> {
        let mut params = Vec::new();
        if self.kind() == TokenKind::Comma {
            return Err(self.list_error("unexpected ',' before first parameter"));
        }

        loop {
            match self.kind() {
                TokenKind::RParen => return Ok(params),
                TokenKind::Eof => {
                    let diagnostic = self.expected_here(ErrorCode::E1001, "')'");
                    return Err(self.fail_here(diagnostic));
                }
                _ => {}
            }

            let name = if named {
                Some(self.expect_ident("parameter name")?)
            } else {
                None
            };
            let ty = self.parse_type(accept, "parameter type");
            params.push(Param { name, ty });

            match self.kind() {
                TokenKind::Comma => {
                    self.next();
                    if self.kind() == TokenKind::RParen {
                        return Err(self.list_error("unexpected ',' before ')'"));
                    }
                }
                TokenKind::RParen => {}
                _ => return Err(self.list_error("expected ',' or ')' in parameter list")),
            }
        }
    }

    /// Optional results after a parameter list.
    ///
    /// Absent when the next token ends the signature: `{`, `;`, `}`, EOF or
    /// anything on a new line. A parenthesized list holds bare types when
    /// the token two past `(` is `,` or `)`, and `IDENT TYPE` pairs
    /// otherwise.
    pub(crate) fn parse_results(&mut self) -> Result<Option<Results>, BadNode> {
        let kind = self.kind();
        if matches!(
            kind,
            TokenKind::LBrace | TokenKind::RBrace | TokenKind::Semicolon | TokenKind::Eof
        ) || self.newline_since_prev()
        {
            return Ok(None);
        }

        if kind == TokenKind::LParen {
            let bare = matches!(self.nth_kind(2), TokenKind::Comma | TokenKind::RParen);
            let list = self.parse_param_list(TokenKind::is_func_param_type, !bare)?;
            return Ok(Some(Results::List(list)));
        }

        Ok(Some(Results::Type(
            self.parse_type(TokenKind::is_func_param_type, "result type"),
        )))
    }

    /// `IDENT` or `IDENT.IDENT`.
    pub(crate) fn parse_qualified_name(&mut self, what: &str) -> Result<QualifiedName, BadNode> {
        let first = self.expect_ident(what)?;
        if let Some(dot) = self.matches(TokenKind::Dot) {
            let name = self.expect_ident(what)?;
            return Ok(QualifiedName {
                qualifier: Some(first),
                dot: Some(dot),
                name,
            });
        }
        Ok(QualifiedName {
            qualifier: None,
            dot: None,
            name: first,
        })
    }
}
