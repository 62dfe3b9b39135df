//! File-Scope Item Parsing
//!
//! The `package` header, then a loop over declarations: `const`, `func`,
//! the four `type` forms and `NAME implements IFACE`. Anything else is
//! reported and skipped up to the next declaration keyword.

use ori_diagnostic::{Diagnostic, ErrorCode};
use ori_ir::ast::{
    is_public_name, EnumType, FieldDecl, FuncDecl, ImplementsDecl, InterfaceMember, InterfaceType,
    MethodSpec, StructType, SumType, SumVariant,
};
use ori_ir::{BadNode, Decl, File, Positioned, Precedence, Stmt, Token, TokenKind};
use tracing::trace;

use crate::recovery::{skip_block, synchronize, DECL_START};
use crate::Parser;

impl Parser {
    pub(crate) fn file(&mut self) -> File {
        let mut file = File::default();
        match self.parse_package_clause() {
            Ok((package_kw, name)) => {
                file.package_kw = package_kw;
                file.name = name;
            }
            Err(bad) => file.decls.push(Decl::Bad(bad)),
        }

        loop {
            let start = self.peek().clone();
            trace!(kind = %start.kind, line = start.line, "declaration");
            match start.kind {
                TokenKind::Eof => return file,
                TokenKind::Semicolon => {
                    self.next();
                }
                TokenKind::Const => {
                    let decl = match self.parse_value_decl("constant name") {
                        Ok(decl) => Stmt::ConstDecl(decl),
                        Err(bad) => Stmt::Bad(self.recover_decl(&start, bad)),
                    };
                    file.const_decls.push(decl);
                }
                TokenKind::Var => {
                    let decl = self.parse_file_var(&start);
                    file.decls.push(decl);
                }
                TokenKind::Func => {
                    let decl = match self.parse_func_decl() {
                        Ok(func) => Decl::Func(func),
                        Err(bad) => Decl::Bad(self.recover_decl(&start, bad)),
                    };
                    file.decls.push(decl);
                }
                TokenKind::Type => match self.parse_type_decl() {
                    Ok(Decl::Struct(ty)) => file.structs.push(ty),
                    Ok(Decl::Interface(ty)) => file.interfaces.push(ty),
                    Ok(Decl::Enum(ty)) => file.enums.push(ty),
                    Ok(Decl::Sum(ty)) => file.sums.push(ty),
                    Ok(other) => file.decls.push(other),
                    Err(bad) => {
                        let bad = self.recover_decl(&start, bad);
                        file.decls.push(Decl::Bad(bad));
                    }
                },
                TokenKind::Ident if self.nth_kind(1) == TokenKind::Implements => {
                    match self.parse_implements() {
                        Ok(decl) => file.implements.push(decl),
                        Err(bad) => {
                            let bad = self.recover_decl(&start, bad);
                            file.decls.push(Decl::Bad(bad));
                        }
                    }
                }
                _ => {
                    let diagnostic = if start.kind == TokenKind::Illegal {
                        self.expected_here(ErrorCode::E1013, "declaration")
                    } else {
                        Diagnostic::error(ErrorCode::E1013)
                            .with_message(format!("unexpected '{}' at file scope", start.value))
                            .with_token(start.clone())
                    };
                    let bad = self.fail_here(diagnostic);
                    self.next();
                    let bad = self.recover_decl(&start, bad);
                    file.decls.push(Decl::Bad(bad));
                }
            }
        }
    }

    /// `package NAME`. A missing header is reported without consuming
    /// anything, so the first declaration still parses.
    fn parse_package_clause(&mut self) -> Result<(Token, Token), BadNode> {
        if self.kind() != TokenKind::Package {
            let diagnostic = self.expected_here(ErrorCode::E1001, "'package'");
            return Err(self.fail_here(diagnostic));
        }
        let package_kw = self.next();
        let name = self
            .expect_ident("package name")
            .map_err(|bad| self.cover(&package_kw, bad))?;
        Ok((package_kw, name))
    }

    /// Skip to the next declaration keyword and stretch `bad` over the
    /// skipped tokens.
    fn recover_decl(&mut self, start: &Token, bad: BadNode) -> BadNode {
        synchronize(&mut self.cursor, DECL_START);
        self.cover(start, bad)
    }

    /// `var` parses like a local declaration but is not allowed here.
    fn parse_file_var(&mut self, start: &Token) -> Decl {
        match self.parse_value_decl("variable name") {
            Ok(decl) => {
                let diagnostic = Diagnostic::error(ErrorCode::E1013)
                    .with_message("unsupported statement")
                    .with_token(decl.keyword.clone())
                    .with_note("variables must be declared inside a function");
                let to = decl.init.end().clone();
                Decl::Bad(self.fail(diagnostic, decl.keyword, to))
            }
            Err(bad) => Decl::Bad(self.recover_decl(start, bad)),
        }
    }

    /// `func NAME ( PARAMS ) [RESULTS] { BODY }`
    ///
    /// A malformed parameter list fails the whole declaration, but results
    /// and body are still parsed so the parser stays in step.
    fn parse_func_decl(&mut self) -> Result<FuncDecl, BadNode> {
        let func_kw = self.next();
        let name = self.expect_ident("function name")?;

        let params = self.parse_param_list(TokenKind::is_func_param_type, true);
        let results = self.parse_results();

        let outer_depth = std::mem::take(&mut self.loop_depth);
        let body = self.parse_block();
        self.loop_depth = outer_depth;

        let params = params.map_err(|bad| self.cover(&func_kw, bad))?;
        let results = results?;
        let body = body?;
        Ok(FuncDecl {
            func_kw,
            name,
            params,
            results,
            body,
        })
    }

    /// `type NAME struct|interface|enum|sum { ... }`
    pub(crate) fn parse_type_decl(&mut self) -> Result<Decl, BadNode> {
        let type_kw = self.next();
        let name = self.expect_ident("type name")?;

        let decl = match self.kind() {
            TokenKind::Struct => self.parse_struct(type_kw.clone(), name).map(Decl::Struct),
            TokenKind::Interface => self
                .parse_interface(type_kw.clone(), name)
                .map(Decl::Interface),
            TokenKind::Enum => self.parse_enum(type_kw.clone(), name).map(Decl::Enum),
            TokenKind::Sum => self.parse_sum(type_kw.clone(), name).map(Decl::Sum),
            _ => {
                let diagnostic = self.expected_here(
                    ErrorCode::E1001,
                    "'struct', 'interface', 'enum' or 'sum'",
                );
                Err(self.fail_here(diagnostic))
            }
        };
        decl.map_err(|bad| self.cover(&type_kw, bad))
    }

    /// `{ member (; | newline) ... }` shared by the four type bodies.
    ///
    /// On error the rest of the body is skipped through its `}`.
    fn parse_members<T>(
        &mut self,
        mut member: impl FnMut(&mut Self) -> Result<T, BadNode>,
    ) -> Result<(Token, Vec<T>, Token), BadNode> {
        let lbrace = self.expect(TokenKind::LBrace, "'{'")?;
        let mut members = Vec::new();

        loop {
            match self.kind() {
                TokenKind::RBrace => break,
                TokenKind::Eof => {
                    let diagnostic = self.expected_here(ErrorCode::E1001, "'}'");
                    return Err(self.fail_here(diagnostic));
                }
                TokenKind::Semicolon => {
                    self.next();
                    continue;
                }
                _ => {}
            }

            match member(self) {
                Ok(item) => members.push(item),
                Err(bad) => {
                    skip_block(&mut self.cursor);
                    return Err(bad);
                }
            }

            let separated = matches!(
                self.kind(),
                TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
            ) || self.newline_since_prev();
            if !separated {
                let diagnostic = self.expected_here(ErrorCode::E1001, "';' or newline");
                let bad = self.fail_here(diagnostic);
                skip_block(&mut self.cursor);
                return Err(bad);
            }
        }

        let rbrace = self.next();
        Ok((lbrace, members, rbrace))
    }

    fn parse_struct(&mut self, type_kw: Token, name: Token) -> Result<StructType, BadNode> {
        let struct_kw = self.next();
        let (lbrace, fields, rbrace) = self.parse_members(Self::parse_field)?;
        let public = is_public_name(&name.value);
        Ok(StructType {
            type_kw,
            name,
            struct_kw,
            lbrace,
            fields,
            rbrace,
            public,
        })
    }

    /// `NAME TYPE [= DEFAULT]`
    fn parse_field(&mut self) -> Result<FieldDecl, BadNode> {
        let name = self.expect_ident("field name")?;
        let ty = self.parse_type(TokenKind::is_var_const_type, "field type");
        let (eq, default) = match self.matches(TokenKind::Assign) {
            Some(eq) => (Some(eq), Some(self.parse_expr(Precedence::Lowest))),
            None => (None, None),
        };
        let public = is_public_name(&name.value);
        Ok(FieldDecl {
            name,
            ty,
            eq,
            default,
            public,
        })
    }

    fn parse_interface(&mut self, type_kw: Token, name: Token) -> Result<InterfaceType, BadNode> {
        let interface_kw = self.next();
        let (lbrace, members, rbrace) = self.parse_members(Self::parse_interface_member)?;
        let public = is_public_name(&name.value);
        Ok(InterfaceType {
            type_kw,
            name,
            interface_kw,
            lbrace,
            members,
            rbrace,
            public,
        })
    }

    /// A method signature when `(` follows the name, else an embedded type.
    fn parse_interface_member(&mut self) -> Result<InterfaceMember, BadNode> {
        if self.kind() == TokenKind::Ident && self.nth_kind(1) == TokenKind::LParen {
            let name = self.next();
            let params = self.parse_param_list(TokenKind::is_func_param_type, true)?;
            let results = self.parse_results()?;
            return Ok(InterfaceMember::Method(MethodSpec {
                name,
                params,
                results,
            }));
        }
        self.parse_qualified_name("interface name")
            .map(InterfaceMember::Embed)
    }

    fn parse_enum(&mut self, type_kw: Token, name: Token) -> Result<EnumType, BadNode> {
        let enum_kw = self.next();
        let (lbrace, variants, rbrace) =
            self.parse_members(|parser| parser.expect_ident("enum variant"))?;
        if variants.is_empty() {
            return Err(self.empty_type(&type_kw, &name, "enum", rbrace));
        }
        let public = is_public_name(&name.value);
        Ok(EnumType {
            type_kw,
            name,
            enum_kw,
            lbrace,
            variants,
            rbrace,
            public,
        })
    }

    fn parse_sum(&mut self, type_kw: Token, name: Token) -> Result<SumType, BadNode> {
        let sum_kw = self.next();
        let (lbrace, variants, rbrace) = self.parse_members(Self::parse_sum_variant)?;
        if variants.is_empty() {
            return Err(self.empty_type(&type_kw, &name, "sum", rbrace));
        }
        let public = is_public_name(&name.value);
        Ok(SumType {
            type_kw,
            name,
            sum_kw,
            lbrace,
            variants,
            rbrace,
            public,
        })
    }

    /// `NAME` or `NAME ( PARAMS )`
    fn parse_sum_variant(&mut self) -> Result<SumVariant, BadNode> {
        let name = self.expect_ident("sum variant")?;
        let params = if self.kind() == TokenKind::LParen {
            Some(self.parse_param_list(TokenKind::is_func_param_type, true)?)
        } else {
            None
        };
        Ok(SumVariant { name, params })
    }

    fn empty_type(&mut self, type_kw: &Token, name: &Token, what: &str, rbrace: Token) -> BadNode {
        let diagnostic = Diagnostic::error(ErrorCode::E1014)
            .with_message(format!("{what} '{}' must have at least one variant", name.value))
            .with_token(rbrace.clone());
        self.fail(diagnostic, type_kw.clone(), rbrace)
    }

    /// `NAME implements [PKG.]IFACE`
    fn parse_implements(&mut self) -> Result<ImplementsDecl, BadNode> {
        let type_name = self.next();
        let implements_kw = self.next();
        let interface = self.parse_qualified_name("interface name")?;
        Ok(ImplementsDecl {
            type_name,
            implements_kw,
            interface,
        })
    }
}
