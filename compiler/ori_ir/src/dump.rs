//! Human-readable AST dump.
//!
//! Each node prints its name on one line, then one field per line two
//! spaces deeper. Token fields render inline as `Label: "value" @l:c
//! (kind=N)`; node fields print `Label:` and the child four spaces deeper
//! than the parent. Absent optional fields are skipped and empty lists
//! print `(none)`.
//!
//! ```text
//! FuncDecl
//!   Func: "func" @2:1 (kind=43)
//!   Name: "main" @2:6 (kind=3)
//!   Params: (none)
//!   Body:
//!     BlockStmt
//!       LBrace: "{" @2:13 (kind=10)
//!       Stmts: (none)
//!       RBrace: "}" @2:14 (kind=11)
//! ```

use std::fmt::Write;

use ori_stack::ensure_sufficient_stack;

use crate::ast::{
    BadNode, BlockStmt, CaseClause, Decl, EnumType, Expr, FieldDecl, File, FuncDecl,
    ImplementsDecl, InterfaceMember, InterfaceType, Param, ParamList, QualifiedName, Results,
    Stmt, StructType, SumType, SumVariant, TypeExpr,
};
use crate::token::Token;

/// Anything the dumper can render at a given indentation.
pub trait Dump {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize);
}

/// Render any dumpable value starting at column zero.
pub fn dump<T: Dump + ?Sized>(node: &T) -> String {
    let mut dumper = Dumper::default();
    node.dump_into(&mut dumper, 0);
    dumper.finish()
}

/// Render a whole file.
pub fn dump_file(file: &File) -> String {
    dump(file)
}

/// Accumulates dump output.
#[derive(Default)]
pub struct Dumper {
    out: String,
}

impl Dumper {
    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, indent: usize, text: &str) {
        let _ = writeln!(self.out, "{:indent$}{text}", "");
    }

    fn token(&mut self, indent: usize, label: &str, token: &Token) {
        let _ = writeln!(self.out, "{:indent$}{label}: {token}", "");
    }

    fn opt_token(&mut self, indent: usize, label: &str, token: Option<&Token>) {
        if let Some(token) = token {
            self.token(indent, label, token);
        }
    }

    fn flag(&mut self, indent: usize, label: &str, value: bool) {
        let _ = writeln!(self.out, "{:indent$}{label}: {value}", "");
    }

    /// `Label:` followed by the child at `indent + 4`. Fields sit at
    /// `indent + 2`, so the child lands two columns past its label.
    fn child<T: Dump + ?Sized>(&mut self, indent: usize, label: &str, node: &T) {
        self.line(indent, &format!("{label}:"));
        node.dump_into(self, indent + 2);
    }

    fn opt_child<T: Dump>(&mut self, indent: usize, label: &str, node: Option<&T>) {
        if let Some(node) = node {
            self.child(indent, label, node);
        }
    }

    fn list<T: Dump>(&mut self, indent: usize, label: &str, items: &[T]) {
        if items.is_empty() {
            self.line(indent, &format!("{label}: (none)"));
            return;
        }
        self.line(indent, &format!("{label}:"));
        for item in items {
            item.dump_into(self, indent + 2);
        }
    }

    fn bad(&mut self, indent: usize, name: &str, bad: &BadNode) {
        self.line(indent, name);
        let field = indent + 2;
        self.line(field, &format!("Reason: {}", bad.reason));
        self.token(field, "From", &bad.from);
        self.token(field, "To", &bad.to);
    }

    fn param_list(&mut self, indent: usize, list: &ParamList) {
        self.list(indent, "Params", &list.params);
    }
}

impl<T: Dump + ?Sized> Dump for Box<T> {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        (**self).dump_into(dumper, indent);
    }
}

impl<T: Dump> Dump for Option<T> {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        match self {
            Some(node) => node.dump_into(dumper, indent),
            None => dumper.line(indent, "(nil)"),
        }
    }
}

impl Dump for Token {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, &format!("Token {self}"));
    }
}

impl Dump for File {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "File");
        let field = indent + 2;
        dumper.token(field, "Package", &self.package_kw);
        dumper.token(field, "Name", &self.name);
        dumper.list(field, "ConstDecls", &self.const_decls);
        dumper.list(field, "Decls", &self.decls);
        dumper.list(field, "Structs", &self.structs);
        dumper.list(field, "Interfaces", &self.interfaces);
        dumper.list(field, "Enums", &self.enums);
        dumper.list(field, "Sums", &self.sums);
        dumper.list(field, "Implements", &self.implements);
    }
}

impl Dump for TypeExpr {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        match self {
            TypeExpr::Name(name) => {
                dumper.line(indent, "NameType");
                dumper.token(indent + 2, "Name", &name.name);
            }
            TypeExpr::Bad(bad) => dumper.bad(indent, "BadType", bad),
        }
    }
}

impl Dump for Expr {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        ensure_sufficient_stack(|| self.dump_expr(dumper, indent));
    }
}

impl Expr {
    fn dump_expr(&self, dumper: &mut Dumper, indent: usize) {
        let name = self.node_name();
        if let Expr::Bad(bad) = self {
            dumper.bad(indent, name, bad);
            return;
        }
        dumper.line(indent, name);
        let field = indent + 2;
        match self {
            Expr::Ident(ident) => dumper.token(field, "Name", &ident.name),
            Expr::IntLit(lit) | Expr::FloatLit(lit) | Expr::BoolLit(lit) | Expr::StringLit(lit) => {
                dumper.token(field, "Value", &lit.value);
            }
            Expr::Paren(paren) => {
                dumper.token(field, "Left", &paren.left);
                dumper.child(field, "Inner", &paren.inner);
                dumper.token(field, "Right", &paren.right);
            }
            Expr::Unary(unary) => {
                dumper.token(field, "Op", &unary.op);
                dumper.child(field, "Right", &unary.right);
            }
            Expr::Binary(binary) => {
                dumper.child(field, "Left", &binary.left);
                dumper.token(field, "Op", &binary.op);
                dumper.child(field, "Right", &binary.right);
            }
            Expr::Selector(selector) => {
                dumper.child(field, "X", &selector.x);
                dumper.token(field, "Dot", &selector.dot);
                dumper.token(field, "Selector", &selector.selector);
            }
            Expr::Index(index) => {
                dumper.child(field, "X", &index.x);
                dumper.token(field, "LBracket", &index.lbracket);
                dumper.child(field, "Index", &index.index);
                dumper.token(field, "RBracket", &index.rbracket);
            }
            Expr::Call(call) => {
                dumper.child(field, "Callee", &call.callee);
                dumper.token(field, "LParen", &call.lparen);
                dumper.list(field, "Args", &call.args);
                dumper.token(field, "RParen", &call.rparen);
            }
            Expr::Bad(_) => {}
        }
    }
}

impl Dump for BlockStmt {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "BlockStmt");
        let field = indent + 2;
        dumper.token(field, "LBrace", &self.lbrace);
        dumper.list(field, "Stmts", &self.stmts);
        dumper.token(field, "RBrace", &self.rbrace);
    }
}

impl Dump for CaseClause {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "CaseClause");
        let field = indent + 2;
        dumper.token(field, "Case", &self.case_kw);
        if !self.is_default() {
            dumper.list(field, "Values", &self.values);
        }
        dumper.token(field, "Colon", &self.colon);
        dumper.list(field, "Body", &self.body);
    }
}

impl Dump for Stmt {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        ensure_sufficient_stack(|| self.dump_stmt(dumper, indent));
    }
}

impl Stmt {
    fn dump_stmt(&self, dumper: &mut Dumper, indent: usize) {
        let field = indent + 2;
        match self {
            Stmt::Block(block) => block.dump_into(dumper, indent),
            Stmt::Case(clause) => clause.dump_into(dumper, indent),
            Stmt::Decl(decl) => {
                dumper.line(indent, self.node_name());
                dumper.child(field, "Decl", decl);
            }
            Stmt::Bad(bad) => dumper.bad(indent, self.node_name(), bad),
            Stmt::ConstDecl(decl) | Stmt::VarDecl(decl) => {
                dumper.line(indent, self.node_name());
                dumper.token(field, "Keyword", &decl.keyword);
                dumper.token(field, "Name", &decl.name);
                dumper.opt_child(field, "Type", decl.ty.as_ref());
                dumper.token(field, "Eq", &decl.eq);
                dumper.child(field, "Init", &decl.init);
            }
            Stmt::Assign(assign) => {
                dumper.line(indent, self.node_name());
                dumper.child(field, "Left", &assign.left);
                dumper.token(field, "Op", &assign.op);
                dumper.child(field, "Right", &assign.right);
            }
            Stmt::IncDec(inc_dec) => {
                dumper.line(indent, self.node_name());
                dumper.child(field, "X", &inc_dec.x);
                dumper.token(field, "Op", &inc_dec.op);
            }
            Stmt::Expr(stmt) => {
                dumper.line(indent, self.node_name());
                dumper.child(field, "Expr", &stmt.expr);
            }
            Stmt::Return(ret) => {
                dumper.line(indent, self.node_name());
                dumper.token(field, "Return", &ret.return_kw);
                dumper.list(field, "Values", &ret.values);
            }
            Stmt::If(stmt) => {
                dumper.line(indent, self.node_name());
                dumper.token(field, "If", &stmt.if_kw);
                dumper.child(field, "Condition", &stmt.condition);
                dumper.child(field, "Then", &stmt.then);
                dumper.opt_child(field, "Else", stmt.else_.as_ref());
            }
            Stmt::For(stmt) => {
                dumper.line(indent, self.node_name());
                dumper.token(field, "For", &stmt.for_kw);
                dumper.opt_child(field, "Init", stmt.init.as_ref());
                dumper.opt_child(field, "Condition", stmt.condition.as_ref());
                dumper.opt_child(field, "Post", stmt.post.as_ref());
                dumper.child(field, "Body", &stmt.body);
            }
            Stmt::Range(stmt) => {
                dumper.line(indent, self.node_name());
                dumper.token(field, "For", &stmt.for_kw);
                dumper.opt_child(field, "Key", stmt.key.as_ref());
                dumper.opt_child(field, "Value", stmt.value.as_ref());
                dumper.opt_token(field, "Op", stmt.op.as_ref());
                dumper.token(field, "Range", &stmt.range_kw);
                dumper.child(field, "X", &stmt.x);
                dumper.child(field, "Body", &stmt.body);
            }
            Stmt::Switch(stmt) => {
                dumper.line(indent, self.node_name());
                dumper.token(field, "Switch", &stmt.switch_kw);
                dumper.opt_child(field, "Init", stmt.init.as_ref());
                dumper.opt_child(field, "Tag", stmt.tag.as_ref());
                dumper.token(field, "LBrace", &stmt.lbrace);
                dumper.list(field, "Cases", &stmt.cases);
                dumper.token(field, "RBrace", &stmt.rbrace);
            }
            Stmt::Break(branch) | Stmt::Continue(branch) | Stmt::FallThrough(branch) => {
                dumper.line(indent, self.node_name());
                dumper.token(field, "Keyword", &branch.keyword);
            }
        }
    }
}

impl Dump for Decl {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        match self {
            Decl::Func(func) => func.dump_into(dumper, indent),
            Decl::Struct(decl) => decl.dump_into(dumper, indent),
            Decl::Interface(decl) => decl.dump_into(dumper, indent),
            Decl::Enum(decl) => decl.dump_into(dumper, indent),
            Decl::Sum(decl) => decl.dump_into(dumper, indent),
            Decl::Implements(decl) => decl.dump_into(dumper, indent),
            Decl::Bad(bad) => dumper.bad(indent, "BadDecl", bad),
        }
    }
}

impl Dump for FuncDecl {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "FuncDecl");
        let field = indent + 2;
        dumper.token(field, "Func", &self.func_kw);
        dumper.token(field, "Name", &self.name);
        dumper.param_list(field, &self.params);
        dumper.opt_child(field, "Results", self.results.as_ref());
        dumper.child(field, "Body", &self.body);
    }
}

impl Dump for Param {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "Param");
        let field = indent + 2;
        dumper.opt_token(field, "Name", self.name.as_ref());
        dumper.child(field, "Type", &self.ty);
    }
}

impl Dump for Results {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        match self {
            Results::Type(ty) => ty.dump_into(dumper, indent),
            Results::List(list) => {
                dumper.line(indent, "ResultList");
                let field = indent + 2;
                dumper.token(field, "LParen", &list.lparen);
                dumper.list(field, "Results", &list.params);
                dumper.token(field, "RParen", &list.rparen);
            }
        }
    }
}

impl Dump for StructType {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "StructType");
        let field = indent + 2;
        dumper.token(field, "Type", &self.type_kw);
        dumper.token(field, "Name", &self.name);
        dumper.token(field, "Struct", &self.struct_kw);
        dumper.token(field, "LBrace", &self.lbrace);
        dumper.list(field, "Fields", &self.fields);
        dumper.token(field, "RBrace", &self.rbrace);
        dumper.flag(field, "Public", self.public);
    }
}

impl Dump for FieldDecl {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "FieldDecl");
        let field = indent + 2;
        dumper.token(field, "Name", &self.name);
        dumper.child(field, "Type", &self.ty);
        dumper.opt_token(field, "Eq", self.eq.as_ref());
        dumper.opt_child(field, "Default", self.default.as_ref());
        dumper.flag(field, "Public", self.public);
    }
}

impl Dump for InterfaceType {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "InterfaceType");
        let field = indent + 2;
        dumper.token(field, "Type", &self.type_kw);
        dumper.token(field, "Name", &self.name);
        dumper.token(field, "Interface", &self.interface_kw);
        dumper.token(field, "LBrace", &self.lbrace);
        dumper.list(field, "Members", &self.members);
        dumper.token(field, "RBrace", &self.rbrace);
        dumper.flag(field, "Public", self.public);
    }
}

impl Dump for InterfaceMember {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        match self {
            InterfaceMember::Method(method) => {
                dumper.line(indent, "MethodSpec");
                let field = indent + 2;
                dumper.token(field, "Name", &method.name);
                dumper.param_list(field, &method.params);
                dumper.opt_child(field, "Results", method.results.as_ref());
            }
            InterfaceMember::Embed(name) => {
                dumper.line(indent, "EmbeddedType");
                name.dump_fields(dumper, indent + 2);
            }
        }
    }
}

impl QualifiedName {
    fn dump_fields(&self, dumper: &mut Dumper, field: usize) {
        dumper.opt_token(field, "Qualifier", self.qualifier.as_ref());
        dumper.opt_token(field, "Dot", self.dot.as_ref());
        dumper.token(field, "Name", &self.name);
    }
}

impl Dump for EnumType {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "EnumType");
        let field = indent + 2;
        dumper.token(field, "Type", &self.type_kw);
        dumper.token(field, "Name", &self.name);
        dumper.token(field, "Enum", &self.enum_kw);
        dumper.token(field, "LBrace", &self.lbrace);
        if self.variants.is_empty() {
            dumper.line(field, "Variants: (none)");
        } else {
            dumper.line(field, "Variants:");
            for variant in &self.variants {
                dumper.token(field + 2, "Variant", variant);
            }
        }
        dumper.token(field, "RBrace", &self.rbrace);
        dumper.flag(field, "Public", self.public);
    }
}

impl Dump for SumType {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "SumType");
        let field = indent + 2;
        dumper.token(field, "Type", &self.type_kw);
        dumper.token(field, "Name", &self.name);
        dumper.token(field, "Sum", &self.sum_kw);
        dumper.token(field, "LBrace", &self.lbrace);
        dumper.list(field, "Variants", &self.variants);
        dumper.token(field, "RBrace", &self.rbrace);
        dumper.flag(field, "Public", self.public);
    }
}

impl Dump for SumVariant {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "SumVariant");
        let field = indent + 2;
        dumper.token(field, "Name", &self.name);
        if let Some(params) = &self.params {
            dumper.param_list(field, params);
        }
    }
}

impl Dump for ImplementsDecl {
    fn dump_into(&self, dumper: &mut Dumper, indent: usize) {
        dumper.line(indent, "ImplementsDecl");
        let field = indent + 2;
        dumper.token(field, "TypeName", &self.type_name);
        dumper.token(field, "Implements", &self.implements_kw);
        dumper.line(field, "Interface:");
        self.interface.dump_fields(dumper, field + 2);
    }
}

#[cfg(test)]
mod tests;
