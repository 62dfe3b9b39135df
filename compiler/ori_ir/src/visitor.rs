//! AST Visitor Pattern
//!
//! Read-only traversal of the AST. The visitor may mutate its own state;
//! the tree stays immutable.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add behavior at specific nodes and call
//! the matching `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountCalls {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountCalls {
//!     fn visit_expr(&mut self, expr: &'ast Expr) {
//!         if expr.is_call() {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//! ```

use crate::ast::{
    BadNode, BlockStmt, Decl, Expr, File, InterfaceMember, InterfaceType, ParamList, Results,
    Stmt, StructType, SumType, TypeExpr,
};
use ori_stack::ensure_sufficient_stack;

pub trait Visitor<'ast> {
    fn visit_file(&mut self, file: &'ast File) {
        walk_file(self, file);
    }

    fn visit_decl(&mut self, decl: &'ast Decl) {
        walk_decl(self, decl);
    }

    fn visit_stmt(&mut self, stmt: &'ast Stmt) {
        walk_stmt(self, stmt);
    }

    fn visit_block(&mut self, block: &'ast BlockStmt) {
        walk_block(self, block);
    }

    fn visit_expr(&mut self, expr: &'ast Expr) {
        walk_expr(self, expr);
    }

    fn visit_type(&mut self, ty: &'ast TypeExpr) {
        if let TypeExpr::Bad(bad) = ty {
            self.visit_bad(bad);
        }
    }

    fn visit_params(&mut self, params: &'ast ParamList) {
        for param in &params.params {
            self.visit_type(&param.ty);
        }
    }

    fn visit_results(&mut self, results: &'ast Results) {
        match results {
            Results::Type(ty) => self.visit_type(ty),
            Results::List(list) => self.visit_params(list),
        }
    }

    /// Called for every `Bad*` node in any category.
    fn visit_bad(&mut self, bad: &'ast BadNode) {
        let _ = bad;
    }
}

/// Visits top-level items bucket by bucket: consts, decls, structs,
/// interfaces, enums, sums, implements.
pub fn walk_file<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, file: &'ast File) {
    for stmt in &file.const_decls {
        visitor.visit_stmt(stmt);
    }
    for decl in &file.decls {
        visitor.visit_decl(decl);
    }
    // Typed buckets hold bare payloads, not `Decl`s.
    for decl in &file.structs {
        walk_struct(visitor, decl);
    }
    for decl in &file.interfaces {
        walk_interface(visitor, decl);
    }
    for decl in &file.sums {
        walk_sum(visitor, decl);
    }
}

fn walk_struct<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast StructType) {
    for field in &decl.fields {
        visitor.visit_type(&field.ty);
        if let Some(default) = &field.default {
            visitor.visit_expr(default);
        }
    }
}

fn walk_interface<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast InterfaceType) {
    for member in &decl.members {
        if let InterfaceMember::Method(method) = member {
            visitor.visit_params(&method.params);
            if let Some(results) = &method.results {
                visitor.visit_results(results);
            }
        }
    }
}

fn walk_sum<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast SumType) {
    for variant in &decl.variants {
        if let Some(params) = &variant.params {
            visitor.visit_params(params);
        }
    }
}

pub fn walk_decl<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast Decl) {
    match decl {
        Decl::Func(func) => {
            visitor.visit_params(&func.params);
            if let Some(results) = &func.results {
                visitor.visit_results(results);
            }
            visitor.visit_block(&func.body);
        }
        Decl::Struct(decl) => walk_struct(visitor, decl),
        Decl::Interface(decl) => walk_interface(visitor, decl),
        Decl::Sum(decl) => walk_sum(visitor, decl),
        Decl::Enum(_) | Decl::Implements(_) => {}
        Decl::Bad(bad) => visitor.visit_bad(bad),
    }
}

pub fn walk_block<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, block: &'ast BlockStmt) {
    for stmt in &block.stmts {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    ensure_sufficient_stack(|| walk_stmt_children(visitor, stmt));
}

fn walk_stmt_children<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, stmt: &'ast Stmt) {
    match stmt {
        Stmt::Block(block) => visitor.visit_block(block),
        Stmt::ConstDecl(decl) | Stmt::VarDecl(decl) => {
            if let Some(ty) = &decl.ty {
                visitor.visit_type(ty);
            }
            visitor.visit_expr(&decl.init);
        }
        Stmt::Assign(assign) => {
            visitor.visit_expr(&assign.left);
            visitor.visit_expr(&assign.right);
        }
        Stmt::IncDec(inc_dec) => visitor.visit_expr(&inc_dec.x),
        Stmt::Expr(stmt) => visitor.visit_expr(&stmt.expr),
        Stmt::Return(ret) => {
            for value in &ret.values {
                visitor.visit_expr(value);
            }
        }
        Stmt::If(stmt) => {
            visitor.visit_expr(&stmt.condition);
            visitor.visit_block(&stmt.then);
            if let Some(else_) = &stmt.else_ {
                visitor.visit_stmt(else_);
            }
        }
        Stmt::For(stmt) => {
            if let Some(init) = &stmt.init {
                visitor.visit_stmt(init);
            }
            if let Some(condition) = &stmt.condition {
                visitor.visit_expr(condition);
            }
            if let Some(post) = &stmt.post {
                visitor.visit_stmt(post);
            }
            visitor.visit_block(&stmt.body);
        }
        Stmt::Range(stmt) => {
            if let Some(key) = &stmt.key {
                visitor.visit_expr(key);
            }
            if let Some(value) = &stmt.value {
                visitor.visit_expr(value);
            }
            visitor.visit_expr(&stmt.x);
            visitor.visit_block(&stmt.body);
        }
        Stmt::Switch(stmt) => {
            if let Some(init) = &stmt.init {
                visitor.visit_stmt(init);
            }
            if let Some(tag) = &stmt.tag {
                visitor.visit_expr(tag);
            }
            for case in &stmt.cases {
                visitor.visit_stmt(case);
            }
        }
        Stmt::Case(clause) => {
            for value in &clause.values {
                visitor.visit_expr(value);
            }
            for stmt in &clause.body {
                visitor.visit_stmt(stmt);
            }
        }
        Stmt::Break(_) | Stmt::Continue(_) | Stmt::FallThrough(_) => {}
        Stmt::Decl(decl) => visitor.visit_decl(decl),
        Stmt::Bad(bad) => visitor.visit_bad(bad),
    }
}

pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    ensure_sufficient_stack(|| walk_expr_children(visitor, expr));
}

fn walk_expr_children<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast Expr) {
    match expr {
        Expr::Ident(_)
        | Expr::IntLit(_)
        | Expr::FloatLit(_)
        | Expr::BoolLit(_)
        | Expr::StringLit(_) => {}
        Expr::Paren(paren) => visitor.visit_expr(&paren.inner),
        Expr::Unary(unary) => visitor.visit_expr(&unary.right),
        Expr::Binary(binary) => {
            visitor.visit_expr(&binary.left);
            visitor.visit_expr(&binary.right);
        }
        Expr::Selector(selector) => visitor.visit_expr(&selector.x),
        Expr::Index(index) => {
            visitor.visit_expr(&index.x);
            visitor.visit_expr(&index.index);
        }
        Expr::Call(call) => {
            visitor.visit_expr(&call.callee);
            for arg in &call.args {
                visitor.visit_expr(arg);
            }
        }
        Expr::Bad(bad) => visitor.visit_bad(bad),
    }
}
