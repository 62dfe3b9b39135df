//! Parser tests.
//!
//! - `scenarios`: whole-file parses checked against the AST dump
//! - `expr`: precedence, postfix chains, argument lists
//! - `stmt`: statements inside a function body
//! - `decl`: file-scope items and their error paths
//! - `properties`: proptest invariants over arbitrary token soup

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod properties;

use ori_diagnostic::{Diagnostic, ErrorCode};
use ori_ir::visitor::{walk_file, Visitor};
use ori_ir::{BadNode, Decl, Expr, File, Stmt};

use crate::{parse_source, ParseOutput};

/// Parse `source`, insisting on a clean result.
fn parse_clean(source: &str) -> File {
    let output = parse_source(source);
    assert!(
        output.diagnostics.is_empty(),
        "unexpected diagnostics for {source:?}: {:#?}",
        output.diagnostics
    );
    output.file
}

/// Wrap `body` in `package main` and a function `f` starting on line 2.
fn in_func(body: &str) -> String {
    format!("package main\nfunc f() {{\n{body}\n}}\n")
}

/// Parse `body` as the statements of a function, with or without errors.
fn parse_body(body: &str) -> (Vec<Stmt>, Vec<Diagnostic>) {
    let ParseOutput { file, diagnostics } = parse_source(&in_func(body));
    let stmts = match file.decls.into_iter().next() {
        Some(Decl::Func(func)) => func.body.stmts,
        other => panic!("expected a function, got {other:?} ({diagnostics:#?})"),
    };
    (stmts, diagnostics)
}

/// Statements of a function body that must parse cleanly.
fn body(body: &str) -> Vec<Stmt> {
    let (stmts, diagnostics) = parse_body(body);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics for {body:?}: {diagnostics:#?}"
    );
    stmts
}

/// The right-hand side of `_ = <source>`.
fn rhs(source: &str) -> (Expr, Vec<Diagnostic>) {
    let (mut stmts, diagnostics) = parse_body(&format!("_ = {source}"));
    match stmts.remove(0) {
        Stmt::Assign(assign) => (assign.right, diagnostics),
        other => panic!("expected an assignment, got {other:?}"),
    }
}

fn codes(diagnostics: &[Diagnostic]) -> Vec<ErrorCode> {
    diagnostics.iter().map(|d| d.code).collect()
}

/// Compact prefix rendering of an expression: `(+ a (* b c))`.
fn sexpr(expr: &Expr) -> String {
    match expr {
        Expr::Ident(ident) => ident.name.value.clone(),
        Expr::IntLit(lit) | Expr::FloatLit(lit) | Expr::BoolLit(lit) | Expr::StringLit(lit) => {
            lit.value.value.clone()
        }
        Expr::Paren(paren) => sexpr(&paren.inner),
        Expr::Unary(unary) => format!("({} {})", unary.op.value, sexpr(&unary.right)),
        Expr::Binary(binary) => format!(
            "({} {} {})",
            binary.op.value,
            sexpr(&binary.left),
            sexpr(&binary.right)
        ),
        Expr::Selector(selector) => {
            format!("(. {} {})", sexpr(&selector.x), selector.selector.value)
        }
        Expr::Index(index) => format!("([] {} {})", sexpr(&index.x), sexpr(&index.index)),
        Expr::Call(call) => {
            let mut out = format!("(call {}", sexpr(&call.callee));
            for arg in &call.args {
                out.push(' ');
                out.push_str(&sexpr(arg));
            }
            out.push(')');
            out
        }
        Expr::Bad(_) => "BAD".to_owned(),
    }
}

/// Counts bad nodes reachable from a file.
#[derive(Default)]
struct BadCounter {
    count: usize,
}

impl<'ast> Visitor<'ast> for BadCounter {
    fn visit_bad(&mut self, _bad: &'ast BadNode) {
        self.count += 1;
    }
}

fn count_bad(file: &File) -> usize {
    let mut counter = BadCounter::default();
    walk_file(&mut counter, file);
    counter.count
}
